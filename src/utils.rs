// Utility functions

/// Builds a `tel:` URI for the platform dialer, if there is a number.
pub fn tel_uri(phone: &str) -> Option<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return None;
    }
    Some(format!("tel:{phone}"))
}
