// Core structs: Equipment, StatusStyle, FetchError
use thiserror::Error;

/// Canonical equipment record, produced once at ingestion.
///
/// Every field is a plain string and defaults to empty when the backend
/// payload lacks it under any of its known aliases. Downstream code never
/// sees a missing field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    pub equipment_id: String,
    pub name: String,
    pub status: String,
    pub asset_no: String,
    pub plate_serial_no: String,
    pub department: String,
    pub day_driver_name: String,
    pub day_driver_phone: String,
    pub night_driver_name: String,
    pub night_driver_phone: String,
    pub shift_type: String,
    pub company_supplier: String,
    pub remarks: String,
}

impl Equipment {
    pub fn has_assigned_driver(&self) -> bool {
        !self.day_driver_name.is_empty() || !self.night_driver_name.is_empty()
    }
}

/// Style bucket for an equipment status badge.
///
/// Total over all inputs: anything not recognized maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Active,
    InUse,
    Maintenance,
    Unknown,
}

impl StatusStyle {
    pub fn from_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "active" => StatusStyle::Active,
            "in use" => StatusStyle::InUse,
            "maintenance" => StatusStyle::Maintenance,
            _ => StatusStyle::Unknown,
        }
    }

    /// Presentation tag consumed by the rendering layer.
    pub fn class(&self) -> &'static str {
        match self {
            StatusStyle::Active => "bg-green-100 text-green-800",
            StatusStyle::InUse => "bg-blue-100 text-blue-800",
            StatusStyle::Maintenance => "bg-red-100 text-red-800",
            StatusStyle::Unknown => "bg-gray-100 text-gray-800",
        }
    }
}

/// The one thing that can actually fail: the equipment fetch.
/// Malformed payloads and missing fields are data-quality variance,
/// not errors, and degrade to defaults instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected response status: {0}")]
    BadStatus(u16),
    #[error("invalid json body: {0}")]
    BadBody(String),
}
