// Equipment source: the trait seam plus the reqwest-backed implementation.

pub mod http;
pub mod traits;

pub use http::HttpSource;
pub use traits::EquipmentSource;
