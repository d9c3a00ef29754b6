use crate::model::FetchError;
use serde_json::Value;

#[async_trait::async_trait]
pub trait EquipmentSource: Send + Sync {
    /// One fetch of the raw equipment payload. No retries, no caching;
    /// the caller decides what a failure means.
    async fn fetch_equipment(&self) -> Result<Value, FetchError>;
}
