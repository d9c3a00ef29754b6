use super::traits::EquipmentSource;
use crate::model::FetchError;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn equipment_url(&self) -> String {
        format!("{}/equipment", self.base_url)
    }
}

#[async_trait::async_trait]
impl EquipmentSource for HttpSource {
    async fn fetch_equipment(&self) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(self.equipment_url())
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus(response.status().as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::BadBody(e.to_string()))
    }
}
