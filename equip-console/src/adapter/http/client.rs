//! remote equipment api

use std::time::Duration;

use async_trait::async_trait;
use equip_common::{Asset, AssetUpdateCmd};

use crate::config::RemoteConfig;
use crate::error::AppError;

/// Boundary to the remote equipment service. The store talks to this trait
/// only; tests swap in an in-memory double.
#[async_trait]
pub trait EquipmentApi: Send + Sync {
    /// `GET /equipment` — the full collection, service order.
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError>;
    /// `PUT /equipment` — submits the editable subset, returns the updated
    /// record.
    async fn update_asset(&self, cmd: &AssetUpdateCmd) -> Result<Asset, AppError>;
}

pub struct HttpEquipmentApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEquipmentApi {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/equipment", self.base_url)
    }
}

#[async_trait]
impl EquipmentApi for HttpEquipmentApi {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError> {
        let resp = self.client.get(self.endpoint()).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::RemoteStatus(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    async fn update_asset(&self, cmd: &AssetUpdateCmd) -> Result<Asset, AppError> {
        let resp = self.client.put(self.endpoint()).json(cmd).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::RemoteStatus(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let api = HttpEquipmentApi::new(&RemoteConfig {
            base_url: "http://testback.example.com/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(api.endpoint(), "http://testback.example.com/equipment");
    }
}
