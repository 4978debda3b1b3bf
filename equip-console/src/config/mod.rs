//! config

mod alias;

pub use alias::*;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub remote: RemoteConfig,
    #[serde(rename = "tracing")]
    pub tracing: Option<TracingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TracingConfig {
    pub filter: String,
}

// parse config
pub async fn parse_config(path: &Path) -> Result<AppConfig, AppError> {
    // file path
    tracing::debug!("parse config from path: {:}", path.display());
    // read config data
    let data = std::fs::read_to_string(path).map_err(|e| AppError::Config(e.to_string()))?;
    // convert
    let config: AppConfig = toml::from_str(&data).map_err(|e| AppError::Config(e.to_string()))?;
    info!("config:{:?}", config);
    // build global config
    let mut init_config = SHARED_APP_CONFIG.write().await;
    *init_config = config.clone();
    Ok(config)
}
