//! runtime state

use std::sync::Arc;

use lazy_static::lazy_static;
use tokio::sync::RwLock;

use super::AppConfig;
use crate::adapter::http::HttpEquipmentApi;
use crate::error::AppError;
use crate::service::AssetStore;
use crate::AppState;

lazy_static! {
    pub static ref SHARED_APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

pub fn init_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    // step1. build the remote api client
    let api = HttpEquipmentApi::new(&config.remote)?;
    // step2. hang the store off it
    let store = AssetStore::new(Arc::new(api));
    tracing::debug!("app state initialized");
    Ok(AppState { store })
}
