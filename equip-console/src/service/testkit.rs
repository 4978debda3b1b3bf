//! in-memory double for the remote equipment api

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use equip_common::{Asset, AssetUpdateCmd};
use tokio::sync::Notify;

use crate::adapter::http::EquipmentApi;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    assets: Vec<Asset>,
    calls: Vec<&'static str>,
    last_update: Option<AssetUpdateCmd>,
    fail_fetch: Option<AppError>,
    fail_update: Option<AppError>,
    hold_fetch: Option<Arc<Notify>>,
}

#[derive(Default)]
pub(crate) struct MockApi {
    inner: Mutex<Inner>,
    held_started: Notify,
}

impl MockApi {
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let api = Self::default();
        api.set_assets(assets);
        api
    }

    pub fn set_assets(&self, assets: Vec<Asset>) {
        self.inner.lock().unwrap().assets = assets;
    }

    pub fn fail_next_fetch(&self, err: AppError) {
        self.inner.lock().unwrap().fail_fetch = Some(err);
    }

    pub fn fail_next_update(&self, err: AppError) {
        self.inner.lock().unwrap().fail_update = Some(err);
    }

    /// Parks the next fetch on the returned gate after it has read its
    /// response, so a test can interleave a second fetch before releasing it.
    pub fn hold_next_fetch(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.inner.lock().unwrap().hold_fetch = Some(gate.clone());
        gate
    }

    pub async fn wait_for_held_fetch(&self) {
        self.held_started.notified().await;
    }

    pub fn call_order(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn last_update(&self) -> Option<AssetUpdateCmd> {
        self.inner.lock().unwrap().last_update.clone()
    }
}

#[async_trait]
impl EquipmentApi for MockApi {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError> {
        let (result, gate) = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push("fetch");
            let gate = inner.hold_fetch.take();
            let result = match inner.fail_fetch.take() {
                Some(e) => Err(e),
                None => Ok(inner.assets.clone()),
            };
            (result, gate)
        };
        if let Some(gate) = gate {
            self.held_started.notify_one();
            gate.notified().await;
        }
        result
    }

    async fn update_asset(&self, cmd: &AssetUpdateCmd) -> Result<Asset, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("update");
        inner.last_update = Some(cmd.clone());
        if let Some(e) = inner.fail_update.take() {
            return Err(e);
        }
        let pos = inner
            .assets
            .iter()
            .position(|a| a.id == cmd.id)
            .ok_or_else(|| AppError::MsgError("asset not found".to_string()))?;
        inner.assets[pos].apply_update(cmd);
        Ok(inner.assets[pos].clone())
    }
}
