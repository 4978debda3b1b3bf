//! asset store

use std::sync::Arc;

use equip_common::{Asset, AssetUpdateCmd, EventHub};
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::adapter::http::EquipmentApi;
use crate::error::AppError;

/// Every load failure is flattened to this one message; transport detail is
/// classified into user text only on the save path.
pub const LOAD_ERROR_MSG: &str = "Unexpected error when loading assets.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Loading,
    Loaded(usize),
    LoadFailed,
    Updated(i64),
}

/// Point-in-time copy of the store state for presenters.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub data: Vec<Asset>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Default)]
struct StoreState {
    data: Vec<Asset>,
    is_loading: bool,
    error: Option<String>,
    // generation of the most recently issued fetch
    generation: u64,
}

/// Single source of truth for the asset collection. Presenters read
/// snapshots or subscribe to events; all mutation goes through `load` and
/// `update`.
#[derive(Clone)]
pub struct AssetStore {
    api: Arc<dyn EquipmentApi>,
    state: Arc<RwLock<StoreState>>,
    hub: EventHub<StoreEvent>,
}

impl AssetStore {
    pub fn new(api: Arc<dyn EquipmentApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(StoreState::default())),
            hub: EventHub::default(),
        }
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<StoreEvent> {
        self.hub.subscribe()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            data: state.data.clone(),
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    /// Replaces the whole collection from `GET /equipment`. Responses are
    /// generation-stamped: a slow response overtaken by a newer `load` is
    /// discarded instead of overwriting fresher data.
    pub async fn load(&self) -> Result<(), AppError> {
        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.is_loading = true;
            state.generation
        };
        self.hub.publish(StoreEvent::Loading);

        let fetched = self.api.fetch_assets().await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            debug!("discarding stale load response (generation {})", generation);
            return Ok(());
        }
        state.is_loading = false;
        match fetched {
            Ok(assets) => {
                let count = assets.len();
                state.data = assets;
                state.error = None;
                drop(state);
                self.hub.publish(StoreEvent::Loaded(count));
                Ok(())
            }
            Err(e) => {
                error!("load assets failed: {:?}", e);
                state.error = Some(LOAD_ERROR_MSG.to_string());
                drop(state);
                self.hub.publish(StoreEvent::LoadFailed);
                Err(e)
            }
        }
    }

    /// Submits the editable subset, then refreshes the whole collection.
    /// No optimistic patch: the reload is awaited before this returns, so
    /// callers observe the service's own view of the record.
    pub async fn update(&self, cmd: AssetUpdateCmd) -> Result<(), AppError> {
        let id = cmd.id;
        debug!(
            "put /equipment payload: {}",
            serde_json::to_string(&cmd).unwrap_or_default()
        );
        // step1. push the edit
        self.api.update_asset(&cmd).await?;
        self.hub.publish(StoreEvent::Updated(id));
        // step2. replace the snapshot
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testkit::MockApi;

    fn asset(id: i64, label: &str) -> Asset {
        let mut asset = Asset::new();
        asset.id = id;
        asset.label_id = label.to_string();
        asset
    }

    #[tokio::test]
    async fn load_replaces_the_collection() {
        let api = Arc::new(MockApi::with_assets(vec![asset(1, "a"), asset(2, "b")]));
        let store = AssetStore::new(api.clone());

        store.load().await.unwrap();
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.data.len(), 2);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.error, None);

        api.set_assets(vec![asset(3, "c")]);
        store.load().await.unwrap();
        assert_eq!(store.snapshot().await.data.len(), 1);
    }

    #[tokio::test]
    async fn load_failure_stores_one_generic_message() {
        let api = Arc::new(MockApi::with_assets(vec![asset(1, "a")]));
        api.fail_next_fetch(AppError::RemoteStatus(503));
        let store = AssetStore::new(api);

        assert!(store.load().await.is_err());
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.error.as_deref(), Some(LOAD_ERROR_MSG));
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn successful_load_clears_a_previous_error() {
        let api = Arc::new(MockApi::with_assets(vec![asset(1, "a")]));
        api.fail_next_fetch(AppError::MsgError("boom".to_string()));
        let store = AssetStore::new(api);

        let _ = store.load().await;
        assert!(store.snapshot().await.error.is_some());
        store.load().await.unwrap();
        assert_eq!(store.snapshot().await.error, None);
    }

    #[tokio::test]
    async fn stale_load_response_is_discarded() {
        let api = Arc::new(MockApi::with_assets(vec![asset(1, "old")]));
        let gate = api.hold_next_fetch();
        let store = AssetStore::new(api.clone());

        // first load parks on the gate
        let slow = {
            let store = store.clone();
            tokio::spawn(async move { store.load().await })
        };
        api.wait_for_held_fetch().await;

        // second load wins with fresher data
        api.set_assets(vec![asset(2, "new")]);
        store.load().await.unwrap();
        assert_eq!(store.snapshot().await.data[0].label_id, "new");

        // release the stale response; it must not overwrite
        gate.notify_one();
        slow.await.unwrap().unwrap();
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.data.len(), 1);
        assert_eq!(snapshot.data[0].label_id, "new");
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn update_puts_before_reloading() {
        let api = Arc::new(MockApi::with_assets(vec![asset(7, "a")]));
        let store = AssetStore::new(api.clone());
        store.load().await.unwrap();

        let mut cmd = store.snapshot().await.data[0].update_cmd();
        cmd.observations = Some("checked".to_string());
        store.update(cmd).await.unwrap();

        assert_eq!(api.call_order(), vec!["fetch", "update", "fetch"]);
        let snapshot = store.snapshot().await;
        assert_eq!(
            snapshot.data[0].observations.as_deref(),
            Some("checked")
        );
    }

    #[tokio::test]
    async fn events_reach_subscribers_in_order() {
        let api = Arc::new(MockApi::with_assets(vec![asset(1, "a"), asset(2, "b")]));
        let store = AssetStore::new(api);
        let mut events = store.subscribe();

        store.load().await.unwrap();
        assert_eq!(events.recv().await.unwrap(), StoreEvent::Loading);
        assert_eq!(events.recv().await.unwrap(), StoreEvent::Loaded(2));
    }

    #[tokio::test]
    async fn update_failure_propagates_without_reload() {
        let api = Arc::new(MockApi::with_assets(vec![asset(7, "a")]));
        api.fail_next_update(AppError::RemoteStatus(503));
        let store = AssetStore::new(api.clone());
        store.load().await.unwrap();

        let cmd = store.snapshot().await.data[0].update_cmd();
        let err = store.update(cmd).await.unwrap_err();
        assert!(matches!(err, AppError::RemoteStatus(503)));
        assert_eq!(api.call_order(), vec!["fetch", "update"]);
    }
}
