//! listing presenter

use std::collections::HashSet;

use crate::adapter::vo::{AssetDetailVo, AssetRowVo};
use crate::common::{paginate, PageState};
use crate::service::store::AssetStore;

/// What the table should show for the current store state and page window.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loading,
    Failed(String),
    Empty,
    Page {
        rows: Vec<ListingRow>,
        total: usize,
        page: usize,
        size: usize,
    },
}

/// One row of the current page. The detail panel is only built while the
/// row is expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub row: AssetRowVo,
    pub expanded: bool,
    pub detail: Option<AssetDetailVo>,
}

/// Windows the store's collection for display. Holds only presentation
/// state; the data itself stays owned by the store.
pub struct ListingPresenter {
    store: AssetStore,
    page: PageState,
    expanded: HashSet<i64>,
}

impl ListingPresenter {
    pub fn new(store: AssetStore) -> Self {
        Self {
            store,
            page: PageState::default(),
            expanded: HashSet::new(),
        }
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub async fn set_page(&mut self, page: usize) {
        let total = self.store.snapshot().await.data.len();
        self.page.set_page(page, total);
    }

    pub fn set_size(&mut self, size: usize) {
        self.page.set_size(size);
    }

    /// Flips one row's expansion flag; rows expand independently.
    pub fn toggle_row(&mut self, id: i64) {
        if !self.expanded.insert(id) {
            self.expanded.remove(&id);
        }
    }

    pub async fn view(&self) -> ListingView {
        let snapshot = self.store.snapshot().await;
        if snapshot.is_loading {
            return ListingView::Loading;
        }
        if let Some(error) = snapshot.error {
            return ListingView::Failed(error);
        }
        if snapshot.data.is_empty() {
            return ListingView::Empty;
        }
        let rows = paginate(&snapshot.data, self.page.page(), self.page.size())
            .iter()
            .map(|asset| {
                let expanded = self.expanded.contains(&asset.id);
                ListingRow {
                    row: AssetRowVo::from(asset),
                    expanded,
                    detail: expanded.then(|| AssetDetailVo::from(asset)),
                }
            })
            .collect();
        ListingView::Page {
            rows,
            total: snapshot.data.len(),
            page: self.page.page(),
            size: self.page.size(),
        }
    }
}
