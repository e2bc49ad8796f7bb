//! Collection Resources
//!
//! Fetch-on-mount list loading with reload support, and the per-page
//! category filter derived from the loaded snapshot.

use std::future::Future;

use collection_view::{Category, CollectionView, FetchGate, Listable, LoadState, ALL_CATEGORY_ID};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{use_config, SiteConfig};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::i18n::{translate, Locale};

/// A fetched list and where its fetch stands
pub struct Collection<T: Send + Sync + 'static> {
    /// Latest snapshot, replaced wholesale on every fetch
    pub snapshot: RwSignal<CollectionView<T>>,
    pub state: ReadSignal<LoadState>,
}

impl<T: Send + Sync + 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Collection<T> {}

impl<T> Collection<T>
where
    T: Listable + Clone + Send + Sync + 'static,
{
    pub fn items(&self) -> Signal<Vec<T>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|view| view.items().to_vec()))
    }

    pub fn categories(&self) -> Signal<Vec<Category>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|view| view.categories().to_vec()))
    }

    pub fn featured(&self, limit: usize) -> Signal<Vec<T>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|view| view.featured_owned(limit)))
    }

    pub fn is_empty(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|view| view.is_empty()))
    }
}

/// Load a list on mount and again whenever the app reload trigger fires.
///
/// Results are dropped if a newer fetch started or the calling view has
/// been disposed in the meantime. A failed fetch leaves the list empty.
pub fn use_collection<T, F, Fut>(fetch: F) -> Collection<T>
where
    T: Listable + Clone + Send + Sync + 'static,
    F: Fn(SiteConfig) -> Fut + 'static,
    Fut: Future<Output = ApiResult<Vec<T>>> + 'static,
{
    let ctx = use_app_context();
    let config = use_config();
    let locale = use_context::<Locale>().unwrap_or_default();
    let resolve = move |key: &str| translate(locale, key);

    let snapshot = RwSignal::new(CollectionView::new(Vec::new(), resolve));
    let (state, set_state) = signal(LoadState::Idle);

    let gate = FetchGate::new();
    let cleanup_gate = gate.clone();
    on_cleanup(move || cleanup_gate.dispose());

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let ticket = gate.begin();
        let request = fetch(config.clone());
        let gate = gate.clone();
        set_state.set(LoadState::Loading);

        spawn_local(async move {
            let result = request.await;
            if !gate.accepts(ticket) {
                return;
            }
            match result {
                Ok(items) => {
                    tracing::debug!("[COLLECTION] loaded {} items (reload {})", items.len(), trigger);
                    snapshot.set(CollectionView::new(items, resolve));
                    set_state.set(LoadState::Loaded);
                }
                Err(err) => {
                    tracing::error!("[COLLECTION] fetch failed: {}", err);
                    snapshot.set(CollectionView::new(Vec::new(), resolve));
                    set_state.set(LoadState::Failed(err.to_string()));
                }
            }
        });
    });

    Collection { snapshot, state }
}

/// Active category tab and the subset it selects
pub struct CategoryFilter<T: Send + Sync + 'static> {
    pub active: RwSignal<String>,
    pub filtered: Memo<Vec<T>>,
}

impl<T: Send + Sync + 'static> Clone for CategoryFilter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CategoryFilter<T> {}

/// Start on "all"; the subset follows both the tab and the snapshot
pub fn use_category_filter<T>(collection: Collection<T>) -> CategoryFilter<T>
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    let active = RwSignal::new(ALL_CATEGORY_ID.to_string());
    let snapshot = collection.snapshot;
    let filtered = Memo::new(move |_| {
        let active_id = active.get();
        snapshot.with(|view| view.filtered_owned(&active_id))
    });
    CategoryFilter { active, filtered }
}
