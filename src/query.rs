//! QueryEngine: resolved category lists and catalogue-wide text search.

use tracing::{debug, instrument};

use crate::domain::Problem;
use crate::store::CatalogStore;
use crate::util::trunc_for_log;

/// Read-only view over a store. Cheap to construct per request.
#[derive(Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a CatalogStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// User-added cards (newest first) followed by the built-in cards.
    pub fn resolve_category(&self, category: &str) -> Vec<&'a Problem> {
        self.store
            .user_added(category)
            .iter()
            .chain(self.store.get_built_in(category))
            .collect()
    }

    /// First card with this id in resolved order.
    pub fn find(&self, category: &str, id: &str) -> Option<&'a Problem> {
        self.store
            .user_added(category)
            .iter()
            .chain(self.store.get_built_in(category))
            .find(|p| p.id() == id)
    }

    /// Case-insensitive substring search over built-in cards only.
    /// Blank input returns nothing; search is not a browse-everything mode.
    #[instrument(level = "debug", skip(self, text), fields(text = %trunc_for_log(text, 64)))]
    pub fn search(&self, text: &str) -> Vec<&'a Problem> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        let store = self.store;
        let hits: Vec<&'a Problem> = store
            .categories()
            .into_iter()
            .flat_map(|c| store.get_built_in(c))
            .filter(|p| p.search_text().to_lowercase().contains(&needle))
            .collect();
        debug!(target: "catalog", hits = hits.len(), "search finished");
        hits
    }
}
