//! BrowseSession: one viewer's browsing state over the shared catalogue.
//!
//! Holds the selected category, the search box, the open card and any
//! in-progress add-card draft. Switching category clears all of them before
//! the new list is shown.

use tracing::{info, instrument, warn};

use crate::card::{CardDraft, CardError};
use crate::cursor::SelectionCursor;
use crate::domain::{is_custom_id, Problem};
use crate::query::QueryEngine;
use crate::store::CatalogStore;

#[derive(Debug, Default)]
pub struct BrowseSession {
    category: Option<String>,
    search: String,
    cursor: SelectionCursor,
    draft: Option<CardDraft>,
}

impl BrowseSession {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn draft(&self) -> Option<&CardDraft> {
        self.draft.as_ref()
    }

    /// Unknown keys are ignored. Returns whether the selection changed.
    #[instrument(level = "debug", skip(self, store))]
    pub fn select_category(&mut self, store: &CatalogStore, key: &str) -> bool {
        let Some(label) = store.registry().label(key) else {
            warn!(target: "session", %key, "select_category: unknown category ignored");
            return false;
        };
        self.cursor.invalidate();
        self.search.clear();
        self.draft = None;
        self.category = Some(key.to_string());
        info!(target: "session", %key, %label, "category selected");
        true
    }

    pub fn set_search(&mut self, text: &str) {
        self.cursor.invalidate();
        self.search = text.to_string();
    }

    /// What the page shows: search hits while the search box holds text,
    /// otherwise the resolved list of the selected category.
    pub fn visible<'a>(&self, store: &'a CatalogStore) -> Vec<&'a Problem> {
        let q = QueryEngine::new(store);
        if !self.search.trim().is_empty() {
            return q.search(&self.search);
        }
        match &self.category {
            Some(c) => q.resolve_category(c),
            None => Vec::new(),
        }
    }

    pub fn open(&mut self, store: &CatalogStore, id: &str) -> Option<usize> {
        let list = self.visible(store);
        self.cursor.open(&list, id)
    }

    pub fn close(&mut self) {
        self.cursor.close();
    }

    pub fn next(&mut self, store: &CatalogStore) -> bool {
        let list = self.visible(store);
        self.cursor.next(&list)
    }

    pub fn prev(&mut self, store: &CatalogStore) -> bool {
        let list = self.visible(store);
        self.cursor.prev(&list)
    }

    /// Position of the open card in the visible list as it is now. Another
    /// viewer may have added or deleted cards since this session last looked.
    pub fn cursor_index(&mut self, store: &CatalogStore) -> Option<usize> {
        let list = self.visible(store);
        self.cursor.revalidate(&list)
    }

    pub fn current<'a>(&self, store: &'a CatalogStore) -> Option<&'a Problem> {
        if !self.cursor.is_open() {
            return None;
        }
        self.cursor.current(&self.visible(store))
    }

    pub fn start_draft(&mut self) {
        self.draft.get_or_insert_with(CardDraft::default);
    }

    pub fn update_draft(&mut self, draft: CardDraft) {
        self.draft = Some(draft);
    }

    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Validate the draft and add it to the selected category. On a validation
    /// error the draft is kept so the form can be corrected.
    #[instrument(level = "debug", skip(self, store))]
    pub fn submit_draft(&mut self, store: &mut CatalogStore) -> Result<Problem, CardError> {
        let category = self.category.clone().ok_or(CardError::NoCategory)?;
        let draft = self.draft.clone().ok_or(CardError::NoDraft)?;
        draft.validate()?;
        let id = store.next_custom_id();
        let problem = draft.into_problem(id, &category)?;
        self.cursor.invalidate();
        store.add_card(&category, problem.clone());
        self.draft = None;
        info!(target: "session", %category, id = %problem.id(), title = %problem.title(), "card added");
        Ok(problem)
    }

    /// Delete a user-added card from the selected category. Built-in ids are
    /// refused here so they never reach the store.
    #[instrument(level = "debug", skip(self, store))]
    pub fn delete_card(&mut self, store: &mut CatalogStore, id: &str) -> Result<bool, CardError> {
        let category = self.category.clone().ok_or(CardError::NoCategory)?;
        if !is_custom_id(id) {
            return Err(CardError::NotCustom(id.to_string()));
        }
        self.cursor.invalidate();
        let deleted = store.delete_card(&category, id);
        info!(target: "session", %category, %id, deleted, "delete requested");
        Ok(deleted)
    }
}
