//! CatalogStore: built-in problems (read-only after startup) and user-added
//! problems (session lifetime), both keyed by category.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::card::IdClock;
use crate::domain::{CategoryRegistry, Problem};

#[derive(Debug)]
pub struct CatalogStore {
    registry: CategoryRegistry,
    built_in: HashMap<String, Vec<Problem>>,
    user_added: HashMap<String, Vec<Problem>>,
    ids: IdClock,
}

impl CatalogStore {
    /// Group `problems` by their category, keeping the given order within each category.
    pub fn new(registry: CategoryRegistry, problems: impl IntoIterator<Item = Problem>) -> Self {
        let mut built_in = HashMap::<String, Vec<Problem>>::new();
        for p in problems {
            built_in.entry(p.category().to_string()).or_default().push(p);
        }
        Self {
            registry,
            built_in,
            user_added: HashMap::new(),
            ids: IdClock::default(),
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Static list for a category; empty when the category is unknown.
    pub fn get_built_in(&self, category: &str) -> &[Problem] {
        self.built_in.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cards added this session, newest first.
    pub fn user_added(&self, category: &str) -> &[Problem] {
        self.user_added.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Category keys in registry order, followed by any keys that only exist
    /// in the built-in set (sorted).
    pub fn categories(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.registry.iter().map(|c| c.key.as_str()).collect();
        let mut extra: Vec<&str> = self
            .built_in
            .keys()
            .map(String::as_str)
            .filter(|k| !self.registry.contains(k))
            .collect();
        extra.sort_unstable();
        keys.extend(extra);
        keys
    }

    /// Insert at the head of the category's user-added list. No uniqueness check.
    #[instrument(level = "debug", skip(self, problem), fields(id = %problem.id(), test_cases = problem.test_cases().len()))]
    pub fn add_card(&mut self, category: &str, problem: Problem) {
        self.user_added
            .entry(category.to_string())
            .or_default()
            .insert(0, problem);
    }

    /// Remove the first user-added card with this id. Returns whether anything was removed.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_card(&mut self, category: &str, id: &str) -> bool {
        let Some(list) = self.user_added.get_mut(category) else {
            return false;
        };
        match list.iter().position(|p| p.id() == id) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => {
                debug!(target: "catalog", %category, %id, "delete_card: no such user-added card");
                false
            }
        }
    }

    pub fn next_custom_id(&mut self) -> String {
        self.ids.next_id()
    }

    pub fn built_in_count(&self, category: &str) -> usize {
        self.get_built_in(category).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, QuizProblem};

    fn quiz(id: &str, category: &str) -> Problem {
        Problem::Quiz(QuizProblem {
            id: id.into(),
            title: id.into(),
            category: category.into(),
            test_cases: vec![],
            question: format!("question {id}"),
        })
    }

    fn store() -> CatalogStore {
        let registry = CategoryRegistry {
            main: vec![Category::new("css", "CSS"), Category::new("arrays", "Arrays")],
            ..Default::default()
        };
        CatalogStore::new(
            registry,
            vec![quiz("css-1", "css"), quiz("arr-1", "arrays"), quiz("arr-2", "arrays"), quiz("x-1", "zzz")],
        )
    }

    #[test]
    fn built_in_keeps_order_and_unknown_is_empty() {
        let s = store();
        let ids: Vec<_> = s.get_built_in("arrays").iter().map(Problem::id).collect();
        assert_eq!(ids, ["arr-1", "arr-2"]);
        assert!(s.get_built_in("python").is_empty());
        assert_eq!(s.built_in_count("css"), 1);
    }

    #[test]
    fn add_card_goes_to_the_head() {
        let mut s = store();
        s.add_card("css", quiz("custom-1", "css"));
        s.add_card("css", quiz("custom-2", "css"));
        let ids: Vec<_> = s.user_added("css").iter().map(Problem::id).collect();
        assert_eq!(ids, ["custom-2", "custom-1"]);
        assert_eq!(s.built_in_count("css"), 1);
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut s = store();
        s.add_card("css", quiz("custom-1", "css"));
        s.add_card("css", quiz("custom-1", "css"));
        assert!(s.delete_card("css", "custom-1"));
        assert_eq!(s.user_added("css").len(), 1);
    }

    #[test]
    fn delete_never_touches_built_ins() {
        let mut s = store();
        assert!(!s.delete_card("css", "css-1"));
        assert!(!s.delete_card("css", "nonexistent-id"));
        assert!(!s.delete_card("python", "custom-1"));
        assert_eq!(s.built_in_count("css"), 1);
    }

    #[test]
    fn categories_follow_registry_then_extras() {
        assert_eq!(store().categories(), ["css", "arrays", "zzz"]);
    }
}
