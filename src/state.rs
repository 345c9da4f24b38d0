//! Application state: the shared catalogue store and where the page bundle lives.
//!
//! The store is built once at startup from the built-in seeds plus any
//! problems listed in the TOML config. User-added cards live in the same store
//! for the lifetime of the process and are never written anywhere.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::config::{load_catalog_config_from_env, CatalogConfig};
use crate::domain::{CategoryRegistry, Problem};
use crate::seeds::{category_registry, seed_problems};
use crate::store::CatalogStore;

const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<CatalogStore>>,
    pub static_dir: String,
}

impl AppState {
    /// Build state from env: load config, merge config problems after the seeds.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_catalog_config_from_env();
        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .or_else(|| cfg.as_ref().and_then(|c| c.static_dir.clone()))
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        let mut state = Self::from_config(cfg.unwrap_or_default());
        state.static_dir = static_dir;
        state
    }

    pub fn from_config(cfg: CatalogConfig) -> Self {
        let registry = category_registry();
        let problems = merge_bank(&registry, seed_problems(), cfg.problems);
        let store = CatalogStore::new(registry, problems);

        for key in store.categories() {
            info!(target: "catalog", category = %key, built_in = store.built_in_count(key), "Startup catalogue inventory");
        }

        Self::with_store(store)
    }

    pub fn with_store(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

/// Append config-bank problems to the seeds. Entries that would break the id
/// contract (reserved prefix, duplicate id) or point at an unregistered
/// category are skipped.
fn merge_bank(registry: &CategoryRegistry, seeds: Vec<Problem>, bank: Vec<Problem>) -> Vec<Problem> {
    let mut seen: HashSet<String> = seeds.iter().map(|p| p.id().to_string()).collect();
    let mut out = seeds;
    let mut added = HashMap::<String, usize>::new();

    for p in bank {
        let (id, category) = (p.id().to_string(), p.category().to_string());
        if p.is_custom() {
            error!(target: "catalog", %id, %category, "Skipping bank item: id uses the reserved custom- prefix.");
            continue;
        }
        if !registry.contains(&category) {
            error!(target: "catalog", %id, %category, "Skipping bank item: unknown category.");
            continue;
        }
        if !seen.insert(id.clone()) {
            error!(target: "catalog", %id, %category, "Skipping bank item: duplicate id.");
            continue;
        }
        *added.entry(category).or_default() += 1;
        out.push(p);
    }

    for (category, n) in added {
        info!(target: "catalog", %category, added = n, "Config bank problems merged");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuizProblem;

    fn quiz(id: &str, category: &str) -> Problem {
        Problem::Quiz(QuizProblem {
            id: id.into(),
            title: id.into(),
            category: category.into(),
            test_cases: vec![],
            question: "?".into(),
        })
    }

    #[test]
    fn bank_entries_are_filtered() {
        let reg = category_registry();
        let seeds = seed_problems();
        let n = seeds.len();
        let merged = merge_bank(
            &reg,
            seeds,
            vec![
                quiz("custom-1", "css"),
                quiz("css-2", "cobol"),
                quiz("css-1", "css"),
                quiz("css-2", "css"),
            ],
        );
        assert_eq!(merged.len(), n + 1);
        assert_eq!(merged.last().map(Problem::id), Some("css-2"));
    }

    #[tokio::test]
    async fn config_problems_follow_seeds_in_category() {
        let state = AppState::from_config(CatalogConfig {
            static_dir: None,
            problems: vec![quiz("css-2", "css")],
        });
        let store = state.store.read().await;
        let ids: Vec<_> = store.get_built_in("css").iter().map(Problem::id).collect();
        assert_eq!(ids, ["css-1", "css-2"]);
        assert_eq!(state.static_dir, DEFAULT_STATIC_DIR);
    }
}
