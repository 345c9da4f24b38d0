//! Loading catalogue configuration from TOML.
//!
//! The file is optional. It may add extra built-in problems on top of the
//! seeds and point the page bundle somewhere other than `./static`:
//!
//! ```toml
//! static_dir = "./dist"
//!
//! [[problems]]
//! kind = "quiz"
//! id = "closures-1"
//! title = "Closures"
//! category = "javascript-quiz"
//! question = "What does a closure capture?"
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Problem;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct CatalogConfig {
  #[serde(default)]
  pub static_dir: Option<String>,
  #[serde(default)]
  pub problems: Vec<Problem>,
}

pub fn parse_config(s: &str) -> Result<CatalogConfig, toml::de::Error> {
  toml::from_str::<CatalogConfig>(s)
}

/// Attempt to load `CatalogConfig` from CATALOG_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_catalog_config_from_env() -> Option<CatalogConfig> {
  let path = std::env::var("CATALOG_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "catalog_backend", %path, problems = cfg.problems.len(), "Loaded catalog config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "catalog_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "catalog_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;

  #[test]
  fn parses_both_problem_kinds() {
    let cfg = parse_config(
      r#"
static_dir = "./dist"

[[problems]]
kind = "normal"
id = "arrays-9"
title = "Rotate"
category = "arrays"
description = "Rotate an array by k"
difficulty = "Hard"
solution = "arr.slice(-k).concat(arr.slice(0, -k))"

[[problems.testCases]]
input = "[1,2,3], 1"
output = "[3,1,2]"

[[problems]]
kind = "quiz"
id = "closures-1"
title = "Closures"
category = "javascript-quiz"
question = "What does a closure capture?"
"#,
    )
    .unwrap();

    assert_eq!(cfg.static_dir.as_deref(), Some("./dist"));
    assert_eq!(cfg.problems.len(), 2);
    match &cfg.problems[0] {
      Problem::Normal(n) => {
        assert_eq!(n.difficulty, Difficulty::Hard);
        assert_eq!(n.test_cases.len(), 1);
      }
      other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(cfg.problems[1], Problem::Quiz(_)));
  }

  #[test]
  fn empty_file_is_default() {
    let cfg = parse_config("").unwrap();
    assert!(cfg.problems.is_empty());
    assert!(cfg.static_dir.is_none());
  }

  #[test]
  fn missing_kind_is_an_error() {
    assert!(parse_config("[[problems]]\nid = \"x\"\ntitle = \"x\"\ncategory = \"css\"\n").is_err());
  }
}
