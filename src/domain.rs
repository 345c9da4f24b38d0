//! Domain models: problem cards (normal + quiz), difficulty, test cases, and the category registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ids handed out to user-authored cards start with this. Built-in ids never do.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
  #[default]
  Easy,
  Medium,
  Hard,
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Difficulty::Easy => write!(f, "Easy"),
      Difficulty::Medium => write!(f, "Medium"),
      Difficulty::Hard => write!(f, "Hard"),
    }
  }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
  pub input: String,
  pub output: String,
}

/// A coding exercise with a reference solution.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalProblem {
  pub id: String,
  pub title: String,
  pub category: String,
  #[serde(default, rename = "testCases")]
  pub test_cases: Vec<TestCase>,

  pub description: String,
  #[serde(default)]
  pub difficulty: Difficulty,
  pub solution: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub explanation: Option<String>,
}

/// A question-only card (no solution, no difficulty).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizProblem {
  pub id: String,
  pub title: String,
  pub category: String,
  #[serde(default, rename = "testCases")]
  pub test_cases: Vec<TestCase>,

  pub question: String,
}

/// A problem card. The `kind` field on the wire discriminates the variant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
  Normal(NormalProblem),
  Quiz(QuizProblem),
}

impl Problem {
  pub fn id(&self) -> &str {
    match self {
      Problem::Normal(p) => &p.id,
      Problem::Quiz(p) => &p.id,
    }
  }

  pub fn title(&self) -> &str {
    match self {
      Problem::Normal(p) => &p.title,
      Problem::Quiz(p) => &p.title,
    }
  }

  pub fn category(&self) -> &str {
    match self {
      Problem::Normal(p) => &p.category,
      Problem::Quiz(p) => &p.category,
    }
  }

  pub fn test_cases(&self) -> &[TestCase] {
    match self {
      Problem::Normal(p) => &p.test_cases,
      Problem::Quiz(p) => &p.test_cases,
    }
  }

  pub fn is_custom(&self) -> bool {
    is_custom_id(self.id())
  }

  /// Text that search matches against: the question for quizzes,
  /// "title description solution" for normal problems.
  pub fn search_text(&self) -> String {
    match self {
      Problem::Quiz(q) => q.question.clone(),
      Problem::Normal(n) => format!("{} {} {}", n.title, n.description, n.solution),
    }
  }
}

pub fn is_custom_id(id: &str) -> bool {
  id.starts_with(CUSTOM_ID_PREFIX)
}

/// Sidebar entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
  pub key: String,
  pub label: String,
}

impl Category {
  pub fn new(key: &str, label: &str) -> Self {
    Self { key: key.into(), label: label.into() }
  }
}

/// Fixed category registry: the main sidebar list plus two nested groups
/// that are toggled independently but select categories the same way.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRegistry {
  pub main: Vec<Category>,
  pub architecture: Vec<Category>,
  pub nodejs: Vec<Category>,
}

impl CategoryRegistry {
  /// Every category in sidebar order: main list, then architecture, then nodejs.
  pub fn iter(&self) -> impl Iterator<Item = &Category> {
    self.main.iter().chain(self.architecture.iter()).chain(self.nodejs.iter())
  }

  pub fn contains(&self, key: &str) -> bool {
    self.iter().any(|c| c.key == key)
  }

  pub fn label(&self, key: &str) -> Option<&str> {
    self.iter().find(|c| c.key == key).map(|c| c.label.as_str())
  }
}
