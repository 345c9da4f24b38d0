//! Add-card form: draft validation and `custom-<timestamp>` id assignment.
//!
//! The store trusts whatever it is given; everything a user types goes through
//! `CardDraft::into_problem` first.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Difficulty, NormalProblem, Problem, TestCase, CUSTOM_ID_PREFIX};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
  #[error("{0} is required")]
  MissingField(&'static str),
  #[error("no category selected")]
  NoCategory,
  #[error("unknown category: {0}")]
  UnknownCategory(String),
  #[error("only custom cards can be deleted (got {0})")]
  NotCustom(String),
  #[error("no card draft in progress")]
  NoDraft,
}

/// What the add-card form submits.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDraft {
  #[serde(default)] pub title: String,
  #[serde(default)] pub description: String,
  #[serde(default)] pub solution: String,
  #[serde(default)] pub difficulty: Difficulty,
  #[serde(default)] pub explanation: Option<String>,
  #[serde(default, rename = "testCases")] pub test_cases: Vec<TestCase>,
}

impl CardDraft {
  pub fn validate(&self) -> Result<(), CardError> {
    if self.title.trim().is_empty() {
      return Err(CardError::MissingField("title"));
    }
    if self.description.trim().is_empty() {
      return Err(CardError::MissingField("description"));
    }
    if self.solution.trim().is_empty() {
      return Err(CardError::MissingField("solution"));
    }
    Ok(())
  }

  /// Validate and build the card. Rows where both input and output are blank are dropped.
  pub fn into_problem(self, id: String, category: &str) -> Result<Problem, CardError> {
    self.validate()?;
    let explanation = self.explanation.filter(|e| !e.trim().is_empty());
    let test_cases = self
      .test_cases
      .into_iter()
      .filter(|t| !(t.input.trim().is_empty() && t.output.trim().is_empty()))
      .collect();
    Ok(Problem::Normal(NormalProblem {
      id,
      title: self.title,
      category: category.to_string(),
      test_cases,
      description: self.description,
      difficulty: self.difficulty,
      solution: self.solution,
      explanation,
    }))
  }
}

/// Hands out `custom-<unix millis>` ids, strictly increasing even when two
/// cards are created within the same millisecond. Callers validate the draft
/// before asking for an id so a rejected form does not consume one.
#[derive(Debug, Default)]
pub struct IdClock {
  last: u128,
}

impl IdClock {
  pub fn next_id(&mut self) -> String {
    let now = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map(|d| d.as_millis())
      .unwrap_or(0);
    self.next_id_at(now)
  }

  fn next_id_at(&mut self, now_millis: u128) -> String {
    self.last = now_millis.max(self.last + 1);
    format!("{}{}", CUSTOM_ID_PREFIX, self.last)
  }
}
