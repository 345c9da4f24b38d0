//! Code export: render a normal problem as an object literal that can be pasted
//! into a category's source file.

use crate::domain::{NormalProblem, Problem};
use crate::util::{fill_template, js_string, js_template};

const SNIPPET_TEMPLATE: &str = "{
  id: \"{id}\",
  title: \"{title}\",
  description: \"{description}\",
  difficulty: \"{difficulty}\",
  category: \"{category}\",
  solution: `{solution}`,{explanation}
  testCases: [{test_cases}],
},";

pub fn export_snippet(p: &NormalProblem) -> String {
  let explanation = p
    .explanation
    .as_deref()
    .map(|e| format!("\n  explanation: \"{}\",", js_string(e)))
    .unwrap_or_default();

  let test_cases = if p.test_cases.is_empty() {
    String::new()
  } else {
    let rows: Vec<String> = p
      .test_cases
      .iter()
      .map(|t| format!("    {{ input: \"{}\", output: \"{}\" }},", js_string(&t.input), js_string(&t.output)))
      .collect();
    format!("\n{}\n  ", rows.join("\n"))
  };

  let difficulty = p.difficulty.to_string();
  fill_template(
    SNIPPET_TEMPLATE,
    &[
      ("id", &js_string(&p.id)),
      ("difficulty", &difficulty),
      ("category", &js_string(&p.category)),
      ("explanation", &explanation),
      ("test_cases", &test_cases),
      ("title", &js_string(&p.title)),
      ("description", &js_string(&p.description)),
      ("solution", &js_template(&p.solution)),
    ],
  )
}

/// Quiz cards have no solution to export.
pub fn export_problem(p: &Problem) -> Option<String> {
  match p {
    Problem::Normal(n) => Some(export_snippet(n)),
    Problem::Quiz(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Difficulty, QuizProblem, TestCase};
  use pretty_assertions::assert_eq;

  fn problem() -> NormalProblem {
    NormalProblem {
      id: "custom-1700000000000".into(),
      title: "Greet".into(),
      category: "strings".into(),
      test_cases: vec![TestCase { input: "\"Ann\"".into(), output: "\"Hi Ann\"".into() }],
      description: "Say hi".into(),
      difficulty: Difficulty::Medium,
      solution: "const greet = (n) => `Hi ${n}`;".into(),
      explanation: Some("Template literal.".into()),
    }
  }

  #[test]
  fn snippet_layout() {
    let expected = r#"{
  id: "custom-1700000000000",
  title: "Greet",
  description: "Say hi",
  difficulty: "Medium",
  category: "strings",
  solution: `const greet = (n) => \`Hi \${n}\`;`,
  explanation: "Template literal.",
  testCases: [
    { input: "\"Ann\"", output: "\"Hi Ann\"" },
  ],
},"#;
    assert_eq!(export_snippet(&problem()), expected);
  }

  #[test]
  fn optional_parts_collapse() {
    let mut p = problem();
    p.explanation = None;
    p.test_cases.clear();
    let out = export_snippet(&p);
    assert!(!out.contains("explanation"));
    assert!(out.contains("testCases: [],"));
  }

  #[test]
  fn placeholders_in_user_text_are_not_expanded() {
    let mut p = problem();
    p.title = "{solution}".into();
    let out = export_snippet(&p);
    assert!(out.contains("title: \"{solution}\","));
  }

  #[test]
  fn quiz_is_not_exportable() {
    let q = Problem::Quiz(QuizProblem {
      id: "q".into(),
      title: "q".into(),
      category: "c".into(),
      test_cases: vec![],
      question: "?".into(),
    });
    assert!(export_problem(&q).is_none());
    assert!(export_problem(&Problem::Normal(problem())).is_some());
  }
}
