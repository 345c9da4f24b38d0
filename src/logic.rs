//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! HTTP calls are stateless and go straight to the store. WebSocket clients
//! each own a `BrowseSession`, and `handle_session_message` drives it.

use tracing::{debug, info, instrument};

use crate::card::{CardDraft, CardError};
use crate::domain::{is_custom_id, CategoryRegistry, Problem};
use crate::export::export_problem;
use crate::protocol::{to_out_list, ClientWsMessage, ProblemOut, ServerWsMessage};
use crate::query::QueryEngine;
use crate::session::BrowseSession;
use crate::state::AppState;
use crate::store::CatalogStore;

pub async fn list_categories(state: &AppState) -> CategoryRegistry {
  state.store.read().await.registry().clone()
}

/// Resolved list for a category, or `None` when the key is not registered.
#[instrument(level = "info", skip(state))]
pub async fn problems_for(state: &AppState, category: &str) -> Option<Vec<ProblemOut>> {
  let store = state.store.read().await;
  if !store.registry().contains(category) {
    return None;
  }
  Some(to_out_list(&QueryEngine::new(&store).resolve_category(category)))
}

#[instrument(level = "info", skip(state, text), fields(text_len = text.len()))]
pub async fn search_problems(state: &AppState, text: &str) -> Vec<ProblemOut> {
  let store = state.store.read().await;
  to_out_list(&QueryEngine::new(&store).search(text))
}

#[instrument(level = "info", skip(state, draft))]
pub async fn create_card(state: &AppState, category: &str, draft: CardDraft) -> Result<Problem, CardError> {
  let mut store = state.store.write().await;
  if !store.registry().contains(category) {
    return Err(CardError::UnknownCategory(category.to_string()));
  }
  draft.validate()?;
  let id = store.next_custom_id();
  let problem = draft.into_problem(id, category)?;
  store.add_card(category, problem.clone());
  info!(target: "catalog", %category, id = %problem.id(), "card added");
  Ok(problem)
}

#[instrument(level = "info", skip(state))]
pub async fn remove_card(state: &AppState, category: &str, id: &str) -> Result<bool, CardError> {
  if !is_custom_id(id) {
    return Err(CardError::NotCustom(id.to_string()));
  }
  let mut store = state.store.write().await;
  if !store.registry().contains(category) {
    return Err(CardError::UnknownCategory(category.to_string()));
  }
  let deleted = store.delete_card(category, id);
  info!(target: "catalog", %category, %id, deleted, "card delete requested");
  Ok(deleted)
}

/// Snippet for a card in a category. `None` for unknown ids and quiz cards.
#[instrument(level = "info", skip(state))]
pub async fn export_for(state: &AppState, category: &str, id: &str) -> Option<String> {
  let store = state.store.read().await;
  QueryEngine::new(&store).find(category, id).and_then(export_problem)
}

/// Apply one client message to a session and build the reply.
/// Mutating messages take the write lock only for their own duration.
#[instrument(level = "info", skip(state, session))]
pub async fn handle_session_message(
  msg: ClientWsMessage,
  session: &mut BrowseSession,
  state: &AppState,
) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Categories => ServerWsMessage::Categories { registry: list_categories(state).await },

    ClientWsMessage::SelectCategory { key } => {
      let store = state.store.read().await;
      if !session.select_category(&store, &key) {
        return ServerWsMessage::Error { message: CardError::UnknownCategory(key).to_string() };
      }
      view(session, &store)
    }

    ClientWsMessage::Search { text } => {
      session.set_search(&text);
      view(session, &*state.store.read().await)
    }

    ClientWsMessage::Open { problem_id } => {
      let store = state.store.read().await;
      session.open(&store, &problem_id);
      match session.current(&store) {
        Some(p) => debug!(target: "session", %problem_id, title = %p.title(), "card opened"),
        None => debug!(target: "session", %problem_id, "open: card not in visible list"),
      }
      view(session, &store)
    }

    ClientWsMessage::Close => {
      session.close();
      view(session, &*state.store.read().await)
    }

    ClientWsMessage::Next => {
      let store = state.store.read().await;
      session.next(&store);
      view(session, &store)
    }

    ClientWsMessage::Prev => {
      let store = state.store.read().await;
      session.prev(&store);
      view(session, &store)
    }

    ClientWsMessage::StartDraft => {
      session.start_draft();
      view(session, &*state.store.read().await)
    }

    ClientWsMessage::UpdateDraft { draft } => {
      session.update_draft(draft);
      view(session, &*state.store.read().await)
    }

    ClientWsMessage::CancelDraft => {
      session.cancel_draft();
      view(session, &*state.store.read().await)
    }

    ClientWsMessage::SubmitDraft => {
      let mut store = state.store.write().await;
      match session.submit_draft(&mut store) {
        Ok(_) => view(session, &store),
        Err(e) => ServerWsMessage::Error { message: e.to_string() },
      }
    }

    ClientWsMessage::DeleteCard { problem_id } => {
      let mut store = state.store.write().await;
      match session.delete_card(&mut store, &problem_id) {
        Ok(_) => view(session, &store),
        Err(e) => ServerWsMessage::Error { message: e.to_string() },
      }
    }

    ClientWsMessage::Export { problem_id } => {
      let store = state.store.read().await;
      let snippet = session
        .visible(&store)
        .into_iter()
        .find(|p| p.id() == problem_id)
        .and_then(export_problem);
      match snippet {
        Some(text) => ServerWsMessage::Snippet { problem_id, text },
        None => ServerWsMessage::Error { message: format!("Nothing to export for {}", problem_id) },
      }
    }
  }
}

fn view(session: &mut BrowseSession, store: &CatalogStore) -> ServerWsMessage {
  let cursor = session.cursor_index(store);
  ServerWsMessage::View {
    category: session.category().map(str::to_string),
    search: session.search_text().to_string(),
    problems: to_out_list(&session.visible(store)),
    cursor,
    draft: session.draft().cloned(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn state() -> AppState {
    AppState::from_config(Default::default())
  }

  fn draft(title: &str) -> CardDraft {
    CardDraft {
      title: title.into(),
      description: "d".into(),
      solution: "s".into(),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn create_then_remove_round_trip() {
    let st = state();
    let before = problems_for(&st, "css").await.unwrap().len();

    let p = create_card(&st, "css", draft("Grid")).await.unwrap();
    let after = problems_for(&st, "css").await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert_eq!(after[0].problem.id(), p.id());

    assert_eq!(remove_card(&st, "css", p.id()).await, Ok(true));
    assert_eq!(problems_for(&st, "css").await.unwrap().len(), before);
  }

  #[tokio::test]
  async fn create_rejects_unknown_category_and_bad_draft() {
    let st = state();
    assert_eq!(
      create_card(&st, "cobol", draft("x")).await.unwrap_err(),
      CardError::UnknownCategory("cobol".into())
    );
    assert_eq!(create_card(&st, "css", draft(" ")).await.unwrap_err(), CardError::MissingField("title"));
    assert!(problems_for(&st, "cobol").await.is_none());
  }

  #[tokio::test]
  async fn remove_refuses_built_in_and_unknown_category() {
    let st = state();
    assert_eq!(remove_card(&st, "css", "css-1").await, Err(CardError::NotCustom("css-1".into())));
    assert_eq!(remove_card(&st, "css", "custom-404").await, Ok(false));
    assert_eq!(
      remove_card(&st, "cobol", "custom-404").await,
      Err(CardError::UnknownCategory("cobol".into()))
    );
  }

  #[tokio::test]
  async fn rejected_draft_adds_nothing() {
    let st = state();
    assert!(create_card(&st, "css", draft("")).await.is_err());
    let first = create_card(&st, "css", draft("a")).await.unwrap();
    let second = create_card(&st, "css", draft("b")).await.unwrap();
    assert_ne!(first.id(), second.id());
    assert_eq!(problems_for(&st, "css").await.unwrap().len(), 3);
  }

  fn view_ids(reply: &ServerWsMessage) -> (Vec<String>, Option<usize>) {
    let ServerWsMessage::View { problems, cursor, .. } = reply else { panic!("expected view, got {reply:?}") };
    (problems.iter().map(|p| p.problem.id().to_string()).collect(), *cursor)
  }

  #[tokio::test]
  async fn cursor_follows_its_card_when_another_session_adds() {
    let st = state();
    let (mut a, mut b) = (BrowseSession::default(), BrowseSession::default());

    handle_session_message(ClientWsMessage::SelectCategory { key: "big-o".into() }, &mut a, &st).await;
    let reply = handle_session_message(ClientWsMessage::Open { problem_id: "big-o-1".into() }, &mut a, &st).await;
    assert_eq!(view_ids(&reply).1, Some(0));

    handle_session_message(ClientWsMessage::SelectCategory { key: "big-o".into() }, &mut b, &st).await;
    handle_session_message(ClientWsMessage::UpdateDraft { draft: draft("From B") }, &mut b, &st).await;
    let reply = handle_session_message(ClientWsMessage::SubmitDraft, &mut b, &st).await;
    assert_eq!(view_ids(&reply).0.len(), 5);

    // A's reported cursor still points at the card A opened.
    let reply = view(&mut a, &*st.store.read().await);
    let (ids, cursor) = view_ids(&reply);
    assert_eq!(cursor, Some(1));
    assert_eq!(ids[1], "big-o-1");

    let reply = handle_session_message(ClientWsMessage::Next, &mut a, &st).await;
    let (ids, cursor) = view_ids(&reply);
    assert_eq!(cursor, Some(2));
    assert_eq!(ids[2], "big-o-2");
    assert_eq!(a.current(&*st.store.read().await).map(Problem::id), Some("big-o-2"));
  }

  #[tokio::test]
  async fn cursor_closes_when_another_session_deletes_the_open_card() {
    let st = state();
    let (mut a, mut b) = (BrowseSession::default(), BrowseSession::default());

    handle_session_message(ClientWsMessage::SelectCategory { key: "css".into() }, &mut b, &st).await;
    handle_session_message(ClientWsMessage::UpdateDraft { draft: draft("Shared") }, &mut b, &st).await;
    let reply = handle_session_message(ClientWsMessage::SubmitDraft, &mut b, &st).await;
    let shared = view_ids(&reply).0[0].clone();

    handle_session_message(ClientWsMessage::SelectCategory { key: "css".into() }, &mut a, &st).await;
    let reply = handle_session_message(ClientWsMessage::Open { problem_id: shared.clone() }, &mut a, &st).await;
    assert_eq!(view_ids(&reply).1, Some(0));

    handle_session_message(ClientWsMessage::DeleteCard { problem_id: shared }, &mut b, &st).await;

    let reply = handle_session_message(ClientWsMessage::Next, &mut a, &st).await;
    let (ids, cursor) = view_ids(&reply);
    assert_eq!(ids, ["css-1"]);
    assert_eq!(cursor, None);
    assert!(a.current(&*st.store.read().await).is_none());
  }

  #[tokio::test]
  async fn export_normal_only() {
    let st = state();
    assert!(export_for(&st, "big-o", "big-o-4").await.unwrap().contains("Fibonacci Recursive"));
    assert!(export_for(&st, "javascript-quiz", "js-quiz-1").await.is_none());
    assert!(export_for(&st, "big-o", "nope").await.is_none());
  }

  #[tokio::test]
  async fn session_flow_over_messages() {
    let st = state();
    let mut s = BrowseSession::default();

    let reply = handle_session_message(ClientWsMessage::SelectCategory { key: "big-o".into() }, &mut s, &st).await;
    let ServerWsMessage::View { problems, cursor, .. } = reply else { panic!("expected view") };
    assert_eq!(problems.len(), 4);
    assert_eq!(cursor, None);

    handle_session_message(ClientWsMessage::Open { problem_id: "big-o-1".into() }, &mut s, &st).await;
    let reply = handle_session_message(ClientWsMessage::Next, &mut s, &st).await;
    assert!(matches!(reply, ServerWsMessage::View { cursor: Some(1), .. }));

    handle_session_message(ClientWsMessage::UpdateDraft { draft: draft("Mine") }, &mut s, &st).await;
    let reply = handle_session_message(ClientWsMessage::SubmitDraft, &mut s, &st).await;
    let ServerWsMessage::View { problems, cursor, draft, .. } = reply else { panic!("expected view") };
    assert_eq!(problems.len(), 5);
    assert!(problems[0].deletable);
    assert_eq!(cursor, None);
    assert!(draft.is_none());

    let reply = handle_session_message(ClientWsMessage::DeleteCard { problem_id: "big-o-1".into() }, &mut s, &st).await;
    assert!(matches!(reply, ServerWsMessage::Error { .. }));

    let reply = handle_session_message(ClientWsMessage::SelectCategory { key: "nope".into() }, &mut s, &st).await;
    assert!(matches!(reply, ServerWsMessage::Error { .. }));
  }

  #[tokio::test]
  async fn session_search_and_export() {
    let st = state();
    let mut s = BrowseSession::default();
    let reply = handle_session_message(ClientWsMessage::Search { text: "FIBONACCI".into() }, &mut s, &st).await;
    let ServerWsMessage::View { problems, .. } = reply else { panic!("expected view") };
    assert_eq!(problems.len(), 2);

    let reply = handle_session_message(ClientWsMessage::Export { problem_id: "big-o-4".into() }, &mut s, &st).await;
    assert!(matches!(reply, ServerWsMessage::Snippet { .. }));
  }
}
