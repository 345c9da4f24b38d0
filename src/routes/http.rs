//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, instrument, warn};

use crate::card::{CardDraft, CardError};
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorOut>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
  (status, Json(ErrorOut { error: message.into() }))
}

fn card_error(e: CardError) -> ApiError {
  let status = match e {
    CardError::UnknownCategory(_) => StatusCode::NOT_FOUND,
    _ => StatusCode::BAD_REQUEST,
  };
  api_error(status, e.to_string())
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(list_categories(&state).await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_problems(
  State(state): State<Arc<AppState>>,
  Path(key): Path<String>,
) -> Result<Json<ProblemsOut>, ApiError> {
  let problems = problems_for(&state, &key)
    .await
    .ok_or_else(|| card_error(CardError::UnknownCategory(key.clone())))?;
  info!(target: "catalog", category = %key, count = problems.len(), "HTTP problems served");
  Ok(Json(ProblemsOut { problems }))
}

#[instrument(level = "info", skip(state, q), fields(q_len = q.q.len()))]
pub async fn http_get_search(
  State(state): State<Arc<AppState>>,
  Query(q): Query<SearchQuery>,
) -> impl IntoResponse {
  let problems = search_problems(&state, &q.q).await;
  info!(target: "catalog", hits = problems.len(), "HTTP search served");
  Json(ProblemsOut { problems })
}

#[instrument(level = "info", skip(state, draft))]
pub async fn http_post_card(
  State(state): State<Arc<AppState>>,
  Path(key): Path<String>,
  Json(draft): Json<CardDraft>,
) -> Result<(StatusCode, Json<ProblemOut>), ApiError> {
  match create_card(&state, &key, draft).await {
    Ok(p) => Ok((StatusCode::CREATED, Json(to_out(&p)))),
    Err(e) => {
      warn!(target: "catalog", category = %key, error = %e, "HTTP add card rejected");
      Err(card_error(e))
    }
  }
}

#[instrument(level = "info", skip(state))]
pub async fn http_delete_card(
  State(state): State<Arc<AppState>>,
  Path((key, id)): Path<(String, String)>,
) -> Result<Json<DeletedOut>, ApiError> {
  let deleted = remove_card(&state, &key, &id).await.map_err(card_error)?;
  Ok(Json(DeletedOut { deleted }))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_export(
  State(state): State<Arc<AppState>>,
  Path((key, id)): Path<(String, String)>,
) -> Result<Json<SnippetOut>, ApiError> {
  match export_for(&state, &key, &id).await {
    Some(snippet) => Ok(Json(SnippetOut { snippet })),
    None => Err(api_error(StatusCode::NOT_FOUND, format!("Nothing to export for {}", id))),
  }
}
