use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AppState;
use crate::models::{InventoryView, Notice};
use crate::session::SessionError;

// ============================================================
// Error Handling
// ============================================================

/// Unknown sessions are the only client error; everything a user does to an
/// existing session is reported as a notice instead.
fn session_error(e: SessionError) -> (StatusCode, String) {
    match e {
        SessionError::NotFound(_) => {
            tracing::warn!("{}", e);
            (StatusCode::NOT_FOUND, "Session not found".to_string())
        }
    }
}

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Browser page
// ============================================================

/// Form body shared by the add and remove buttons.
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
}

fn page_url(id: Uuid) -> String {
    format!("/sessions/{}", id)
}

/// A fresh visit starts a new session.
pub async fn start_page(State(state): State<AppState>) -> Redirect {
    let id = state.sessions.create();
    Redirect::to(&page_url(id))
}

pub async fn show_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, (StatusCode, String)> {
    let view = match state.sessions.take_view(id) {
        Ok(view) => view,
        // Expired or unknown sessions start over, like reopening the page.
        Err(SessionError::NotFound(_)) => return Ok(Redirect::to("/").into_response()),
    };

    let html = state.renderer.render(&view).map_err(internal_error)?;
    Ok(Html(html).into_response())
}

pub async fn submit_add(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ItemForm>,
) -> Redirect {
    match state.sessions.add_item(id, &form.name) {
        Ok(_) => Redirect::to(&page_url(id)),
        Err(SessionError::NotFound(_)) => Redirect::to("/"),
    }
}

pub async fn submit_remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ItemForm>,
) -> Redirect {
    match state.sessions.remove_item(id, &form.name) {
        Ok(_) => Redirect::to(&page_url(id)),
        Err(SessionError::NotFound(_)) => Redirect::to("/"),
    }
}

// ============================================================
// Sessions
// ============================================================

pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<InventoryView>), (StatusCode, String)> {
    let id = state.sessions.create();
    state
        .sessions
        .take_view(id)
        .map(|view| (StatusCode::CREATED, Json(view)))
        .map_err(session_error)
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InventoryView>, (StatusCode, String)> {
    state.sessions.view(id).map(Json).map_err(session_error)
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.sessions.end(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Session not found".to_string()))
    }
}

// ============================================================
// Items
// ============================================================

/// Input for adding or removing an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
}

/// Result of an item operation: its notice plus the view after it ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub notice: Notice,
    pub view: InventoryView,
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ItemInput>,
) -> Result<Json<ItemOutcome>, (StatusCode, String)> {
    let (notice, view) = state
        .sessions
        .add_item_and_view(id, &input.name)
        .map_err(session_error)?;
    Ok(Json(ItemOutcome { notice, view }))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ItemInput>,
) -> Result<Json<ItemOutcome>, (StatusCode, String)> {
    let (notice, view) = state
        .sessions
        .remove_item_and_view(id, &input.name)
        .map_err(session_error)?;
    Ok(Json(ItemOutcome { notice, view }))
}
