use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::page;
use crate::analysis::Actor;
use crate::services::api::Transport;
use crate::session::{SessionHandle, SessionRegistry};
use crate::workflows::{CrisisView, Desk, DocumentView};

/// Header carrying the per-tab session id minted on page load.
pub const SESSION_HEADER: &str = "x-session-id";

pub struct AppState<T> {
    pub desk: Arc<Desk<T>>,
    pub sessions: SessionRegistry,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            desk: Arc::clone(&self.desk),
            sessions: self.sessions.clone(),
        }
    }
}

impl<T: Transport> AppState<T> {
    pub fn new(desk: Desk<T>) -> Self {
        Self {
            desk: Arc::new(desk),
            sessions: SessionRegistry::new(),
        }
    }

    /// Session named by the request header; a fresh, unregistered one when
    /// absent, malformed or unknown.
    fn session(&self, headers: &HeaderMap) -> SessionHandle {
        let id = headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok());
        match id {
            Some(id) => self.sessions.resolve(id),
            None => {
                debug!("Request without a session id, using a detached session");
                SessionHandle::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CrisisInput {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DocumentInput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

pub fn router<T: Transport + 'static>(state: AppState<T>) -> Router {
    Router::new()
        .route("/", get(index::<T>))
        .route("/actions/health", get(health::<T>))
        .route("/actions/crisis", post(submit_crisis::<T>))
        .route("/actions/crisis/clear", post(clear_crisis::<T>))
        .route("/actions/document", post(submit_document::<T>))
        .route("/actions/document/clear", post(clear_document::<T>))
        .route("/actions/voice/:actor", post(synthesize_voice::<T>))
        .with_state(state)
}

async fn index<T: Transport + 'static>(State(state): State<AppState<T>>) -> Html<String> {
    let (session_id, _) = state.sessions.open();
    let status = state.desk.check_health().await.to_string();
    Html(page::render(
        session_id,
        &CrisisView::idle(status.clone()),
        &DocumentView::idle(status),
    ))
}

async fn health<T: Transport + 'static>(State(state): State<AppState<T>>) -> impl IntoResponse {
    let status = state.desk.check_health().await;
    Json(json!({ "status": status.to_string() }))
}

async fn submit_crisis<T: Transport + 'static>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
    Json(input): Json<CrisisInput>,
) -> Json<CrisisView> {
    let session = state.session(&headers);
    Json(state.desk.submit_crisis(&session, &input.text).await)
}

async fn clear_crisis<T: Transport + 'static>(State(state): State<AppState<T>>, headers: HeaderMap) -> Json<CrisisView> {
    let session = state.session(&headers);
    Json(state.desk.clear_crisis(&session).await)
}

async fn submit_document<T: Transport + 'static>(
    State(state): State<AppState<T>>,
    Json(input): Json<DocumentInput>,
) -> Json<DocumentView> {
    Json(state.desk.submit_document(&input.text, input.filename.as_deref()).await)
}

async fn clear_document<T: Transport + 'static>(State(state): State<AppState<T>>) -> Json<DocumentView> {
    Json(state.desk.clear_document().await)
}

async fn synthesize_voice<T: Transport + 'static>(
    State(state): State<AppState<T>>,
    Path(actor): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Some(actor) = Actor::from_id(&actor) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let session = state.session(&headers);
    match state.desk.synthesize_voice(&session, actor).await {
        Some(clip) => ([(header::CONTENT_TYPE, clip.content_type)], clip.audio).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
