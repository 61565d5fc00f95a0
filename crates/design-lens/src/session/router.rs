use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::machine::SessionError;
use super::service::{SessionService, SessionServiceError};
use super::store::{SessionId, SessionStore, StoreError};
use crate::critique::{ImageUpload, Principle};

/// Largest design accepted on the upload route.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Router exposing the guided session over HTTP.
pub fn session_router<S>(service: Arc<SessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(create_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id",
            get(view_handler::<S>).delete(close_handler::<S>),
        )
        .route("/api/v1/sessions/:session_id/start", post(start_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/principles",
            post(toggle_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/upload",
            post(upload_handler::<S>).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/sessions/:session_id/reset", post(reset_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/restart",
            post(restart_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/report",
            get(report_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TogglePrinciple {
    pub(crate) principle: String,
}

/// Status shared by the session routes and [`crate::error::AppError`].
pub fn status_for(error: &SessionServiceError) -> StatusCode {
    match error {
        SessionServiceError::Session(SessionError::Input(_)) => StatusCode::BAD_REQUEST,
        SessionServiceError::Session(_) => StatusCode::CONFLICT,
        SessionServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Store(StoreError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn error_response(error: SessionServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (status_for(&error), Json(payload)).into_response()
}

fn respond<T>(status: StatusCode, outcome: Result<T, SessionServiceError>) -> Response
where
    T: serde::Serialize,
{
    match outcome {
        Ok(body) => (status, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<S>(State(service): State<Arc<SessionService<S>>>) -> Response
where
    S: SessionStore + 'static,
{
    respond(StatusCode::CREATED, service.create())
}

pub(crate) async fn view_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    respond(StatusCode::OK, service.view(&SessionId(session_id)))
}

pub(crate) async fn close_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.close(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn start_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    respond(StatusCode::OK, service.start(&SessionId(session_id)))
}

pub(crate) async fn toggle_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    Json(body): Json<TogglePrinciple>,
) -> Response
where
    S: SessionStore + 'static,
{
    let principle = match body.principle.parse::<Principle>() {
        Ok(principle) => principle,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };
    respond(
        StatusCode::OK,
        service.toggle(&SessionId(session_id), principle),
    )
}

pub(crate) async fn upload_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: SessionStore + 'static,
{
    let declared = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty() && *value != "application/octet-stream");
    let upload = match declared {
        Some(media_type) => ImageUpload::new(media_type, body.to_vec()),
        None => ImageUpload::undeclared(body.to_vec()),
    };

    respond(
        StatusCode::ACCEPTED,
        service
            .upload(&SessionId(session_id), upload)
            .map(|pending| pending.view),
    )
}

pub(crate) async fn reset_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    respond(StatusCode::OK, service.reset(&SessionId(session_id)))
}

pub(crate) async fn restart_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    respond(StatusCode::OK, service.restart(&SessionId(session_id)))
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let today = chrono::Local::now().date_naive();
    respond(StatusCode::OK, service.report(&SessionId(session_id), today))
}
