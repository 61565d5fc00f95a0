use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use design_lens::config::ThemeConfig;
use design_lens::session::{session_router, SessionService, SessionStore};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::{Arc, PoisonError};
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct ThemeUpdateResponse {
    pub(crate) theme: ThemeConfig,
    pub(crate) applied: Vec<&'static str>,
}

pub(crate) fn with_session_routes<S>(service: Arc<SessionService<S>>) -> axum::Router
where
    S: SessionStore + 'static,
{
    session_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/theme",
            axum::routing::get(theme_endpoint).put(update_theme_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn theme_endpoint(Extension(state): Extension<AppState>) -> Json<ThemeConfig> {
    Json(state.theme())
}

pub(crate) async fn update_theme_endpoint(
    Extension(state): Extension<AppState>,
    Json(overrides): Json<Map<String, Value>>,
) -> Json<ThemeUpdateResponse> {
    let mut theme = state.theme.write().unwrap_or_else(PoisonError::into_inner);
    let applied = theme.apply(&overrides);
    info!(applied = ?applied, "theme updated");

    Json(ThemeUpdateResponse {
        theme: theme.clone(),
        applied,
    })
}
