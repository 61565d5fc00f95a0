use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_session_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use design_lens::config::AppConfig;
use design_lens::critique::CritiqueEngine;
use design_lens::error::AppError;
use design_lens::session::{InMemorySessionStore, SessionService};
use design_lens::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle);
    let readiness_flag = app_state.readiness.clone();

    let store = Arc::new(InMemorySessionStore::new());
    let session_service = Arc::new(SessionService::new(
        store,
        CritiqueEngine::default(),
        config.scan,
    ));
    let sweep = session_service.spawn_idle_sweep(config.sessions);

    let app = with_session_routes(session_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        idle_timeout_secs = config.sessions.idle_timeout.as_secs(),
        "design critique service ready"
    );

    let served = axum::serve(listener, app).await;
    sweep.abort();
    served?;
    Ok(())
}
