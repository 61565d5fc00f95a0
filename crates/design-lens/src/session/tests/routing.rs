use super::common::*;
use crate::config::ScanTiming;
use crate::critique::Principle;
use crate::session::SessionService;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn create_route_opens_a_welcome_session() {
    let (service, store) = build_service(ScanTiming::instant());
    let router = router_with_service(service);

    let response = router
        .oneshot(post_empty("/api/v1/sessions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("page"), Some(&json!("welcome")));
    assert!(payload
        .get("session_id")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .starts_with("session-"));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn toggle_route_accepts_labels_and_rejects_unknown_names() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[]);
    let router = router_with_service(service);
    let uri = format!("/api/v1/sessions/{}/principles", id.0);

    let response = router
        .clone()
        .oneshot(post_json(&uri, json!({ "principle": "Contrast & Colour" })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("selected"), Some(&json!(["contrast_colour"])));

    let response = router
        .oneshot(post_json(&uri, json!({ "principle": "kerning" })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_route_uses_content_type_and_rejects_non_images() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Balance]);
    let router = router_with_service(service);
    let uri = format!("/api/v1/sessions/{}/upload", id.0);

    let response = router
        .clone()
        .oneshot(
            Request::post(&uri)
                .header(header::CONTENT_TYPE, "application/pdf")
                .body(Body::from("%PDF-1.7"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router
        .oneshot(
            Request::post(&uri)
                .header(header::CONTENT_TYPE, "image/png")
                .body(Body::from(png_bytes(100)))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("page"), Some(&json!("analyzing")));
    assert_eq!(
        payload.pointer("/upload/media_type"),
        Some(&json!("image/png"))
    );
}

#[tokio::test]
async fn upload_without_content_type_is_sniffed() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Spacing]);
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::post(format!("/api/v1/sessions/{}/upload", id.0))
                .body(Body::from(png_bytes(64)))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.pointer("/upload/media_type"),
        Some(&json!("image/png"))
    );
}

#[tokio::test]
async fn report_route_conflicts_until_results_exist() {
    let (service, _) = build_service(ScanTiming::instant());
    let service = Arc::new(service);
    let id = selecting(service.as_ref(), &[Principle::Alignment]);
    let router = crate::session::session_router(service.clone());
    let uri = format!("/api/v1/sessions/{}/report", id.0);

    let response = router
        .clone()
        .oneshot(get(&uri))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let pending = service.upload(&id, png(100)).expect("upload accepted");
    pending.task.await.expect("analysis task completes");

    let response = router.oneshot(get(&uri)).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("overall_score"), Some(&json!(69)));
    assert_eq!(payload.get("overall_label"), Some(&json!("Satisfactory")));
}

#[tokio::test]
async fn delete_route_forgets_the_session() {
    let (service, store) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Hierarchy]);
    let router = router_with_service(service);
    let uri = format!("/api/v1/sessions/{}", id.0);

    let response = router
        .clone()
        .oneshot(
            Request::delete(&uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(store.is_empty());

    let response = router.oneshot(get(&uri)).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_sessions_are_not_found() {
    let (service, _) = build_service(ScanTiming::instant());
    let router = router_with_service(service);

    let response = router
        .oneshot(post_empty("/api/v1/sessions/session-nope/reset"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_outages_are_internal_errors() {
    let service = SessionService::new(
        Arc::new(UnavailableStore),
        Default::default(),
        ScanTiming::instant(),
    );
    let router = crate::session::session_router(Arc::new(service));

    let response = router
        .oneshot(post_empty("/api/v1/sessions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
