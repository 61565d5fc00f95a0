use super::common::*;
use crate::session::store::SessionStore;
use crate::config::{ScanTiming, SessionRetention};
use crate::critique::{ImageUpload, InputError, Principle, SeverityTier, UploadSummary};
use crate::session::{
    Page, SessionError, SessionId, SessionService, SessionServiceError, StoreError,
};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

#[tokio::test]
async fn single_principle_run_is_reproducible() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Alignment]);

    let pending = service
        .upload(&id, ImageUpload::new("image/png", vec![0; 100]))
        .expect("upload accepted");
    assert_eq!(pending.view.state.page, Page::Analyzing);
    pending.task.await.expect("analysis task completes");

    let view = service.view(&id).expect("session exists");
    assert_eq!(view.state.page, Page::Results);
    let result = view.state.result.expect("result stored");
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].tier, SeverityTier::Satisfactory);
    assert_eq!(result.findings[0].score, 69);
    assert_eq!(result.overall_score, 69);
}

#[tokio::test]
async fn upload_without_principles_is_rejected_before_scoring() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[]);

    match service.upload(&id, png(100)) {
        Err(SessionServiceError::Session(SessionError::Input(
            InputError::NoPrinciplesSelected,
        ))) => {}
        other => panic!("expected missing principles, got {other:?}"),
    }

    let view = service.view(&id).expect("session exists");
    assert_eq!(view.state.page, Page::Selection);
    assert!(view.state.upload.is_none());
}

#[tokio::test]
async fn non_image_upload_keeps_the_selection_page() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Hierarchy]);

    let outcome = service.upload(
        &id,
        ImageUpload::new("text/plain", b"not a design".to_vec()),
    );

    assert!(matches!(
        outcome,
        Err(SessionServiceError::Session(SessionError::Input(
            InputError::NotAnImage { .. }
        )))
    ));
    let view = service.view(&id).expect("session exists");
    assert_eq!(view.state.page, Page::Selection);
    assert_eq!(view.state.selected, vec![Principle::Hierarchy]);
}

#[tokio::test(start_paused = true)]
async fn six_principles_hold_the_analyzing_page_for_the_full_animation() {
    let (service, _) = build_service(ScanTiming::default());
    let id = selecting(&service, &Principle::ordered());
    let started = Instant::now();

    let pending = service.upload(&id, png(100)).expect("upload accepted");

    tokio::time::sleep(Duration::from_millis(3_000)).await;
    let midway = service.view(&id).expect("session exists");
    assert_eq!(midway.state.page, Page::Analyzing);
    let scanning = midway.state.scanning.expect("a principle is scanning");
    assert_eq!(scanning.index, 2);
    assert_eq!(scanning.principle, Principle::ContrastColour);
    assert!(midway.state.result.is_none());

    pending.task.await.expect("analysis task completes");

    assert!(started.elapsed() >= Duration::from_millis(7_700));
    let view = service.view(&id).expect("session exists");
    assert_eq!(view.state.page, Page::Results);
    assert!(view.state.scanning.is_none());
    let result = view.state.result.expect("result stored");
    let principles: Vec<_> = result.principles().collect();
    assert_eq!(principles, Principle::ordered().to_vec());
    assert_eq!(result.overall_score, 82);
}

#[tokio::test]
async fn reset_from_results_returns_to_an_empty_selection() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Balance, Principle::Spacing]);
    let pending = service.upload(&id, png(512)).expect("upload accepted");
    pending.task.await.expect("analysis task completes");
    assert_eq!(
        service.view(&id).expect("session exists").state.page,
        Page::Results
    );

    let view = service.reset(&id).expect("reset succeeds");

    assert_eq!(view.state.page, Page::Selection);
    assert!(view.state.selected.is_empty());
    assert!(view.state.upload.is_none());
    assert!(view.state.result.is_none());
}

#[tokio::test(start_paused = true)]
async fn reset_mid_analysis_discards_the_late_result() {
    let (service, _) = build_service(ScanTiming::default());
    let id = selecting(&service, &[Principle::Readability]);
    let pending = service.upload(&id, png(300)).expect("upload accepted");

    service.reset(&id).expect("reset while analyzing");
    pending.task.await.expect("analysis task completes");

    let view = service.view(&id).expect("session exists");
    assert_eq!(view.state.page, Page::Selection);
    assert!(view.state.result.is_none());
    assert!(view.state.scanning.is_none());
}

#[tokio::test]
async fn restart_returns_to_welcome() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Alignment]);

    let view = service.restart(&id).expect("restart succeeds");

    assert_eq!(view.state.page, Page::Welcome);
    assert!(view.state.selected.is_empty());
    match service.toggle(&id, Principle::Balance) {
        Err(SessionServiceError::Session(SessionError::InvalidTransition {
            page: Page::Welcome,
            ..
        })) => {}
        other => panic!("expected invalid transition, got {other:?}"),
    }
}

#[tokio::test]
async fn report_needs_a_finished_analysis() {
    let (service, _) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Spacing]);

    assert_eq!(
        service.report(&id, report_date()).err(),
        Some(SessionServiceError::Session(SessionError::NoResult))
    );

    let pending = service.upload(&id, png(2_048)).expect("upload accepted");
    pending.task.await.expect("analysis task completes");

    let report = service.report(&id, report_date()).expect("report ready");
    assert_eq!(report.payload_bytes, 2_048);
    assert_eq!(report.media_type, "image/png");
    assert_eq!(report.findings[0].principle, Principle::Spacing);
    assert_eq!(report.generated_on_label(), "March 14, 2026");
}

#[tokio::test]
async fn finished_sessions_keep_only_the_upload_summary() {
    let (service, store) = build_service(ScanTiming::instant());
    let id = selecting(&service, &[Principle::Balance]);
    let pending = service.upload(&id, png(4_096)).expect("upload accepted");
    pending.task.await.expect("analysis task completes");

    let record = store.fetch(&id).expect("fetch").expect("present");
    assert_eq!(
        record.session.upload(),
        Some(&UploadSummary {
            media_type: "image/png".to_string(),
            bytes: 4_096,
        })
    );
    assert!(record.session.result().is_some());
}

#[tokio::test]
async fn closed_sessions_release_their_records() {
    let (service, store) = build_service(ScanTiming::instant());

    for _ in 0..1_000 {
        let id = service.create().expect("session created").session_id;
        service.restart(&id).expect("restart succeeds");
        service.close(&id).expect("close succeeds");
    }

    assert!(store.is_empty());
    let id = service.create().expect("session created").session_id;
    service.close(&id).expect("close succeeds");
    assert_eq!(
        service.close(&id).err(),
        Some(SessionServiceError::Store(StoreError::NotFound))
    );
}

#[tokio::test(start_paused = true)]
async fn closing_mid_analysis_drops_the_late_result() {
    let (service, store) = build_service(ScanTiming::default());
    let id = selecting(&service, &[Principle::Spacing]);
    let pending = service.upload(&id, png(100)).expect("upload accepted");

    service.close(&id).expect("close succeeds");
    pending.task.await.expect("analysis task completes");

    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn idle_sweep_evicts_abandoned_sessions() {
    let (service, store) = build_service(ScanTiming::instant());
    let service = Arc::new(service);
    for _ in 0..50 {
        selecting(service.as_ref(), &[Principle::Readability]);
    }
    let retention = SessionRetention {
        idle_timeout: Duration::from_secs(120),
        sweep_interval: Duration::from_secs(30),
    };

    let sweep = service.spawn_idle_sweep(retention);
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(store.len(), 50);

    let kept = service.create().expect("session created").session_id;
    tokio::time::sleep(Duration::from_secs(90)).await;
    sweep.abort();

    assert_eq!(store.len(), 1);
    assert!(service.view(&kept).is_ok());
}

#[test]
fn missing_sessions_surface_not_found() {
    let (service, _) = build_service(ScanTiming::instant());
    let missing = SessionId("session-missing".to_string());

    assert_eq!(
        service.view(&missing).err(),
        Some(SessionServiceError::Store(StoreError::NotFound))
    );
    assert_eq!(
        service.start(&missing).err(),
        Some(SessionServiceError::Store(StoreError::NotFound))
    );
}

#[test]
fn store_outages_propagate() {
    let service = SessionService::new(
        Arc::new(UnavailableStore),
        Default::default(),
        ScanTiming::instant(),
    );

    assert!(matches!(
        service.create(),
        Err(SessionServiceError::Store(StoreError::Unavailable(_)))
    ));
}
