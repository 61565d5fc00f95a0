use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::config::ScanTiming;
use crate::critique::{CritiqueEngine, ImageUpload, Principle};
use crate::session::store::{SessionId, SessionRecord, SessionStore, StoreError};
use crate::session::{session_router, InMemorySessionStore, SessionService};

pub(super) const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// PNG magic followed by zero padding up to `len` bytes.
pub(super) fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = PNG_HEADER.to_vec();
    bytes.resize(len.max(PNG_HEADER.len()), 0);
    bytes
}

pub(super) fn png(len: usize) -> ImageUpload {
    ImageUpload::new("image/png", png_bytes(len))
}

pub(super) fn build_service(
    timing: ScanTiming,
) -> (SessionService<InMemorySessionStore>, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let service = SessionService::new(store.clone(), CritiqueEngine::default(), timing);
    (service, store)
}

/// Creates a session, moves it to selection and picks `principles` in order.
pub(super) fn selecting<S>(service: &SessionService<S>, principles: &[Principle]) -> SessionId
where
    S: SessionStore + 'static,
{
    let created = service.create().expect("session created");
    let id = created.session_id;
    service.start(&id).expect("session starts");
    for principle in principles {
        service.toggle(&id, *principle).expect("principle toggles");
    }
    id
}

pub(super) fn router_with_service(service: SessionService<InMemorySessionStore>) -> axum::Router {
    session_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn modify(
        &self,
        _id: &SessionId,
        _apply: &mut dyn FnMut(&mut SessionRecord),
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<SessionRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn evict_idle(&self, _max_idle: Duration) -> Result<Vec<SessionId>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}
