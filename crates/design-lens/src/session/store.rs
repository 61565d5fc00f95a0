use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use tracing::debug;

use super::machine::{DesignSession, Page, SessionView};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub session: DesignSession,
    /// Last insert or update, used for idle eviction.
    pub touched_at: Instant,
}

impl SessionRecord {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            session: DesignSession::new(),
            touched_at: Instant::now(),
        }
    }

    /// Idle for at least `max_idle` and not waiting on an analysis.
    pub fn is_expired(&self, now: Instant, max_idle: Duration) -> bool {
        self.session.page() != Page::Analyzing
            && now.saturating_duration_since(self.touched_at) >= max_idle
    }

    pub fn view(&self) -> SessionRecordView {
        SessionRecordView {
            session_id: self.id.clone(),
            state: self.session.view(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionRecordView {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub state: SessionView,
}

/// Storage abstraction so the service can be exercised without a real backend.
///
/// `modify` runs the closure while the record is held exclusively, so a read-check-write on a
/// session never interleaves with another update. It also refreshes `touched_at`.
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, StoreError>;
    fn modify(
        &self,
        id: &SessionId,
        apply: &mut dyn FnMut(&mut SessionRecord),
    ) -> Result<(), StoreError>;
    fn remove(&self, id: &SessionId) -> Result<SessionRecord, StoreError>;
    /// Drops every record for which [`SessionRecord::is_expired`] holds and returns their ids.
    fn evict_idle(&self, max_idle: Duration) -> Result<Vec<SessionId>, StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("session map lock poisoned".to_string())
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, StoreError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, StoreError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn modify(
        &self,
        id: &SessionId,
        apply: &mut dyn FnMut(&mut SessionRecord),
    ) -> Result<(), StoreError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        let record = guard.get_mut(id).ok_or(StoreError::NotFound)?;
        apply(record);
        record.touched_at = Instant::now();
        Ok(())
    }

    fn remove(&self, id: &SessionId) -> Result<SessionRecord, StoreError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        guard.remove(id).ok_or(StoreError::NotFound)
    }

    fn evict_idle(&self, max_idle: Duration) -> Result<Vec<SessionId>, StoreError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        let now = Instant::now();
        let expired: Vec<SessionId> = guard
            .values()
            .filter(|record| record.is_expired(now, max_idle))
            .map(|record| record.id.clone())
            .collect();
        for id in &expired {
            guard.remove(id);
        }
        debug!(evicted = expired.len(), remaining = guard.len(), "idle sweep");
        Ok(expired)
    }
}
