use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::machine::{DesignSession, SessionError};
use super::runner::AnalysisRunner;
use super::store::{
    next_session_id, SessionId, SessionRecord, SessionRecordView, SessionStore, StoreError,
};
use super::timeline::ScanEvent;
use crate::config::{ScanTiming, SessionRetention};
use crate::critique::{CritiqueEngine, CritiqueReport, ImageUpload, Principle};

/// Service composing the session store and the analysis runner.
pub struct SessionService<S> {
    store: Arc<S>,
    runner: Arc<AnalysisRunner>,
}

/// An accepted upload and the background task driving its analysis.
#[derive(Debug)]
pub struct PendingAnalysis {
    pub view: SessionRecordView,
    pub task: JoinHandle<()>,
}

impl<S> SessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, engine: CritiqueEngine, timing: ScanTiming) -> Self {
        let runner = AnalysisRunner::new(Arc::new(engine), timing);
        Self {
            store,
            runner: Arc::new(runner),
        }
    }

    pub fn timing(&self) -> ScanTiming {
        self.runner.timing()
    }

    /// Open a new session on the welcome page.
    pub fn create(&self) -> Result<SessionRecordView, SessionServiceError> {
        let record = self.store.insert(SessionRecord::new(next_session_id()))?;
        info!(session = %record.id, "session created");
        Ok(record.view())
    }

    pub fn view(&self, id: &SessionId) -> Result<SessionRecordView, SessionServiceError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(record.view())
    }

    pub fn start(&self, id: &SessionId) -> Result<SessionRecordView, SessionServiceError> {
        self.update(id, DesignSession::start)
    }

    pub fn toggle(
        &self,
        id: &SessionId,
        principle: Principle,
    ) -> Result<SessionRecordView, SessionServiceError> {
        self.update(id, |session| session.toggle_principle(principle).map(|_| ()))
    }

    pub fn reset(&self, id: &SessionId) -> Result<SessionRecordView, SessionServiceError> {
        self.update(id, DesignSession::reset)
    }

    pub fn restart(&self, id: &SessionId) -> Result<SessionRecordView, SessionServiceError> {
        self.update(id, |session| {
            session.restart();
            Ok(())
        })
    }

    /// Forgets the session. An analysis still running for it finds nothing to land on.
    pub fn close(&self, id: &SessionId) -> Result<(), SessionServiceError> {
        let record = self.store.remove(id)?;
        info!(session = %record.id, page = %record.session.page(), "session closed");
        Ok(())
    }

    /// Removes sessions untouched for `max_idle`, leaving running analyses alone.
    pub fn evict_idle(&self, max_idle: Duration) -> Result<usize, SessionServiceError> {
        let evicted = self.store.evict_idle(max_idle)?;
        if !evicted.is_empty() {
            info!(count = evicted.len(), "evicted idle sessions");
        }
        Ok(evicted.len())
    }

    pub fn report(
        &self,
        id: &SessionId,
        generated_on: NaiveDate,
    ) -> Result<CritiqueReport, SessionServiceError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(record.session.report(generated_on)?)
    }

    /// Accepts the upload and starts the analysis in the background.
    ///
    /// Must be called from within a tokio runtime. The returned view is already on the
    /// analyzing page; progress and the final result land in the store as they happen.
    pub fn upload(
        &self,
        id: &SessionId,
        upload: ImageUpload,
    ) -> Result<PendingAnalysis, SessionServiceError> {
        let mut upload = Some(upload);
        let mut accepted = None;
        self.store.modify(id, &mut |record| {
            if let Some(upload) = upload.take() {
                accepted = Some(
                    record
                        .session
                        .accept_upload(upload)
                        .map(|ticket| (ticket, record.view())),
                );
            }
        })?;
        let (ticket, view) = accepted.ok_or(StoreError::NotFound)??;

        info!(
            session = %id,
            request = %ticket.request_id,
            principles = ticket.request.selection.len(),
            bytes = ticket.request.payload.len(),
            "analysis started"
        );

        let store = Arc::clone(&self.store);
        let runner = Arc::clone(&self.runner);
        let session_id = id.clone();
        let task = tokio::spawn(async move {
            let request_id = ticket.request_id;
            let progress_store = Arc::clone(&store);
            let progress_id = session_id.clone();

            let outcome = runner
                .run(&ticket, move |event| {
                    let ScanEvent::Scanning(progress) = event else {
                        return;
                    };
                    let applied = progress_store.modify(&progress_id, &mut |record| {
                        let marked = record.session.mark_scanning(request_id, progress.clone());
                        if let Err(err) = marked {
                            debug!(session = %progress_id, error = %err, "dropping scan update");
                        }
                    });
                    if let Err(err) = applied {
                        debug!(session = %progress_id, error = %err, "scan update not stored");
                    }
                })
                .await;

            let mut outcome = Some(outcome);
            let landed = store.modify(&session_id, &mut |record| {
                let Some(outcome) = outcome.take() else {
                    return;
                };
                match record.session.complete(request_id, outcome) {
                    Ok(page) => {
                        info!(session = %session_id, request = %request_id, page = %page, "analysis landed")
                    }
                    Err(err) => {
                        debug!(session = %session_id, error = %err, "discarding analysis outcome")
                    }
                }
            });
            if let Err(err) = landed {
                warn!(session = %session_id, error = %err, "analysis outcome could not be stored");
            }
        });

        Ok(PendingAnalysis { view, task })
    }

    /// Sweeps idle sessions every `retention.sweep_interval` until the handle is aborted.
    pub fn spawn_idle_sweep(self: &Arc<Self>, retention: SessionRetention) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let period = retention.sweep_interval.max(Duration::from_millis(1));
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(err) = service.evict_idle(retention.idle_timeout) {
                    warn!(error = %err, "idle session sweep failed");
                }
            }
        })
    }

    fn update<F>(&self, id: &SessionId, apply: F) -> Result<SessionRecordView, SessionServiceError>
    where
        F: FnOnce(&mut DesignSession) -> Result<(), SessionError>,
    {
        let mut apply = Some(apply);
        let mut outcome = None;
        self.store.modify(id, &mut |record| {
            if let Some(apply) = apply.take() {
                outcome = Some(apply(&mut record.session).map(|()| record.view()));
            }
        })?;
        Ok(outcome.ok_or(StoreError::NotFound)??)
    }
}

/// Error raised by the session service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
