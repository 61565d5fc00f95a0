//! Guided critique session: welcome, principle selection, the timed analyzing screen and results.
//!
//! [`DesignSession`] is the pure state machine. [`SessionService`] owns sessions through a
//! [`SessionStore`] and runs each accepted upload in the background, where the scan animation
//! and scoring are joined before the result lands. Updates from an analysis that is no longer
//! current are dropped. Sessions are closed explicitly or swept once idle.

mod machine;
pub mod router;
mod runner;
pub mod service;
pub mod store;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use machine::{AnalysisTicket, DesignSession, Page, RequestId, SessionError, SessionView};
pub use router::{session_router, MAX_UPLOAD_BYTES};
pub use runner::AnalysisRunner;
pub use service::{PendingAnalysis, SessionService, SessionServiceError};
pub use store::{
    InMemorySessionStore, SessionId, SessionRecord, SessionRecordView, SessionStore, StoreError,
};
pub use timeline::{ScanEvent, ScanProgress, ScanTimeline};
