use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::timeline::ScanProgress;
use crate::critique::{
    AnalysisRequest, AnalysisResult, CritiqueReport, ImageUpload, InputError, Principle,
    PrincipleSelection, ScoringError, UploadSummary,
};

/// Screen the guided flow is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Welcome,
    Selection,
    Analyzing,
    Results,
}

impl Page {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Selection => "selection",
            Self::Analyzing => "analyzing",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one upload within a session. Never reused, even across reset and restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Work handed to the analysis runner when an upload is accepted.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    pub request_id: RequestId,
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("cannot {action} from the {page} page")]
    InvalidTransition { action: &'static str, page: Page },
    #[error("analysis {0} is no longer current")]
    StaleRequest(RequestId),
    #[error("no analysis result to report on; upload a design first")]
    NoResult,
}

/// State for one user walking through welcome, selection, analyzing and results.
#[derive(Debug, Clone)]
pub struct DesignSession {
    page: Page,
    selection: PrincipleSelection,
    upload: Option<UploadSummary>,
    scanning: Option<ScanProgress>,
    result: Option<AnalysisResult>,
    active_request: Option<RequestId>,
    issued_requests: u64,
    notice: Option<String>,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignSession {
    pub fn new() -> Self {
        Self {
            page: Page::Welcome,
            selection: PrincipleSelection::new(),
            upload: None,
            scanning: None,
            result: None,
            active_request: None,
            issued_requests: 0,
            notice: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selection(&self) -> &PrincipleSelection {
        &self.selection
    }

    /// Accepted upload. The image bytes travel with the ticket only, never with the session.
    pub fn upload(&self) -> Option<&UploadSummary> {
        self.upload.as_ref()
    }

    pub fn scanning(&self) -> Option<&ScanProgress> {
        self.scanning.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn active_request(&self) -> Option<RequestId> {
        self.active_request
    }

    /// Message left by a failed analysis, cleared by the next successful step.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn require(&self, page: Page, action: &'static str) -> Result<(), SessionError> {
        if self.page == page {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                page: self.page,
            })
        }
    }

    fn transition(&mut self, next: Page) {
        info!(from = %self.page, to = %next, "session transition");
        self.page = next;
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require(Page::Welcome, "start")?;
        self.transition(Page::Selection);
        Ok(())
    }

    /// Flips a principle in or out of the selection. Returns whether it is now selected.
    pub fn toggle_principle(&mut self, principle: Principle) -> Result<bool, SessionError> {
        self.require(Page::Selection, "change principles")?;
        Ok(self.selection.toggle(principle))
    }

    /// Validates the upload against the current selection and moves to analyzing.
    ///
    /// Rejections leave the session untouched.
    pub fn accept_upload(&mut self, upload: ImageUpload) -> Result<AnalysisTicket, SessionError> {
        self.require(Page::Selection, "upload")?;
        if self.selection.is_empty() {
            return Err(InputError::NoPrinciplesSelected.into());
        }
        let payload = upload.into_payload()?;

        self.issued_requests += 1;
        let request_id = RequestId(self.issued_requests);
        self.upload = Some(payload.summary());
        let request = AnalysisRequest::new(payload, self.selection.clone());

        self.result = None;
        self.scanning = None;
        self.notice = None;
        self.active_request = Some(request_id);
        self.transition(Page::Analyzing);

        Ok(AnalysisTicket {
            request_id,
            request,
        })
    }

    fn require_active(&self, request_id: RequestId) -> Result<(), SessionError> {
        if self.page == Page::Analyzing && self.active_request == Some(request_id) {
            Ok(())
        } else {
            Err(SessionError::StaleRequest(request_id))
        }
    }

    /// Records which principle the animation is on.
    pub fn mark_scanning(
        &mut self,
        request_id: RequestId,
        progress: ScanProgress,
    ) -> Result<(), SessionError> {
        self.require_active(request_id)?;
        self.scanning = Some(progress);
        Ok(())
    }

    /// Lands the outcome of an analysis and returns the page the session moved to.
    ///
    /// A scoring failure sends the user back to selection with a notice.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        outcome: Result<AnalysisResult, ScoringError>,
    ) -> Result<Page, SessionError> {
        self.require_active(request_id)?;
        self.active_request = None;
        self.scanning = None;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.transition(Page::Results);
            }
            Err(err) => {
                self.upload = None;
                self.notice = Some(err.to_string());
                self.transition(Page::Selection);
            }
        }

        Ok(self.page)
    }

    /// Back to selection with an empty selection, no upload and no result.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.page == Page::Welcome {
            return Err(SessionError::InvalidTransition {
                action: "reset",
                page: self.page,
            });
        }
        self.clear();
        self.transition(Page::Selection);
        Ok(())
    }

    /// Back to the welcome page from anywhere.
    pub fn restart(&mut self) {
        self.clear();
        self.transition(Page::Welcome);
    }

    fn clear(&mut self) {
        self.selection.clear();
        self.upload = None;
        self.scanning = None;
        self.result = None;
        self.active_request = None;
        self.notice = None;
    }

    /// Report for the current result; requires both a result and the upload it came from.
    pub fn report(&self, generated_on: NaiveDate) -> Result<CritiqueReport, SessionError> {
        match (&self.result, &self.upload) {
            (Some(result), Some(upload)) => Ok(CritiqueReport::build(result, upload, generated_on)),
            _ => Err(SessionError::NoResult),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            page: self.page,
            selected: self.selection.as_slice().to_vec(),
            upload: self.upload.clone(),
            scanning: self.scanning.clone(),
            result: self.result.clone(),
            notice: self.notice.clone(),
        }
    }
}

/// Serializable snapshot handed to hosts.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub page: Page,
    pub selected: Vec<Principle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanning: Option<ScanProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::{CritiqueEngine, SeverityTier};

    fn png(len: usize) -> ImageUpload {
        ImageUpload::new("image/png", vec![0; len])
    }

    fn selecting(principles: &[Principle]) -> DesignSession {
        let mut session = DesignSession::new();
        session.start().expect("starts");
        for principle in principles {
            session.toggle_principle(*principle).expect("toggles");
        }
        session
    }

    fn finish(session: &mut DesignSession, ticket: &AnalysisTicket) -> Page {
        let outcome = CritiqueEngine::default().analyze(&ticket.request);
        session
            .complete(ticket.request_id, outcome)
            .expect("ticket is current")
    }

    #[test]
    fn start_is_only_valid_on_welcome() {
        let mut session = DesignSession::new();
        session.start().expect("starts");
        assert_eq!(session.page(), Page::Selection);
        assert_eq!(
            session.start(),
            Err(SessionError::InvalidTransition {
                action: "start",
                page: Page::Selection
            })
        );
    }

    #[test]
    fn upload_without_principles_is_rejected_in_place() {
        let mut session = selecting(&[]);
        let err = session.accept_upload(png(100)).expect_err("no principles");

        assert_eq!(err, SessionError::Input(InputError::NoPrinciplesSelected));
        assert_eq!(session.page(), Page::Selection);
        assert!(session.upload().is_none());
        assert!(session.active_request().is_none());
    }

    #[test]
    fn non_image_upload_is_rejected_in_place() {
        let mut session = selecting(&[Principle::Balance]);
        let err = session
            .accept_upload(ImageUpload::new("application/pdf", b"%PDF-1.7".to_vec()))
            .expect_err("pdf rejected");

        assert!(matches!(
            err,
            SessionError::Input(InputError::NotAnImage { .. })
        ));
        assert_eq!(session.page(), Page::Selection);
        assert!(session.selection().contains(Principle::Balance));
    }

    #[test]
    fn accepted_upload_moves_to_results_once_completed() {
        let mut session = selecting(&[Principle::Alignment]);
        let ticket = session.accept_upload(png(100)).expect("accepted");
        assert_eq!(session.page(), Page::Analyzing);
        assert_eq!(ticket.request.selection.as_slice(), &[Principle::Alignment]);

        assert_eq!(finish(&mut session, &ticket), Page::Results);
        let result = session.result().expect("result stored");
        assert_eq!(result.findings[0].tier, SeverityTier::Satisfactory);
        assert_eq!(result.overall_score, 69);
        assert!(session.active_request().is_none());
    }

    #[test]
    fn scoring_failure_returns_to_selection_with_notice() {
        let mut session = selecting(&[Principle::Spacing]);
        let ticket = session.accept_upload(png(10)).expect("accepted");

        let page = session
            .complete(ticket.request_id, Err(ScoringError::EmptySelection))
            .expect("ticket is current");

        assert_eq!(page, Page::Selection);
        assert!(session.notice().is_some());
        assert!(session.result().is_none());
        assert!(session.upload().is_none());
    }

    #[test]
    fn reset_clears_selection_upload_and_result() {
        let mut session = selecting(&[Principle::Hierarchy, Principle::Spacing]);
        let ticket = session.accept_upload(png(64)).expect("accepted");
        finish(&mut session, &ticket);

        session.reset().expect("reset from results");

        assert_eq!(session.page(), Page::Selection);
        assert!(session.selection().is_empty());
        assert!(session.upload().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn late_callbacks_after_reset_are_discarded() {
        let mut session = selecting(&[Principle::Alignment]);
        let stale = session.accept_upload(png(100)).expect("accepted");
        session.reset().expect("reset mid-analysis");

        session
            .toggle_principle(Principle::Balance)
            .expect("selection again");
        let current = session.accept_upload(png(100)).expect("accepted");
        assert_ne!(stale.request_id, current.request_id);

        let outcome = CritiqueEngine::default().analyze(&stale.request);
        assert_eq!(
            session.complete(stale.request_id, outcome),
            Err(SessionError::StaleRequest(stale.request_id))
        );
        assert_eq!(session.page(), Page::Analyzing);
        assert_eq!(finish(&mut session, &current), Page::Results);
        assert_eq!(
            session.result().map(|result| result.findings[0].principle),
            Some(Principle::Balance)
        );
    }

    #[test]
    fn request_ids_survive_restart() {
        let mut session = selecting(&[Principle::Alignment]);
        let first = session.accept_upload(png(1)).expect("accepted");
        session.restart();
        assert_eq!(session.page(), Page::Welcome);

        session.start().expect("starts");
        session
            .toggle_principle(Principle::Alignment)
            .expect("toggles");
        let second = session.accept_upload(png(1)).expect("accepted");
        assert!(second.request_id > first.request_id);
    }

    #[test]
    fn report_requires_result_and_upload() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date");
        let mut session = selecting(&[Principle::Readability]);
        assert_eq!(session.report(date).err(), Some(SessionError::NoResult));

        let ticket = session.accept_upload(png(256)).expect("accepted");
        finish(&mut session, &ticket);

        assert_eq!(
            session.upload(),
            Some(&UploadSummary {
                media_type: "image/png".to_string(),
                bytes: 256,
            })
        );
        let report = session.report(date).expect("report available");
        assert_eq!(report.payload_bytes, 256);
        assert_eq!(report.findings.len(), 1);
    }
}
