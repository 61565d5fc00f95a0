use std::sync::Arc;

use tracing::debug;

use super::machine::AnalysisTicket;
use super::timeline::{ScanEvent, ScanTimeline};
use crate::config::ScanTiming;
use crate::critique::{AnalysisResult, CritiqueEngine, ScoringError};

/// Runs the scan animation and the scoring side by side and waits for both.
#[derive(Debug, Clone)]
pub struct AnalysisRunner {
    engine: Arc<CritiqueEngine>,
    timing: ScanTiming,
}

impl AnalysisRunner {
    pub fn new(engine: Arc<CritiqueEngine>, timing: ScanTiming) -> Self {
        Self { engine, timing }
    }

    pub fn timing(&self) -> ScanTiming {
        self.timing
    }

    pub fn engine(&self) -> &CritiqueEngine {
        &self.engine
    }

    /// Resolves once the animation has finished and scoring has produced an outcome.
    pub async fn run<F>(
        &self,
        ticket: &AnalysisTicket,
        on_event: F,
    ) -> Result<AnalysisResult, ScoringError>
    where
        F: FnMut(ScanEvent),
    {
        let timeline = ScanTimeline::new(&ticket.request.selection, self.timing);
        let scoring = async {
            tokio::time::sleep(self.timing.scoring_delay).await;
            let outcome = self.engine.analyze(&ticket.request);
            debug!(request = %ticket.request_id, ok = outcome.is_ok(), "scoring finished");
            outcome
        };

        let ((), outcome) = tokio::join!(timeline.play(on_event), scoring);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::critique::{ImageUpload, Principle};
    use crate::session::DesignSession;
    use std::time::Duration;
    use tokio::time::Instant;

    fn ticket(principles: &[Principle]) -> AnalysisTicket {
        let mut session = DesignSession::new();
        session.start().expect("starts");
        for principle in principles {
            session.toggle_principle(*principle).expect("toggles");
        }
        session
            .accept_upload(ImageUpload::new("image/png", vec![0; 100]))
            .expect("accepted")
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_slower_of_animation_and_scoring() {
        let timing = ScanTiming {
            principle_dwell: Duration::from_millis(10),
            completion_pause: Duration::from_millis(5),
            scoring_delay: Duration::from_millis(400),
        };
        let runner = AnalysisRunner::new(Arc::new(CritiqueEngine::default()), timing);
        let started = Instant::now();

        let result = runner
            .run(&ticket(&[Principle::Alignment]), |_| {})
            .await
            .expect("scores");

        assert!(started.elapsed() >= Duration::from_millis(400));
        assert_eq!(result.overall_score, 69);
    }

    #[tokio::test]
    async fn instant_timing_still_reports_every_principle() {
        let runner = AnalysisRunner::new(Arc::new(CritiqueEngine::default()), ScanTiming::instant());
        let mut scanned = Vec::new();

        let result = runner
            .run(&ticket(&[Principle::Balance, Principle::Spacing]), |event| {
                if let ScanEvent::Scanning(progress) = event {
                    scanned.push(progress.principle);
                }
            })
            .await
            .expect("scores");

        assert_eq!(scanned, vec![Principle::Balance, Principle::Spacing]);
        assert_eq!(
            result.principles().collect::<Vec<_>>(),
            vec![Principle::Balance, Principle::Spacing]
        );
    }
}
