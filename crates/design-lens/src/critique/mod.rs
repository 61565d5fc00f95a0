//! Principle scoring, feedback assembly, and report views.

mod assembler;
pub mod bank;
pub mod domain;
pub mod report;
mod scorer;

pub use assembler::{
    overall_score, AnalysisResult, PrincipleFinding, ATTENTION_FALLBACK, GOOD_FALLBACK,
    SATISFACTORY_FALLBACK,
};
pub use bank::{FeedbackBank, PrincipleCatalog};
pub use domain::{
    AnalysisRequest, ImagePayload, ImageUpload, InputError, Principle, PrincipleSelection,
    ScanCopy, SeverityTier, UnknownPrinciple, UploadSummary,
};
pub use report::{CritiqueReport, FindingView, TierPresentation, REPORT_TITLE};
pub use scorer::{classify, seed, seeded_draw, DeterministicScorer, PrincipleScore, ScoringError};

use rand::Rng;

/// Stateless engine that scores a request and dresses the scores in feedback copy.
#[derive(Debug, Clone)]
pub struct CritiqueEngine {
    bank: FeedbackBank,
    scorer: DeterministicScorer,
}

impl Default for CritiqueEngine {
    fn default() -> Self {
        Self::new(FeedbackBank::standard())
    }
}

impl CritiqueEngine {
    pub fn new(bank: FeedbackBank) -> Self {
        Self {
            bank,
            scorer: DeterministicScorer::new(),
        }
    }

    pub fn bank(&self) -> &FeedbackBank {
        &self.bank
    }

    /// Scores the request. Message choice is not seeded, so copy can vary between runs while
    /// tiers, scores and suggestions do not.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ScoringError> {
        self.analyze_with_rng(request, &mut rand::thread_rng())
    }

    pub fn analyze_with_rng<R>(
        &self,
        request: &AnalysisRequest,
        rng: &mut R,
    ) -> Result<AnalysisResult, ScoringError>
    where
        R: Rng + ?Sized,
    {
        let scores = self.scorer.score(request)?;
        assembler::assemble(&self.bank, &scores, rng)
    }
}
