use super::domain::{AnalysisRequest, Principle, PrincipleSelection, SeverityTier};
use serde::{Deserialize, Serialize};

/// Tier and score derived for one selected principle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipleScore {
    pub principle: Principle,
    pub tier: SeverityTier,
    pub score: u8,
    /// Pseudo-random draw in `[0, 1)` the tier was read from.
    pub draw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("no design principles selected; choose at least one before analyzing")]
    EmptySelection,
}

/// Seed shared by every principle in a request. `payload_len` is the data URL length.
pub fn seed(payload_len: usize, selection: &PrincipleSelection) -> u64 {
    (payload_len + selection.joined_len()) as u64
}

/// `frac(sin(seed + index) * 10000)`. Reproducible, not random in any useful sense.
pub fn seeded_draw(seed: u64, index: usize) -> f64 {
    let x = ((seed + index as u64) as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Maps a draw onto its tier and score.
///
/// Bands are `(0.6, 1)` good, `(0.4, 0.6]` satisfactory, `(0.2, 0.4]` medium and `[0, 0.2]`
/// high. At the exact upper edge of a band the raw formula reaches the next band's floor, so the
/// score is clamped into the tier's own range.
pub fn classify(draw: f64) -> (SeverityTier, u8) {
    let (tier, raw) = if draw > 0.6 {
        (SeverityTier::Good, 80.0 + draw * 20.0)
    } else if draw > 0.4 {
        (SeverityTier::Satisfactory, 60.0 + (draw - 0.4) * 100.0)
    } else if draw > 0.2 {
        (SeverityTier::Medium, 40.0 + (draw - 0.2) * 100.0)
    } else {
        (SeverityTier::High, 20.0 + draw * 100.0)
    };

    let band = tier.score_range();
    let score = raw.floor().clamp(0.0, 100.0) as u8;
    (tier, score.clamp(*band.start(), *band.end()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicScorer;

impl DeterministicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores every selected principle in selection order.
    pub fn score(&self, request: &AnalysisRequest) -> Result<Vec<PrincipleScore>, ScoringError> {
        if request.selection.is_empty() {
            return Err(ScoringError::EmptySelection);
        }

        let seed = seed(request.payload.data_url_len(), &request.selection);
        let scores = request
            .selection
            .iter()
            .enumerate()
            .map(|(index, principle)| {
                let draw = seeded_draw(seed, index);
                let (tier, score) = classify(draw);
                PrincipleScore {
                    principle,
                    tier,
                    score,
                    draw,
                }
            })
            .collect();

        Ok(scores)
    }
}
