use super::bank::FeedbackBank;
use super::domain::{Principle, SeverityTier};
use super::scorer::{PrincipleScore, ScoringError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const GOOD_FALLBACK: &str = "Your design demonstrates strong understanding of this principle.";
pub const SATISFACTORY_FALLBACK: &str =
    "Your design shows functional understanding with room for refinement.";
pub const ATTENTION_FALLBACK: &str = "This principle needs attention in your design.";

/// User-facing outcome for one principle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleFinding {
    pub principle: Principle,
    pub tier: SeverityTier,
    pub score: u8,
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub findings: Vec<PrincipleFinding>,
    pub overall_score: u8,
    /// Suggestions from every high or medium finding, first occurrence wins.
    #[serde(default)]
    pub all_suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn principles(&self) -> impl Iterator<Item = Principle> + '_ {
        self.findings.iter().map(|finding| finding.principle)
    }

    pub fn finding(&self, principle: Principle) -> Option<&PrincipleFinding> {
        self.findings
            .iter()
            .find(|finding| finding.principle == principle)
    }

    pub fn needs_attention(&self) -> impl Iterator<Item = &PrincipleFinding> + '_ {
        self.findings
            .iter()
            .filter(|finding| finding.tier.needs_attention())
    }
}

fn fallback_for(tier: SeverityTier) -> &'static str {
    match tier {
        SeverityTier::Good => GOOD_FALLBACK,
        SeverityTier::Satisfactory => SATISFACTORY_FALLBACK,
        SeverityTier::Medium | SeverityTier::High => ATTENTION_FALLBACK,
    }
}

/// Mean of the scores rounded half away from zero.
pub fn overall_score(scores: &[u8]) -> Option<u8> {
    if scores.is_empty() {
        return None;
    }
    let total: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    let mean = f64::from(total) / scores.len() as f64;
    Some(mean.round() as u8)
}

/// Turns scored principles into findings, picking one message per principle with `rng`.
pub(crate) fn assemble<R>(
    bank: &FeedbackBank,
    scores: &[PrincipleScore],
    rng: &mut R,
) -> Result<AnalysisResult, ScoringError>
where
    R: Rng + ?Sized,
{
    let numeric: Vec<u8> = scores.iter().map(|entry| entry.score).collect();
    let overall_score = overall_score(&numeric).ok_or(ScoringError::EmptySelection)?;

    let mut findings = Vec::with_capacity(scores.len());
    let mut all_suggestions: Vec<String> = Vec::new();

    for entry in scores {
        let variants = bank.lookup(entry.principle, entry.tier);
        let feedback = match variants.choose(rng) {
            Some(message) => *message,
            None => {
                warn!(
                    principle = entry.principle.label(),
                    tier = ?entry.tier,
                    "feedback bank has no copy; using fallback"
                );
                fallback_for(entry.tier)
            }
        };

        let suggestions: Vec<String> = match entry.tier {
            SeverityTier::Good => Vec::new(),
            _ => bank
                .suggestions(entry.principle)
                .iter()
                .map(|suggestion| suggestion.to_string())
                .collect(),
        };

        if entry.tier.needs_attention() {
            for suggestion in &suggestions {
                if !all_suggestions.contains(suggestion) {
                    all_suggestions.push(suggestion.clone());
                }
            }
        }

        findings.push(PrincipleFinding {
            principle: entry.principle,
            tier: entry.tier,
            score: entry.score,
            feedback: feedback.to_string(),
            suggestions,
        });
    }

    Ok(AnalysisResult {
        findings,
        overall_score,
        all_suggestions,
    })
}
