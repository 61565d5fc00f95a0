use super::super::domain::{Principle, SeverityTier};
use chrono::NaiveDate;
use serde::Serialize;

/// How a tier is shown wherever it appears: badges, score bars and the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierPresentation {
    pub tier: SeverityTier,
    pub label: &'static str,
    pub palette: &'static str,
    pub colour: &'static str,
    pub verdict: &'static str,
}

static TIER_PRESENTATION: [TierPresentation; 4] = [
    TierPresentation {
        tier: SeverityTier::High,
        label: "Critical Issues",
        palette: "red",
        colour: "#ef4444",
        verdict: "The structure and clarity of this design need major improvement.",
    },
    TierPresentation {
        tier: SeverityTier::Medium,
        label: "Need Improvement",
        palette: "orange",
        colour: "#f97316",
        verdict: "Some ideas are visible, but the overall execution needs more attention.",
    },
    TierPresentation {
        tier: SeverityTier::Satisfactory,
        label: "Satisfactory",
        palette: "yellow",
        colour: "#eab308",
        verdict: "A solid foundation is present, though further refinement would improve impact.",
    },
    TierPresentation {
        tier: SeverityTier::Good,
        label: "Good/Strong",
        palette: "green",
        colour: "#10b981",
        verdict: "The overall design is strong and well-executed.",
    },
];

impl SeverityTier {
    pub fn presentation(self) -> &'static TierPresentation {
        &TIER_PRESENTATION[self.index()]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FindingView {
    pub principle: Principle,
    pub principle_label: &'static str,
    pub tier: SeverityTier,
    pub tier_label: &'static str,
    pub colour: &'static str,
    pub score: u8,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CritiqueReport {
    pub title: &'static str,
    pub generated_on: NaiveDate,
    pub media_type: String,
    pub payload_bytes: usize,
    pub overall_score: u8,
    pub overall_label: &'static str,
    pub overall_colour: &'static str,
    pub verdict: &'static str,
    pub findings: Vec<FindingView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration: Option<&'static str>,
}

impl CritiqueReport {
    pub fn needs_attention(&self) -> impl Iterator<Item = &FindingView> + '_ {
        self.findings
            .iter()
            .filter(|finding| finding.tier.needs_attention())
    }
}
