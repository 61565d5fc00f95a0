use super::super::assembler::{AnalysisResult, PrincipleFinding};
use super::super::domain::{SeverityTier, UploadSummary};
use super::views::{CritiqueReport, FindingView};
use chrono::NaiveDate;
use std::fmt;

pub const REPORT_TITLE: &str = "DesignLens - Design Analysis Report";

const CELEBRATION: &str = "Excellent work! Your design demonstrates strong understanding of all \
selected design principles. Keep up the great work!";

impl PrincipleFinding {
    pub fn to_view(&self) -> FindingView {
        let presentation = self.tier.presentation();
        FindingView {
            principle: self.principle,
            principle_label: self.principle.label(),
            tier: self.tier,
            tier_label: presentation.label,
            colour: presentation.colour,
            score: self.score,
            feedback: self.feedback.clone(),
            suggestions: self.suggestions.clone(),
        }
    }
}

impl CritiqueReport {
    /// Builds the report shown after a run. Findings keep selection order.
    pub fn build(
        result: &AnalysisResult,
        upload: &UploadSummary,
        generated_on: NaiveDate,
    ) -> Self {
        let overall = SeverityTier::from_score(result.overall_score).presentation();
        let findings: Vec<FindingView> =
            result.findings.iter().map(PrincipleFinding::to_view).collect();
        let celebration = if result.needs_attention().next().is_none() {
            Some(CELEBRATION)
        } else {
            None
        };

        Self {
            title: REPORT_TITLE,
            generated_on,
            media_type: upload.media_type.clone(),
            payload_bytes: upload.bytes,
            overall_score: result.overall_score,
            overall_label: overall.label,
            overall_colour: overall.colour,
            verdict: overall.verdict,
            findings,
            key_suggestions: result.all_suggestions.clone(),
            celebration,
        }
    }

    /// Long-form date used on the printed report, e.g. "October 16, 2026".
    pub fn generated_on_label(&self) -> String {
        self.generated_on.format("%B %-d, %Y").to_string()
    }

    /// Plain-text rendering for terminals and log attachments.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CritiqueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Generated on {}", self.generated_on_label())?;
        writeln!(f, "Design: {} ({} bytes)", self.media_type, self.payload_bytes)?;
        writeln!(f)?;
        writeln!(
            f,
            "Overall score: {}/100 ({})",
            self.overall_score, self.overall_label
        )?;
        writeln!(f, "{}", self.verdict)?;

        for finding in &self.findings {
            writeln!(f)?;
            writeln!(
                f,
                "{}: {}/100 [{}]",
                finding.principle_label, finding.score, finding.tier_label
            )?;
            writeln!(f, "  {}", finding.feedback)?;
            for suggestion in &finding.suggestions {
                writeln!(f, "  - {suggestion}")?;
            }
        }

        if !self.key_suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Key suggestions")?;
            for (position, suggestion) in self.key_suggestions.iter().enumerate() {
                writeln!(f, "  {}. {suggestion}", position + 1)?;
            }
        }

        if let Some(note) = self.celebration {
            writeln!(f)?;
            writeln!(f, "{note}")?;
        }

        Ok(())
    }
}
