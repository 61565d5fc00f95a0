//! Static coaching copy keyed by principle and severity tier.

mod catalog;

use super::domain::{Principle, SeverityTier};
use std::collections::BTreeMap;

/// Message variants and tuning advice for one principle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrincipleCatalog {
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub satisfactory: &'static [&'static str],
    pub good: &'static [&'static str],
    pub suggestions: &'static [&'static str],
}

impl PrincipleCatalog {
    pub const EMPTY: Self = Self {
        high: &[],
        medium: &[],
        satisfactory: &[],
        good: &[],
        suggestions: &[],
    };

    pub fn messages(&self, tier: SeverityTier) -> &'static [&'static str] {
        match tier {
            SeverityTier::High => self.high,
            SeverityTier::Medium => self.medium,
            SeverityTier::Satisfactory => self.satisfactory,
            SeverityTier::Good => self.good,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackBank {
    catalogs: BTreeMap<Principle, PrincipleCatalog>,
}

impl FeedbackBank {
    /// The full bank covering all six principles.
    pub fn standard() -> Self {
        Self::default()
            .with_catalog(Principle::Alignment, catalog::ALIGNMENT)
            .with_catalog(Principle::Balance, catalog::BALANCE)
            .with_catalog(Principle::ContrastColour, catalog::CONTRAST_COLOUR)
            .with_catalog(Principle::Hierarchy, catalog::HIERARCHY)
            .with_catalog(Principle::Readability, catalog::READABILITY)
            .with_catalog(Principle::Spacing, catalog::SPACING)
    }

    pub fn with_catalog(mut self, principle: Principle, catalog: PrincipleCatalog) -> Self {
        self.catalogs.insert(principle, catalog);
        self
    }

    /// Candidate messages; empty when the bank has no copy for the pair.
    pub fn lookup(&self, principle: Principle, tier: SeverityTier) -> &'static [&'static str] {
        self.catalogs
            .get(&principle)
            .map(|catalog| catalog.messages(tier))
            .unwrap_or(&[])
    }

    pub fn suggestions(&self, principle: Principle) -> &'static [&'static str] {
        self.catalogs
            .get(&principle)
            .map(|catalog| catalog.suggestions)
            .unwrap_or(&[])
    }

    pub fn covers(&self, principle: Principle) -> bool {
        self.catalogs.contains_key(&principle)
    }
}
