//! The four criterion scorers. Each one reads the segmented content and the
//! signal tables it needs and returns a clamped `SectionResult`; none of them
//! depends on another's output.

pub mod editorial;
pub mod integrity;
pub mod relevance;
pub mod technical;

use crate::config::TierTable;
use crate::report::{Finding, Section, SectionResult, Severity};
use crate::segment::Segments;

/// Everything a scorer may look at. `lower` is `content` lowercased once up
/// front for the phrase tables.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub content: &'a str,
    pub lower: &'a str,
    pub segments: &'a Segments,
}

/// Running tally for one section.
#[derive(Debug, Default)]
pub(crate) struct Scorecard {
    points: f64,
    findings: Vec<Finding>,
}

impl Scorecard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn starting_at(points: f64) -> Self {
        Self {
            points,
            findings: Vec::new(),
        }
    }

    pub(crate) fn points(&self) -> f64 {
        self.points
    }

    pub(crate) fn award(&mut self, points: f64, finding: Finding) {
        self.points += points;
        self.findings.push(finding);
    }

    pub(crate) fn deduct(&mut self, points: f64, finding: Finding) {
        self.points -= points;
        self.findings.push(finding);
    }

    pub(crate) fn note(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub(crate) fn reset(&mut self, finding: Finding) {
        self.points = 0.0;
        self.findings.push(finding);
    }

    /// Map a tally out of `budget` onto `max`. A zero budget leaves the
    /// points alone.
    pub(crate) fn rescale(&mut self, budget: f64, max: f64) {
        if budget > 0.0 {
            self.points = self.points * max / budget;
        }
    }

    /// Resolve `value` against `table` and award `fraction * points`, with
    /// the finding text chosen by the tier's severity.
    pub(crate) fn tiered(
        &mut self,
        table: &TierTable,
        value: f64,
        points: f64,
        text: impl FnOnce(Severity) -> String,
    ) {
        let tier = table.resolve(value);
        self.award(points * tier.fraction, Finding::new(tier.severity, text(tier.severity)));
    }

    pub(crate) fn finish(self, section: Section, max: f64) -> SectionResult {
        let raw = self.points;
        let result = SectionResult::new(raw, max, self.findings);
        tracing::debug!(
            section = section.title(),
            raw,
            score = result.score,
            max = result.max,
            "section scored"
        );
        result
    }
}
