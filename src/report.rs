use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::StatusBands;

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// How a single observation should be read. `Missing` means the signal is
/// absent or actively harmful, `Warn` means it is partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Good,
    Warn,
    Missing,
}

impl Severity {
    fn priority(self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Warn => 1,
            Self::Good => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub text: String,
}

impl Finding {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn good(text: impl Into<String>) -> Self {
        Self::new(Severity::Good, text)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self::new(Severity::Warn, text)
    }

    pub fn missing(text: impl Into<String>) -> Self {
        Self::new(Severity::Missing, text)
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// The four scored criteria. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    EditorialAuthority,
    TopicalRelevance,
    IntegrityCompliance,
    TechnicalFreshness,
}

impl Section {
    pub const ALL: [Self; 4] = [
        Self::EditorialAuthority,
        Self::TopicalRelevance,
        Self::IntegrityCompliance,
        Self::TechnicalFreshness,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::EditorialAuthority => "I. Editorial & Authority (E-E-A-T & Utility)",
            Self::TopicalRelevance => "II. Topical Relevance",
            Self::IntegrityCompliance => "III. Integrity & Compliance",
            Self::TechnicalFreshness => "IV. Technical, Freshness & Link Strategy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionResult {
    pub score: f64,
    pub max: f64,
    pub findings: Vec<Finding>,
}

impl SectionResult {
    /// Clamp `raw` into `[0, max]` and round to two decimals.
    pub fn new(raw: f64, max: f64, findings: Vec<Finding>) -> Self {
        let max = max.max(0.0);
        Self {
            score: round2(raw.clamp(0.0, max)),
            max,
            findings,
        }
    }

    pub fn percent(&self) -> f64 {
        if self.max > 0.0 {
            self.score / self.max * 100.0
        } else {
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Overall band over the total percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Excellent,
    Good,
    ActionRequired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub word_count: usize,
    pub readability_score: f64,
    pub readability_grade: String,
    pub keyword: Option<String>,
    pub sections: BTreeMap<Section, SectionResult>,
    pub priority_actions: Vec<Finding>,
    pub total_score: f64,
    pub max_total_score: f64,
    pub status: Status,
}

impl AnalysisReport {
    pub fn section(&self, section: Section) -> Option<&SectionResult> {
        self.sections.get(&section)
    }

    pub fn percent(&self) -> f64 {
        if self.max_total_score > 0.0 {
            self.total_score / self.max_total_score * 100.0
        } else {
            0.0
        }
    }
}

pub(crate) fn status_for(percent: f64, bands: &StatusBands) -> Status {
    if percent >= bands.excellent_min {
        Status::Excellent
    } else if percent >= bands.good_min {
        Status::Good
    } else {
        Status::ActionRequired
    }
}

/// Every non-Good finding, Missing first, section order kept within a
/// severity, first occurrence of a text wins.
pub(crate) fn priority_actions(sections: &BTreeMap<Section, SectionResult>) -> Vec<Finding> {
    let mut actions: Vec<&Finding> = sections
        .values()
        .flat_map(|s| s.findings.iter())
        .filter(|f| f.severity != Severity::Good)
        .collect();
    actions.sort_by_key(|f| f.severity.priority());

    let mut seen = HashSet::new();
    actions
        .into_iter()
        .filter(|f| seen.insert(f.text.as_str()))
        .cloned()
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
