//! Editorial-quality scoring for drafts.
//!
//! `analyze` segments a piece of content, runs fixed phrase tables over it
//! and scores four criteria (editorial authority, topical relevance,
//! integrity/compliance, technical structure). The result is a plain
//! `AnalysisReport` with per-section scores, tagged findings and a ranked
//! list of things to fix.

pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod segment;
pub mod signals;

use std::collections::BTreeMap;

pub use config::{ScoringConfig, SyllableProxy, Tier, TierTable};
pub use error::{Error, Result};
pub use report::{AnalysisReport, Finding, Section, SectionResult, Severity, Status};
pub use segment::{readability, segment, Heading, Readability, Segments};
pub use signals::{detect, SignalCategory, SignalMatch};

use report::{priority_actions, round2, status_for};
use scoring::ScoringInput;

/// Score `content` with the default configuration. An empty `keyword` skips
/// the relevance checks.
pub fn analyze(content: &str, keyword: &str) -> AnalysisReport {
    analyze_with(&config::DEFAULT_CONFIG, content, keyword)
}

pub fn analyze_with(config: &ScoringConfig, content: &str, keyword: &str) -> AnalysisReport {
    let segments = segment(content);
    let lower = content.to_lowercase();
    let readability = readability(content, &segments, config.syllable_proxy);

    let input = ScoringInput {
        content,
        lower: &lower,
        segments: &segments,
    };

    let mut sections = BTreeMap::new();
    sections.insert(
        Section::EditorialAuthority,
        scoring::editorial::score(&input, &config.editorial),
    );
    sections.insert(
        Section::TopicalRelevance,
        scoring::relevance::score(&input, keyword, &config.relevance),
    );
    sections.insert(
        Section::IntegrityCompliance,
        scoring::integrity::score(&input, &config.integrity),
    );
    sections.insert(
        Section::TechnicalFreshness,
        scoring::technical::score(&input, &config.technical),
    );

    let total_score = round2(sections.values().map(|s| s.score).sum());
    let max_total_score: f64 = sections.values().map(|s| s.max).sum();
    let priority_actions = priority_actions(&sections);

    let keyword = keyword.trim();
    let mut report = AnalysisReport {
        word_count: segments.word_count,
        readability_score: readability.score,
        readability_grade: readability.grade.to_string(),
        keyword: (!keyword.is_empty()).then(|| keyword.to_string()),
        sections,
        priority_actions,
        total_score,
        max_total_score,
        status: Status::ActionRequired,
    };
    report.status = status_for(report.percent(), &config.status_bands);

    tracing::debug!(
        word_count = report.word_count,
        total_score,
        max_total_score,
        status = ?report.status,
        actions = report.priority_actions.len(),
        "analysis complete"
    );
    report
}
