//! I. Editorial & Authority: experience, trust, utility/depth, plus Q/A and
//! author-credential bonuses.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Scorecard, ScoringInput};
use crate::config::EditorialConfig;
use crate::report::{Finding, Section, SectionResult, Severity};
use crate::signals::{detect, SignalCategory};

/// A question answered in the next sentence: `? Then`.
static QA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\?\s+[A-Z]").unwrap());

static CREDENTIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdr\.|ph\.d\.").unwrap());

const AUTHOR_MARKER: &str = "author:";

pub fn score(input: &ScoringInput<'_>, cfg: &EditorialConfig) -> SectionResult {
    let mut card = Scorecard::new();
    let word_count = input.segments.word_count;
    let author_line = input.lower.lines().find(|l| l.contains(AUTHOR_MARKER));
    let has_author = author_line.is_some();

    // Experience
    let experience = detect(SignalCategory::Experience, input.lower);
    let n = experience.count;
    card.tiered(
        &cfg.experience_tiers,
        n as f64,
        cfg.experience_points,
        |severity| match severity {
            Severity::Good => format!("Strong experiential language detected ({n} cues)."),
            Severity::Warn => format!(
                "Some experiential cues detected ({n}). Add first-hand details, results or proprietary data."
            ),
            Severity::Missing => {
                "Significant lack of verifiable first-hand experience.".to_string()
            }
        },
    );

    // Trust. An author line satisfies it on its own.
    let trust = detect(SignalCategory::Trust, input.lower);
    let n = trust.count;
    let trust_value = if has_author { f64::INFINITY } else { n as f64 };
    card.tiered(
        &cfg.trust_tiers,
        trust_value,
        cfg.trust_points,
        |severity| match severity {
            Severity::Good => {
                format!("Cues for authorship, sourcing or credentials found ({n} cues).")
            }
            Severity::Warn | Severity::Missing => {
                "Clear authorship or external sourcing signals are weak or missing.".to_string()
            }
        },
    );

    // Utility & depth
    let cues = detect(SignalCategory::Utility, input.lower).count;
    card.tiered(
        &cfg.utility_tiers,
        word_count as f64,
        cfg.utility_points,
        |severity| match severity {
            Severity::Good => format!(
                "Substantial content depth ({word_count} words, {cues} utility cues) supports user intent."
            ),
            Severity::Warn => format!(
                "Mid-range length ({word_count} words, {cues} utility cues). Make sure completeness outweighs quantity."
            ),
            Severity::Missing => format!(
                "Content is too short ({word_count} words) and risks reading as low-utility."
            ),
        },
    );

    if cfg.enrichment {
        let qa = QA_RE.find_iter(input.content).count();
        if !cfg.qa_tiers.is_fallback(qa as f64) {
            card.tiered(&cfg.qa_tiers, qa as f64, cfg.qa_bonus_points, |severity| {
                match severity {
                    Severity::Good => format!("Question-and-answer structure detected ({qa} answered questions)."),
                    _ => format!("Light question-and-answer structure ({qa}). Answering more reader questions directly helps."),
                }
            });
        }

        // Only a credential on the byline itself counts.
        if let Some(line) = author_line {
            if CREDENTIAL_RE.is_match(line) {
                card.award(
                    cfg.author_credential_bonus,
                    Finding::good("Author byline carries a credential (Dr./Ph.D.)."),
                );
            } else {
                card.award(cfg.author_bonus, Finding::good("Author byline present."));
            }
        }
    }

    if card.points() <= 0.0 {
        card.note(Finding::missing(
            "No editorial signals at all: likely low-effort or AI-generated content without editorial oversight.",
        ));
    }

    card.finish(Section::EditorialAuthority, cfg.max)
}
