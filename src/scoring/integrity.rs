//! III. Integrity & Compliance, the penalty engine.
//!
//! The section starts at its maximum and loses points for spam language,
//! formulaic repetition and thin content, in that order. Each of those is one
//! penalty event. Undisclosed AI use costs points only when an event already
//! fired, and enough events reset the section to zero regardless of the
//! running total.

use tracing::debug;

use super::{Scorecard, ScoringInput};
use crate::config::IntegrityConfig;
use crate::report::{Finding, Section, SectionResult};
use crate::signals::{detect, SignalCategory};

pub fn score(input: &ScoringInput<'_>, cfg: &IntegrityConfig) -> SectionResult {
    let mut card = Scorecard::starting_at(cfg.max);
    let mut events = 0usize;
    let word_count = input.segments.word_count;

    // 1. Spam
    let spam = detect(SignalCategory::Spam, input.lower);
    if spam.is_present() {
        let penalty = (spam.count as f64 * cfg.spam_penalty_per_match).min(cfg.spam_penalty_cap);
        card.deduct(
            penalty,
            Finding::missing(format!(
                "Commercial/spammy language detected ({} instances: {}). Review overly promotional wording and affiliate disclosures.",
                spam.count,
                spam.matched_patterns().join(", ")
            )),
        );
        events += 1;
        debug!(count = spam.count, penalty, "spam penalty");
    }

    // 2. Repetition
    let repetitive = detect(SignalCategory::Repetitive, input.lower);
    if repetitive.count >= cfg.repetitive_min_total {
        card.deduct(
            cfg.repetitive_penalty,
            Finding::missing(format!(
                "High frequency of repetitive, formulaic phrasing ({} matches). Signals low editorial effort or mass production.",
                repetitive.count
            )),
        );
        events += 1;
        debug!(count = repetitive.count, "repetition penalty");
    }

    // 3. Thin content
    if word_count < cfg.thin_content_min_words {
        card.deduct(
            cfg.thin_content_penalty,
            Finding::missing(format!(
                "Thin content ({word_count} words, minimum {}).",
                cfg.thin_content_min_words
            )),
        );
        events += 1;
        debug!(word_count, "thin content penalty");
    }

    // 4. Transparency. Not an event of its own.
    if detect(SignalCategory::AiDisclosure, input.lower).is_present() {
        card.note(Finding::good(
            "Explicit AI-use disclosure detected; automation is transparent.",
        ));
    } else {
        card.note(Finding::missing(
            "AI use is not disclosed. If language models were used, state the role of automation.",
        ));
        if events > 0 {
            card.deduct(
                cfg.undisclosed_ai_penalty,
                Finding::missing(
                    "CRITICAL: undisclosed AI use combined with other quality issues elevates spam-policy risk.",
                ),
            );
            debug!(events, "undisclosed AI escalation");
        }
    }

    // 5. Zero-out
    if events >= cfg.zero_out_min_events {
        card.reset(Finding::missing(format!(
            "TOTAL FAILURE: {events} independent compliance issues detected. Score reset to 0/{} under strict compliance policy.",
            cfg.max
        )));
        debug!(events, "integrity zero-out");
    }

    card.finish(Section::IntegrityCompliance, cfg.max)
}
