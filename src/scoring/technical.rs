//! IV. Technical, Freshness & Link Strategy.

use super::{Scorecard, ScoringInput};
use crate::config::TechnicalConfig;
use crate::report::{Finding, Section, SectionResult};
use crate::segment::word_count;
use crate::signals::{detect, SignalCategory, EXTERNAL_LINK, INTERNAL_LINK};

pub fn score(input: &ScoringInput<'_>, cfg: &TechnicalConfig) -> SectionResult {
    let mut card = Scorecard::new();
    let segments = input.segments;

    // Paragraph usability
    let paragraphs = &segments.paragraphs;
    if paragraphs.len() < 2 {
        card.note(Finding::warn(
            "No paragraph breaks found; paragraph length cannot be assessed.",
        ));
    } else {
        let words: usize = paragraphs.iter().map(|p| word_count(p)).sum();
        let avg = words as f64 / paragraphs.len() as f64;
        if avg < cfg.paragraph_good_below {
            card.award(
                cfg.usability_points,
                Finding::good(format!("Paragraphs are scannable (average {avg:.0} words).")),
            );
        } else if avg < cfg.paragraph_warn_below {
            card.award(
                cfg.usability_points * cfg.usability_partial_fraction,
                Finding::warn(format!(
                    "Paragraphs run long (average {avg:.0} words). Break them up for mobile readers."
                )),
            );
        } else {
            card.note(Finding::missing(format!(
                "Walls of text (average {avg:.0} words per paragraph) hurt usability."
            )));
        }
    }

    // Headings
    let h2 = segments.headings_at(2);
    if h2 >= cfg.heading_min_h2 {
        card.award(
            cfg.heading_points,
            Finding::good(format!("Clear heading hierarchy ({h2} H2 sections).")),
        );
    } else if h2 > 0 {
        card.note(Finding::warn(format!(
            "Only {h2} H2 section(s). Use at least {} for a clearer hierarchy.",
            cfg.heading_min_h2
        )));
    } else {
        card.note(Finding::missing(
            "No H2 headings found. Structure the content with a clear heading hierarchy.",
        ));
    }

    // Freshness
    if detect(SignalCategory::Freshness, input.lower).is_present() {
        card.award(
            cfg.freshness_points,
            Finding::good("Freshness cue present (update date or recency marker)."),
        );
    } else {
        card.note(Finding::warn(
            "No freshness cue. Add an explicit \"Updated: <year>\" line.",
        ));
    }

    // Linking
    let links = detect(SignalCategory::Linking, input.lower);
    let internal = links.count_for(INTERNAL_LINK);
    let external = links.count_for(EXTERNAL_LINK);
    if internal >= cfg.internal_links_min && external >= cfg.external_links_min {
        card.award(
            cfg.linking_points,
            Finding::good(format!(
                "Link strategy in place ({internal} internal, {external} external)."
            )),
        );
    } else if internal + external > 0 {
        card.award(
            cfg.linking_points * cfg.linking_partial_fraction,
            Finding::warn(format!(
                "Partial link strategy ({internal} internal, {external} external). Aim for {}+ internal and {}+ external.",
                cfg.internal_links_min, cfg.external_links_min
            )),
        );
    } else {
        card.note(Finding::missing(
            "No internal or external link placeholders found.",
        ));
    }

    // Sub-check points are out of `budget()`, not `max`.
    card.rescale(cfg.budget(), cfg.max);
    card.finish(Section::TechnicalFreshness, cfg.max)
}
