//! II. Topical Relevance. Relevance here is literal keyword density and
//! placement, not semantics.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Scorecard, ScoringInput};
use crate::config::RelevanceConfig;
use crate::report::{Finding, Section, SectionResult};

static TITLE_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

/// Whole-word occurrences of `keyword` in `lower`. Both must already be
/// lowercased.
pub fn keyword_occurrences(lower: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    match Regex::new(&format!(r"\b{}\b", regex::escape(keyword))) {
        Ok(re) => re.find_iter(lower).count(),
        Err(err) => {
            tracing::warn!(%err, "keyword pattern rejected, falling back to substring count");
            lower.matches(keyword).count()
        }
    }
}

/// Keyword occurrences per hundred words; zero when there are no words.
pub fn keyword_density(occurrences: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        0.0
    } else {
        occurrences as f64 / word_count as f64 * 100.0
    }
}

pub fn score(input: &ScoringInput<'_>, keyword: &str, cfg: &RelevanceConfig) -> SectionResult {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return SectionResult::new(
            0.0,
            cfg.max,
            vec![Finding::warn(
                "Target keyword missing, relevance analysis skipped.",
            )],
        );
    }

    let mut card = Scorecard::new();
    let segments = input.segments;

    // Density
    let occurrences = keyword_occurrences(input.lower, &keyword);
    let density = keyword_density(occurrences, segments.word_count);
    let bands = &cfg.density;
    if density >= bands.optimal_min && density <= bands.optimal_max {
        card.award(
            cfg.density_points,
            Finding::good(format!(
                "Optimal keyword density ({density:.2}%). Target: {:.0}%-{:.0}%.",
                bands.optimal_min, bands.optimal_max
            )),
        );
    } else if density > bands.stuffing_above {
        card.note(Finding::missing(format!(
            "High keyword density ({density:.2}%) suggests keyword stuffing or over-optimization."
        )));
    } else if density <= bands.very_low_max {
        card.note(Finding::missing(format!(
            "Very low keyword density ({density:.2}%): the content lacks focus on the target topic."
        )));
    } else {
        card.award(
            cfg.density_points * bands.partial_fraction,
            Finding::warn(format!(
                "Sub-optimal keyword density ({density:.2}%). Review for under- or slight over-optimization."
            )),
        );
    }

    // Placement
    if segments.intro.to_lowercase().contains(&keyword) {
        card.award(
            cfg.placement_points,
            Finding::good("Keyword appears in the introduction."),
        );
    } else {
        card.note(Finding::missing(
            "Keyword not found in the introduction; state the topic up front.",
        ));
    }

    let in_title = TITLE_LINE_RE
        .captures_iter(input.lower)
        .filter_map(|caps| caps.get(1))
        .any(|m| m.as_str().contains(&keyword));
    if in_title {
        card.award(cfg.title_bonus, Finding::good("Keyword appears in the title."));
    }

    if segments.conclusion.to_lowercase().contains(&keyword) {
        card.award(
            cfg.conclusion_bonus,
            Finding::good("Keyword is reinforced in the conclusion."),
        );
    }

    tracing::debug!(occurrences, density, "keyword density");
    card.finish(Section::TopicalRelevance, cfg.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_respect_word_boundaries() {
        assert_eq!(keyword_occurrences("rust and rusty rust.", "rust"), 2);
        assert_eq!(keyword_occurrences("air fryer, air fryers", "air fryer"), 1);
        assert_eq!(keyword_occurrences("anything", ""), 0);
    }

    #[test]
    fn escapes_regex_metacharacters() {
        assert_eq!(keyword_occurrences("what is a.b? a.b is a.b", "a.b"), 3);
        assert_eq!(keyword_occurrences("axb", "a.b"), 0);
    }

    #[test]
    fn density_is_zero_without_words() {
        assert_eq!(keyword_density(3, 0), 0.0);
        assert!((keyword_density(2, 100) - 2.0).abs() < f64::EPSILON);
    }
}
