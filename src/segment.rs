use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::SyllableProxy;
use crate::report::round2;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static PARAGRAPH_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,4})[ \t]+(.+)$").unwrap());

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

static SENTENCE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static VOWEL_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Structural view of a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segments {
    pub paragraphs: Vec<String>,
    pub intro: String,
    pub body: String,
    pub conclusion: String,
    pub headings: Vec<Heading>,
    pub word_count: usize,
    pub sentence_count: usize,
}

impl Segments {
    pub fn headings_at(&self, level: u8) -> usize {
        self.headings.iter().filter(|h| h.level == level).count()
    }
}

pub fn word_count(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

pub fn sentence_count(text: &str) -> usize {
    SENTENCE_BREAK_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn headings(text: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let marks = caps.get(1)?.as_str();
            let text = caps.get(2)?.as_str().trim();
            if text.is_empty() {
                return None;
            }
            Some(Heading {
                level: u8::try_from(marks.len()).unwrap_or(u8::MAX),
                text: text.to_string(),
            })
        })
        .collect()
}

pub fn segment(content: &str) -> Segments {
    let paragraphs: Vec<String> = PARAGRAPH_BREAK_RE
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    let word_count = word_count(content);
    let sentence_count = sentence_count(content);
    let headings = headings(content);

    let (intro, body, conclusion) = match paragraphs.as_slice() {
        [] => (String::new(), String::new(), String::new()),
        [only] => (only.clone(), String::new(), String::new()),
        [first, last] => (first.clone(), String::new(), last.clone()),
        [first, middle @ .., last] => (first.clone(), middle.join("\n\n"), last.clone()),
    };

    Segments {
        paragraphs,
        intro,
        body,
        conclusion,
        headings,
        word_count,
        sentence_count,
    }
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

pub const NEUTRAL_READABILITY: f64 = 100.0;
pub const NEUTRAL_GRADE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    pub score: f64,
    pub grade: &'static str,
}

/// Flesch reading ease over a syllable proxy, clamped to `[0, 100]`.
pub fn readability(content: &str, segments: &Segments, proxy: SyllableProxy) -> Readability {
    if segments.word_count == 0 || segments.sentence_count == 0 {
        return Readability {
            score: NEUTRAL_READABILITY,
            grade: NEUTRAL_GRADE,
        };
    }

    let words = segments.word_count as f64;
    let asl = words / segments.sentence_count as f64;
    let asw = match proxy {
        SyllableProxy::Fixed { syllables_per_word } => syllables_per_word,
        SyllableProxy::VowelRuns => {
            let lower = content.to_lowercase();
            let runs: usize = WORD_RE
                .find_iter(&lower)
                .map(|w| VOWEL_RUN_RE.find_iter(w.as_str()).count())
                .sum();
            runs as f64 / words
        }
    };

    let score = round2((206.835 - 1.015 * asl - 84.6 * asw).clamp(0.0, 100.0));
    Readability {
        score,
        grade: grade_for(score),
    }
}

pub fn grade_for(score: f64) -> &'static str {
    if score >= 80.0 {
        "Very Easy"
    } else if score >= 70.0 {
        "Easy"
    } else if score >= 60.0 {
        "Fairly Easy"
    } else {
        "Complex"
    }
}
