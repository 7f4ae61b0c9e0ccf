use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Pattern tables
// ---------------------------------------------------------------------------

/// A named phrase matcher. `label` is the human-readable form reported back
/// in `SignalMatch`.
#[derive(Debug)]
pub struct Pattern {
    pub label: &'static str,
    regex: Regex,
}

impl Pattern {
    fn literal(label: &'static str) -> Self {
        Self {
            label,
            regex: Regex::new(&format!("(?i){}", regex::escape(label))).unwrap(),
        }
    }

    fn whole_word(label: &'static str) -> Self {
        Self {
            label,
            regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(label))).unwrap(),
        }
    }

    fn regex(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

fn literals(labels: &[&'static str]) -> Vec<Pattern> {
    labels.iter().copied().map(Pattern::literal).collect()
}

static EXPERIENCE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    literals(&[
        "i tested",
        "in my experience",
        "my results",
        "proprietary data",
        "i found that",
        "after using",
        "i discovered",
        "original analysis",
    ])
});

static TRUST_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    literals(&[
        "author:",
        "byline",
        "credentials",
        "references",
        "cited",
        "disclaimer",
        "verified by",
        "published in",
    ])
});

static UTILITY_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    literals(&[
        "step-by-step",
        "how to",
        "tutorial",
        "actionable",
        "comprehensive",
        "guide",
        "in-depth",
    ])
});

static SPAM_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    literals(&[
        "buy now",
        "best price",
        "click here",
        "unbeatable",
        "limited time offer",
        "money back guarantee",
        "must have",
        "unbeatable deal",
        "guaranteed",
        "cash back",
        "instant access",
    ])
});

static REPETITIVE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    literals(&[
        "it is a great",
        "this is the best",
        "very great",
        "fantastic opportunity",
        "very good article",
        "is a great product",
        "the best thing",
    ])
});

static AI_DISCLOSURE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::literal("ai-generated"),
        Pattern::literal("automated content"),
        Pattern::literal("large language model"),
        Pattern::literal("edited by ai"),
        Pattern::literal("ai writer"),
        Pattern::whole_word("llm"),
        Pattern::literal("model-assisted"),
    ]
});

static FRESHNESS_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::regex("updated: <year>", r"(?i)updated:\s*\d{4}"),
        Pattern::regex("as of <year>", r"(?i)as of\s*\d{4}"),
        Pattern::literal("current as of"),
        Pattern::literal("latest research"),
        Pattern::literal("recent changes"),
    ]
});

pub const INTERNAL_LINK: &str = "[internal link";
pub const EXTERNAL_LINK: &str = "[external link";

static LINKING_PATTERNS: Lazy<Vec<Pattern>> =
    Lazy::new(|| literals(&[INTERNAL_LINK, EXTERNAL_LINK]));

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Experience,
    Trust,
    Utility,
    Spam,
    Repetitive,
    AiDisclosure,
    Freshness,
    Linking,
}

impl SignalCategory {
    pub const ALL: [Self; 8] = [
        Self::Experience,
        Self::Trust,
        Self::Utility,
        Self::Spam,
        Self::Repetitive,
        Self::AiDisclosure,
        Self::Freshness,
        Self::Linking,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Trust => "trust",
            Self::Utility => "utility",
            Self::Spam => "spam",
            Self::Repetitive => "repetitive",
            Self::AiDisclosure => "ai_disclosure",
            Self::Freshness => "freshness",
            Self::Linking => "linking",
        }
    }

    pub fn patterns(self) -> &'static [Pattern] {
        match self {
            Self::Experience => EXPERIENCE_PATTERNS.as_slice(),
            Self::Trust => TRUST_PATTERNS.as_slice(),
            Self::Utility => UTILITY_PATTERNS.as_slice(),
            Self::Spam => SPAM_PATTERNS.as_slice(),
            Self::Repetitive => REPETITIVE_PATTERNS.as_slice(),
            Self::AiDisclosure => AI_DISCLOSURE_PATTERNS.as_slice(),
            Self::Freshness => FRESHNESS_PATTERNS.as_slice(),
            Self::Linking => LINKING_PATTERNS.as_slice(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternHit {
    pub pattern: &'static str,
    pub count: usize,
}

/// Result of running one category's table over a text. `hits` only lists
/// patterns that matched, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalMatch {
    pub category: SignalCategory,
    pub count: usize,
    pub hits: Vec<PatternHit>,
}

impl SignalMatch {
    pub fn is_present(&self) -> bool {
        self.count > 0
    }

    pub fn matched_patterns(&self) -> Vec<&'static str> {
        self.hits.iter().map(|h| h.pattern).collect()
    }

    pub fn count_for(&self, pattern: &str) -> usize {
        self.hits
            .iter()
            .find(|h| h.pattern == pattern)
            .map_or(0, |h| h.count)
    }
}

/// Run every pattern of `category` over `text`. Overlapping patterns are
/// counted independently, so one phrase can score under two patterns.
pub fn detect(category: SignalCategory, text: &str) -> SignalMatch {
    let hits: Vec<PatternHit> = category
        .patterns()
        .iter()
        .filter_map(|p| {
            let count = p.count(text);
            (count > 0).then_some(PatternHit {
                pattern: p.label,
                count,
            })
        })
        .collect();
    let count = hits.iter().map(|h| h.count).sum();
    tracing::trace!(category = category.name(), count, "signal detected");
    SignalMatch {
        category,
        count,
        hits,
    }
}
