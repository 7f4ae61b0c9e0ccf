//! Scoring configuration.
//!
//! Every weight, threshold and point tier the scorers use lives here as
//! plain data. The engine only ever reads a `ScoringConfig`; a partial JSON
//! document can override any subset of fields and the rest fall back to the
//! defaults below.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::report::Severity;

pub(crate) static DEFAULT_CONFIG: Lazy<ScoringConfig> = Lazy::new(ScoringConfig::default);

// ---------------------------------------------------------------------------
// Tier tables
// ---------------------------------------------------------------------------

/// One step of a tier table: a value of at least `min` earns `fraction` of
/// the criterion's points and a finding of `severity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub min: f64,
    pub fraction: f64,
    pub severity: Severity,
}

impl Tier {
    pub const fn new(min: f64, fraction: f64, severity: Severity) -> Self {
        Self {
            min,
            fraction,
            severity,
        }
    }
}

/// Ordered "at least n" tiers, checked top to bottom. `fallback.min` is
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub tiers: Vec<Tier>,
    pub fallback: Tier,
}

impl TierTable {
    pub fn resolve(&self, value: f64) -> &Tier {
        self.tiers
            .iter()
            .find(|t| value >= t.min)
            .unwrap_or(&self.fallback)
    }

    /// True when `value` fell through to the fallback tier.
    pub fn is_fallback(&self, value: f64) -> bool {
        !self.tiers.iter().any(|t| value >= t.min)
    }

    fn validate(&self, name: &str) -> Result<()> {
        for tier in self.tiers.iter().chain(std::iter::once(&self.fallback)) {
            if !(0.0..=1.0).contains(&tier.fraction) {
                return Err(Error::InvalidConfig(format!(
                    "{name}: tier fraction {} outside [0, 1]",
                    tier.fraction
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Section configs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorialConfig {
    pub max: f64,
    pub experience_points: f64,
    pub experience_tiers: TierTable,
    pub trust_points: f64,
    pub trust_tiers: TierTable,
    pub utility_points: f64,
    /// Keyed on word count.
    pub utility_tiers: TierTable,
    /// Q/A and author-credential bonuses.
    pub enrichment: bool,
    pub qa_bonus_points: f64,
    pub qa_tiers: TierTable,
    pub author_bonus: f64,
    pub author_credential_bonus: f64,
}

impl Default for EditorialConfig {
    fn default() -> Self {
        Self {
            max: 40.0,
            experience_points: 15.0,
            experience_tiers: TierTable {
                tiers: vec![
                    Tier::new(5.0, 1.0, Severity::Good),
                    Tier::new(1.0, 0.5, Severity::Warn),
                ],
                fallback: Tier::new(0.0, 0.0, Severity::Missing),
            },
            trust_points: 15.0,
            trust_tiers: TierTable {
                tiers: vec![Tier::new(3.0, 1.0, Severity::Good)],
                fallback: Tier::new(0.0, 0.2, Severity::Missing),
            },
            utility_points: 10.0,
            utility_tiers: TierTable {
                tiers: vec![
                    Tier::new(1000.0, 1.0, Severity::Good),
                    Tier::new(300.0, 0.6, Severity::Warn),
                ],
                fallback: Tier::new(0.0, 0.1, Severity::Missing),
            },
            enrichment: true,
            qa_bonus_points: 3.0,
            qa_tiers: TierTable {
                tiers: vec![
                    Tier::new(3.0, 1.0, Severity::Good),
                    Tier::new(1.0, 0.5, Severity::Warn),
                ],
                fallback: Tier::new(0.0, 0.0, Severity::Warn),
            },
            author_bonus: 1.0,
            author_credential_bonus: 2.0,
        }
    }
}

/// Density bands in percent. Values at or below `very_low_max` and above
/// `stuffing_above` score nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityBands {
    pub very_low_max: f64,
    pub optimal_min: f64,
    pub optimal_max: f64,
    pub stuffing_above: f64,
    pub partial_fraction: f64,
}

impl Default for DensityBands {
    fn default() -> Self {
        Self {
            very_low_max: 0.5,
            optimal_min: 1.0,
            optimal_max: 3.0,
            stuffing_above: 4.0,
            partial_fraction: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    pub max: f64,
    pub density_points: f64,
    pub density: DensityBands,
    pub placement_points: f64,
    pub title_bonus: f64,
    pub conclusion_bonus: f64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            max: 20.0,
            density_points: 10.0,
            density: DensityBands::default(),
            placement_points: 10.0,
            title_bonus: 4.0,
            conclusion_bonus: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrityConfig {
    pub max: f64,
    pub spam_penalty_per_match: f64,
    pub spam_penalty_cap: f64,
    /// Total repetitive matches across the whole table.
    pub repetitive_min_total: usize,
    pub repetitive_penalty: f64,
    pub thin_content_min_words: usize,
    pub thin_content_penalty: f64,
    pub undisclosed_ai_penalty: f64,
    /// Distinct penalty events that reset the section to zero.
    pub zero_out_min_events: usize,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            max: 20.0,
            spam_penalty_per_match: 5.0,
            spam_penalty_cap: 10.0,
            repetitive_min_total: 3,
            repetitive_penalty: 5.0,
            thin_content_min_words: 300,
            thin_content_penalty: 5.0,
            undisclosed_ai_penalty: 10.0,
            zero_out_min_events: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalConfig {
    pub max: f64,
    pub usability_points: f64,
    /// Average paragraph length (words) below which usability is full.
    pub paragraph_good_below: f64,
    pub paragraph_warn_below: f64,
    pub usability_partial_fraction: f64,
    pub heading_points: f64,
    pub heading_min_h2: usize,
    pub freshness_points: f64,
    pub linking_points: f64,
    pub internal_links_min: usize,
    pub external_links_min: usize,
    pub linking_partial_fraction: f64,
}

impl TechnicalConfig {
    /// Sum of the sub-check maxima. The raw tally is scaled from this onto
    /// `max`.
    pub fn budget(&self) -> f64 {
        self.usability_points + self.heading_points + self.freshness_points + self.linking_points
    }
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            max: 20.0,
            usability_points: 10.0,
            paragraph_good_below: 80.0,
            paragraph_warn_below: 120.0,
            usability_partial_fraction: 0.5,
            heading_points: 5.0,
            heading_min_h2: 3,
            freshness_points: 5.0,
            linking_points: 10.0,
            internal_links_min: 3,
            external_links_min: 1,
            linking_partial_fraction: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// Average syllables-per-word proxy used by the readability score. Neither
/// variant is real syllabification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyllableProxy {
    Fixed { syllables_per_word: f64 },
    #[default]
    VowelRuns,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBands {
    pub excellent_min: f64,
    pub good_min: f64,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            excellent_min: 85.0,
            good_min: 60.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub editorial: EditorialConfig,
    pub relevance: RelevanceConfig,
    pub integrity: IntegrityConfig,
    pub technical: TechnicalConfig,
    pub syllable_proxy: SyllableProxy,
    pub status_bands: StatusBands,
}

impl ScoringConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let points = [
            ("editorial.max", self.editorial.max),
            ("editorial.experience_points", self.editorial.experience_points),
            ("editorial.trust_points", self.editorial.trust_points),
            ("editorial.utility_points", self.editorial.utility_points),
            ("editorial.qa_bonus_points", self.editorial.qa_bonus_points),
            ("editorial.author_bonus", self.editorial.author_bonus),
            ("editorial.author_credential_bonus", self.editorial.author_credential_bonus),
            ("relevance.max", self.relevance.max),
            ("relevance.density_points", self.relevance.density_points),
            ("relevance.placement_points", self.relevance.placement_points),
            ("relevance.title_bonus", self.relevance.title_bonus),
            ("relevance.conclusion_bonus", self.relevance.conclusion_bonus),
            ("integrity.max", self.integrity.max),
            ("integrity.spam_penalty_per_match", self.integrity.spam_penalty_per_match),
            ("integrity.spam_penalty_cap", self.integrity.spam_penalty_cap),
            ("integrity.repetitive_penalty", self.integrity.repetitive_penalty),
            ("integrity.thin_content_penalty", self.integrity.thin_content_penalty),
            ("integrity.undisclosed_ai_penalty", self.integrity.undisclosed_ai_penalty),
            ("technical.max", self.technical.max),
            ("technical.usability_points", self.technical.usability_points),
            ("technical.heading_points", self.technical.heading_points),
            ("technical.freshness_points", self.technical.freshness_points),
            ("technical.linking_points", self.technical.linking_points),
        ];
        for (name, value) in points {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let fractions = [
            ("relevance.density.partial_fraction", self.relevance.density.partial_fraction),
            ("technical.usability_partial_fraction", self.technical.usability_partial_fraction),
            ("technical.linking_partial_fraction", self.technical.linking_partial_fraction),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.integrity.zero_out_min_events == 0 || self.integrity.repetitive_min_total == 0 {
            return Err(Error::InvalidConfig(
                "integrity event thresholds must be at least 1".to_string(),
            ));
        }

        self.editorial.experience_tiers.validate("editorial.experience_tiers")?;
        self.editorial.trust_tiers.validate("editorial.trust_tiers")?;
        self.editorial.utility_tiers.validate("editorial.utility_tiers")?;
        self.editorial.qa_tiers.validate("editorial.qa_tiers")?;

        if let SyllableProxy::Fixed { syllables_per_word } = self.syllable_proxy {
            if !syllables_per_word.is_finite() || syllables_per_word < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "syllable_proxy.syllables_per_word must be non-negative, got {syllables_per_word}"
                )));
            }
        }

        if self.status_bands.good_min > self.status_bands.excellent_min {
            return Err(Error::InvalidConfig(
                "status_bands.good_min exceeds status_bands.excellent_min".to_string(),
            ));
        }
        Ok(())
    }
}
