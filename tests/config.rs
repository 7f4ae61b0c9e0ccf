use std::io::Write;

use rank_guard::{analyze, analyze_with, Error, ScoringConfig, Section, Severity, SyllableProxy};

#[test]
fn default_config_totals_one_hundred() {
    let config = ScoringConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(analyze_with(&config, "", "").max_total_score, 100.0);
    assert_eq!(config.syllable_proxy, SyllableProxy::VowelRuns);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config =
        ScoringConfig::from_json_str(r#"{"integrity": {"thin_content_min_words": 0}}"#).unwrap();
    assert_eq!(config.integrity.thin_content_min_words, 0);
    assert_eq!(config.integrity.max, 20.0);
    assert_eq!(config.editorial, ScoringConfig::default().editorial);

    let report = analyze_with(&config, "A short note about tea.", "");
    assert_eq!(
        report.section(Section::IntegrityCompliance).unwrap().score,
        20.0
    );
}

#[test]
fn fixed_syllable_proxy_round_trips_through_json() {
    let config = ScoringConfig::from_json_str(
        r#"{"syllable_proxy": {"kind": "fixed", "syllables_per_word": 1.5}}"#,
    )
    .unwrap();
    assert_eq!(
        config.syllable_proxy,
        SyllableProxy::Fixed {
            syllables_per_word: 1.5
        }
    );
    let report = analyze_with(&config, "The cat sat on the mat.", "");
    assert_eq!(report.readability_grade, "Easy");
}

#[test]
fn rejects_negative_points() {
    let err = ScoringConfig::from_json_str(r#"{"technical": {"max": -1}}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)), "{err}");
}

#[test]
fn rejects_tier_fraction_above_one() {
    let json = r#"{"editorial": {"trust_tiers": {
        "tiers": [{"min": 3, "fraction": 1.5, "severity": "Good"}],
        "fallback": {"min": 0, "fraction": 0.2, "severity": "Missing"}
    }}}"#;
    let err = ScoringConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)), "{err}");
}

#[test]
fn rejects_zero_event_threshold() {
    let err =
        ScoringConfig::from_json_str(r#"{"integrity": {"zero_out_min_events": 0}}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ScoringConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"status_bands": {{"excellent_min": 90, "good_min": 50}}}}"#).unwrap();
    let config = ScoringConfig::load(file.path()).unwrap();
    assert_eq!(config.status_bands.excellent_min, 90.0);
    assert_eq!(config.status_bands.good_min, 50.0);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = ScoringConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn zero_editorial_signal_is_flagged() {
    let config = ScoringConfig::from_json_str(
        r#"{"editorial": {
            "trust_tiers": {
                "tiers": [{"min": 3, "fraction": 1.0, "severity": "Good"}],
                "fallback": {"min": 0, "fraction": 0.0, "severity": "Missing"}
            },
            "utility_tiers": {
                "tiers": [{"min": 1000, "fraction": 1.0, "severity": "Good"}],
                "fallback": {"min": 0, "fraction": 0.0, "severity": "Missing"}
            }
        }}"#,
    )
    .unwrap();
    let report = analyze_with(&config, "Nothing much here.", "");
    let editorial = report.section(Section::EditorialAuthority).unwrap();
    assert_eq!(editorial.score, 0.0);
    assert!(editorial
        .findings
        .iter()
        .any(|f| f.severity == Severity::Missing && f.text.contains("editorial oversight")));

    // the default fallbacks always leave some points on the table
    let default_report = analyze("Nothing much here.", "");
    assert!(default_report
        .section(Section::EditorialAuthority)
        .unwrap()
        .findings
        .iter()
        .all(|f| !f.text.contains("editorial oversight")));
}
