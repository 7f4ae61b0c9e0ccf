use rank_guard::{analyze, analyze_with, AnalysisReport, ScoringConfig, Section, Severity};

const FILLER: &str = "The committee reviewed each proposal carefully before the vote.";

/// 360 words of neutral prose, comfortably above the thin-content floor.
fn clean_body() -> String {
    vec![FILLER; 40].join(" ")
}

fn integrity(report: &AnalysisReport) -> (f64, Vec<(Severity, String)>) {
    let section = report
        .section(Section::IntegrityCompliance)
        .expect("integrity section present");
    (
        section.score,
        section
            .findings
            .iter()
            .map(|f| (f.severity, f.text.clone()))
            .collect(),
    )
}

fn has_finding(findings: &[(Severity, String)], needle: &str) -> bool {
    findings.iter().any(|(_, text)| text.contains(needle))
}

#[test]
fn clean_undisclosed_content_is_not_penalized() {
    let (score, findings) = integrity(&analyze(&clean_body(), ""));
    assert_eq!(score, 20.0);
    assert!(findings
        .iter()
        .any(|(s, t)| *s == Severity::Missing && t.contains("not disclosed")));
    assert!(!has_finding(&findings, "CRITICAL"));
}

#[test]
fn spam_without_disclosure_escalates() {
    let text = format!("{} Click here.", clean_body());
    let (score, findings) = integrity(&analyze(&text, ""));
    // 20 - 5 spam - 10 undisclosed escalation
    assert_eq!(score, 5.0);
    assert!(has_finding(&findings, "CRITICAL"));
    assert!(!has_finding(&findings, "TOTAL FAILURE"));
}

#[test]
fn spam_with_disclosure_skips_escalation() {
    let text = format!("{} Click here. This draft was edited by AI.", clean_body());
    let (score, findings) = integrity(&analyze(&text, ""));
    assert_eq!(score, 15.0);
    assert!(!has_finding(&findings, "CRITICAL"));
    assert!(findings
        .iter()
        .any(|(s, t)| *s == Severity::Good && t.contains("disclosure")));
}

#[test]
fn spam_penalty_is_capped() {
    let text = format!(
        "{} Buy now. Buy now. Buy now. Buy now. Written with an LLM.",
        clean_body()
    );
    let (score, findings) = integrity(&analyze(&text, ""));
    assert_eq!(score, 10.0);
    assert!(has_finding(&findings, "4 instances"));
}

#[test]
fn spam_plus_thin_content_zeroes_out() {
    let (score, findings) = integrity(&analyze("Buy now! Click here for the best price.", ""));
    assert_eq!(score, 0.0);
    assert!(has_finding(&findings, "TOTAL FAILURE"));
    assert!(has_finding(&findings, "Thin content"));
}

#[test]
fn zero_out_ignores_disclosure() {
    // disclosed, so 20 - 5 - 5 = 10 before the override
    let text = "Buy now. This post is AI-generated.";
    let (score, findings) = integrity(&analyze(text, ""));
    assert_eq!(score, 0.0);
    assert!(has_finding(&findings, "TOTAL FAILURE"));
    assert!(!has_finding(&findings, "CRITICAL"));
}

#[test]
fn spam_plus_repetition_zeroes_out_long_content() {
    let text = format!(
        "{} It is a great tool. It is a great tool. It is a great tool. Buy now.",
        clean_body()
    );
    let (score, findings) = integrity(&analyze(&text, ""));
    assert_eq!(score, 0.0);
    assert!(has_finding(&findings, "repetitive"));
    assert!(has_finding(&findings, "TOTAL FAILURE"));
}

#[test]
fn two_repeats_are_below_the_repetition_threshold() {
    let text = format!(
        "{} It is a great tool. It is a great tool. Disclosure: AI-generated draft.",
        clean_body()
    );
    let (score, findings) = integrity(&analyze(&text, ""));
    assert_eq!(score, 20.0);
    assert!(!has_finding(&findings, "repetitive"));
}

#[test]
fn thin_content_alone_escalates_without_disclosure() {
    let (score, findings) = integrity(&analyze("A short note about tea.", ""));
    // 20 - 5 thin - 10 undisclosed escalation
    assert_eq!(score, 5.0);
    assert!(has_finding(&findings, "CRITICAL"));
}

#[test]
fn event_threshold_is_configurable() {
    let config =
        ScoringConfig::from_json_str(r#"{"integrity": {"zero_out_min_events": 3}}"#).unwrap();
    let text = "Buy now. This post is AI-generated.";
    let (score, findings) = integrity(&analyze_with(&config, text, ""));
    assert_eq!(score, 10.0);
    assert!(!has_finding(&findings, "TOTAL FAILURE"));
}
