use hslex::harness::{Scenario, ScenarioRegistry, Verdict};
use std::io::Write;

use super::fixture_path;

#[test]
fn it_runs_the_fixture_file() {
    let scenarios = Scenario::load_all(&fixture_path("scenarios.json")).unwrap();
    assert!(scenarios.len() >= 10);

    let mut registry = ScenarioRegistry::new();
    for scenario in scenarios {
        registry.register_scenario(scenario);
    }

    let report = registry.run_all();
    assert!(report.all_passed(), "{report}");
    assert_eq!(report.failed(), 0);
}

#[test]
fn it_reports_a_broken_fixture() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "name": "operator split in two",
                "input": "a == b",
                "expected": [
                    {{"kind": "Identifier", "lexeme": "a"}},
                    {{"kind": "Operator", "lexeme": "="}},
                    {{"kind": "Operator", "lexeme": "="}},
                    {{"kind": "Identifier", "lexeme": "b"}},
                    {{"kind": "EndOfInput"}}
                ]
            }}
        ]"#
    )
    .unwrap();

    let mut registry = ScenarioRegistry::new();
    for scenario in Scenario::load_all(file.path()).unwrap() {
        registry.register_scenario(scenario);
    }

    let report = registry.run_all();
    assert!(!report.all_passed());

    let case = &report.cases[0];
    assert!(matches!(case.verdict, Verdict::Mismatch { .. }));

    let rendered = report.to_string();
    assert!(rendered.contains("FAIL operator split in two"));
    assert!(rendered.contains("length mismatch: expected 5 tokens, got 4 (first divergence at index 1)"));
    assert!(rendered.contains("+ Operator(\"==\")"));
    assert!(rendered.ends_with("0 passed, 1 failed, 1 total"));
}

#[test]
fn it_rejects_malformed_fixtures() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name": "no input"}}]"#).unwrap();

    assert!(matches!(
        Scenario::load_all(file.path()),
        Err(hslex::Error::Json(_))
    ));
}
