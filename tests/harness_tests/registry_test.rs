use hslex::{
    harness::{verify, ExpectedToken, Scenario, ScenarioRegistry, Verdict},
    Tokenizer, TokenizerConfig, TokenKind,
};

#[test]
fn it_checks_registered_pairs() {
    let mut registry = ScenarioRegistry::new();
    registry
        .register(
            "ident2",
            "ident2",
            vec![
                ExpectedToken::new(TokenKind::Identifier, "ident2"),
                ExpectedToken::end(),
            ],
        )
        .register(
            "if",
            "if",
            vec![
                ExpectedToken::new(TokenKind::Keyword, "if"),
                ExpectedToken::end(),
            ],
        )
        .register(
            "ifx",
            "ifx",
            vec![
                ExpectedToken::new(TokenKind::Identifier, "ifx"),
                ExpectedToken::end(),
            ],
        );

    let report = registry.run_all();
    assert!(report.all_passed(), "{report}");
    assert_eq!(report.passed(), 3);
}

#[test]
fn it_runs_custom_checks() {
    // every token of a lossless run must start where the previous one ended
    fn contiguous(scenario: &Scenario) -> Verdict {
        match Tokenizer::new(scenario.config).tokenize(&scenario.input) {
            Ok(tokens) if tokens.windows(2).all(|w| w[0].span.end == w[1].span.start) => {
                Verdict::Pass
            }
            Ok(_) => verify(scenario),
            Err(error) => Verdict::LexFailed(error),
        }
    }

    let mut registry = ScenarioRegistry::new();
    registry.register_fn(
        Scenario::new("contiguous spans", "f x = {- c -} x -- done\n", Vec::new())
            .with_config(TokenizerConfig::lossless()),
        contiguous,
    );

    let report = registry.run("contiguous spans").unwrap();
    assert!(report.passed(), "{report}");
}

#[test]
fn it_shows_the_failure_position() {
    let mut registry = ScenarioRegistry::new();
    registry.register("stray character", "x\n  § y", vec![ExpectedToken::end()]);

    let report = registry.run_all();
    let rendered = report.to_string();
    assert!(rendered.contains("input: \"x\\n  § y\""));
    assert!(rendered.contains("line 2, column 3 (offset 4)"));
}
