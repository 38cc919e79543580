use std::fmt;

use crate::tokenizer::{error::LexError, token::Tokenizer};

use super::{
    compare::{compare, render_diff, Comparison, ExpectedToken},
    scenario::{ExpectedError, Scenario},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass,
    Mismatch {
        comparison: Comparison,
        actual: Vec<ExpectedToken>,
        expected: Vec<ExpectedToken>,
        diff: String,
    },
    /// The tokenizer failed where a token stream was expected.
    LexFailed(LexError),
    /// An error was expected and either another one or none was produced.
    ErrorMismatch {
        expected: ExpectedError,
        actual: Option<LexError>,
    },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// The default check: tokenize the scenario's input with its configuration and
/// compare the result against the expected tokens or the expected error.
pub fn verify(scenario: &Scenario) -> Verdict {
    let result = Tokenizer::new(scenario.config).tokenize(&scenario.input);

    if let Some(expected) = &scenario.error {
        return match result {
            Err(error) if expected.matches(&error) => Verdict::Pass,
            Err(error) => Verdict::ErrorMismatch {
                expected: expected.clone(),
                actual: Some(error),
            },
            Ok(_) => Verdict::ErrorMismatch {
                expected: expected.clone(),
                actual: None,
            },
        };
    }

    match result {
        Ok(tokens) => match compare(&tokens, &scenario.expected) {
            Comparison::Match => Verdict::Pass,
            comparison => Verdict::Mismatch {
                comparison,
                actual: tokens.iter().map(ExpectedToken::from).collect(),
                expected: scenario.expected.clone(),
                diff: render_diff(&tokens, &scenario.expected),
            },
        },
        Err(error) => Verdict::LexFailed(error),
    }
}

type Check = Box<dyn Fn(&Scenario) -> Verdict + Send + Sync>;

/// Ordered list of named scenarios, each with the check that judges it.
/// Names are not required to be unique; [`ScenarioRegistry::run`] picks the first.
#[derive(Default)]
pub struct ScenarioRegistry {
    entries: Vec<(Scenario, Check)>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an `(input, expected)` pair checked with [`verify`].
    pub fn register<N, I>(&mut self, name: N, input: I, expected: Vec<ExpectedToken>) -> &mut Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        self.register_scenario(Scenario::new(name, input, expected))
    }

    pub fn register_scenario(&mut self, scenario: Scenario) -> &mut Self {
        self.register_fn(scenario, verify)
    }

    /// Registers a scenario judged by a custom check.
    pub fn register_fn<F>(&mut self, scenario: Scenario, check: F) -> &mut Self
    where
        F: Fn(&Scenario) -> Verdict + Send + Sync + 'static,
    {
        tracing::debug!(name = %scenario.name, "scenario registered");
        self.entries.push((scenario, Box::new(check)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(scenario, _)| scenario.name.as_str())
    }

    pub fn run(&self, name: &str) -> Option<CaseReport> {
        self.entries
            .iter()
            .find(|(scenario, _)| scenario.name == name)
            .map(|(scenario, check)| Self::run_entry(scenario, check))
    }

    pub fn run_all(&self) -> HarnessReport {
        let cases: Vec<CaseReport> = self
            .entries
            .iter()
            .map(|(scenario, check)| Self::run_entry(scenario, check))
            .collect();
        let report = HarnessReport { cases };
        tracing::info!(
            total = report.cases.len(),
            failed = report.failed(),
            "scenarios run"
        );
        report
    }

    fn run_entry(scenario: &Scenario, check: &Check) -> CaseReport {
        let verdict = check(scenario);
        if !verdict.is_pass() {
            tracing::debug!(name = %scenario.name, "scenario failed");
        }
        CaseReport {
            name: scenario.name.clone(),
            input: scenario.input.clone(),
            verdict,
        }
    }
}

impl fmt::Debug for ScenarioRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioRegistry")
            .field("scenarios", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub input: String,
    pub verdict: Verdict,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.verdict.is_pass()
    }
}

fn write_tokens(f: &mut fmt::Formatter<'_>, label: &str, tokens: &[ExpectedToken]) -> fmt::Result {
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    writeln!(f, "  {label}: [{}]", rendered.join(", "))
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return writeln!(f, "PASS {}", self.name);
        }

        writeln!(f, "FAIL {}", self.name)?;
        writeln!(f, "  input: {:?}", self.input)?;
        match &self.verdict {
            Verdict::Pass => Ok(()),
            Verdict::Mismatch {
                comparison,
                actual,
                expected,
                diff,
            } => {
                writeln!(f, "  {comparison}")?;
                write_tokens(f, "expected", expected)?;
                write_tokens(f, "actual", actual)?;
                writeln!(f, "  diff (- expected, + actual):")?;
                for line in diff.lines() {
                    writeln!(f, "    {line}")?;
                }
                Ok(())
            }
            Verdict::LexFailed(error) => writeln!(f, "  tokenizer failed: {error}"),
            Verdict::ErrorMismatch { expected, actual } => {
                writeln!(f, "  expected error: {expected}")?;
                match actual {
                    Some(error) => writeln!(f, "  actual error: {} ({error})", error.as_ref()),
                    None => writeln!(f, "  actual: tokenized without error"),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HarnessReport {
    pub cases: Vec<CaseReport>,
}

impl HarnessReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|case| !case.passed())
    }
}

impl fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            write!(f, "{case}")?;
        }
        write!(
            f,
            "{} passed, {} failed, {} total",
            self.passed(),
            self.failed(),
            self.cases.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::{TokenizerConfig, TriviaPolicy},
        tokenizer::{error::LiteralKind, token::TokenKind},
    };

    fn token(kind: TokenKind, lexeme: &str) -> ExpectedToken {
        ExpectedToken::new(kind, lexeme)
    }

    #[test]
    fn test_register_and_run_all() {
        let mut registry = ScenarioRegistry::new();
        registry
            .register(
                "keyword",
                "if",
                vec![token(TokenKind::Keyword, "if"), ExpectedToken::end()],
            )
            .register(
                "identifier prefix",
                "ifx",
                vec![token(TokenKind::Identifier, "ifx"), ExpectedToken::end()],
            );

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["keyword", "identifier prefix"]
        );

        let report = registry.run_all();
        assert!(report.all_passed());
        assert_eq!(report.to_string(), "PASS keyword\nPASS identifier prefix\n2 passed, 0 failed, 2 total");
    }

    #[test]
    fn test_mismatch_report() {
        let mut registry = ScenarioRegistry::new();
        registry.register(
            "digits stay attached",
            "ident2",
            vec![
                token(TokenKind::Identifier, "ident"),
                token(TokenKind::Number, "2"),
                ExpectedToken::end(),
            ],
        );

        let report = registry.run("digits stay attached").unwrap();
        assert!(!report.passed());
        match &report.verdict {
            Verdict::Mismatch {
                comparison, actual, ..
            } => {
                assert!(matches!(
                    comparison,
                    Comparison::LengthMismatch {
                        actual: 2,
                        expected: 3,
                        ..
                    }
                ));
                assert_eq!(actual[0], token(TokenKind::Identifier, "ident2"));
            }
            other => panic!("expected a mismatch, got {other:?}"),
        }

        let rendered = report.to_string();
        assert!(rendered.starts_with("FAIL digits stay attached\n  input: \"ident2\"\n"));
        assert!(rendered.contains("expected: [Identifier(\"ident\"), Number(\"2\"), EndOfInput]"));
        assert!(rendered.contains("actual: [Identifier(\"ident2\"), EndOfInput]"));
        assert!(rendered.contains("    + Identifier(\"ident2\")"));
    }

    #[test]
    fn test_lex_failure_is_reported() {
        let mut registry = ScenarioRegistry::new();
        registry.register("open string", "\"abc", vec![ExpectedToken::end()]);

        let report = registry.run_all();
        assert_eq!(report.failed(), 1);
        let case = report.failures().next().unwrap();
        assert!(matches!(
            case.verdict,
            Verdict::LexFailed(LexError::UnterminatedLiteral {
                literal: LiteralKind::String,
                ..
            })
        ));
        assert!(case
            .to_string()
            .contains("tokenizer failed: Unterminated string literal at line 1, column 1 (offset 0)"));
    }

    #[test]
    fn test_expected_error() {
        let mut registry = ScenarioRegistry::new();
        registry
            .register_scenario(Scenario::failing(
                "open string",
                "\"abc",
                ExpectedError::new("UnterminatedLiteral", 0),
            ))
            .register_scenario(Scenario::failing(
                "wrong offset",
                "x \"abc",
                ExpectedError::new("UnterminatedLiteral", 0),
            ))
            .register_scenario(Scenario::failing(
                "no error",
                "x",
                ExpectedError::new("InvalidCharacter", 0),
            ));

        let report = registry.run_all();
        assert!(report.cases[0].passed());
        assert!(matches!(
            report.cases[1].verdict,
            Verdict::ErrorMismatch {
                actual: Some(_),
                ..
            }
        ));
        assert!(matches!(
            report.cases[2].verdict,
            Verdict::ErrorMismatch { actual: None, .. }
        ));
        assert!(report.to_string().ends_with("1 passed, 2 failed, 3 total"));
    }

    #[test]
    fn test_scenario_config_is_applied() {
        let mut registry = ScenarioRegistry::new();
        registry.register_scenario(
            Scenario::new(
                "kept comment",
                "x -- note",
                vec![
                    token(TokenKind::Identifier, "x"),
                    token(TokenKind::LineComment, "-- note"),
                    ExpectedToken::end(),
                ],
            )
            .with_config(TokenizerConfig::default().with_comments(TriviaPolicy::Retain)),
        );
        assert!(registry.run_all().all_passed());
    }

    #[test]
    fn test_custom_check() {
        let mut registry = ScenarioRegistry::new();
        registry.register_fn(
            Scenario::new("always fails", "x", Vec::new()),
            |scenario| {
                Verdict::ErrorMismatch {
                    expected: ExpectedError::new("InvalidCharacter", scenario.input.len()),
                    actual: None,
                }
            },
        );

        let report = registry.run("always fails").unwrap();
        assert!(!report.passed());
        assert!(registry.run("missing").is_none());
    }

    #[test]
    fn test_debug_lists_names() {
        let mut registry = ScenarioRegistry::new();
        registry.register("a", "a", Vec::new());
        assert_eq!(
            format!("{registry:?}"),
            "ScenarioRegistry { scenarios: [\"a\"] }"
        );
    }
}
