use std::fmt;

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use crate::tokenizer::token::{Token, TokenKind};

/// A token as written in a fixture: kind and lexeme, no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedToken {
    pub kind: TokenKind,
    #[serde(default)]
    pub lexeme: String,
}

impl ExpectedToken {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The `EndOfInput` sentinel.
    pub fn end() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    pub fn matches(&self, token: &Token<'_>) -> bool {
        self.kind == token.kind && self.lexeme == token.lexeme
    }
}

impl From<&Token<'_>> for ExpectedToken {
    fn from(token: &Token<'_>) -> Self {
        Self::new(token.kind, token.lexeme)
    }
}

// Same rendering as `Token`, so both sides of a diff line up.
impl fmt::Display for ExpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            kind => write!(f, "{}({:?})", kind, self.lexeme),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Match,
    LengthMismatch {
        actual: usize,
        expected: usize,
        /// First index, within the shorter sequence, where the tokens differ.
        first_divergence: Option<usize>,
    },
    ContentMismatch {
        index: usize,
        actual: ExpectedToken,
        expected: ExpectedToken,
    },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Match => write!(f, "match"),
            Comparison::LengthMismatch {
                actual,
                expected,
                first_divergence,
            } => {
                write!(
                    f,
                    "length mismatch: expected {expected} tokens, got {actual}"
                )?;
                match first_divergence {
                    Some(index) => write!(f, " (first divergence at index {index})"),
                    None => write!(f, " (common prefix is identical)"),
                }
            }
            Comparison::ContentMismatch {
                index,
                actual,
                expected,
            } => write!(
                f,
                "content mismatch at index {index}: expected {expected}, got {actual}"
            ),
        }
    }
}

/// Compares on `(kind, lexeme)` for every token, not just on length.
pub fn compare(actual: &[Token<'_>], expected: &[ExpectedToken]) -> Comparison {
    let first_divergence = actual
        .iter()
        .zip(expected)
        .position(|(actual, expected)| !expected.matches(actual));

    if actual.len() != expected.len() {
        return Comparison::LengthMismatch {
            actual: actual.len(),
            expected: expected.len(),
            first_divergence,
        };
    }

    match first_divergence {
        None => Comparison::Match,
        Some(index) => Comparison::ContentMismatch {
            index,
            actual: ExpectedToken::from(&actual[index]),
            expected: expected[index].clone(),
        },
    }
}

fn render_lines<T: fmt::Display>(tokens: &[T]) -> String {
    tokens.iter().map(|token| format!("{token}\n")).collect()
}

/// Line diff from the expected sequence to the actual one, one token per line.
/// Lines only in the expected sequence start with `-`, lines only in the actual
/// sequence with `+`.
pub fn render_diff(actual: &[Token<'_>], expected: &[ExpectedToken]) -> String {
    let expected_text = render_lines(expected);
    let actual_text = render_lines(actual);
    let diff = TextDiff::from_lines(&expected_text, &actual_text);

    let mut rendered = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        rendered.push(sign);
        rendered.push(' ');
        rendered.push_str(change.value());
    }
    rendered
}
