use nom::error::{ContextError, ErrorKind, ParseError};
use thiserror::Error;

use super::token::Position;

/// The kind of delimited construct a literal error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum LiteralKind {
    #[strum(serialize = "character literal")]
    Char,
    #[strum(serialize = "string literal")]
    String,
    #[strum(serialize = "block comment")]
    BlockComment,
}

#[derive(Error, Debug, Clone, PartialEq, strum::AsRefStr)]
pub enum LexError {
    #[error("Unterminated {literal} at {position}")]
    UnterminatedLiteral {
        literal: LiteralKind,
        position: Position,
    },
    #[error("Invalid character {character:?} at {position}")]
    InvalidCharacter { character: char, position: Position },
    #[error("Invalid escape sequence in {literal} at {position}")]
    InvalidEscape {
        literal: LiteralKind,
        position: Position,
    },
    #[error("Malformed UTF-8 at {position}")]
    EncodingError { position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedLiteral { position, .. }
            | LexError::InvalidCharacter { position, .. }
            | LexError::InvalidEscape { position, .. }
            | LexError::EncodingError { position } => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorKind {
    Nom(ErrorKind),
    Char(char),
    Unterminated(LiteralKind),
    InvalidEscape(LiteralKind),
    /// A raw character a quoted literal may not contain, such as a tab or NUL.
    Disallowed(LiteralKind),
}

/// Error type threaded through the nom parsers.
///
/// `nom::Err::Error` means "this category does not start here" and lets `alt` try
/// the next one. `nom::Err::Failure` is raised once a literal or comment has been
/// opened, and carries the input slice at the construct's start (or at the broken
/// escape) so the driver can compute a position from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError<'a> {
    pub input: &'a str,
    pub kind: ScanErrorKind,
    pub context: Option<&'static str>,
}

impl<'a> ScanError<'a> {
    pub fn new(input: &'a str, kind: ScanErrorKind) -> Self {
        Self {
            input,
            kind,
            context: None,
        }
    }
}

impl<'a> ParseError<&'a str> for ScanError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Self::new(input, ScanErrorKind::Nom(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: &'a str, c: char) -> Self {
        Self::new(input, ScanErrorKind::Char(c))
    }
}

impl<'a> ContextError<&'a str> for ScanError<'a> {
    fn add_context(_input: &'a str, ctx: &'static str, mut other: Self) -> Self {
        other.context.get_or_insert(ctx);
        other
    }
}

/// Aborts the current category with a non-backtracking failure.
pub(crate) fn fail<T>(input: &str, kind: ScanErrorKind) -> super::token::ParserResult<'_, T> {
    Err(nom::Err::Failure(ScanError::new(input, kind)))
}
