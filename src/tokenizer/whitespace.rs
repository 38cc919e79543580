//! # Whitespace Token Handling
//!
//! A maximal run of whitespace (spaces, tabs, line breaks, vertical tabs, form
//! feeds and other Unicode whitespace) becomes one [`TokenKind::Whitespace`] token.
//! Whether that token reaches the output is decided by the tokenizer's
//! [`TriviaPolicy`](crate::TriviaPolicy); line and column tracking happens in the
//! driver either way.

use nom::{bytes::complete::take_while1, combinator::value, error::context};

use super::token::{ParserResult, TokenKind};

/// Parses whitespace from the input string.
///
/// # Examples
///
/// ```
/// # use hslex::tokenizer::whitespace::parse_whitespace;
/// # use hslex::tokenizer::token::TokenKind;
/// let input = " \t\n  hello";
/// let (rest, token) = parse_whitespace(input).unwrap();
/// assert_eq!(token, TokenKind::Whitespace);
/// assert_eq!(rest, "hello");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_whitespace(input: &str) -> ParserResult<TokenKind> {
    context(
        "whitespace expected",
        value(TokenKind::Whitespace, take_while1(char::is_whitespace)),
    )(input)
}
