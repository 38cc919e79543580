//! # Comment Token Handling
//!
//! ## Comment Types
//!
//! * **Line Comments**: two or more dashes up to the end of the line, as long as
//!   the dashes are not part of a longer operator (`-->` is an operator).
//! * **Block Comments**: `{-` ... `-}`. Block comments nest, so
//!   `{- a {- b -} c -}` is one comment.
//!
//! Pragmas (`{-# ... #-}`) are lexically block comments and are treated as such.
//!
//! ## Parsing Strategy
//!
//! The comment parser runs before the operator and special-character parsers,
//! since `--` and `{-` would otherwise be taken by them.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::satisfy,
    combinator::{not, peek, recognize, value},
    error::context,
    sequence::tuple,
};

use super::{
    error::{fail, LiteralKind, ScanErrorKind},
    symbol::is_symbol,
    token::{ParserResult, TokenKind},
};

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<TokenKind> {
    context(
        "line comment",
        value(
            TokenKind::LineComment,
            recognize(tuple((
                tag("-"),
                take_while1(|c| c == '-'),
                not(peek(satisfy(is_symbol))),
                take_while(|c| c != '\n' && c != '\r'),
            ))),
        ),
    )(input)
}

/// Parses a nested block comment. Once `{-` has been seen, reaching the end of
/// input is a failure rather than a mismatch.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_block_comment(input: &str) -> ParserResult<TokenKind> {
    let (mut rest, _) = context("block comment", tag("{-"))(input)?;
    let mut depth = 1usize;

    while depth > 0 {
        if let Some(after) = rest.strip_prefix("-}") {
            depth -= 1;
            rest = after;
        } else if let Some(after) = rest.strip_prefix("{-") {
            depth += 1;
            rest = after;
        } else {
            let mut chars = rest.chars();
            if chars.next().is_none() {
                return fail(
                    input,
                    ScanErrorKind::Unterminated(LiteralKind::BlockComment),
                );
            }
            rest = chars.as_str();
        }
    }

    Ok((rest, TokenKind::BlockComment))
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_comment(input: &str) -> ParserResult<TokenKind> {
    context("comment", alt((parse_block_comment, parse_line_comment)))(input)
}
