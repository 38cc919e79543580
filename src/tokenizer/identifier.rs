//! # Names
//!
//! Variable identifiers, constructor identifiers and their qualified forms.
//!
//! ```text
//! varid   -> small { small | large | digit | ' }     (minus reserved words)
//! conid   -> large { small | large | digit | ' }
//! modid   -> { conid . } conid
//! qvarid  -> [ modid . ] varid
//! qconid  -> [ modid . ] conid
//! qvarsym -> [ modid . ] varsym
//! ```
//!
//! A qualifier only attaches when the name after the dot is itself valid, which
//! gives the Report's examples: `f.g` is three tokens, `F.g` is one qualified
//! identifier, `f..` is `f` then `..`, `F..` is the qualified operator `.`, and
//! `F.` is `F` then `.`.

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::recognize,
    error::context,
    sequence::pair,
};

use super::{
    keyword::is_reserved,
    symbol::{is_dashes, is_reserved_op, symbol_run},
    token::{ParserResult, TokenKind},
};

/// Titlecase letters (general category Lt), which count as large.
const TITLECASE: [(char, char); 10] = [
    ('\u{01C5}', '\u{01C5}'),
    ('\u{01C8}', '\u{01C8}'),
    ('\u{01CB}', '\u{01CB}'),
    ('\u{01F2}', '\u{01F2}'),
    ('\u{1F88}', '\u{1F8F}'),
    ('\u{1F98}', '\u{1F9F}'),
    ('\u{1FA8}', '\u{1FAF}'),
    ('\u{1FBC}', '\u{1FBC}'),
    ('\u{1FCC}', '\u{1FCC}'),
    ('\u{1FFC}', '\u{1FFC}'),
];

fn is_titlecase(c: char) -> bool {
    TITLECASE.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

pub fn is_small(c: char) -> bool {
    c == '_' || c.is_lowercase() || (c.is_alphabetic() && !is_large(c))
}

pub fn is_large(c: char) -> bool {
    c.is_uppercase() || is_titlecase(c)
}

pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

fn varid(input: &str) -> ParserResult<&str> {
    recognize(pair(satisfy(is_small), take_while(is_name_char)))(input)
}

fn conid(input: &str) -> ParserResult<&str> {
    recognize(pair(satisfy(is_large), take_while(is_name_char)))(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_name(input: &str) -> ParserResult<TokenKind> {
    context("name", alt((parse_qualified, parse_varid)))(input)
}

fn parse_varid(input: &str) -> ParserResult<TokenKind> {
    let (rest, id) = varid(input)?;
    if is_reserved(id) {
        return Ok((rest, TokenKind::Keyword));
    }
    Ok((rest, TokenKind::Identifier))
}

/// A constructor, optionally extended by `.Conid` segments and closed by a
/// qualified varid or operator.
fn parse_qualified(input: &str) -> ParserResult<TokenKind> {
    let (mut rest, _) = conid(input)?;

    while let Some(after_dot) = rest.strip_prefix('.') {
        if let Ok((after, _)) = conid(after_dot) {
            rest = after;
            continue;
        }
        if let Ok((after, id)) = varid(after_dot) {
            if !is_reserved(id) {
                return Ok((after, TokenKind::Identifier));
            }
        } else if let Ok((after, sym)) = symbol_run(after_dot) {
            if !is_reserved_op(sym) && !is_dashes(sym) {
                return Ok((after, TokenKind::Operator));
            }
        }
        break;
    }

    Ok((rest, TokenKind::Constructor))
}

/// Splits a qualified lexeme into its module qualifier and the unqualified name:
/// `Data.Map.insert` gives `(Some("Data.Map"), "insert")`, `Prelude..` gives
/// `(Some("Prelude"), ".")`.
pub fn split_qualified(lexeme: &str) -> (Option<&str>, &str) {
    let mut end = 0;
    let mut rest = lexeme;

    while let Ok((after, _)) = conid(rest) {
        match after.strip_prefix('.') {
            Some(next) if !next.is_empty() => {
                end = lexeme.len() - after.len();
                rest = next;
            }
            _ => break,
        }
    }

    match end {
        0 => (None, lexeme),
        end => (Some(&lexeme[..end]), &lexeme[end + 1..]),
    }
}
