//! # Symbol Token Handling
//!
//! Operators and special characters.
//!
//! ## Operators
//!
//! Haskell operators are open-ended: any maximal run of symbol characters
//! (`! # $ % & * + . / < = > ? @ \ ^ | - ~ :`) is one [`TokenKind::Operator`].
//! Because the run is maximal, `==` is a single operator and never two `=`s.
//! Some runs are reserved ([`ReservedOp`]); they are still operators and can be
//! told apart with [`Token::reserved_op`](super::token::Token::reserved_op).
//!
//! A run made only of two or more dashes starts a line comment instead; the
//! comment parser runs first, so it never reaches this module.
//!
//! ## Special Characters
//!
//! `( ) , ; [ ] ` { }` always form one-character [`TokenKind::Special`] tokens.

use nom::{
    bytes::complete::take_while1,
    character::complete::satisfy,
    combinator::{map, value},
    error::context,
};

use super::token::{ParserResult, TokenKind};

const SYMBOLS: &str = "!#$%&*+./<=>?@\\^|-~:";
const SPECIALS: &str = "(),;[]`{}";

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

pub fn is_special(c: char) -> bool {
    SPECIALS.contains(c)
}

/// `true` for `--`, `---`, ...: such a run opens a line comment.
pub fn is_dashes(sym: &str) -> bool {
    sym.len() >= 2 && sym.bytes().all(|b| b == b'-')
}

/// Reserved operators (`reservedop` in the Haskell 2010 Report).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::EnumIter,
)]
pub enum ReservedOp {
    /// Enumeration range (`..`)
    #[strum(serialize = "..")]
    DotDot,
    /// List cons (`:`)
    #[strum(serialize = ":")]
    Colon,
    /// Type annotation (`::`)
    #[strum(serialize = "::")]
    DoubleColon,
    /// Binding (`=`)
    #[strum(serialize = "=")]
    Equals,
    /// Lambda (`\`)
    #[strum(serialize = "\\")]
    Backslash,
    /// Guard (`|`)
    #[strum(serialize = "|")]
    Pipe,
    /// Generator and bind (`<-`)
    #[strum(serialize = "<-")]
    LeftArrow,
    /// Function arrow and case alternative (`->`)
    #[strum(serialize = "->")]
    RightArrow,
    /// As-pattern (`@`)
    #[strum(serialize = "@")]
    At,
    /// Lazy pattern (`~`)
    #[strum(serialize = "~")]
    Tilde,
    /// Context arrow (`=>`)
    #[strum(serialize = "=>")]
    FatArrow,
}

pub fn is_reserved_op(sym: &str) -> bool {
    ReservedOp::try_from(sym).is_ok()
}

/// Maximal run of symbol characters, unclassified.
pub fn symbol_run(input: &str) -> ParserResult<&str> {
    take_while1(is_symbol)(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<TokenKind> {
    context("operator", value(TokenKind::Operator, symbol_run))(input)
}

#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_special(input: &str) -> ParserResult<TokenKind> {
    context(
        "special",
        map(satisfy(is_special), |_| TokenKind::Special),
    )(input)
}
