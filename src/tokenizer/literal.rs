use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, hex_digit1, oct_digit1, one_of},
    combinator::{opt, recognize, value},
    error::context,
    sequence::{pair, tuple},
};

use super::{
    error::{fail, LiteralKind, ScanError, ScanErrorKind},
    escape::{parse_escape, Escape},
    token::{ParserResult, TokenKind},
};

/// Decoded value of a `Number` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Integer(u128),
    Float(f64),
}

/// Characters a quoted literal may contain verbatim: graphic characters and
/// the plain space. Tabs, other whitespace and control characters must be
/// written as escapes.
pub fn is_literal_char(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace())
}

fn hexadecimal(input: &str) -> ParserResult<&str> {
    recognize(pair(alt((tag("0x"), tag("0X"))), hex_digit1))(input)
}

fn octal(input: &str) -> ParserResult<&str> {
    recognize(pair(alt((tag("0o"), tag("0O"))), oct_digit1))(input)
}

fn exponent(input: &str) -> ParserResult<&str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn float(input: &str) -> ParserResult<&str> {
    recognize(alt((
        recognize(tuple((digit1, char('.'), digit1, opt(exponent)))),
        recognize(pair(digit1, exponent)),
    )))(input)
}

#[tracing::instrument(level = "trace", skip(input))]
fn parse_number(input: &str) -> ParserResult<TokenKind> {
    context(
        "number",
        value(TokenKind::Number, alt((hexadecimal, octal, float, digit1))),
    )(input)
}

#[tracing::instrument(level = "trace", skip(input))]
fn parse_char_literal(input: &str) -> ParserResult<TokenKind> {
    let (body, _) = char('\'')(input)?;

    let mut chars = body.chars();
    let rest = match chars.next() {
        None | Some('\n' | '\r') => {
            return fail(input, ScanErrorKind::Unterminated(LiteralKind::Char))
        }
        // `''` is not a character literal; leave it to the other categories
        Some('\'') => {
            return Err(nom::Err::Error(ScanError::new(
                input,
                ScanErrorKind::Char('\''),
            )))
        }
        Some('\\') => match parse_escape(body) {
            Ok((rest, Escape::Char(_))) => rest,
            Ok(_) | Err(nom::Err::Error(_)) if chars.as_str().is_empty() => {
                return fail(input, ScanErrorKind::Unterminated(LiteralKind::Char))
            }
            Ok(_) | Err(nom::Err::Error(_)) => {
                return fail(body, ScanErrorKind::InvalidEscape(LiteralKind::Char))
            }
            Err(e) => return Err(e),
        },
        Some(c) if !is_literal_char(c) => {
            return fail(body, ScanErrorKind::Disallowed(LiteralKind::Char))
        }
        Some(_) => chars.as_str(),
    };

    match rest.strip_prefix('\'') {
        Some(rest) => Ok((rest, TokenKind::Char)),
        None => fail(input, ScanErrorKind::Unterminated(LiteralKind::Char)),
    }
}

#[tracing::instrument(level = "trace", skip(input))]
fn parse_string_literal(input: &str) -> ParserResult<TokenKind> {
    let (mut rest, _) = char('"')(input)?;

    loop {
        let mut chars = rest.chars();
        match chars.next() {
            None | Some('\n' | '\r') => {
                return fail(input, ScanErrorKind::Unterminated(LiteralKind::String))
            }
            Some('"') => return Ok((chars.as_str(), TokenKind::String)),
            Some('\\') if chars.as_str().is_empty() => {
                return fail(input, ScanErrorKind::Unterminated(LiteralKind::String))
            }
            Some('\\') => match parse_escape(rest) {
                Ok((after, _)) => rest = after,
                Err(nom::Err::Error(_)) => {
                    return fail(rest, ScanErrorKind::InvalidEscape(LiteralKind::String))
                }
                Err(e) => return Err(e),
            },
            Some(c) if !is_literal_char(c) => {
                return fail(rest, ScanErrorKind::Disallowed(LiteralKind::String))
            }
            Some(_) => rest = chars.as_str(),
        }
    }
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_literal(input: &str) -> ParserResult<TokenKind> {
    context(
        "literal",
        alt((parse_string_literal, parse_char_literal, parse_number)),
    )(input)
}

/// Value of a `Number` lexeme. `None` when the lexeme is not a number or an
/// integer does not fit in `u128`.
pub fn number_value(lexeme: &str) -> Option<NumberValue> {
    let hex = lexeme
        .strip_prefix("0x")
        .or_else(|| lexeme.strip_prefix("0X"));
    let oct = lexeme
        .strip_prefix("0o")
        .or_else(|| lexeme.strip_prefix("0O"));

    if let Some(digits) = hex {
        return u128::from_str_radix(digits, 16).ok().map(NumberValue::Integer);
    }
    if let Some(digits) = oct {
        return u128::from_str_radix(digits, 8).ok().map(NumberValue::Integer);
    }
    if lexeme.contains(['.', 'e', 'E']) {
        return lexeme.parse::<f64>().ok().map(NumberValue::Float);
    }
    lexeme.parse::<u128>().ok().map(NumberValue::Integer)
}

/// Decodes the body of a quoted lexeme, dropping `\&` and gaps.
fn decode_body(body: &str) -> Option<String> {
    let mut decoded = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            let (after, escape) = parse_escape(rest).ok()?;
            if let Escape::Char(c) = escape {
                decoded.push(c);
            }
            rest = after;
        } else {
            decoded.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    Some(decoded)
}

/// Value of a `String` lexeme, quotes included.
pub fn decode_string(lexeme: &str) -> Option<String> {
    let body = lexeme.strip_prefix('"')?.strip_suffix('"')?;
    decode_body(body)
}

/// Value of a `Char` lexeme, quotes included.
pub fn decode_char(lexeme: &str) -> Option<char> {
    let body = lexeme.strip_prefix('\'')?.strip_suffix('\'')?;
    let decoded = decode_body(body)?;
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
