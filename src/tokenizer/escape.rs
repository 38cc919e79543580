//! # Escape Sequences
//!
//! ```text
//! escape  -> \ ( charesc | ascii | decimal | o octal | x hexadecimal )
//! charesc -> a | b | f | n | r | t | v | \ | " | ' | &
//! ascii   -> ^cntrl | NUL | SOH | STX | ... | US | SP | DEL
//! cntrl   -> A-Z | @ | [ | \ | ] | ^ | _
//! gap     -> \ whitechar { whitechar } \
//! ```
//!
//! `\&` and gaps denote no character at all; they are only legal inside strings.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, hex_digit1, oct_digit1, one_of, satisfy},
    combinator::{map, map_opt, value},
    error::{context, ErrorKind, ParseError},
    sequence::{preceded, terminated},
};

use super::{error::ScanError, token::ParserResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    Char(char),
    /// `\&`, the empty escape.
    Empty,
    /// A backslash-delimited run of whitespace inside a string.
    Gap,
}

/// Control-character names, longest first where one is a prefix of another
/// (`SOH` before `SO`).
const ASCII_NAMES: [(&str, char); 34] = [
    ("NUL", '\u{00}'),
    ("SOH", '\u{01}'),
    ("STX", '\u{02}'),
    ("ETX", '\u{03}'),
    ("EOT", '\u{04}'),
    ("ENQ", '\u{05}'),
    ("ACK", '\u{06}'),
    ("BEL", '\u{07}'),
    ("BS", '\u{08}'),
    ("HT", '\u{09}'),
    ("LF", '\u{0A}'),
    ("VT", '\u{0B}'),
    ("FF", '\u{0C}'),
    ("CR", '\u{0D}'),
    ("SO", '\u{0E}'),
    ("SI", '\u{0F}'),
    ("DLE", '\u{10}'),
    ("DC1", '\u{11}'),
    ("DC2", '\u{12}'),
    ("DC3", '\u{13}'),
    ("DC4", '\u{14}'),
    ("NAK", '\u{15}'),
    ("SYN", '\u{16}'),
    ("ETB", '\u{17}'),
    ("CAN", '\u{18}'),
    ("EM", '\u{19}'),
    ("SUB", '\u{1A}'),
    ("ESC", '\u{1B}'),
    ("FS", '\u{1C}'),
    ("GS", '\u{1D}'),
    ("RS", '\u{1E}'),
    ("US", '\u{1F}'),
    ("SP", '\u{20}'),
    ("DEL", '\u{7F}'),
];

fn char_escape(input: &str) -> ParserResult<char> {
    map(one_of("abfnrtv\\\"'"), |c| match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        other => other,
    })(input)
}

fn ascii_name(input: &str) -> ParserResult<char> {
    ASCII_NAMES
        .iter()
        .find_map(|(name, c)| input.strip_prefix(name).map(|rest| (rest, *c)))
        .ok_or_else(|| nom::Err::Error(ScanError::from_error_kind(input, ErrorKind::Tag)))
}

fn control(input: &str) -> ParserResult<char> {
    map_opt(
        preceded(char('^'), satisfy(|c| ('@'..='_').contains(&c))),
        |c| char::from_u32(c as u32 - '@' as u32),
    )(input)
}

fn numeric(input: &str) -> ParserResult<char> {
    let code = |digits: &str, radix: u32| {
        u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32)
    };
    alt((
        map_opt(preceded(char('o'), oct_digit1), move |d| code(d, 8)),
        map_opt(preceded(char('x'), hex_digit1), move |d| code(d, 16)),
        map_opt(digit1, move |d| code(d, 10)),
    ))(input)
}

fn gap(input: &str) -> ParserResult<Escape> {
    value(
        Escape::Gap,
        terminated(take_while1(char::is_whitespace), char('\\')),
    )(input)
}

/// Parses one escape sequence, including its leading backslash.
pub fn parse_escape(input: &str) -> ParserResult<Escape> {
    context(
        "escape",
        preceded(
            char('\\'),
            alt((
                map(char_escape, Escape::Char),
                value(Escape::Empty, char('&')),
                map(ascii_name, Escape::Char),
                map(control, Escape::Char),
                map(numeric, Escape::Char),
                gap,
            )),
        ),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(input: &str) -> (Escape, &str) {
        let (rest, escape) = parse_escape(input).unwrap();
        (escape, rest)
    }

    #[test]
    fn test_char_escapes() {
        assert_eq!(escaped("\\n"), (Escape::Char('\n'), ""));
        assert_eq!(escaped("\\t rest"), (Escape::Char('\t'), " rest"));
        assert_eq!(escaped("\\\\"), (Escape::Char('\\'), ""));
        assert_eq!(escaped("\\\""), (Escape::Char('"'), ""));
        assert_eq!(escaped("\\'"), (Escape::Char('\''), ""));
        assert_eq!(escaped("\\v"), (Escape::Char('\u{0B}'), ""));
        assert_eq!(escaped("\\&"), (Escape::Empty, ""));
    }

    #[test]
    fn test_ascii_names() {
        assert_eq!(escaped("\\NUL"), (Escape::Char('\0'), ""));
        assert_eq!(escaped("\\DEL"), (Escape::Char('\u{7F}'), ""));
        // longest name wins
        assert_eq!(escaped("\\SOH"), (Escape::Char('\u{01}'), ""));
        assert_eq!(escaped("\\SO"), (Escape::Char('\u{0E}'), ""));
        assert_eq!(escaped("\\SOx"), (Escape::Char('\u{0E}'), "x"));
    }

    #[test]
    fn test_control() {
        assert_eq!(escaped("\\^@"), (Escape::Char('\0'), ""));
        assert_eq!(escaped("\\^A"), (Escape::Char('\u{01}'), ""));
        assert_eq!(escaped("\\^_"), (Escape::Char('\u{1F}'), ""));
        assert!(parse_escape("\\^a").is_err());
    }

    #[test]
    fn test_numeric() {
        assert_eq!(escaped("\\65"), (Escape::Char('A'), ""));
        assert_eq!(escaped("\\o101"), (Escape::Char('A'), ""));
        assert_eq!(escaped("\\x41"), (Escape::Char('A'), ""));
        assert_eq!(escaped("\\x3bb"), (Escape::Char('λ'), ""));
        assert_eq!(escaped("\\1234x"), (Escape::Char('\u{4D2}'), "x"));
        // beyond the Unicode range
        assert!(parse_escape("\\x110000").is_err());
        assert!(parse_escape("\\99999999999").is_err());
        // a bare x or o with no digits
        assert!(parse_escape("\\xg").is_err());
    }

    #[test]
    fn test_gap() {
        assert_eq!(escaped("\\  \n  \\rest"), (Escape::Gap, "rest"));
        assert!(parse_escape("\\  rest").is_err());
    }

    #[test]
    fn test_error() {
        assert!(parse_escape("\\q").is_err());
        assert!(parse_escape("\\").is_err());
        assert!(parse_escape("n").is_err());
    }
}
