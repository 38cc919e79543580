use nom::{branch::alt, IResult};
use serde::{Deserialize, Serialize};

use crate::config::{ErrorMode, TokenizerConfig, TriviaPolicy};

use super::{
    comment::parse_comment,
    error::{LexError, LiteralKind, ScanError, ScanErrorKind},
    identifier::parse_name,
    keyword::Keyword,
    literal::parse_literal,
    symbol::{parse_operator, parse_special, ReservedOp},
    whitespace::parse_whitespace,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum TokenKind {
    // Names
    Identifier,
    Constructor,
    Keyword,
    // Symbols
    Operator,
    Special,
    // Literals
    Number,
    Char,
    String,
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,
    // Recovered lexical errors
    Invalid,
    EndOfInput,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::try_from(self.lexeme).ok(),
            _ => None,
        }
    }

    pub fn reserved_op(&self) -> Option<ReservedOp> {
        match self.kind {
            TokenKind::Operator => ReservedOp::try_from(self.lexeme).ok(),
            _ => None,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn position(&self) -> Position {
        self.span.position()
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            kind => write!(f, "{}({:?})", kind, self.lexeme),
        }
    }
}

/// Byte range of a token plus the line and column (both 1-based, column counted in
/// characters) of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.start,
            line: self.line,
            column: self.column,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Line and column of a byte offset into `input`.
    pub fn locate(input: &str, offset: usize) -> Self {
        let mut cursor = Cursor::new();
        cursor.advance(input.get(..offset).unwrap_or(input));
        cursor.position()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// Running position while the driver walks the input. `\n`, `\r\n` and a lone
/// `\r` each end one line.
#[derive(Debug, Clone)]
struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
    after_cr: bool,
}

impl Cursor {
    fn new() -> Self {
        Self {
            offset: 0,
            line: 1,   // 1-based
            column: 1, // 1-based
            after_cr: false,
        }
    }

    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            self.offset += c.len_utf8();
            match c {
                '\n' if self.after_cr => {}
                '\n' | '\r' => {
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
            self.after_cr = c == '\r';
        }
    }

    fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    fn span_from(&self, start: Position) -> Span {
        Span {
            start: start.offset,
            end: self.offset,
            line: start.line,
            column: start.column,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn tokenize<'src>(&self, input: &'src str) -> TokenizerResult<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        let mut cursor = Cursor::new();
        let mut remaining = input;

        while !remaining.is_empty() {
            let start = cursor.position();

            let (kind, rest) = match scan_token(remaining) {
                Ok((rest, kind)) => (kind, rest),
                Err(e) => {
                    let error = match e {
                        nom::Err::Failure(e) => literal_error(&cursor, remaining, e),
                        nom::Err::Error(_) | nom::Err::Incomplete(_) => {
                            LexError::InvalidCharacter {
                                character: remaining.chars().next().unwrap_or_default(),
                                position: start,
                            }
                        }
                    };
                    if self.config.error_mode == ErrorMode::Strict {
                        return Err(error);
                    }
                    let skipped = recovery_len(remaining, start, &error);
                    (TokenKind::Invalid, &remaining[skipped..])
                }
            };

            let consumed = &remaining[..(remaining.len() - rest.len())];
            cursor.advance(consumed);

            if self.keeps(kind) {
                tokens.push(Token::new(kind, consumed, cursor.span_from(start)));
            }

            remaining = rest;
        }

        let end = cursor.position();
        tokens.push(Token::new(
            TokenKind::EndOfInput,
            &input[input.len()..],
            cursor.span_from(end),
        ));

        tracing::debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Validates `bytes` as UTF-8, then tokenizes them.
    pub fn tokenize_bytes<'src>(&self, bytes: &'src [u8]) -> TokenizerResult<Vec<Token<'src>>> {
        let input = std::str::from_utf8(bytes).map_err(|e| {
            let valid = std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default();
            LexError::EncodingError {
                position: Position::locate(valid, valid.len()),
            }
        })?;
        self.tokenize(input)
    }

    fn keeps(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Whitespace => self.config.whitespace == TriviaPolicy::Retain,
            TokenKind::LineComment | TokenKind::BlockComment => {
                self.config.comments == TriviaPolicy::Retain
            }
            _ => true,
        }
    }
}

/// Tokenizes `input` with the default configuration: whitespace and comments
/// discarded, strict error handling.
pub fn tokenize(input: &str) -> TokenizerResult<Vec<Token<'_>>> {
    Tokenizer::default().tokenize(input)
}

pub fn tokenize_bytes(bytes: &[u8]) -> TokenizerResult<Vec<Token<'_>>> {
    Tokenizer::default().tokenize_bytes(bytes)
}

/// Tries every category at the head of `input`. Order matters only where two
/// categories share a first character: comments before operators (`--`) and
/// before special characters (`{-`).
fn scan_token(input: &str) -> ParserResult<TokenKind> {
    alt((
        parse_whitespace,
        parse_comment,
        parse_literal,
        parse_name,
        parse_operator,
        parse_special,
    ))(input)
}

/// Converts a scan failure into a `LexError`. `error.input` is a suffix of
/// `remaining`, so the position is found by advancing a copy of the driver's
/// cursor over the bytes between them.
fn literal_error(cursor: &Cursor, remaining: &str, error: ScanError<'_>) -> LexError {
    let mut at = cursor.clone();
    at.advance(&remaining[..remaining.len() - error.input.len()]);
    let position = at.position();
    tracing::debug!(
        context = error.context.unwrap_or("token"),
        %position,
        "scan failure"
    );
    match error.kind {
        ScanErrorKind::Unterminated(literal) => LexError::UnterminatedLiteral { literal, position },
        ScanErrorKind::InvalidEscape(literal) => LexError::InvalidEscape { literal, position },
        ScanErrorKind::Disallowed(_) | ScanErrorKind::Nom(_) | ScanErrorKind::Char(_) => {
            LexError::InvalidCharacter {
                character: error.input.chars().next().unwrap_or_default(),
                position,
            }
        }
    }
}

/// Number of bytes an `Invalid` token swallows in recover mode. A broken quoted
/// literal extends to its closing quote on the same line, or to the line end; an
/// unclosed block comment extends to the end of input. A literal cut short by a
/// disallowed character ends right before that character.
fn recovery_len(remaining: &str, start: Position, error: &LexError) -> usize {
    let first = remaining.chars().next().map_or(0, char::len_utf8);
    let quote = match error {
        LexError::UnterminatedLiteral {
            literal: LiteralKind::BlockComment,
            ..
        } => return remaining.len(),
        LexError::UnterminatedLiteral { literal, .. } | LexError::InvalidEscape { literal, .. } => {
            match literal {
                LiteralKind::Char => '\'',
                LiteralKind::String => '"',
                LiteralKind::BlockComment => return remaining.len(),
            }
        }
        LexError::InvalidCharacter { position, .. } if position.offset > start.offset => {
            return position.offset - start.offset
        }
        LexError::InvalidCharacter { .. } | LexError::EncodingError { .. } => return first,
    };

    let mut chars = remaining.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\n' | '\r' => return i,
            '\\' => {
                if let Some((j, '\n' | '\r')) = chars.next() {
                    return j;
                }
            }
            c if c == quote => return i + c.len_utf8(),
            _ => {}
        }
    }
    remaining.len()
}

pub type ParserResult<'a, T> = IResult<&'a str, T, ScanError<'a>>;

pub type TokenizerResult<T> = Result<T, LexError>;
