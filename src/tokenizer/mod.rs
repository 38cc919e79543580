//! # Tokenizer Component
//!
//! Lexical analysis of Haskell 2010 source text: a complete input buffer is turned
//! into an ordered token stream that always ends with [`TokenKind::EndOfInput`].
//!
//! ## Design Principles
//!
//! * **Zero-copy tokens**: every [`Token`] borrows its lexeme from the input and
//!   carries its byte span plus the 1-based line and column of its first character.
//! * **Single pass**: each category parser consumes a maximal prefix of the
//!   remaining input; nothing already consumed is scanned again.
//! * **Configurable trivia**: whitespace and comments are discarded by default and
//!   can be retained, in which case the lexemes concatenate back to the input.
//! * **Strict or recovering**: invalid input either fails with a [`LexError`] or is
//!   wrapped in an `Invalid` token, depending on [`ErrorMode`](crate::ErrorMode).
//!
//! ## Component Structure
//!
//! * [`token`]: Token types, positions and the [`Tokenizer`] driver
//! * [`keyword`]: Reserved identifiers
//! * [`identifier`]: Variable, constructor and qualified names
//! * [`symbol`]: Operators, reserved operators and special characters
//! * [`literal`]: Number, character and string literals
//! * [`escape`]: Escape sequences shared by character and string literals
//! * [`whitespace`]: Whitespace runs
//! * [`comment`]: Line comments and nested block comments
//! * [`error`]: [`LexError`] and the nom error type used while scanning
//!
//! ## Usage Example
//!
//! ```rust
//! use hslex::tokenizer::token::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x = 10 + y").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::Operator,
//!         TokenKind::Identifier,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

pub mod comment;
pub mod error;
pub mod escape;
pub mod identifier;
pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;

pub use error::LexError;
pub use token::{tokenize, tokenize_bytes, Token, TokenKind, Tokenizer};
