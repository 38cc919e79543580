pub mod config;
pub mod error;
pub mod harness;
pub mod tokenizer;

// Re-exports
pub use config::{ErrorMode, TokenizerConfig, TriviaPolicy};
pub use error::{Error, InternalResult};
pub use tokenizer::{
    error::LexError,
    token::{tokenize, tokenize_bytes, Position, Span, Token, TokenKind, Tokenizer},
};
