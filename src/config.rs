use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::InternalResult;

/// What the tokenizer does with whitespace or comments.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TriviaPolicy {
    /// Scan but do not emit.
    #[default]
    Discard,
    /// Emit as tokens, so the token stream reproduces the input exactly.
    Retain,
}

/// How the tokenizer reacts to input that matches no lexical category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorMode {
    /// Stop at the first problem and return a `LexError`.
    #[default]
    Strict,
    /// Emit an `Invalid` token covering the offending text and keep scanning.
    Recover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub whitespace: TriviaPolicy,

    #[serde(default)]
    pub comments: TriviaPolicy,

    #[serde(default)]
    pub error_mode: ErrorMode,
}

impl TokenizerConfig {
    /// Keeps whitespace and comments; the resulting tokens tile the input.
    pub fn lossless() -> Self {
        Self {
            whitespace: TriviaPolicy::Retain,
            comments: TriviaPolicy::Retain,
            ..Self::default()
        }
    }

    pub fn with_whitespace(mut self, policy: TriviaPolicy) -> Self {
        self.whitespace = policy;
        self
    }

    pub fn with_comments(mut self, policy: TriviaPolicy) -> Self {
        self.comments = policy;
        self
    }

    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn from_file(path: &Path) -> InternalResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        tracing::debug!(?config, path = %path.display(), "tokenizer config loaded");
        Ok(config)
    }
}
