use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{config::TokenizerConfig, tokenizer::error::LexError, Error, InternalResult};

use super::compare::ExpectedToken;

/// An error a scenario expects instead of a token stream, identified by the
/// `LexError` variant name and the byte offset it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedError {
    pub kind: String,
    pub offset: usize,
}

impl ExpectedError {
    pub fn new<S: Into<String>>(kind: S, offset: usize) -> Self {
        Self {
            kind: kind.into(),
            offset,
        }
    }

    pub fn matches(&self, error: &LexError) -> bool {
        error.as_ref() == self.kind && error.position().offset == self.offset
    }
}

impl std::fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

/// One `(input, expected)` case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub input: String,

    #[serde(default)]
    pub expected: Vec<ExpectedToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ExpectedError>,

    #[serde(default)]
    pub config: TokenizerConfig,
}

impl Scenario {
    pub fn new<N, I>(name: N, input: I, expected: Vec<ExpectedToken>) -> Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        Self {
            name: name.into(),
            input: input.into(),
            expected,
            error: None,
            config: TokenizerConfig::default(),
        }
    }

    pub fn failing<N, I>(name: N, input: I, error: ExpectedError) -> Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        Self {
            error: Some(error),
            ..Self::new(name, input, Vec::new())
        }
    }

    pub fn with_config(mut self, config: TokenizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads a JSON array of scenarios.
    pub fn load_all(path: &Path) -> InternalResult<Vec<Scenario>> {
        let reader = BufReader::new(File::open(path)?);
        let scenarios: Vec<Scenario> = serde_json::from_reader(reader)?;

        if scenarios.is_empty() {
            return Err(Error::internal(format!(
                "no scenarios in {}",
                path.display()
            )));
        }

        tracing::debug!(count = scenarios.len(), path = %path.display(), "scenarios loaded");
        Ok(scenarios)
    }
}
