//! # Comparison Harness
//!
//! Runs named scenarios through the tokenizer and compares the produced token
//! stream against an expected one, token by token on `(kind, lexeme)`.
//!
//! * [`compare`]: [`ExpectedToken`], structural comparison and diff rendering
//! * [`scenario`]: [`Scenario`] fixtures, loadable from JSON
//! * [`registry`]: [`ScenarioRegistry`], an ordered list of named checks, and
//!   the reports it produces
//!
//! ```rust
//! use hslex::harness::{ExpectedToken, ScenarioRegistry};
//! use hslex::TokenKind;
//!
//! let mut registry = ScenarioRegistry::new();
//! registry.register(
//!     "equality",
//!     "a == b",
//!     vec![
//!         ExpectedToken::new(TokenKind::Identifier, "a"),
//!         ExpectedToken::new(TokenKind::Operator, "=="),
//!         ExpectedToken::new(TokenKind::Identifier, "b"),
//!         ExpectedToken::end(),
//!     ],
//! );
//! assert!(registry.run_all().all_passed());
//! ```

pub mod compare;
pub mod registry;
pub mod scenario;

pub use compare::{compare, render_diff, Comparison, ExpectedToken};
pub use registry::{verify, CaseReport, HarnessReport, ScenarioRegistry, Verdict};
pub use scenario::{ExpectedError, Scenario};
