//! kleene compiler: regular expressions to epsilon-free automata.
//!
//! - `parser`: lexer, implicit concatenation, shunting-yard postfix
//! - `compile`: Thompson construction and epsilon elimination
//! - `diagnostics`: error reporting
//! - `pattern`: staged `PatternBuilder` facade
//!
//! Supported syntax: ASCII letters and digits as literals, `|`, `*`, `+`,
//! `?` and parentheses. Juxtaposition is concatenation.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod parser;
pub mod pattern;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity, Span};
pub use kleene_core::Automaton;
pub use pattern::{
    DEFAULT_STATE_LIMIT, MAX_STATE_LIMIT, Pattern, PatternBuilder, PatternConfig, PatternParsed,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The expression is malformed.
    #[error("invalid expression: {} errors", .0.error_count())]
    InvalidExpression(Diagnostics),

    /// Composition produced a fragment larger than the configured limit.
    #[error("state limit exceeded: automaton needs more than {limit} states")]
    StateLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Compiles `regex` with the default configuration.
pub fn compile(regex: &str) -> Result<Automaton> {
    PatternBuilder::new(regex)
        .parse()
        .compile()
        .map(Pattern::into_automaton)
}
