//! Staged pattern facade: source, then postfix, then automaton.

use kleene_core::{Automaton, determinize};

use crate::compile::Compiler;
use crate::diagnostics::Diagnostics;
use crate::parser::{Postfix, parse};
use crate::{Error, Result};

pub const DEFAULT_STATE_LIMIT: usize = 10_000;

/// Largest accepted state limit. Two fragments at the limit plus the fresh
/// states of a union must still fit in `u32` state indices.
pub const MAX_STATE_LIMIT: usize = (u32::MAX / 2 - 1) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// Largest fragment, in states, that composition may produce.
    pub state_limit: usize,
    /// Run subset construction after epsilon elimination.
    pub determinize: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            state_limit: DEFAULT_STATE_LIMIT,
            determinize: false,
        }
    }
}

pub struct PatternBuilder<'s> {
    source: &'s str,
    config: PatternConfig,
}

impl<'s> PatternBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            config: PatternConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PatternConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_state_limit(mut self, limit: usize) -> Self {
        self.config.state_limit = limit;
        self
    }

    pub fn with_determinize(mut self, enabled: bool) -> Self {
        self.config.determinize = enabled;
        self
    }

    pub fn parse(self) -> PatternParsed<'s> {
        let (postfix, diagnostics) = parse(self.source);
        PatternParsed {
            source: self.source,
            config: self.config,
            postfix,
            diagnostics,
        }
    }
}

pub struct PatternParsed<'s> {
    source: &'s str,
    config: PatternConfig,
    postfix: Postfix,
    diagnostics: Diagnostics,
}

impl<'s> PatternParsed<'s> {
    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// No errors were found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn compile(self) -> Result<Pattern> {
        if !self.is_valid() {
            return Err(Error::InvalidExpression(self.diagnostics));
        }

        let mut automaton = Compiler::new(&self.postfix, self.config.state_limit).compile()?;
        if self.config.determinize {
            automaton = determinize(&automaton);
        }

        Ok(Pattern {
            source: self.source.to_owned(),
            postfix: self.postfix,
            automaton,
            diagnostics: self.diagnostics,
        })
    }
}

/// A compiled pattern. The automaton is epsilon-free.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    postfix: Postfix,
    automaton: Automaton,
    diagnostics: Diagnostics,
}

impl Pattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }

    /// Warnings collected while parsing.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.automaton.accepts(word)
    }
}
