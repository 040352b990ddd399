//! ANSI color codes for terminal output.
//!
//! - Blue: state identifiers
//! - Green: symbols, accepted words
//! - Red: rejected words
//! - Dim: labels and structure

/// ANSI color palette for automaton dumps and traces.
///
/// Only standard 16-color codes, so output reads the same on light and dark
/// terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Color for a verdict: green when accepted, red otherwise.
    pub fn verdict(&self, accepted: bool) -> &'static str {
        if accepted { self.green } else { self.red }
    }
}
