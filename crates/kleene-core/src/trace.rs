//! Tracing for acceptance checks.
//!
//! [`Automaton::accepts`](crate::Automaton::accepts) runs with [`NoopTracer`],
//! whose methods are empty and inlined away. [`PrintTracer`] records one line
//! per simulation step for the CLI.

use crate::colors::Colors;
use crate::state::{StateSet, display_set};

/// Hooks called while simulating a word.
///
/// - `trace_foreign_symbol`: the word has a character outside the alphabet
/// - `trace_start`: simulation begins with the start set
/// - `trace_step`: a character was consumed
/// - `trace_finish`: the verdict
pub trait Tracer {
    fn trace_foreign_symbol(&mut self, ch: char);

    fn trace_start(&mut self, states: &StateSet);

    fn trace_step(&mut self, ch: char, states: &StateSet);

    fn trace_finish(&mut self, states: &StateSet, accepted: bool);
}

pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_foreign_symbol(&mut self, _ch: char) {}

    #[inline(always)]
    fn trace_start(&mut self, _states: &StateSet) {}

    #[inline(always)]
    fn trace_step(&mut self, _ch: char, _states: &StateSet) {}

    #[inline(always)]
    fn trace_finish(&mut self, _states: &StateSet, _accepted: bool) {}
}

/// Tracer that collects a printable trace.
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn states(&self, states: &StateSet) -> String {
        let c = &self.colors;
        format!("{}{}{}", c.blue, display_set(states), c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_foreign_symbol(&mut self, ch: char) {
        let c = self.colors;
        self.lines.push(format!(
            "{}symbol{} {}'{ch}'{} is not in the alphabet",
            c.dim, c.reset, c.green, c.reset
        ));
        self.lines.push(format!("{}reject{}", c.red, c.reset));
    }

    fn trace_start(&mut self, states: &StateSet) {
        let c = self.colors;
        let line = format!("{}start{} {}", c.dim, c.reset, self.states(states));
        self.lines.push(line);
    }

    fn trace_step(&mut self, ch: char, states: &StateSet) {
        let c = self.colors;
        let line = format!("  {}'{ch}'{} -> {}", c.green, c.reset, self.states(states));
        self.lines.push(line);
    }

    fn trace_finish(&mut self, states: &StateSet, accepted: bool) {
        let c = self.colors;
        let verdict = if accepted { "accept" } else { "reject" };
        let line = format!(
            "{}{verdict}{} {}",
            c.verdict(accepted),
            c.reset,
            self.states(states)
        );
        self.lines.push(line);
    }
}
