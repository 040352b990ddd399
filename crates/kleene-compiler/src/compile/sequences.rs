//! Alternation and concatenation.
//!
//! Operands are embedded into a fresh [`DisjointUnion`], so their states
//! never collide even when both operands are the same automaton.

use kleene_core::{Automaton, DisjointUnion};

/// New start with epsilon moves into both operands; accepts where either does.
pub fn union(a: &Automaton, b: &Automaton) -> Automaton {
    let mut merged = DisjointUnion::new();
    let start = merged.fresh_state();
    let left = merged.embed(a);
    let right = merged.embed(b);

    merged.add_epsilon(start, left.start);
    merged.add_epsilon(start, right.start);

    let accepting = left.accepting.into_iter().chain(right.accepting);
    merged.finish(start, accepting)
}

/// Starts in `a`; every accepting state of `a` moves into `b` by epsilon.
/// Only `b`'s accepting states accept.
pub fn concatenate(a: &Automaton, b: &Automaton) -> Automaton {
    let mut merged = DisjointUnion::new();
    let left = merged.embed(a);
    let right = merged.embed(b);

    for &state in &left.accepting {
        merged.add_epsilon(state, right.start);
    }

    merged.finish(left.start, right.accepting)
}
