//! Quantifiers: `*`, `+`, `?`.

use kleene_core::{Automaton, DisjointUnion};

use super::expressions::empty_word;
use super::sequences::{concatenate, union};

/// Zero or more.
///
/// Fresh start and final states; the start can skip straight to the final,
/// and every accepting state of `a` loops back to `a`'s start or finishes.
pub fn star(a: &Automaton) -> Automaton {
    let mut merged = DisjointUnion::new();
    let start = merged.fresh_state();
    let end = merged.fresh_state();
    let inner = merged.embed(a);

    merged.add_epsilon(start, inner.start);
    merged.add_epsilon(start, end);
    for &state in &inner.accepting {
        merged.add_epsilon(state, inner.start);
        merged.add_epsilon(state, end);
    }

    merged.finish(start, [end])
}

/// One or more: `a` followed by `a*`.
pub fn plus(a: &Automaton) -> Automaton {
    concatenate(a, &star(a))
}

/// Zero or one: `a` or the empty word.
pub fn optional(a: &Automaton) -> Automaton {
    union(a, &empty_word(a.alphabet()))
}
