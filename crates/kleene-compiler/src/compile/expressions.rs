//! Leaf fragments.

use std::collections::BTreeSet;

use kleene_core::{Automaton, AutomatonBuilder, Symbol};

/// `q0 -c-> q1`, accepting `{q1}`.
pub fn literal(c: char) -> Automaton {
    let mut builder = AutomatonBuilder::new();
    let start = builder.add_state();
    let end = builder.add_state();
    builder.add_transition(start, Symbol::Char(c), end);
    builder.add_accepting(end);
    builder.build(start)
}

/// `q0 -ε-> q1`, accepting `{q1}`: the empty word only.
///
/// Carries `alphabet` so that merging it never shrinks the alphabet of the
/// fragment it is combined with.
pub fn empty_word(alphabet: &BTreeSet<char>) -> Automaton {
    let mut builder = AutomatonBuilder::new();
    let start = builder.add_state();
    let end = builder.add_state();
    builder.add_epsilon(start, end);
    builder.add_accepting(end);
    builder.extend_alphabet(alphabet.iter().copied());
    builder.build(start)
}
