//! Powerset construction.
//!
//! Each reachable set of source states becomes one state of the result, in
//! breadth-first discovery order starting from the closure of the start state.

use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::automaton::Automaton;
use crate::builder::AutomatonBuilder;
use crate::state::{StateId, StateSet};
use crate::symbol::Symbol;

/// Builds an equivalent automaton with at most one destination per
/// `(state, symbol)` and no epsilon moves.
pub fn determinize(nfa: &Automaton) -> Automaton {
    let mut builder = AutomatonBuilder::new();
    builder.extend_alphabet(nfa.alphabet().iter().copied());

    let mut seen: IndexMap<StateSet, StateId> = IndexMap::new();
    let mut worklist: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let start_set = nfa.epsilon_closure(&StateSet::from([nfa.start()]));
    let start = builder.add_state();
    seen.insert(start_set.clone(), start);
    worklist.push_back((start_set, start));

    while let Some((set, from)) = worklist.pop_front() {
        if !set.is_disjoint(nfa.accepting()) {
            builder.add_accepting(from);
        }

        for &ch in nfa.alphabet() {
            let next = nfa.epsilon_closure(&nfa.step(&set, ch));
            if next.is_empty() {
                continue;
            }

            let to = match seen.get(&next) {
                Some(&id) => id,
                None => {
                    let id = builder.add_state();
                    seen.insert(next.clone(), id);
                    worklist.push_back((next, id));
                    id
                }
            };
            builder.add_transition(from, Symbol::Char(ch), to);
        }
    }

    builder.build(start)
}
