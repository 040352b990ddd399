//! Epsilon elimination.
//!
//! For each state `s` and symbol `c`, the new `c`-targets of `s` are the
//! epsilon-closure of everything reachable on `c` from the epsilon-closure of
//! `s`. A state accepts when its closure reaches an accepting state. The
//! state arena, start state and alphabet are unchanged.
//!
//! Runs once on the fully composed automaton. In debug builds the result is
//! checked against the input on a sample of short words.

use kleene_core::{Automaton, AutomatonBuilder, StateSet, Symbol};

use super::verify::debug_verify_elimination;

pub fn eliminate_epsilons(nfa: &Automaton) -> Automaton {
    let mut builder = AutomatonBuilder::with_states(nfa.num_states());
    builder.extend_alphabet(nfa.alphabet().iter().copied());

    for state in nfa.states() {
        let closure = nfa.epsilon_closure(&StateSet::from([state]));

        for &ch in nfa.alphabet() {
            let targets = nfa.epsilon_closure(&nfa.step(&closure, ch));
            for target in targets {
                builder.add_transition(state, Symbol::Char(ch), target);
            }
        }

        if !closure.is_disjoint(nfa.accepting()) {
            builder.add_accepting(state);
        }
    }

    let result = builder.build(nfa.start());
    debug_verify_elimination(nfa, &result);
    result
}
