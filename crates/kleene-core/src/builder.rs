//! Incremental automaton construction.
//!
//! [`AutomatonBuilder`] grows the state arena on demand, so any state it is
//! handed becomes part of the result. [`DisjointUnion`] sits on top of it and
//! embeds whole automata into fresh blocks of indices, which is how
//! composition keeps merged state sets apart.

use std::collections::BTreeSet;
use std::ops::Range;

use indexmap::IndexMap;

use crate::automaton::Automaton;
use crate::state::{StateId, StateSet};
use crate::symbol::Symbol;

#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    num_states: u32,
    alphabet: BTreeSet<char>,
    transitions: IndexMap<(StateId, Symbol), StateSet>,
    accepting: StateSet,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose arena already holds `num_states` states.
    pub fn with_states(num_states: u32) -> Self {
        Self {
            num_states,
            ..Self::default()
        }
    }

    pub fn num_states(&self) -> u32 {
        self.num_states
    }

    /// Allocates the next state of the arena.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId::new(self.num_states);
        self.num_states = id.shifted(1).as_u32();
        id
    }

    fn ensure_state(&mut self, state: StateId) {
        self.num_states = self.num_states.max(state.shifted(1).as_u32());
    }

    /// Adds `from -symbol-> to`. Character symbols join the alphabet.
    pub fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.ensure_state(from);
        self.ensure_state(to);
        if let Symbol::Char(c) = symbol {
            self.alphabet.insert(c);
        }
        self.transitions.entry((from, symbol)).or_default().insert(to);
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.add_transition(from, Symbol::Epsilon, to);
    }

    pub fn add_symbol(&mut self, c: char) {
        self.alphabet.insert(c);
    }

    pub fn extend_alphabet(&mut self, chars: impl IntoIterator<Item = char>) {
        self.alphabet.extend(chars);
    }

    pub fn add_accepting(&mut self, state: StateId) {
        self.ensure_state(state);
        self.accepting.insert(state);
    }

    pub fn build(mut self, start: StateId) -> Automaton {
        self.ensure_state(start);
        Automaton {
            num_states: self.num_states,
            alphabet: self.alphabet,
            transitions: self.transitions,
            start,
            accepting: self.accepting,
        }
    }
}

/// Where an embedded automaton landed inside a [`DisjointUnion`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Embedded {
    pub start: StateId,
    pub accepting: StateSet,
    range: Range<u32>,
}

impl Embedded {
    /// Every state index the embedded copy occupies.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.range.clone().map(StateId::new)
    }
}

/// Arena that merges automata without state collisions.
///
/// Each embedded automaton is renamed by the current arena size, so its
/// states occupy a block no other part of the union can reach.
#[derive(Debug, Default)]
pub struct DisjointUnion {
    builder: AutomatonBuilder,
}

impl DisjointUnion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_state(&mut self) -> StateId {
        self.builder.add_state()
    }

    pub fn embed(&mut self, automaton: &Automaton) -> Embedded {
        let offset = self.builder.num_states;
        let renamed = automaton.renamed(offset);

        self.builder.num_states = renamed.num_states;
        self.builder.alphabet.extend(renamed.alphabet.iter().copied());
        for ((from, symbol), targets) in renamed.transitions {
            self.builder
                .transitions
                .entry((from, symbol))
                .or_default()
                .extend(targets);
        }

        Embedded {
            start: renamed.start,
            accepting: renamed.accepting,
            range: offset..renamed.num_states,
        }
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.builder.add_epsilon(from, to);
    }

    pub fn extend_alphabet(&mut self, chars: impl IntoIterator<Item = char>) {
        self.builder.extend_alphabet(chars);
    }

    pub fn finish(
        mut self,
        start: StateId,
        accepting: impl IntoIterator<Item = StateId>,
    ) -> Automaton {
        for state in accepting {
            self.builder.add_accepting(state);
        }
        self.builder.build(start)
    }
}
