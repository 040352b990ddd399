//! The automaton model and its execution.
//!
//! An automaton owns the dense state arena `q0..q{n-1}`, so every state the
//! transition table or accepting set mentions belongs to the automaton by
//! construction. Automata are immutable once built: composition creates new
//! ones through [`AutomatonBuilder`](crate::AutomatonBuilder) or
//! [`DisjointUnion`](crate::DisjointUnion).

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::state::{StateId, StateSet};
use crate::symbol::Symbol;
use crate::trace::{NoopTracer, Tracer};

/// A finite automaton, possibly non-deterministic, possibly with epsilon moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    pub(crate) num_states: u32,
    pub(crate) alphabet: BTreeSet<char>,
    /// Sparse table. No entry ever maps to an empty set.
    pub(crate) transitions: IndexMap<(StateId, Symbol), StateSet>,
    pub(crate) start: StateId,
    pub(crate) accepting: StateSet,
}

impl Automaton {
    pub fn num_states(&self) -> u32 {
        self.num_states
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.num_states).map(StateId::new)
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// All `(from, symbol, targets)` entries in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, &StateSet)> {
        self.transitions
            .iter()
            .map(|(&(from, symbol), targets)| (from, symbol, targets))
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn targets(&self, from: StateId, symbol: Symbol) -> Option<&StateSet> {
        self.transitions.get(&(from, symbol))
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions.keys().any(|(_, symbol)| symbol.is_epsilon())
    }

    /// Structurally identical copy with every state moved up by `offset`.
    ///
    /// The slots below `offset` stay unused, which reserves them for whatever
    /// the caller merges alongside.
    pub fn renamed(&self, offset: u32) -> Automaton {
        let transitions = self
            .transitions
            .iter()
            .map(|(&(from, symbol), targets)| {
                let targets = targets.iter().map(|t| t.shifted(offset)).collect();
                ((from.shifted(offset), symbol), targets)
            })
            .collect();

        Automaton {
            num_states: StateId::new(self.num_states).shifted(offset).as_u32(),
            alphabet: self.alphabet.clone(),
            transitions,
            start: self.start.shifted(offset),
            accepting: self.accepting.iter().map(|s| s.shifted(offset)).collect(),
        }
    }

    /// States reachable from `seeds` through epsilon moves, seeds included.
    pub fn epsilon_closure(&self, seeds: &StateSet) -> StateSet {
        let mut closure = seeds.clone();
        let mut stack: Vec<StateId> = seeds.iter().copied().collect();

        while let Some(state) = stack.pop() {
            let Some(targets) = self.transitions.get(&(state, Symbol::Epsilon)) else {
                continue;
            };
            for &target in targets {
                if closure.insert(target) {
                    stack.push(target);
                }
            }
        }

        closure
    }

    /// One symbol move from every state in `states`. Epsilon moves are not followed.
    pub fn step(&self, states: &StateSet, ch: char) -> StateSet {
        let mut next = StateSet::new();
        for &state in states {
            if let Some(targets) = self.transitions.get(&(state, Symbol::Char(ch))) {
                next.extend(targets.iter().copied());
            }
        }
        next
    }

    /// Decides whether `word` is accepted.
    ///
    /// Words with a character outside the alphabet are rejected up front.
    /// Otherwise the set of current states is advanced one character at a
    /// time over symbol transitions only, so this is exact for epsilon-free
    /// automata.
    pub fn accepts(&self, word: &str) -> bool {
        self.accepts_traced(word, &mut NoopTracer)
    }

    pub fn accepts_traced<T: Tracer>(&self, word: &str, tracer: &mut T) -> bool {
        if let Some(foreign) = word.chars().find(|c| !self.alphabet.contains(c)) {
            tracer.trace_foreign_symbol(foreign);
            return false;
        }

        let mut current = StateSet::from([self.start]);
        tracer.trace_start(&current);

        for ch in word.chars() {
            current = self.step(&current, ch);
            tracer.trace_step(ch, &current);
            if current.is_empty() {
                break;
            }
        }

        let accepted = !current.is_disjoint(&self.accepting);
        tracer.trace_finish(&current, accepted);
        accepted
    }

    /// True iff no `(state, symbol)` pair has more than one destination.
    ///
    /// Epsilon entries are ignored; the query is meant for epsilon-free automata.
    pub fn is_deterministic(&self) -> bool {
        self.transitions
            .iter()
            .filter(|((_, symbol), _)| !symbol.is_epsilon())
            .all(|(_, targets)| targets.len() <= 1)
    }
}
