#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core automaton model for kleene.
//!
//! An [`Automaton`] is an arena of dense integer states with a sparse
//! transition table keyed by `(state, symbol)`. Epsilon moves are an explicit
//! [`Symbol`] variant, never a sentinel character.
//!
//! Modules:
//! - `state`: state identifiers and state sets
//! - `symbol`: transition labels (character or epsilon)
//! - `automaton`: the automaton itself, simulation and queries
//! - `builder`: incremental construction and disjoint-union merging
//! - `subset`: powerset construction
//! - `trace`: acceptance tracing
//! - `dump`: human-readable automaton description

mod automaton;
mod builder;
mod colors;
mod dump;
mod state;
mod subset;
mod symbol;
mod trace;

#[cfg(test)]
mod subset_tests;

pub use automaton::Automaton;
pub use builder::{AutomatonBuilder, DisjointUnion, Embedded};
pub use colors::Colors;
pub use dump::dump;
pub use state::{StateId, StateSet, display_set};
pub use subset::determinize;
pub use symbol::Symbol;
pub use trace::{NoopTracer, PrintTracer, Tracer};
