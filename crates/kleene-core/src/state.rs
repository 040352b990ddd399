//! State identifiers.
//!
//! States are indices into an automaton's arena. Renaming an automaton shifts
//! every index by the same offset, so merged arenas stay disjoint without any
//! string manipulation.

use std::collections::BTreeSet;
use std::fmt;

/// A state of an automaton, displayed as `q<N>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Same state moved `offset` slots up the arena.
    ///
    /// Panics if the shifted index does not fit in `u32`.
    #[inline]
    pub fn shifted(self, offset: u32) -> Self {
        match self.0.checked_add(offset) {
            Some(index) => Self(index),
            None => panic!("state index overflow: {self} shifted by {offset}"),
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Ordered set of states. Ordering keeps dumps and traces stable.
pub type StateSet = BTreeSet<StateId>;

/// Formats a state set as `{q0, q3}`.
pub fn display_set(set: &StateSet) -> impl fmt::Display + '_ {
    SetDisplay(set)
}

struct SetDisplay<'a>(&'a StateSet);

impl fmt::Display for SetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, state) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{state}")?;
        }
        f.write_str("}")
    }
}
