//! Thompson construction over postfix expressions.
//!
//! Every operator returns a new automaton; operands are never modified.
//! Intermediate fragments keep their epsilon moves, which are removed once at
//! the end.
//!
//! # Module Organization
//!
//! - `expressions`: literal and empty-word fragments
//! - `sequences`: union and concatenation
//! - `quantifier`: star, plus, optional
//! - `epsilon_elim`: epsilon elimination
//! - `verify`: debug-only language check of epsilon elimination
//! - `compiler`: postfix evaluation

mod compiler;
mod epsilon_elim;
mod expressions;
mod quantifier;
mod sequences;
pub(crate) mod verify;


pub use compiler::Compiler;
pub use epsilon_elim::eliminate_epsilons;
pub use expressions::{empty_word, literal};
pub use quantifier::{optional, plus, star};
pub use sequences::{concatenate, union};
