//! Human-readable automaton description.

use std::fmt::Write as _;

use crate::automaton::Automaton;
use crate::colors::Colors;
use crate::state::display_set;

/// Renders states, alphabet, start, accepting set, the transition table
/// sorted by source state and symbol, and the determinism verdict.
pub fn dump(automaton: &Automaton, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();

    let alphabet: Vec<String> = automaton.alphabet().iter().map(|ch| ch.to_string()).collect();

    let _ = writeln!(out, "{}states:{} {}", c.dim, c.reset, automaton.num_states());
    let _ = writeln!(
        out,
        "{}alphabet:{} {}{{{}}}{}",
        c.dim,
        c.reset,
        c.green,
        alphabet.join(", "),
        c.reset
    );
    let _ = writeln!(
        out,
        "{}start:{} {}{}{}",
        c.dim,
        c.reset,
        c.blue,
        automaton.start(),
        c.reset
    );
    let _ = writeln!(
        out,
        "{}accepting:{} {}{}{}",
        c.dim,
        c.reset,
        c.blue,
        display_set(automaton.accepting()),
        c.reset
    );

    let mut transitions: Vec<_> = automaton.transitions().collect();
    transitions.sort_by_key(|&(from, symbol, _)| (from, symbol));

    let _ = writeln!(out, "{}transitions:{}", c.dim, c.reset);
    if transitions.is_empty() {
        let _ = writeln!(out, "  {}(none){}", c.dim, c.reset);
    }
    for (from, symbol, targets) in transitions {
        let _ = writeln!(
            out,
            "  {}{from}{} -{}{symbol}{}-> {}{}{}",
            c.blue,
            c.reset,
            c.green,
            c.reset,
            c.blue,
            display_set(targets),
            c.reset
        );
    }

    let _ = write!(
        out,
        "{}deterministic:{} {}",
        c.dim,
        c.reset,
        automaton.is_deterministic()
    );
    out
}
