//! Debug-only language check for epsilon elimination.
//!
//! Compares the automaton before and after elimination on every word over its
//! alphabet, shortest first, until the word budget is spent. Zero-cost in
//! release builds.

#[cfg(any(debug_assertions, test))]
use kleene_core::{Automaton, StateSet};

/// Words checked per elimination.
#[cfg(any(debug_assertions, test))]
const WORD_BUDGET: usize = 256;

/// Words over `alphabet` in length-then-lexicographic order, at most `budget` of them.
#[cfg(any(debug_assertions, test))]
pub(crate) fn sample_words(alphabet: &[char], budget: usize) -> Vec<String> {
    let mut words = vec![String::new()];
    let mut frontier = vec![String::new()];

    while words.len() < budget && !alphabet.is_empty() {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for word in &frontier {
            for &c in alphabet {
                next.push(format!("{word}{c}"));
            }
        }
        words.extend(next.iter().cloned());
        frontier = next;
    }

    words.truncate(budget);
    words
}

/// Acceptance that follows epsilon moves after every step.
#[cfg(any(debug_assertions, test))]
pub(crate) fn accepts_with_closure(nfa: &Automaton, word: &str) -> bool {
    if word.chars().any(|c| !nfa.alphabet().contains(&c)) {
        return false;
    }

    let mut current = nfa.epsilon_closure(&StateSet::from([nfa.start()]));
    for ch in word.chars() {
        current = nfa.epsilon_closure(&nfa.step(&current, ch));
    }
    !current.is_disjoint(nfa.accepting())
}

/// Panics if `after` disagrees with `before` on a sampled word.
#[cfg(debug_assertions)]
pub fn debug_verify_elimination(before: &Automaton, after: &Automaton) {
    let alphabet: Vec<char> = before.alphabet().iter().copied().collect();

    for word in sample_words(&alphabet, WORD_BUDGET) {
        let expected = accepts_with_closure(before, &word);
        let actual = after.accepts(&word);
        if expected != actual {
            panic!(
                "epsilon elimination changed the language: {word:?} was {} and is now {}",
                verdict(expected),
                verdict(actual)
            );
        }
    }
}

#[cfg(debug_assertions)]
fn verdict(accepted: bool) -> &'static str {
    if accepted { "accepted" } else { "rejected" }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
#[inline(always)]
pub fn debug_verify_elimination(
    _before: &kleene_core::Automaton,
    _after: &kleene_core::Automaton,
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_words_shortest_first() {
        let words = sample_words(&['a', 'b'], 7);
        assert_eq!(words, ["", "a", "b", "aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn sample_words_respects_budget() {
        assert_eq!(sample_words(&['a', 'b', 'c'], 256).len(), 256);
        assert_eq!(sample_words(&['a'], 3), ["", "a", "aa"]);
    }

    #[test]
    fn sample_words_empty_alphabet() {
        assert_eq!(sample_words(&[], 256), [""]);
    }
}
