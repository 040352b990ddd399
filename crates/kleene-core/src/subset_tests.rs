use crate::{Automaton, AutomatonBuilder, StateId, Symbol, determinize};

fn q(n: u32) -> StateId {
    StateId::new(n)
}

fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for word in &frontier {
            for &c in alphabet {
                next.push(format!("{word}{c}"));
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

fn ends_in_ab() -> Automaton {
    let mut b = AutomatonBuilder::new();
    b.add_transition(q(0), Symbol::Char('a'), q(0));
    b.add_transition(q(0), Symbol::Char('b'), q(0));
    b.add_transition(q(0), Symbol::Char('a'), q(1));
    b.add_transition(q(1), Symbol::Char('b'), q(2));
    b.add_accepting(q(2));
    b.build(q(0))
}

#[test]
fn determinize_preserves_language() {
    let nfa = ends_in_ab();
    let dfa = determinize(&nfa);

    assert!(!nfa.is_deterministic());
    assert!(dfa.is_deterministic());
    assert_eq!(dfa.num_states(), 3);
    assert_eq!(dfa.alphabet(), nfa.alphabet());

    for word in words(&['a', 'b'], 6) {
        assert_eq!(dfa.accepts(&word), nfa.accepts(&word), "word {word:?}");
    }
}

#[test]
fn determinize_follows_epsilon_moves() {
    let mut b = AutomatonBuilder::new();
    b.add_epsilon(q(0), q(1));
    b.add_transition(q(1), Symbol::Char('a'), q(2));
    b.add_accepting(q(2));
    let dfa = determinize(&b.build(q(0)));

    assert!(!dfa.has_epsilon_transitions());
    assert_eq!(dfa.num_states(), 2);
    assert!(dfa.accepts("a"));
    assert!(!dfa.accepts(""));
    assert!(!dfa.accepts("aa"));
}

#[test]
fn determinize_accepting_start_through_closure() {
    let mut b = AutomatonBuilder::new();
    b.add_epsilon(q(0), q(1));
    b.add_transition(q(0), Symbol::Char('a'), q(0));
    b.add_accepting(q(1));
    let dfa = determinize(&b.build(q(0)));

    assert!(dfa.accepts(""));
    assert!(dfa.accepts("aaa"));
    assert_eq!(dfa.num_states(), 1);
}

#[test]
fn determinize_empty_language() {
    let dfa = determinize(&AutomatonBuilder::new().build(q(0)));

    assert_eq!(dfa.num_states(), 1);
    assert_eq!(dfa.transition_count(), 0);
    assert!(!dfa.accepts(""));
}
