//! Test utilities: a reference matcher and word enumeration.
//!
//! The reference matcher parses the expression by recursive descent and
//! matches by tracking the set of input positions each subexpression can end
//! at. It shares no code with the automaton pipeline.

use std::collections::BTreeSet;

#[derive(Debug)]
pub enum Regex {
    Char(char),
    Concat(Box<Regex>, Box<Regex>),
    Alt(Box<Regex>, Box<Regex>),
    Star(Box<Regex>),
    Plus(Box<Regex>),
    Optional(Box<Regex>),
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn alternation(&mut self) -> Regex {
        let mut left = self.sequence();
        while self.peek() == Some('|') {
            self.pos += 1;
            let right = self.sequence();
            left = Regex::Alt(Box::new(left), Box::new(right));
        }
        left
    }

    fn sequence(&mut self) -> Regex {
        let mut left = self.quantified();
        while self.peek().is_some_and(|c| c == '(' || c.is_ascii_alphanumeric()) {
            let right = self.quantified();
            left = Regex::Concat(Box::new(left), Box::new(right));
        }
        left
    }

    fn quantified(&mut self) -> Regex {
        let mut atom = self.atom();
        loop {
            atom = match self.peek() {
                Some('*') => Regex::Star(Box::new(atom)),
                Some('+') => Regex::Plus(Box::new(atom)),
                Some('?') => Regex::Optional(Box::new(atom)),
                _ => return atom,
            };
            self.pos += 1;
        }
    }

    fn atom(&mut self) -> Regex {
        let c = self.peek().expect("reference parser: unexpected end");
        self.pos += 1;
        if c != '(' {
            return Regex::Char(c);
        }
        let inner = self.alternation();
        assert_eq!(self.peek(), Some(')'), "reference parser: missing `)`");
        self.pos += 1;
        inner
    }
}

pub fn parse_reference(regex: &str) -> Regex {
    let mut parser = Parser {
        chars: regex.chars().collect(),
        pos: 0,
    };
    let result = parser.alternation();
    assert_eq!(parser.pos, parser.chars.len(), "reference parser: trailing input");
    result
}

impl Regex {
    /// Positions where a match starting at `start` can end.
    fn ends(&self, word: &[char], start: usize) -> BTreeSet<usize> {
        match self {
            Regex::Char(c) => {
                let mut out = BTreeSet::new();
                if word.get(start) == Some(c) {
                    out.insert(start + 1);
                }
                out
            }
            Regex::Concat(a, b) => a
                .ends(word, start)
                .into_iter()
                .flat_map(|mid| b.ends(word, mid))
                .collect(),
            Regex::Alt(a, b) => {
                let mut out = a.ends(word, start);
                out.extend(b.ends(word, start));
                out
            }
            Regex::Star(inner) => repeat(inner, word, BTreeSet::from([start])),
            Regex::Plus(inner) => repeat(inner, word, inner.ends(word, start)),
            Regex::Optional(inner) => {
                let mut out = inner.ends(word, start);
                out.insert(start);
                out
            }
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        self.ends(&chars, 0).contains(&chars.len())
    }
}

/// Closes `seeds` under further matches of `inner`.
fn repeat(inner: &Regex, word: &[char], seeds: BTreeSet<usize>) -> BTreeSet<usize> {
    let mut reached = seeds.clone();
    let mut frontier: Vec<usize> = seeds.into_iter().collect();
    while let Some(pos) = frontier.pop() {
        for next in inner.ends(word, pos) {
            if reached.insert(next) {
                frontier.push(next);
            }
        }
    }
    reached
}

/// Every word over `alphabet` of length at most `max_len`.
pub fn all_words(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = frontier
            .iter()
            .flat_map(|word| alphabet.iter().map(move |c| format!("{word}{c}")))
            .collect();
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

/// Distinct literal characters of `regex`, plus `extra`.
pub fn alphabet_of(regex: &str, extra: &[char]) -> Vec<char> {
    let mut chars: BTreeSet<char> = regex.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    chars.extend(extra);
    chars.into_iter().collect()
}

#[test]
fn reference_matcher_sanity() {
    let r = parse_reference("(a|b)*abb");
    assert!(r.matches("abb"));
    assert!(r.matches("babb"));
    assert!(!r.matches("ab"));

    let r = parse_reference("a?b+");
    assert!(r.matches("b"));
    assert!(r.matches("abbb"));
    assert!(!r.matches("a"));

    assert_eq!(all_words(&['a', 'b'], 2).len(), 7);
}
