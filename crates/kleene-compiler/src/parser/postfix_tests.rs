use super::concat::{insert_concatenation, needs_concat};
use super::lexer::{TokenKind, lex};
use super::parse;
use crate::diagnostics::{DiagnosticKind, Span};

fn postfix(source: &str) -> String {
    let (postfix, diagnostics) = parse(source);
    assert!(!diagnostics.has_errors(), "{}", diagnostics.printer().render());
    postfix.to_string()
}

fn errors(source: &str) -> String {
    let (_, diagnostics) = parse(source);
    diagnostics.printer().render()
}

#[test]
fn concatenation_goes_between_operands() {
    let with_concat = |s: &str| -> String {
        insert_concatenation(&lex(s))
            .iter()
            .map(|t| match t.kind {
                TokenKind::Concat => '.',
                _ => s[t.span.range()].chars().next().unwrap_or('?'),
            })
            .collect()
    };

    assert_eq!(with_concat("ab"), "a.b");
    assert_eq!(with_concat("a*b"), "a*.b");
    assert_eq!(with_concat("a(b)"), "a.(b)");
    assert_eq!(with_concat("(a)(b)"), "(a).(b)");
    assert_eq!(with_concat("a?(b|c)+d"), "a?.(b|c)+.d");
    assert_eq!(with_concat("a|b"), "a|b");
    assert_eq!(with_concat("(a**)"), "(a**)");
}

#[test]
fn concat_rule() {
    use TokenKind::*;

    assert!(needs_concat(Literal, Literal));
    assert!(needs_concat(Plus, ParenOpen));
    assert!(needs_concat(ParenClose, Literal));
    assert!(!needs_concat(ParenOpen, Literal));
    assert!(!needs_concat(Pipe, Literal));
    assert!(!needs_concat(Literal, Star));
    assert!(!needs_concat(Star, Question));
    assert!(!needs_concat(Literal, ParenClose));
}

#[test]
fn postfix_forms() {
    insta::assert_snapshot!(postfix("a"), @"a");
    insta::assert_snapshot!(postfix("ab"), @"ab.");
    insta::assert_snapshot!(postfix("abc"), @"ab.c.");
    insta::assert_snapshot!(postfix("a|b"), @"ab|");
    insta::assert_snapshot!(postfix("a|b|c"), @"ab|c|");
    insta::assert_snapshot!(postfix("ab*"), @"ab*.");
    insta::assert_snapshot!(postfix("ab|cd"), @"ab.cd.|");
    insta::assert_snapshot!(postfix("(a|b)*c"), @"ab|*c.");
    insta::assert_snapshot!(postfix("a(b|c)d"), @"abc|.d.");
    insta::assert_snapshot!(postfix("a?b"), @"a?b.");
    insta::assert_snapshot!(postfix("(a)(b)"), @"ab.");
    insta::assert_snapshot!(postfix("((a))"), @"a");
}

#[test]
fn stacked_quantifiers_drain_in_reverse() {
    insta::assert_snapshot!(postfix("a+?"), @"a?+");
    insta::assert_snapshot!(postfix("a*+b"), @"a+*b.");
}

#[test]
fn postfix_spans_point_at_source() {
    let (postfix, _) = parse("a|b");
    let spans: Vec<Span> = postfix.tokens().iter().map(|t| t.span).collect();

    assert_eq!(spans, [Span::new(0, 1), Span::new(2, 3), Span::new(1, 2)]);
}

#[test]
fn empty_source_is_empty_postfix() {
    let (postfix, diagnostics) = parse("");

    assert!(postfix.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn unexpected_character() {
    insta::assert_snapshot!(errors("a.b"), @"error at 1..2: unexpected `.`");
    insta::assert_snapshot!(errors("a b"), @"error at 1..2: unexpected ` `");
}

#[test]
fn unbalanced_parens() {
    insta::assert_snapshot!(errors("ab)"), @"error at 2..3: unmatched `)`");
    insta::assert_snapshot!(errors("(ab"), @"error at 0..1: missing closing `)`; group opened here is never closed");
    insta::assert_snapshot!(errors("((a)"), @"error at 0..1: missing closing `)`; group opened here is never closed");
}

#[test]
fn unclosed_groups_in_source_order() {
    insta::assert_snapshot!(errors("(((a"), @r"
    error at 0..1: missing closing `)`; group opened here is never closed
    error at 1..2: missing closing `)`; group opened here is never closed
    error at 2..3: missing closing `)`; group opened here is never closed
    ");
}

#[test]
fn missing_operands() {
    insta::assert_snapshot!(errors("|a"), @"error at 0..1: `|` needs an expression on its left");
    insta::assert_snapshot!(errors("a|"), @"error at 1..2: `|` needs an expression on its right");
    insta::assert_snapshot!(errors("a||b"), @"error at 2..3: `|` needs an expression on its left");
    insta::assert_snapshot!(errors("(a|)"), @"error at 2..3: `|` needs an expression on its right");
    insta::assert_snapshot!(errors("*a"), @"error at 0..1: `*` has nothing to repeat");
    insta::assert_snapshot!(errors("(+a)"), @"error at 1..2: `+` has nothing to repeat");
    insta::assert_snapshot!(errors("a|?"), @"error at 2..3: `?` has nothing to repeat");
}

#[test]
fn empty_group() {
    insta::assert_snapshot!(errors("a()"), @"error at 1..3: empty group `()`");
    insta::assert_snapshot!(errors("()"), @"error at 0..2: empty group `()`");
}

#[test]
fn stacked_quantifier_is_a_warning() {
    let (postfix, diagnostics) = parse("a**b+?");

    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warning_count(), 2);
    assert_eq!(postfix.to_string(), "a**b?+.");
    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    warning at 1..3: `**` is the same as `*`
    warning at 4..6: `+?` is the same as `*`
    ");
}

#[test]
fn every_problem_is_reported() {
    let (_, diagnostics) = parse("a.)(|");
    let kinds: Vec<_> = diagnostics.kinds().collect();

    assert_eq!(
        kinds,
        [
            DiagnosticKind::UnexpectedCharacter,
            DiagnosticKind::MissingOperand,
            DiagnosticKind::MissingOperand,
            DiagnosticKind::UnmatchedParen,
            DiagnosticKind::UnclosedGroup,
        ]
    );
}
