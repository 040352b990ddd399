//! Operand checks.
//!
//! Shunting-yard happily converts `a|` or `*a` into postfix that cannot be
//! evaluated. Catching these on the token stream points the diagnostic at the
//! operator the user actually wrote.

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::lexer::{Token, TokenKind};

pub fn check_operands(tokens: &[Token], diagnostics: &mut Diagnostics) {
    let mut prev: Option<Token> = None;

    for &token in tokens {
        let prev_kind = prev.map(|p| p.kind);

        match token.kind {
            TokenKind::Pipe if !prev_kind.is_some_and(TokenKind::ends_operand) => {
                diagnostics
                    .report(DiagnosticKind::MissingOperand, token.span)
                    .message("`|` needs an expression on its left")
                    .emit();
            }
            kind if kind.is_quantifier() => match prev {
                Some(p) if p.kind.is_quantifier() => {
                    let (first, second) = (quantifier_char(p.kind), quantifier_char(kind));
                    let same_as = if first == second { first } else { '*' };
                    diagnostics
                        .report(DiagnosticKind::StackedQuantifier, p.span.cover(token.span))
                        .message(format!("`{first}{second}` is the same as `{same_as}`"))
                        .emit();
                }
                Some(p) if p.kind.ends_operand() => {}
                _ => {
                    diagnostics
                        .report(DiagnosticKind::MissingOperand, token.span)
                        .message(format!("`{}` has nothing to repeat", quantifier_char(kind)))
                        .emit();
                }
            },
            TokenKind::ParenClose => match prev {
                Some(p) if p.kind == TokenKind::ParenOpen => {
                    diagnostics
                        .report(DiagnosticKind::EmptyGroup, p.span.cover(token.span))
                        .emit();
                }
                Some(p) if p.kind == TokenKind::Pipe => report_dangling_pipe(p, diagnostics),
                _ => {}
            },
            _ => {}
        }

        prev = Some(token);
    }

    if let Some(p) = prev
        && p.kind == TokenKind::Pipe
    {
        report_dangling_pipe(p, diagnostics);
    }
}

fn report_dangling_pipe(pipe: Token, diagnostics: &mut Diagnostics) {
    diagnostics
        .report(DiagnosticKind::MissingOperand, pipe.span)
        .message("`|` needs an expression on its right")
        .emit();
}

fn quantifier_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::Plus => '+',
        TokenKind::Question => '?',
        _ => '*',
    }
}
