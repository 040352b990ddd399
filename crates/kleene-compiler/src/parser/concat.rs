//! Implicit concatenation.
//!
//! `ab` and `a(b)` juxtapose operands without an operator. A `Concat` token
//! goes between two neighbours whenever the left one ends an operand and the
//! right one starts one. Nothing is inserted before `|`, `)` or a quantifier,
//! nor after `(` or `|`.

use crate::diagnostics::Span;

use super::lexer::{Token, TokenKind};

pub fn needs_concat(prev: TokenKind, next: TokenKind) -> bool {
    prev.ends_operand() && next.starts_operand()
}

/// Copies `tokens`, adding zero-width `Concat` tokens at operand boundaries.
pub fn insert_concatenation(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    let mut prev: Option<TokenKind> = None;

    for &token in tokens {
        if prev.is_some_and(|p| needs_concat(p, token.kind)) {
            out.push(Token::new(TokenKind::Concat, Span::empty(token.span.start)));
        }
        out.push(token);
        prev = Some(token.kind);
    }

    out
}
