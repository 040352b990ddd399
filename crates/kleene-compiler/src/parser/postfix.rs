//! Infix to postfix conversion (shunting-yard).
//!
//! Precedence, high to low: quantifiers, concatenation, alternation.
//! Quantifiers are right-associative, so a quantifier arriving on top of
//! another does not pop it; concatenation and alternation are left-associative.

use std::fmt;

use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};

use super::lexer::{Token, TokenKind, token_text};

/// Postfix instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Literal(char),
    Concat,
    Alternate,
    Star,
    Plus,
    Optional,
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Star | Op::Plus | Op::Optional => 3,
            Op::Concat => 2,
            Op::Alternate => 1,
            Op::Literal(_) => 0,
        }
    }

    pub fn is_right_assoc(self) -> bool {
        matches!(self, Op::Star | Op::Plus | Op::Optional)
    }

    /// Number of fragments the operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Op::Literal(_) => 0,
            Op::Star | Op::Plus | Op::Optional => 1,
            Op::Concat | Op::Alternate => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Literal(c) => c,
            Op::Concat => '.',
            Op::Alternate => '|',
            Op::Star => '*',
            Op::Plus => '+',
            Op::Optional => '?',
        }
    }

    fn from_kind(kind: TokenKind) -> Option<Op> {
        Some(match kind {
            TokenKind::Concat => Op::Concat,
            TokenKind::Pipe => Op::Alternate,
            TokenKind::Star => Op::Star,
            TokenKind::Plus => Op::Plus,
            TokenKind::Question => Op::Optional,
            _ => return None,
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostfixToken {
    pub op: Op,
    pub span: Span,
}

impl PostfixToken {
    pub fn new(op: Op, span: Span) -> Self {
        Self { op, span }
    }
}

/// Expression in postfix order. Displays as `ab|*c.`, with `.` for concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    pub fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.op)?;
        }
        Ok(())
    }
}

enum Pending {
    Group(Span),
    Operator(PostfixToken),
}

struct Converter<'a> {
    output: Vec<PostfixToken>,
    stack: Vec<Pending>,
    diagnostics: &'a mut Diagnostics,
}

impl Converter<'_> {
    fn push_operator(&mut self, token: PostfixToken) {
        while let Some(Pending::Operator(top)) = self.stack.last() {
            let top = *top;
            let outranks = top.op.precedence() > token.op.precedence()
                || (top.op.precedence() == token.op.precedence() && !token.op.is_right_assoc());
            if !outranks {
                break;
            }
            self.output.push(top);
            self.stack.pop();
        }
        self.stack.push(Pending::Operator(token));
    }

    fn close_group(&mut self, span: Span) {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Group(_) => return,
                Pending::Operator(op) => self.output.push(op),
            }
        }
        self.diagnostics
            .report(DiagnosticKind::UnmatchedParen, span)
            .emit();
    }

    fn finish(mut self) -> Postfix {
        let mut unclosed = Vec::new();
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(op),
                Pending::Group(span) => unclosed.push(span),
            }
        }

        // Reported in source order.
        for span in unclosed.into_iter().rev() {
            self.diagnostics
                .report(DiagnosticKind::UnclosedGroup, span)
                .message("group opened here is never closed")
                .emit();
        }
        Postfix::new(self.output)
    }
}

/// Converts tokens (with explicit `Concat`) to postfix order.
///
/// Unbalanced parentheses are reported; an unmatched `)` is otherwise ignored.
pub fn to_postfix(source: &str, tokens: &[Token], diagnostics: &mut Diagnostics) -> Postfix {
    let mut converter = Converter {
        output: Vec::with_capacity(tokens.len()),
        stack: Vec::new(),
        diagnostics,
    };

    for token in tokens {
        match token.kind {
            TokenKind::Literal => {
                if let Some(c) = token_text(source, token).chars().next() {
                    converter
                        .output
                        .push(PostfixToken::new(Op::Literal(c), token.span));
                }
            }
            TokenKind::ParenOpen => converter.stack.push(Pending::Group(token.span)),
            TokenKind::ParenClose => converter.close_group(token.span),
            TokenKind::Garbage => {}
            kind => {
                if let Some(op) = Op::from_kind(kind) {
                    converter.push_operator(PostfixToken::new(op, token.span));
                }
            }
        }
    }

    converter.finish()
}
