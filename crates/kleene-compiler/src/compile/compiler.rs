//! Postfix evaluation.
//!
//! Walks the postfix tokens with a stack of fragments. Literals push, unary
//! operators replace the top fragment, binary operators combine the top two
//! (the deeper one is the left operand). Exactly one fragment must remain.

use kleene_core::Automaton;

use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::parser::{Op, Postfix, PostfixToken};
use crate::pattern::MAX_STATE_LIMIT;
use crate::{Error, Result};

use super::epsilon_elim::eliminate_epsilons;
use super::expressions::literal;
use super::quantifier::{optional, plus, star};
use super::sequences::{concatenate, union};

pub struct Compiler<'p> {
    postfix: &'p Postfix,
    state_limit: usize,
}

impl<'p> Compiler<'p> {
    /// Limits above [`MAX_STATE_LIMIT`] are lowered to it.
    pub fn new(postfix: &'p Postfix, state_limit: usize) -> Self {
        Self {
            postfix,
            state_limit: state_limit.min(MAX_STATE_LIMIT),
        }
    }

    /// Builds the epsilon-free automaton for the postfix expression.
    pub fn compile(&self) -> Result<Automaton> {
        let nfa = self.evaluate()?;
        Ok(eliminate_epsilons(&nfa))
    }

    /// Builds the automaton without eliminating epsilon moves.
    pub fn evaluate(&self) -> Result<Automaton> {
        if self.postfix.is_empty() {
            return Err(invalid(DiagnosticKind::EmptyExpression, Span::empty(0), None));
        }

        let mut stack: Vec<Automaton> = Vec::new();

        for token in self.postfix.tokens() {
            let fragment = match token.op {
                Op::Literal(c) => literal(c),
                Op::Star | Op::Plus | Op::Optional => {
                    let inner = stack.pop().ok_or_else(|| missing_operand(token))?;
                    match token.op {
                        Op::Star => star(&inner),
                        Op::Plus => plus(&inner),
                        _ => optional(&inner),
                    }
                }
                Op::Concat | Op::Alternate => {
                    let right = stack.pop();
                    let left = stack.pop();
                    let (Some(left), Some(right)) = (left, right) else {
                        return Err(missing_operand(token));
                    };
                    match token.op {
                        Op::Concat => concatenate(&left, &right),
                        _ => union(&left, &right),
                    }
                }
            };

            if fragment.num_states() as usize > self.state_limit {
                return Err(Error::StateLimitExceeded {
                    limit: self.state_limit,
                });
            }
            stack.push(fragment);
        }

        if stack.len() != 1 {
            let span = self.span();
            let detail = format!("{} fragments remain", stack.len());
            return Err(invalid(DiagnosticKind::UnreducedExpression, span, Some(&detail)));
        }

        stack.pop().ok_or_else(|| invalid(DiagnosticKind::EmptyExpression, Span::empty(0), None))
    }

    /// Span covering the whole expression.
    fn span(&self) -> Span {
        self.postfix
            .tokens()
            .iter()
            .map(|t| t.span)
            .reduce(Span::cover)
            .unwrap_or_default()
    }
}

fn missing_operand(token: &PostfixToken) -> Error {
    let detail = match token.op {
        Op::Concat => "concatenation needs two operands".to_string(),
        op if op.arity() == 1 => format!("`{op}` has nothing to repeat"),
        op => format!("`{op}` needs {} operands", op.arity()),
    };
    invalid(DiagnosticKind::MissingOperand, token.span, Some(&detail))
}

fn invalid(kind: DiagnosticKind, span: Span, detail: Option<&str>) -> Error {
    let mut diagnostics = Diagnostics::new();
    let builder = diagnostics.report(kind, span);
    match detail {
        Some(detail) => builder.message(detail).emit(),
        None => builder.emit(),
    }
    Error::InvalidExpression(diagnostics)
}
