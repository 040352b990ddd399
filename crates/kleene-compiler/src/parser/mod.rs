//! Parsing: source text to postfix.
//!
//! Pipeline:
//! - `lexer`: logos tokens, unrecognized runs coalesced into garbage
//! - `operands`: operators without operands, empty groups, stacked quantifiers
//! - `concat`: explicit tokens for implicit concatenation
//! - `postfix`: shunting-yard conversion

mod concat;
mod lexer;
mod operands;
mod postfix;

#[cfg(test)]
mod postfix_tests;

pub use concat::{insert_concatenation, needs_concat};
pub use lexer::{Token, TokenKind, lex, token_text};
pub use postfix::{Op, Postfix, PostfixToken, to_postfix};

use crate::diagnostics::{DiagnosticKind, Diagnostics};

use operands::check_operands;

/// Parses `source` into postfix, collecting diagnostics.
///
/// The postfix is only meaningful when the diagnostics hold no errors.
pub fn parse(source: &str) -> (Postfix, Diagnostics) {
    let mut diagnostics = Diagnostics::new();

    let tokens: Vec<Token> = lex(source)
        .into_iter()
        .filter(|token| {
            if token.kind != TokenKind::Garbage {
                return true;
            }
            diagnostics
                .report(DiagnosticKind::UnexpectedCharacter, token.span)
                .message(token_text(source, token))
                .emit();
            false
        })
        .collect();

    check_operands(&tokens, &mut diagnostics);
    let tokens = insert_concatenation(&tokens);
    let postfix = to_postfix(source, &tokens, &mut diagnostics);

    (postfix, diagnostics)
}
