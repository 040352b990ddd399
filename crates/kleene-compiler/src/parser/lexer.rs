//! Lexer for regular expressions.
//!
//! Produces span-based tokens without storing text; literal characters are
//! sliced from the source when needed.
//!
//! Consecutive unrecognized characters coalesce into a single `Garbage`
//! token, so `a..b` yields one diagnostic instead of two.

use logos::Logos;

use crate::diagnostics::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[regex("[a-zA-Z0-9]")]
    Literal,

    /// Run of characters the lexer does not recognize.
    Garbage,

    /// Implicit concatenation between juxtaposed operands. Never lexed.
    Concat,
}

impl TokenKind {
    /// Token can close an operand: `a`, `)`, or a quantifier.
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            Self::Literal | Self::ParenClose | Self::Star | Self::Plus | Self::Question
        )
    }

    /// Token can open an operand: `a` or `(`.
    pub fn starts_operand(self) -> bool {
        matches!(self, Self::Literal | Self::ParenOpen)
    }

    pub fn is_quantifier(self) -> bool {
        matches!(self, Self::Star | Self::Plus | Self::Question)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes `source`, coalescing lexer errors into `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, end)));
                }
                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, source.len())));
                }
                break;
            }
        }
    }

    tokens
}

/// Text of a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
