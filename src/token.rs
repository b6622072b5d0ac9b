use derive_more::Display;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenKind {
    #[display(fmt = "number")]
    Number,

    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "/")]
    Slash,

    #[display(fmt = "end of input")]
    EndOfInput,
}

/// A classified piece of source text. `literal` is only set for [`TokenKind::Number`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<f64>,
    pub line: usize,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            span,
        }
    }

    pub fn number(value: f64, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Token {
            literal: Some(value),
            ..Token::new(TokenKind::Number, lexeme, line, span)
        }
    }

    pub fn end_of_input(line: usize, offset: usize) -> Self {
        Token::new(TokenKind::EndOfInput, "", line, Span::one(offset))
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
