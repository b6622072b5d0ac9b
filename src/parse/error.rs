use crate::span::Span;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char, usize, Span),

    #[error("Invalid number.")]
    ParseToNumber(usize, Span),

    #[error("Expect number.")]
    ExpectNumber(Token),

    #[error("Unknown operator.")]
    UnknownOperator(Token),

    // token stream ran out without an end-of-input token
    #[error("Expect number.")]
    Eof(usize),
}

impl ParseError {
    pub fn line(&self) -> usize {
        use ParseError::*;
        match self {
            UnexpectedCharacter(_, line, _) => *line,
            ParseToNumber(line, _) => *line,
            ExpectNumber(token) | UnknownOperator(token) => token.line,
            Eof(line) => *line,
        }
    }
}
