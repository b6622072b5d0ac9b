use super::value::Value;
use thiserror::Error;

use crate::token::Token;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Operand must be a number.")]
    OperandMustBeNumber(Token),

    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers(Token),

    #[error("Write value `{0}` failed with error: {1}")]
    WriteFailed(Value, std::io::Error),
}

impl Error {
    /// The operator token a runtime error points at.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Error::OperandMustBeNumber(token) | Error::OperandsMustBeNumbers(token) => Some(token),
            Error::WriteFailed(..) => None,
        }
    }
}
