use std::fmt;

use derive_more::Display;

use crate::parse::ParseError;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UnaryOp {
    #[display(fmt = "-")]
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BinaryOp {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Subtract,
    #[display(fmt = "*")]
    Multiply,
    #[display(fmt = "/")]
    Divide,
}

impl TryFrom<&Token> for UnaryOp {
    type Error = ParseError;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.kind {
            TokenKind::Minus => Ok(UnaryOp::Negate),
            _ => Err(ParseError::UnknownOperator(token.clone())),
        }
    }
}

impl TryFrom<&Token> for BinaryOp {
    type Error = ParseError;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        match token.kind {
            TokenKind::Plus => Ok(BinaryOp::Add),
            TokenKind::Minus => Ok(BinaryOp::Subtract),
            TokenKind::Star => Ok(BinaryOp::Multiply),
            TokenKind::Slash => Ok(BinaryOp::Divide),
            _ => Err(ParseError::UnknownOperator(token.clone())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOpNode {
    pub op: UnaryOp,
    pub token: Token,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpNode {
    pub lhs: Box<Expression>,
    pub op: BinaryOp,
    pub token: Token,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Unary(UnaryOpNode),
    Binary(BinaryOpNode),
}

/// Prints the tree in parenthesized prefix form, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{}", value),
            Expression::Unary(node) => write!(f, "({} {})", node.op, node.operand),
            Expression::Binary(node) => write!(f, "({} {} {})", node.op, node.lhs, node.rhs),
        }
    }
}
