use log::{trace, warn};

use super::context::Context;
use super::error::ParseError;
use crate::ast::{BinaryOp, BinaryOpNode, Expression, UnaryOp, UnaryOpNode};
use crate::report::{Diagnostic, Reporter};
use crate::token::{Token, TokenKind};

/// Parses every top-level expression in `items`.
///
/// A failed expression is reported, the rest of the token stream is
/// discarded and `None` takes its place, so the result can hold fewer
/// trees than the source intended.
pub fn parse(items: &[Token], reporter: &mut dyn Reporter) -> Vec<Option<Expression>> {
    let mut state = Context::new(items);
    let mut exprs = vec![];
    while !state.is_at_end() {
        exprs.push(parse_program(&mut state, reporter));
    }
    exprs
}

fn parse_program(state: &mut Context, reporter: &mut dyn Reporter) -> Option<Expression> {
    match parse_expr(state) {
        Ok(expr) => {
            trace!("{}", expr);
            Some(expr)
        }
        Err(err) => {
            warn!("Parse error: {}", err);
            reporter.report(Diagnostic::from(&err));
            state.synchronize();
            None
        }
    }
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Plus, TokenKind::Minus], parse_factor)
}

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[TokenKind::Star, TokenKind::Slash], parse_unary)
}

fn parse_recursive_binary<'a, F>(
    state: &mut Context<'a>,
    match_tokens: &'static [TokenKind],
    lower_fn: F,
) -> Result<Expression, ParseError>
where
    F: Fn(&mut Context<'a>) -> Result<Expression, ParseError>,
{
    let mut lhs = lower_fn(state)?;

    while let Some(token) = state.match_any(match_tokens) {
        let op = BinaryOp::try_from(token)?;
        let rhs = lower_fn(state)?;
        lhs = Expression::Binary(BinaryOpNode {
            lhs: Box::new(lhs),
            op,
            token: token.clone(),
            rhs: Box::new(rhs),
        });
    }

    Ok(lhs)
}

fn parse_unary(state: &mut Context) -> Result<Expression, ParseError> {
    let Some(token) = state.match_any(&[TokenKind::Minus]) else {
        return parse_number(state);
    };
    let op = UnaryOp::try_from(token)?;
    let operand = parse_unary(state)?;
    Ok(Expression::Unary(UnaryOpNode {
        op,
        token: token.clone(),
        operand: Box::new(operand),
    }))
}

fn parse_number(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr()?;
    match (li.kind, li.literal) {
        (TokenKind::Number, Some(value)) => {
            state.advance();
            Ok(Expression::Number(value))
        }
        _ => Err(ParseError::ExpectNumber(li.clone())),
    }
}
