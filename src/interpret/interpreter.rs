use std::io::Write;

use log::trace;

use super::error::Error;
use super::value::Value;
use crate::ast::*;
use crate::token::Token;

pub struct Interpreter<'w> {
    print_writer: &'w mut dyn Write,
    emitted: usize,
}

impl<'w> Interpreter<'w> {
    pub fn new(print_writer: &'w mut dyn Write) -> Self {
        Self {
            print_writer,
            emitted: 0,
        }
    }

    /// Number of results written so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Evaluates each tree in order and writes its result. Absent trees are
    /// skipped; the first error stops the whole run.
    pub fn interpret(&mut self, exprs: &[Option<Expression>]) -> Result<(), Error> {
        for expr in exprs.iter().flatten() {
            let value = self.interpret_expr(expr)?;
            trace!("{} => {}", expr, value);
            self.write_value(value)?;
        }
        Ok(())
    }

    pub fn interpret_expr(&self, expr: &Expression) -> Result<Value, Error> {
        match expr {
            Expression::Number(value) => Ok(Value::Number(*value)),
            Expression::Unary(node) => self.interpret_unary_op(node),
            Expression::Binary(node) => self.interpret_binary_op(node),
        }
    }

    fn interpret_unary_op(&self, node: &UnaryOpNode) -> Result<Value, Error> {
        let operand = self.interpret_expr(&node.operand)?;
        let n = check_number_operand(&node.token, operand)?;
        match node.op {
            UnaryOp::Negate => Ok(Value::Number(-n)),
        }
    }

    fn interpret_binary_op(&self, node: &BinaryOpNode) -> Result<Value, Error> {
        let lhs = self.interpret_expr(&node.lhs)?;
        let rhs = self.interpret_expr(&node.rhs)?;
        let (l, r) = check_number_operands(&node.token, lhs, rhs)?;
        let result = match node.op {
            BinaryOp::Add => l + r,
            BinaryOp::Subtract => l - r,
            BinaryOp::Multiply => l * r,
            BinaryOp::Divide => l / r,
        };
        Ok(Value::Number(result))
    }

    fn write_value(&mut self, value: Value) -> Result<(), Error> {
        writeln!(self.print_writer, "Your Output is: \n{}", value)
            .map_err(|err| Error::WriteFailed(value, err))?;
        self.emitted += 1;
        Ok(())
    }
}

// Numbers are the only value today; these stay so a wider value model
// fails loudly instead of silently.
#[allow(irrefutable_let_patterns)]
fn check_number_operand(operator: &Token, operand: Value) -> Result<f64, Error> {
    let Value::Number(n) = operand else {
        return Err(Error::OperandMustBeNumber(operator.clone()));
    };
    Ok(n)
}

#[allow(irrefutable_let_patterns)]
fn check_number_operands(operator: &Token, lhs: Value, rhs: Value) -> Result<(f64, f64), Error> {
    let (Value::Number(l), Value::Number(r)) = (lhs, rhs) else {
        return Err(Error::OperandsMustBeNumbers(operator.clone()));
    };
    Ok((l, r))
}
