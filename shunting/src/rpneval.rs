use crate::config::Limits;
use crate::parser::{PostfixToken, RPNExpr};
use crate::stack::{BoundedStack, StackError};
use infix_lexers::{is_digit, Operator};
use log::{debug, trace};
use std::str::FromStr;

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Not enough operands")]
    InsufficientOperands,
    #[error("Not enough operators")]
    InsufficientOperators,
    #[error("Invalid operation: {0}")]
    InvalidOperator(String),
    #[error("Bad number: {0}")]
    BadNumber(String),
    #[error("Too many operands, operand stack is limited to {capacity}")]
    TooManyOperands { capacity: usize },
}

impl From<StackError> for EvaluationError {
    fn from(err: StackError) -> Self {
        match err {
            StackError::Underflow => EvaluationError::InsufficientOperands,
            StackError::Overflow { capacity } => EvaluationError::TooManyOperands { capacity },
        }
    }
}

/// `lhs op rhs` where rhs is the operand pushed last. Zero divisors follow
/// IEEE semantics and give `inf` or `NaN`.
pub fn apply(op: Operator, lhs: f64, rhs: f64) -> f64 {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => lhs / rhs,
        Operator::Pow => lhs.powf(rhs),
        Operator::Rem => lhs % rhs,
    }
}

#[derive(Default)]
pub struct PostfixEvaluator {
    limits: Limits,
}

impl PostfixEvaluator {
    pub fn with_limits(limits: Limits) -> Self {
        PostfixEvaluator { limits }
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvaluationError> {
        let mut operands = BoundedStack::with_capacity(self.limits.operand_stack);

        for token in rpn.iter() {
            match token {
                PostfixToken::Number(digits) => {
                    let num = digits
                        .parse::<f64>()
                        .map_err(|_| EvaluationError::BadNumber(digits.clone()))?;
                    operands.push(num)?;
                }
                PostfixToken::Operator(op) => {
                    let r = operands.pop()?;
                    let l = operands.pop()?;
                    let result = apply(*op, l, r);
                    trace!("{} {} {} = {}", l, op, r, result);
                    operands.push(result)?;
                }
            }
        }
        let result = operands.pop()?;
        if !operands.is_empty() {
            debug!("{} operands left over", operands.len());
            return Err(EvaluationError::InsufficientOperators);
        }
        Ok(result)
    }
}

fn postfix_token(lexeme: &str) -> Result<PostfixToken, EvaluationError> {
    if !lexeme.is_empty() && lexeme.chars().all(is_digit) {
        return Ok(PostfixToken::Number(lexeme.to_string()));
    }
    let mut chars = lexeme.chars();
    match (chars.next().and_then(Operator::from_char), chars.next()) {
        (Some(op), None) => Ok(PostfixToken::Operator(op)),
        _ => Err(EvaluationError::InvalidOperator(lexeme.to_string())),
    }
}

/// Whitespace separated postfix, eg: `"3 4 2 * +"`.
impl FromStr for RPNExpr {
    type Err = EvaluationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(postfix_token)
            .collect::<Result<Vec<_>, _>>()
            .map(RPNExpr)
    }
}
