//! Infix arithmetic over integers with `+ - * / ^ %` and `()`, `[]`, `{}`
//! brackets: validate it, convert it to postfix with the shunting algorithm
//! and evaluate the postfix form as `f64`.
//!
//! ```
//! let (rpn, value) = shunting_rpn::eval_str("(3+4)*2").unwrap();
//! assert_eq!(rpn.to_string(), "3 4 + 2 *");
//! assert_eq!(value, 14.0);
//! ```

pub use infix_lexers::{Bracket, Operator};

pub use config::Limits;
pub use stack::{BoundedStack, StackError};

pub use balance::check_balance;
pub use parser::{band, is_higher_priority};
pub use parser::{ConversionError, PostfixToken, RPNExpr, ShuntingParser};
pub use rpneval::{apply, EvaluationError, PostfixEvaluator};

pub mod config;
mod stack;

mod balance;
mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;
mod rpnprint;

#[cfg(test)]
mod pipeline_test;

use log::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid token: {0}")]
    InvalidToken(char),
    #[error("Unbalanced brackets")]
    UnbalancedBrackets,
}

impl From<infix_lexers::InvalidToken> for ValidationError {
    fn from(err: infix_lexers::InvalidToken) -> Self {
        ValidationError::InvalidToken(err.0)
    }
}

/// Any failure along validate, convert and evaluate.
#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

pub fn validate_and_check_balance(expr: &str) -> Result<(), ValidationError> {
    infix_lexers::validate(expr)?;
    if !check_balance(expr) {
        return Err(ValidationError::UnbalancedBrackets);
    }
    Ok(())
}

pub fn to_postfix(expr: &str) -> Result<RPNExpr, ConversionError> {
    ShuntingParser::parse_str(expr)
}

pub fn evaluate(rpn: &RPNExpr) -> Result<f64, EvaluationError> {
    PostfixEvaluator::default().eval(rpn)
}

/// Evaluate whitespace separated postfix text such as `"8 6 /"`.
pub fn evaluate_str(postfix: &str) -> Result<f64, EvaluationError> {
    evaluate(&postfix.parse::<RPNExpr>()?)
}

/// All three stages with default limits.
pub fn eval_str(expr: &str) -> Result<(RPNExpr, f64), Error> {
    eval_with_limits(expr, Limits::default())
}

pub fn eval_with_limits(expr: &str, limits: Limits) -> Result<(RPNExpr, f64), Error> {
    validate_and_check_balance(expr)?;
    let rpn = ShuntingParser::with_limits(limits).convert(expr)?;
    debug!("postfix: {}", rpn);
    let value = PostfixEvaluator::with_limits(limits).eval(&rpn)?;
    Ok((rpn, value))
}
