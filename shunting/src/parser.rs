use crate::config::Limits;
use crate::stack::{BoundedStack, StackError};
use infix_lexers::{Bracket, InfixTokenizer, Operator, Token};
use log::{debug, trace, warn};
use std::ops::Deref;

#[derive(Clone, PartialEq, Debug)]
pub enum PostfixToken {
    Number(String),
    Operator(Operator),
}

/// Postfix sequence in emission order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RPNExpr(pub Vec<PostfixToken>);

impl Deref for RPNExpr {
    type Target = [PostfixToken];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Priority band, lower binds tighter: `^` then `* / %` then `+ -`.
pub fn band(op: Operator) -> usize {
    match op {
        Operator::Pow => 0,
        Operator::Mul | Operator::Div | Operator::Rem => 1,
        Operator::Add | Operator::Sub => 2,
    }
}

pub fn is_higher_priority(current: Operator, other: Operator) -> bool {
    band(current) < band(other)
}

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("No expression")]
    EmptyExpression,
    #[error("Invalid token: {0}")]
    InvalidToken(char),
    #[error("Unbalanced brackets")]
    UnbalancedBrackets,
    #[error("Too many tokens, postfix output is limited to {limit}")]
    TooManyTokens { limit: usize },
    #[error(transparent)]
    Stack(#[from] StackError),
}

// what can wait on the operator stack
#[derive(Clone, Copy, PartialEq, Debug)]
enum Pending {
    Op(Operator),
    Open(Bracket),
}

#[derive(Default)]
pub struct ShuntingParser {
    limits: Limits,
}

impl ShuntingParser {
    pub fn with_limits(limits: Limits) -> Self {
        ShuntingParser { limits }
    }

    pub fn parse_str(expr: &str) -> Result<RPNExpr, ConversionError> {
        Self::default().convert(expr)
    }

    /// Brackets are expected to be balanced already (see `check_balance`),
    /// structural mismatches found on the way still fail with
    /// `UnbalancedBrackets`.
    pub fn convert(&self, expr: &str) -> Result<RPNExpr, ConversionError> {
        if expr.is_empty() {
            return Err(ConversionError::EmptyExpression);
        }
        debug!("converting {:?}", expr);
        self.parse(&mut InfixTokenizer::new(expr.chars()))
    }

    pub fn parse(&self, lex: &mut impl Iterator<Item = Token>) -> Result<RPNExpr, ConversionError> {
        let limit = self.limits.postfix_tokens;
        let mut out = Vec::new();
        let mut emit = |token: PostfixToken| {
            if out.len() >= limit {
                return Err(ConversionError::TooManyTokens { limit });
            }
            trace!("emit {}", token);
            out.push(token);
            Ok(())
        };
        let mut stack = BoundedStack::with_capacity(self.limits.operator_stack);

        for token in lex {
            match token {
                Token::Number(digits) => emit(PostfixToken::Number(digits))?,
                Token::OpenBracket(b) => stack.push(Pending::Open(b))?,
                Token::CloseBracket(b) => loop {
                    match stack.pop() {
                        Ok(Pending::Op(op)) => emit(PostfixToken::Operator(op))?,
                        Ok(Pending::Open(open)) if open == b => break,
                        Ok(Pending::Open(open)) => {
                            warn!("'{}' closes '{}'", b.close_char(), open.open_char());
                            return Err(ConversionError::UnbalancedBrackets);
                        }
                        Err(_) => {
                            warn!("'{}' has nothing to close", b.close_char());
                            return Err(ConversionError::UnbalancedBrackets);
                        }
                    }
                },
                Token::Operator(op) => {
                    // equal bands pop first, every operator is left-associative
                    while let Ok(&Pending::Op(top)) = stack.peek() {
                        if is_higher_priority(op, top) {
                            break;
                        }
                        stack.pop()?;
                        emit(PostfixToken::Operator(top))?;
                    }
                    stack.push(Pending::Op(op))?;
                }
                Token::Unknown(c) => return Err(ConversionError::InvalidToken(c)),
            }
        }
        while let Ok(top) = stack.pop() {
            match top {
                Pending::Op(op) => emit(PostfixToken::Operator(op))?,
                Pending::Open(open) => {
                    warn!("'{}' left open", open.open_char());
                    return Err(ConversionError::UnbalancedBrackets);
                }
            }
        }
        Ok(RPNExpr(out))
    }
}
