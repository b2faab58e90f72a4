use crate::parser::{band, PostfixToken, RPNExpr};
use crate::rpneval::EvaluationError;
use infix_lexers::Operator;
use std::fmt;

#[derive(Debug)]
enum AST<'a> {
    Leaf(&'a str),
    Node(Operator, Box<AST<'a>>, Box<AST<'a>>),
}

impl RPNExpr {
    fn build_ast(&self) -> Result<AST<'_>, EvaluationError> {
        let mut nodes = Vec::new();
        for token in self.0.iter() {
            match token {
                PostfixToken::Number(digits) => nodes.push(AST::Leaf(digits)),
                PostfixToken::Operator(op) => {
                    let rhs = nodes.pop().ok_or(EvaluationError::InsufficientOperands)?;
                    let lhs = nodes.pop().ok_or(EvaluationError::InsufficientOperands)?;
                    nodes.push(AST::Node(*op, Box::new(lhs), Box::new(rhs)));
                }
            }
        }
        let root = nodes.pop().ok_or(EvaluationError::InsufficientOperands)?;
        if !nodes.is_empty() {
            return Err(EvaluationError::InsufficientOperators);
        }
        Ok(root)
    }

    /// Render back to infix with only the brackets the priority bands need.
    pub fn to_infix(&self) -> Result<String, EvaluationError> {
        // band of the root operator, None for a plain number
        fn printer(root: &AST) -> (String, Option<usize>) {
            match root {
                AST::Leaf(digits) => (digits.to_string(), None),
                AST::Node(op, lhs, rhs) => {
                    let prec = band(*op);
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let lh = match lhs.1 {
                        Some(b) if b > prec => format!("({})", lhs.0),
                        _ => lhs.0,
                    };
                    // left-associative, so an equal band on the right needs them too
                    let rh = match rhs.1 {
                        Some(b) if b >= prec => format!("({})", rhs.0),
                        _ => rhs.0,
                    };
                    (format!("{} {} {}", lh, op, rh), Some(prec))
                }
            }
        }
        Ok(printer(&self.build_ast()?).0)
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PostfixToken::Number(digits) => write!(f, "{}", digits),
            PostfixToken::Operator(op) => write!(f, "{}", op),
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self.0.iter().map(|t| t.to_string()).collect::<Vec<String>>();
        write!(f, "{}", tokens.join(" "))
    }
}
