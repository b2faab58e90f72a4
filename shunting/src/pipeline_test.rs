use crate::{eval_str, eval_with_limits, evaluate, evaluate_str, to_postfix};
use crate::{validate_and_check_balance, ConversionError, Error, EvaluationError};
use crate::{Limits, ValidationError};
use std::thread;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn validation() {
    assert_eq!(validate_and_check_balance(""), Ok(()));
    assert_eq!(validate_and_check_balance("[1+(2*3)]"), Ok(()));
    assert_eq!(validate_and_check_balance("3 & 4"), Err(ValidationError::InvalidToken('&')));
    assert_eq!(validate_and_check_balance("(1+2"), Err(ValidationError::UnbalancedBrackets));
    assert_eq!(validate_and_check_balance("1+2)"), Err(ValidationError::UnbalancedBrackets));
    assert_eq!(validate_and_check_balance("(1+[2)]"), Err(ValidationError::UnbalancedBrackets));
    // invalid characters are reported before bracket problems
    assert_eq!(validate_and_check_balance("(a"), Err(ValidationError::InvalidToken('a')));
}

#[test]
fn stage_by_stage() {
    let expr = "(3+4)*2";
    validate_and_check_balance(expr).unwrap();
    let rpn = to_postfix(expr).unwrap();
    assert_eq!(rpn.to_string(), "3 4 + 2 *");
    fuzzy_eq!(evaluate(&rpn).unwrap(), 14.0);
    fuzzy_eq!(evaluate_str("8 6 /").unwrap(), 1.3333333333333333);
}

#[test]
fn well_formed_expressions() {
    let cases = [
        ("3+4*2", 11.0),
        ("10 % 3", 1.0),
        ("2 ^ 10", 1024.0),
        ("{2 * [3 + (4 - 1)]} / 4", 3.0),
        ("2^3^2", 64.0),
        ("100 - 20 - 30", 50.0),
        ("((((7))))", 7.0),
        ("1+2*3^2%5-6/3", 2.0),
    ];
    for (expr, expect) in cases.iter() {
        let (_, value) = eval_str(expr).unwrap();
        fuzzy_eq!(value, *expect);
    }
}

#[test]
fn errors_by_stage() {
    assert_eq!(eval_str("3 & 4"), Err(Error::Validation(ValidationError::InvalidToken('&'))));
    assert_eq!(eval_str("{1+2]"), Err(Error::Validation(ValidationError::UnbalancedBrackets)));
    assert_eq!(eval_str(""), Err(Error::Conversion(ConversionError::EmptyExpression)));
    assert_eq!(eval_str("3 +"), Err(Error::Evaluation(EvaluationError::InsufficientOperands)));
    assert_eq!(eval_str("3 4"), Err(Error::Evaluation(EvaluationError::InsufficientOperators)));
    assert_eq!(eval_str("()"), Err(Error::Evaluation(EvaluationError::InsufficientOperands)));
    assert_eq!(eval_str("3 & 4").unwrap_err().to_string(), "Invalid token: &");
    assert_eq!(eval_str("(1").unwrap_err().to_string(), "Unbalanced brackets");
}

#[test]
fn division_by_zero_is_a_value() {
    let (rpn, value) = eval_str("1/0").unwrap();
    assert_eq!(rpn.to_string(), "1 0 /");
    assert_eq!(value, f64::INFINITY);
    assert!(eval_str("0/0").unwrap().1.is_nan());
    assert!(eval_str("(2-2)%0").unwrap().1.is_nan());
}

#[test]
fn limits() {
    let long = vec!["2"; 41].join("*");
    assert_eq!(
        eval_str(&long),
        Err(Error::Conversion(ConversionError::TooManyTokens { limit: 80 }))
    );
    let (_, value) = eval_with_limits(&long, Limits::unbounded()).unwrap();
    assert_eq!(value, 2f64.powi(41));
}

#[test]
fn independent_threads() {
    let handles: Vec<_> = (1..=8)
        .map(|n| thread::spawn(move || eval_str(&format!("({}+{})*{}", n, n, n)).map(|r| r.1)))
        .collect();
    for (n, handle) in (1..=8).zip(handles) {
        let n = n as f64;
        fuzzy_eq!(handle.join().unwrap().unwrap(), 2.0 * n * n);
    }
}
