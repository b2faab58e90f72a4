use crate::config::Limits;
use crate::parser::{band, is_higher_priority, ConversionError, PostfixToken, ShuntingParser};
use crate::stack::StackError;
use infix_lexers::{Bracket, Operator, Token};
use pretty_assertions::assert_eq;

fn postfix(expr: &str) -> String {
    ShuntingParser::parse_str(expr).unwrap().to_string()
}

#[test]
fn priority_bands() {
    assert_eq!(band(Operator::Pow), 0);
    for op in [Operator::Mul, Operator::Div, Operator::Rem].iter() {
        assert_eq!(band(*op), 1);
    }
    assert_eq!(band(Operator::Add), 2);
    assert_eq!(band(Operator::Sub), 2);

    assert!(is_higher_priority(Operator::Pow, Operator::Mul));
    assert!(is_higher_priority(Operator::Rem, Operator::Sub));
    assert!(!is_higher_priority(Operator::Add, Operator::Sub));
    assert!(!is_higher_priority(Operator::Pow, Operator::Pow));
    assert!(!is_higher_priority(Operator::Add, Operator::Div));
}

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2").unwrap();
    let expect = vec![
        PostfixToken::Number(format!("3")),
        PostfixToken::Number(format!("4")),
        PostfixToken::Number(format!("2")),
        PostfixToken::Operator(Operator::Mul),
        PostfixToken::Operator(Operator::Add),
    ];
    assert_eq!(rpn.0, expect);
}

#[test]
fn test_parse2() {
    assert_eq!(postfix("(3+4)*2"), "3 4 + 2 *");
    assert_eq!(postfix("{[1+2]*(3-4)}%5"), "1 2 + 3 4 - * 5 %");
    assert_eq!(postfix("10 / 2 ^ 3 * 4"), "10 2 3 ^ / 4 *");
    assert_eq!(postfix(" 12 *  345 "), "12 345 *");
    assert_eq!(postfix("007"), "007");
}

#[test]
fn left_associative() {
    assert_eq!(postfix("8-3-2"), "8 3 - 2 -");
    assert_eq!(postfix("8/4*2"), "8 4 / 2 *");
    assert_eq!(postfix("2^3^2"), "2 3 ^ 2 ^");
    assert_eq!(postfix("2^(3^2)"), "2 3 2 ^ ^");
}

#[test]
fn operators_inside_brackets_stay_put() {
    // an opening bracket on top stops the popping
    assert_eq!(postfix("2*(3+4)"), "2 3 4 + *");
    assert_eq!(postfix("1-[2^{3%4}]"), "1 2 3 4 % ^ -");
}

#[test]
fn malformed_but_convertible() {
    // conversion doesn't count operands, evaluation does
    assert_eq!(postfix("1 2"), "1 2");
    assert_eq!(postfix("+"), "+");
    assert_eq!(postfix("   "), "");
}

#[test]
fn bad_parse() {
    assert_eq!(ShuntingParser::parse_str(""), Err(ConversionError::EmptyExpression));
    assert_eq!(ShuntingParser::parse_str("3 & 4"), Err(ConversionError::InvalidToken('&')));
    assert_eq!(ShuntingParser::parse_str("(1+2"), Err(ConversionError::UnbalancedBrackets));
    assert_eq!(ShuntingParser::parse_str("1+2)"), Err(ConversionError::UnbalancedBrackets));
    assert_eq!(ShuntingParser::parse_str("(1+[2)]"), Err(ConversionError::UnbalancedBrackets));
}

#[test]
fn parse_tokens() {
    let mut tokens = vec![
        Token::OpenBracket(Bracket::Curly),
        Token::Number(format!("5")),
        Token::Operator(Operator::Sub),
        Token::Number(format!("1")),
        Token::CloseBracket(Bracket::Curly),
        Token::Operator(Operator::Pow),
        Token::Number(format!("2")),
    ]
    .into_iter();
    let rpn = ShuntingParser::default().parse(&mut tokens).unwrap();
    assert_eq!(rpn.to_string(), "5 1 - 2 ^");
    assert_eq!(rpn.len(), 5);
}

#[test]
fn postfix_limit() {
    let parser = ShuntingParser::with_limits(Limits::default().postfix_tokens(4));
    assert_eq!(parser.convert("1+2+3"), Err(ConversionError::TooManyTokens { limit: 4 }));
    assert_eq!(parser.convert("1+2").unwrap().to_string(), "1 2 +");

    // 41 numbers and 40 operators is one more than the default allows
    let long = vec!["1"; 41].join("+");
    assert_eq!(ShuntingParser::parse_str(&long), Err(ConversionError::TooManyTokens { limit: 80 }));
    let rpn = ShuntingParser::with_limits(Limits::unbounded()).convert(&long).unwrap();
    assert_eq!(rpn.len(), 81);
}

#[test]
fn operator_stack_limit() {
    let parser = ShuntingParser::with_limits(Limits::default().operator_stack(2));
    assert_eq!(
        parser.convert("(((1)))"),
        Err(ConversionError::Stack(StackError::Overflow { capacity: 2 }))
    );
    assert_eq!(parser.convert("((1))").unwrap().to_string(), "1");
    assert_eq!(parser.convert("1+2*3^4").err(), Some(ConversionError::Stack(StackError::Overflow { capacity: 2 })));
}
