#![deny(warnings)]

use crate::scanner::Scanner;
use log::trace;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Rem,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
        Operator::Rem,
    ];

    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            '%' => Some(Operator::Rem),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
            Operator::Rem => '%',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Bracket family, `(` only ever closes with `)` and so on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    pub fn opening(c: char) -> Option<Bracket> {
        match c {
            '(' => Some(Bracket::Round),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub fn closing(c: char) -> Option<Bracket> {
        match c {
            ')' => Some(Bracket::Round),
            ']' => Some(Bracket::Square),
            '}' => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub fn open_char(self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Unknown(char),
    Number(String), // digits as written, never empty
    Operator(Operator),
    OpenBracket(Bracket),
    CloseBracket(Bracket),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Unknown(c) => write!(f, "{}", c),
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Operator(op) => write!(f, "{}", op),
            Token::OpenBracket(b) => write!(f, "{}", b.open_char()),
            Token::CloseBracket(b) => write!(f, "{}", b.close_char()),
        }
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

pub fn is_opening(c: char) -> bool {
    Bracket::opening(c).is_some()
}

pub fn is_closing(c: char) -> bool {
    Bracket::closing(c).is_some()
}

pub fn is_bracket(c: char) -> bool {
    is_opening(c) || is_closing(c)
}

/// Only a plain space separates tokens, tabs and newlines are rejected.
pub fn is_space(c: char) -> bool {
    c == ' '
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[error("Invalid token: {0}")]
pub struct InvalidToken(pub char);

/// Reject the first character that can't be part of an infix expression.
pub fn validate(expr: &str) -> Result<(), InvalidToken> {
    match expr
        .chars()
        .find(|&c| !(is_digit(c) || is_operator(c) || is_bracket(c) || is_space(c)))
    {
        Some(c) => Err(InvalidToken(c)),
        None => Ok(()),
    }
}

pub struct InfixTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> InfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        InfixTokenizer { src: Scanner::new(source) }
    }

    fn get_token(&mut self) -> Option<Token> {
        self.src.skip_spaces();
        if let Some(digits) = self.src.scan_integer() {
            return Some(Token::Number(digits));
        }
        let c = self.src.next()?;
        self.src.ignore();
        Some(if let Some(op) = Operator::from_char(c) {
            Token::Operator(op)
        } else if let Some(b) = Bracket::opening(c) {
            Token::OpenBracket(b)
        } else if let Some(b) = Bracket::closing(c) {
            Token::CloseBracket(b)
        } else {
            Token::Unknown(c)
        })
    }
}

impl<I: Iterator<Item = char>> Iterator for InfixTokenizer<I> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        trace!("tokenized {:?}", token);
        token
    }
}
