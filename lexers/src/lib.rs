//! Scanning and tokenizing of infix arithmetic: digit runs, the operators
//! `+ - * / ^ %` and the bracket pairs `()`, `[]` and `{}`.

mod infix_tokenizer;
mod scanner;

pub use infix_tokenizer::{Bracket, InfixTokenizer, InvalidToken, Operator, Token};
pub use infix_tokenizer::{is_bracket, is_closing, is_digit, is_opening, is_operator, is_space};
pub use infix_tokenizer::validate;
pub use scanner::Scanner;
