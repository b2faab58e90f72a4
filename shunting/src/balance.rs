use crate::stack::BoundedStack;
use infix_lexers::Bracket;
use log::debug;

/// True iff every closing bracket matches, in family and nesting, the most
/// recent unmatched opening one and nothing is left open. Other characters
/// are ignored, so `""` is balanced.
pub fn check_balance(expr: &str) -> bool {
    // one slot per char is always enough
    let mut open = BoundedStack::with_capacity(expr.len());
    for c in expr.chars() {
        if let Some(b) = Bracket::opening(c) {
            if open.push(b).is_err() {
                return false;
            }
        } else if let Some(b) = Bracket::closing(c) {
            match open.pop() {
                Ok(top) if top == b => continue,
                Ok(top) => {
                    debug!("'{}' closes '{}'", c, top.open_char());
                    return false;
                }
                Err(_) => {
                    debug!("'{}' has nothing to close", c);
                    return false;
                }
            }
        }
    }
    open.is_empty()
}
