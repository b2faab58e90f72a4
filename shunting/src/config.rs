use log::warn;

pub const DEFAULT_OPERATOR_STACK: usize = 50;
pub const DEFAULT_OPERAND_STACK: usize = 50;
pub const DEFAULT_POSTFIX_TOKENS: usize = 80;

/// Capacity bounds for one conversion/evaluation pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Limits {
    pub operator_stack: usize,
    pub operand_stack: usize,
    pub postfix_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            operator_stack: DEFAULT_OPERATOR_STACK,
            operand_stack: DEFAULT_OPERAND_STACK,
            postfix_tokens: DEFAULT_POSTFIX_TOKENS,
        }
    }
}

impl Limits {
    /// No practical ceiling, stacks grow as needed.
    pub fn unbounded() -> Self {
        Limits {
            operator_stack: usize::MAX,
            operand_stack: usize::MAX,
            postfix_tokens: usize::MAX,
        }
    }

    pub fn operator_stack(mut self, capacity: usize) -> Self {
        self.operator_stack = capacity;
        self
    }

    pub fn operand_stack(mut self, capacity: usize) -> Self {
        self.operand_stack = capacity;
        self
    }

    pub fn postfix_tokens(mut self, limit: usize) -> Self {
        self.postfix_tokens = limit;
        self
    }

    /// Defaults overridden by `TOX_OPERATOR_STACK`, `TOX_OPERAND_STACK` and
    /// `TOX_POSTFIX_TOKENS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: usize| match lookup(key) {
            None => default,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!("ignoring {}={:?}, keeping {}", key, raw, default);
                    default
                }
            },
        };
        let defaults = Limits::default();
        Limits {
            operator_stack: read("TOX_OPERATOR_STACK", defaults.operator_stack),
            operand_stack: read("TOX_OPERAND_STACK", defaults.operand_stack),
            postfix_tokens: read("TOX_POSTFIX_TOKENS", defaults.postfix_tokens),
        }
    }
}
