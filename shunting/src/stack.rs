use crate::config::DEFAULT_OPERATOR_STACK;

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum StackError {
    #[error("Full stack, capacity is {capacity}")]
    Overflow { capacity: usize },
    #[error("Empty stack")]
    Underflow,
}

/// LIFO with a fixed maximum element count. Storage grows on demand, only
/// `capacity` is fixed.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        BoundedStack::with_capacity(DEFAULT_OPERATOR_STACK)
    }
}

impl<T> BoundedStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedStack { items: Vec::new(), capacity }
    }

    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow { capacity: self.capacity });
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Underflow)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
