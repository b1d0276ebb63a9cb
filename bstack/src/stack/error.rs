/// Failure of a stack mutator. The stack is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StackError {
    #[error("stack overflow: push on a full stack (capacity {capacity})")]
    Overflow { capacity: usize },
    #[error("stack underflow: pop on an empty stack")]
    Underflow,
}

impl StackError {
    pub fn is_overflow(&self) -> bool {
        matches!(self, StackError::Overflow { .. })
    }

    pub fn is_underflow(&self) -> bool {
        matches!(self, StackError::Underflow)
    }
}
