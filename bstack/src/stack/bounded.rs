use std::slice;

use super::{EquivClass, StackError, StackShape};

/// LIFO container whose capacity is fixed at construction.
///
/// `0 <= size <= capacity` always holds: both mutators check before they touch
/// the storage. A capacity of 0 gives a stack that is empty and full at once,
/// so every push and every pop on it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    stack: Vec<T>,
    cap: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: Vec::new(),
            cap: capacity,
        }
    }

    /// Pushes `f(i)` for every free slot `i`, leaving the stack full.
    pub fn fill_with<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (self.stack.len()..self.cap).for_each(|i| {
            self.stack.push(f(i));
        });
        self
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn size(&self) -> usize {
        self.stack.len()
    }

    pub fn is_full(&self) -> bool {
        StackShape::is_full(self)
    }

    pub fn is_empty(&self) -> bool {
        StackShape::is_empty(self)
    }

    pub fn class(&self) -> EquivClass {
        StackShape::class(self)
    }

    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        self.try_push(item).map_err(|(err, _)| err)
    }

    /// Like [`push`](Self::push), but hands the rejected item back.
    pub fn try_push(&mut self, item: T) -> Result<(), (StackError, T)> {
        if self.is_full() {
            return Err((StackError::Overflow { capacity: self.cap }, item));
        }
        self.stack.push(item);
        debug_assert!(self.stack.len() <= self.cap);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.stack.pop().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.last()
    }

    /// bottom to top
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.stack.iter()
    }
}

impl<T> StackShape for BoundedStack<T> {
    fn capacity(&self) -> usize {
        self.cap
    }

    fn size(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, T> IntoIterator for &'a BoundedStack<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
