//! Focus cursor over a container's children.
//!
//! The cursor only stores an index and the number of slots; the container
//! owns the children and passes a predicate when focusability matters.
//! Movement wraps in both directions.

use crate::core::{Result, UiError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw index; meaningless while the cursor is empty.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(UiError::EmptyContainer);
        }
        Ok(self.index)
    }

    pub fn prev(&mut self) -> Result<usize> {
        self.prev_where(|_| true)
    }

    pub fn next(&mut self) -> Result<usize> {
        self.next_where(|_| true)
    }

    /// Steps backwards (wrapping) to the nearest slot accepted by `pred`.
    /// Stays put when no other slot qualifies.
    pub fn prev_where(&mut self, pred: impl Fn(usize) -> bool) -> Result<usize> {
        let len = self.len;
        self.step_where(|i| (i + len - 1) % len, pred)
    }

    /// Steps forwards (wrapping) to the nearest slot accepted by `pred`.
    /// Stays put when no other slot qualifies.
    pub fn next_where(&mut self, pred: impl Fn(usize) -> bool) -> Result<usize> {
        let len = self.len;
        self.step_where(|i| (i + 1) % len, pred)
    }

    pub fn first_where(&mut self, pred: impl Fn(usize) -> bool) -> Result<usize> {
        self.current()?;
        if let Some(i) = (0..self.len).find(|&i| pred(i)) {
            self.index = i;
        }
        Ok(self.index)
    }

    pub fn last_where(&mut self, pred: impl Fn(usize) -> bool) -> Result<usize> {
        self.current()?;
        if let Some(i) = (0..self.len).rev().find(|&i| pred(i)) {
            self.index = i;
        }
        Ok(self.index)
    }

    /// Registers one more slot at the end. The index is untouched.
    pub(crate) fn grow(&mut self) {
        self.len += 1;
    }

    /// Moves straight to `index`. Used by the container when the first
    /// focusable child arrives.
    pub(crate) fn land(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    fn step_where(
        &mut self,
        step: impl Fn(usize) -> usize,
        pred: impl Fn(usize) -> bool,
    ) -> Result<usize> {
        let start = self.current()?;
        let mut i = start;
        for _ in 0..self.len {
            i = step(i);
            if i == start {
                break;
            }
            if pred(i) {
                self.index = i;
                return Ok(i);
            }
        }
        Ok(start)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/cursor.rs"]
mod tests;
