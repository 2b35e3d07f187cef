//! FIFO queue driving breadth-first order

use std::collections::VecDeque;

use crate::error::{DrillsError, Result};

/// First-in first-out queue
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append to the back
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front element
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(DrillsError::QueueUnderflow)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
