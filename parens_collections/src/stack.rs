//! A last-in-first-out stack built on `LinkedList`.

use list::LinkedList;
use std::iter::FromIterator;

/// A LIFO stack. The top of the stack is the head of the underlying list.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> Stack<T> {
    /// Construct a new, empty stack.
    pub fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    /// Push `item` onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.list.push(item);
    }

    /// Pop the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Peek at the top item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Get the number of items on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Is the stack empty?
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drop every item on the stack.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Stack<T> {
        let mut stack = Stack::new();
        stack.extend(iterable);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for item in iterable {
            self.push(item);
        }
    }
}
