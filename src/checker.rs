//! Balanced-parentheses checkers built on linked collections.

use parens_collections::{Queue, Stack};
use std::fmt;

/// Something that can decide whether a string of parentheses is balanced.
///
/// A string is balanced when every prefix has at least as many `(` as `)`,
/// and the totals are equal. The empty string is balanced.
///
/// Checkers only count `(` and `)`; any other character is skipped, so callers
/// should run `input::validate` first.
pub trait BalanceChecker: fmt::Debug {
    /// The name of the collection this checker is built on, used in the
    /// "Input is balanced with ..." messages.
    fn name(&self) -> &'static str;

    /// Is `input` a balanced sequence of parentheses?
    fn is_balanced(&mut self, input: &str) -> bool;
}

/// Checks balance by loading the input onto a stack and scanning it
/// right-to-left as it is popped.
#[derive(Debug, Default)]
pub struct StackChecker {
    stack: Stack<char>,
}

impl StackChecker {
    /// Construct a new `StackChecker`.
    pub fn new() -> StackChecker {
        StackChecker {
            stack: Stack::new(),
        }
    }

    fn scan(&mut self, input: &str) -> bool {
        let mut len = 0;
        for c in input.chars() {
            self.stack.push(c);
            len += 1;
        }
        if len % 2 != 0 {
            return false;
        }

        // Popping visits the input back to front, so an unmatched `)` shows up
        // as the count going positive.
        let mut depth: isize = 0;
        while let Some(c) = self.stack.pop() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => continue,
            }
            if depth > 0 {
                return false;
            }
        }
        depth == 0
    }
}

impl BalanceChecker for StackChecker {
    fn name(&self) -> &'static str {
        "stack"
    }

    fn is_balanced(&mut self, input: &str) -> bool {
        let balanced = self.scan(input);
        self.stack.clear();
        balanced
    }
}

/// Checks balance by loading the input into a queue and scanning it
/// left-to-right as it is dequeued.
#[derive(Debug, Default)]
pub struct QueueChecker {
    queue: Queue<char>,
}

impl QueueChecker {
    /// Construct a new `QueueChecker`.
    pub fn new() -> QueueChecker {
        QueueChecker {
            queue: Queue::new(),
        }
    }

    fn scan(&mut self, input: &str) -> bool {
        self.queue.extend(input.chars());

        let mut depth: isize = 0;
        while let Some(c) = self.queue.dequeue() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => continue,
            }
            if depth < 0 {
                return false;
            }
        }
        depth == 0
    }
}

impl BalanceChecker for QueueChecker {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn is_balanced(&mut self, input: &str) -> bool {
        let balanced = self.scan(input);
        self.queue.clear();
        balanced
    }
}

/// Every checker, in the order their results are reported: stack, then queue.
pub fn all() -> Vec<Box<dyn BalanceChecker>> {
    vec![
        Box::new(StackChecker::new()) as Box<dyn BalanceChecker>,
        Box::new(QueueChecker::new()) as Box<dyn BalanceChecker>,
    ]
}
