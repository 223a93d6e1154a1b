//! Linked collections of values: a doubly linked list whose nodes live in an
//! index arena, and the `Stack` and `Queue` built on top of it.
//!
//! All three own their values. Popping, dequeuing, removing, or clearing
//! drops the node holding a value; nothing is shared between collections.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

mod list;
mod queue;
mod stack;

pub use list::{Iter, LinkedList, Node, NodeId, OutOfRange};
pub use queue::Queue;
pub use stack::Stack;
