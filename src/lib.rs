//! Check strings of parentheses for balance, with a stack and a queue built on
//! a doubly linked list.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

#[macro_use]
extern crate lazy_static;
extern crate parens_collections;
extern crate regex;
#[cfg(test)]
extern crate tempdir;

pub mod checker;
pub mod error;
pub mod input;
pub mod logger;
pub mod session;

pub use session::Options;

#[cfg(test)]
mod test_utils;
