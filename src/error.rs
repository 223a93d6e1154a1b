//! Custom errors and results.

use std::error;
use std::fmt;
use std::io;

/// The kinds of errors that can happen when running `parens`.
#[derive(Debug)]
pub enum Error {
    /// An IO error.
    Io(io::Error),

    /// The input contained something other than `(` and `)`.
    InvalidInput {
        /// The first offending character.
        ch: char,
        /// The byte offset of `ch` within the input.
        offset: usize,
    },

    /// The logger actor panicked before it finished writing the log.
    LoggerPanicked,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> ::std::result::Result<(), fmt::Error> {
        match *self {
            Error::Io(ref e) => fmt::Display::fmt(e, f),
            Error::InvalidInput { ch, offset } => {
                write!(f, "invalid character {:?} at offset {}", ch, offset)
            }
            Error::LoggerPanicked => write!(f, "logger thread panicked"),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Error::Io(ref e) => error::Error::description(e),
            Error::InvalidInput { .. } => "invalid character",
            Error::LoggerPanicked => "logger thread panicked",
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// A `Result` whose `Err` variant is `parens::error::Error`.
pub type Result<T> = ::std::result::Result<T, Error>;
