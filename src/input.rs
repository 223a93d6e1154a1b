//! Validating console input before it is checked for balance.

use error;
use regex::Regex;

/// Ensure that `input` consists only of `(` and `)`.
///
/// The empty string is valid. On failure, the error names the first character
/// that is not a parenthesis and its byte offset.
pub fn validate(input: &str) -> error::Result<()> {
    lazy_static! {
        static ref NOT_PAREN: Regex = Regex::new(r"[^()]").unwrap();
    }

    match NOT_PAREN.find(input) {
        None => Ok(()),
        Some(m) => {
            let ch = input[m.start()..].chars().next().unwrap_or('\u{fffd}');
            Err(error::Error::InvalidInput {
                ch: ch,
                offset: m.start(),
            })
        }
    }
}

/// Does this line ask to quit? That is, does it start with `q` or `Q`?
pub fn is_quit(line: &str) -> bool {
    line.chars()
        .next()
        .map_or(false, |c| c.to_ascii_lowercase() == 'q')
}
