#![allow(missing_docs)]

use session::Options;
use std::io;

/// Every string of `(` and `)` with exactly `len` characters.
pub fn paren_strings(len: usize) -> Vec<String> {
    (0..1u32 << len)
        .map(|bits| {
            (0..len)
                .map(|i| if bits & (1 << i) == 0 { '(' } else { ')' })
                .collect::<String>()
        })
        .collect()
}

/// The plain left-to-right counter scan, for comparing checkers against.
pub fn counter_scan(input: &str) -> bool {
    let mut depth = 0i64;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

/// Run an interactive session over `input` and return everything it printed.
pub fn run_session(input: &str) -> String {
    run_session_bytes(input.as_bytes())
}

/// Like `run_session`, but `input` need not be UTF-8.
pub fn run_session_bytes(input: &[u8]) -> String {
    let mut output = vec![];
    Options::new()
        .run_with(io::Cursor::new(input), &mut output)
        .expect("session should run OK");
    String::from_utf8(output).expect("session output should be UTF-8")
}
