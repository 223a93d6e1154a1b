//! The interactive loop: prompt for a line, validate it, and report what each
//! checker thinks of it.

use checker::{self, BalanceChecker};
use error;
use input;
use logger::Logger;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path;

/// The prompt printed before each line is read.
pub const PROMPT: &'static str = "Input string of parentheses (or 'q' to quit): ";

/// Options for an interactive checking session.
#[derive(Clone, Debug, Default)]
pub struct Options {
    log_file: Option<path::PathBuf>,
}

impl Options {
    /// Construct options for a session that does not keep a log.
    pub fn new() -> Options {
        Options { log_file: None }
    }

    /// Log every line read and every verdict to the file at `path`,
    /// truncating it first.
    pub fn log_file<P>(mut self, path: P) -> Options
    where
        P: AsRef<path::Path>,
    {
        self.log_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Run a session on stdin and stdout.
    pub fn run(self) -> error::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run a session reading lines from `input` and writing prompts and
    /// verdicts to `output`.
    ///
    /// Returns once the user quits or `input` is exhausted.
    pub fn run_with<R, W>(self, input: R, output: W) -> error::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let log: Box<dyn Write + Send> = match self.log_file {
            Some(ref path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
            None => Box::new(io::sink()),
        };
        run_logged(log, input, output)
    }
}

fn run_logged<L, R, W>(log: L, input: R, output: W) -> error::Result<()>
where
    L: 'static + Send + Write,
    R: BufRead,
    W: Write,
{
    let (logger, handle) = Logger::spawn(log)?;

    let result = Session::new(logger).run(input, output);

    let joined = handle.join();
    result?;
    joined.map_err(|_| error::Error::LoggerPanicked)
}

#[derive(Debug)]
struct Session {
    checkers: Vec<Box<dyn BalanceChecker>>,
    logger: Logger,
}

impl Session {
    fn new(logger: Logger) -> Session {
        Session {
            checkers: checker::all(),
            logger: logger,
        }
    }

    fn run<R, W>(mut self, mut input: R, mut output: W) -> error::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = vec![];
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                self.logger.end_of_input();
                writeln!(output)?;
                return Ok(());
            }

            // Bytes that are not UTF-8 become U+FFFD, which validation rejects
            // like any other non-paren character.
            let line = String::from_utf8_lossy(strip_line_terminator(&buf));
            let line = &*line;
            self.logger.read_input(line);

            if input::is_quit(line) {
                self.logger.quit();
                return Ok(());
            }

            if let Err(e) = input::validate(line) {
                self.logger.invalid_input(line, e);
                writeln!(output, "Invalid input.")?;
                continue;
            }

            for checker in &mut self.checkers {
                let balanced = checker.is_balanced(line);
                self.logger.checked(checker.name(), line, balanced);
                writeln!(
                    output,
                    "Input is {}balanced with {}.",
                    if balanced { "" } else { "not " },
                    checker.name()
                )?;
            }
        }
    }
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = if line.ends_with(b"\n") {
        &line[..line.len() - 1]
    } else {
        line
    };
    if line.ends_with(b"\r") {
        &line[..line.len() - 1]
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempdir::TempDir;
    use test_utils::{run_session, run_session_bytes};

    #[test]
    fn balanced_then_quit() {
        assert_eq!(
            run_session("((())())()\nq\n"),
            format!(
                "{p}Input is balanced with stack.\nInput is balanced with queue.\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn not_balanced() {
        for input in &["))()\nq\n", "(()))\nq\n", ")(\nq\n"] {
            assert_eq!(
                run_session(input),
                format!(
                    "{p}Input is not balanced with stack.\nInput is not balanced with queue.\n{p}",
                    p = PROMPT
                ),
                "input = {:?}",
                input
            );
        }
    }

    #[test]
    fn invalid_input_reprompts() {
        assert_eq!(
            run_session("(a)\n[]\n()\nQ\n"),
            format!(
                "{p}Invalid input.\n{p}Invalid input.\n{p}\
                 Input is balanced with stack.\nInput is balanced with queue.\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn quit_only_looks_at_first_character() {
        assert_eq!(run_session("quit\n()\n"), PROMPT);
        assert_eq!(run_session("Quack\n"), PROMPT);
        assert_eq!(
            run_session("()q\nq\n"),
            format!("{p}Invalid input.\n{p}", p = PROMPT)
        );
    }

    #[test]
    fn empty_line_is_balanced() {
        assert_eq!(
            run_session("\nq\n"),
            format!(
                "{p}Input is balanced with stack.\nInput is balanced with queue.\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn end_of_input_without_quitting() {
        assert_eq!(run_session(""), format!("{}\n", PROMPT));
        assert_eq!(
            run_session("(())"),
            format!(
                "{p}Input is balanced with stack.\nInput is balanced with queue.\n{p}\n",
                p = PROMPT
            )
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(
            run_session("()\r\n(\r\nq\r\n"),
            format!(
                "{p}Input is balanced with stack.\nInput is balanced with queue.\n\
                 {p}Input is not balanced with stack.\nInput is not balanced with queue.\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn strips_one_terminator_only() {
        assert_eq!(strip_line_terminator(b"()\n"), b"()");
        assert_eq!(strip_line_terminator(b"()\r\n"), b"()");
        assert_eq!(strip_line_terminator(b"()\n\n"), b"()\n");
        assert_eq!(strip_line_terminator(b"()"), b"()");
        assert_eq!(strip_line_terminator(b""), b"");
    }

    #[test]
    fn non_utf8_line_is_invalid_input() {
        assert_eq!(
            run_session_bytes(b"(\xff)\n()\nq\n"),
            format!(
                "{p}Invalid input.\n{p}\
                 Input is balanced with stack.\nInput is balanced with queue.\n{p}",
                p = PROMPT
            )
        );
        assert_eq!(
            run_session_bytes(b"\xc3\n\xffq\nq\xff\n"),
            format!("{p}Invalid input.\n{p}Invalid input.\n{p}", p = PROMPT)
        );
    }

    #[test]
    fn logger_panic_is_an_error() {
        struct Panicky;

        impl Write for Panicky {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                panic!("log writer exploded")
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut output = vec![];
        match run_logged(Panicky, io::Cursor::new(&b"()\nq\n"[..]), &mut output) {
            Err(error::Error::LoggerPanicked) => {}
            otherwise => panic!("expected the logger panic to be reported, got {:?}", otherwise),
        }

        // The session itself still ran to completion.
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!(
                "{p}Input is balanced with stack.\nInput is balanced with queue.\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn writes_log_file() {
        let dir = TempDir::new("writes_log_file").expect("should create temp dir");
        let path = dir.path().join("parens.log");

        let mut output = vec![];
        Options::new()
            .log_file(&path)
            .run_with(io::Cursor::new(&b"(x\n(())\nq\n"[..]), &mut output)
            .expect("session should run OK");

        let mut log = String::new();
        fs::File::open(&path)
            .expect("log file should exist")
            .read_to_string(&mut log)
            .expect("log file should be readable");

        assert_eq!(
            log,
            "Session: read \"(x\"\n\
             Session: rejected \"(x\": invalid character 'x' at offset 1\n\
             Session: read \"(())\"\n\
             Checker stack: \"(())\" is balanced\n\
             Checker queue: \"(())\" is balanced\n\
             Session: read \"q\"\n\
             Session: quit requested\n"
        );
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let dir = TempDir::new("unwritable_log_file").expect("should create temp dir");
        let path = dir.path().join("missing").join("parens.log");

        let mut output = vec![];
        match Options::new()
            .log_file(&path)
            .run_with(io::Cursor::new(&b"q\n"[..]), &mut output)
        {
            Err(error::Error::Io(_)) => {}
            otherwise => panic!("expected an IO error, got {:?}", otherwise),
        }
        assert!(output.is_empty());
    }
}
