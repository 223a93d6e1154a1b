//! The logger actor receives log messages and writes them to a log file.

use error;
use std::fmt;
use std::io::Write;
use std::sync::mpsc;
use std::thread;

/// The different kinds of log messages that can be sent to the logger actor.
#[derive(Debug)]
enum LoggerMessage {
    ReadInput(String),
    InvalidInput(String, error::Error),
    Checked(&'static str, String, bool),
    Quit,
    EndOfInput,
}

impl fmt::Display for LoggerMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoggerMessage::ReadInput(ref input) => write!(f, "Session: read {:?}", input),
            LoggerMessage::InvalidInput(ref input, ref err) => {
                write!(f, "Session: rejected {:?}: {}", input, err)
            }
            LoggerMessage::Checked(checker, ref input, balanced) => {
                write!(
                    f,
                    "Checker {}: {:?} is {}balanced",
                    checker,
                    input,
                    if balanced { "" } else { "not " }
                )
            }
            LoggerMessage::Quit => write!(f, "Session: quit requested"),
            LoggerMessage::EndOfInput => write!(f, "Session: end of input"),
        }
    }
}

/// A client to the logger actor.
///
/// Logging never fails from the client's point of view: if the actor has gone
/// away (for example because its log file stopped accepting writes), messages
/// are dropped.
#[derive(Clone, Debug)]
pub struct Logger {
    sender: mpsc::Sender<LoggerMessage>,
}

/// Logger client implementation.
impl Logger {
    /// Spawn a `Logger` actor, writing logs to the given `Write`able.
    ///
    /// The actor exits once every `Logger` client has been dropped, so drop
    /// them all before joining the returned handle.
    pub fn spawn<W>(to: W) -> error::Result<(Logger, thread::JoinHandle<()>)>
    where
        W: 'static + Send + Write,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("parens-logger".into())
            .spawn(move || Logger::run(to, receiver))?;
        Ok((Logger { sender: sender }, handle))
    }

    /// Log that a line of input was read.
    pub fn read_input(&self, input: &str) {
        self.send(LoggerMessage::ReadInput(input.into()));
    }

    /// Log that a line of input was rejected by validation.
    pub fn invalid_input(&self, input: &str, err: error::Error) {
        self.send(LoggerMessage::InvalidInput(input.into(), err));
    }

    /// Log the verdict of the named checker on the given input.
    pub fn checked(&self, checker: &'static str, input: &str, balanced: bool) {
        self.send(LoggerMessage::Checked(checker, input.into(), balanced));
    }

    /// Log that the user asked to quit.
    pub fn quit(&self) {
        self.send(LoggerMessage::Quit);
    }

    /// Log that input ran out before the user asked to quit.
    pub fn end_of_input(&self) {
        self.send(LoggerMessage::EndOfInput);
    }

    fn send(&self, msg: LoggerMessage) {
        let _ = self.sender.send(msg);
    }
}

/// Logger actor implementation.
impl Logger {
    fn run<W>(mut to: W, incoming: mpsc::Receiver<LoggerMessage>)
    where
        W: Write,
    {
        for log_msg in incoming {
            if writeln!(&mut to, "{}", log_msg).is_err() {
                return;
            }
        }
        let _ = to.flush();
    }
}
