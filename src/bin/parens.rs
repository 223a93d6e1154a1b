//! The `parens` executable.
#![deny(missing_docs)]

extern crate clap;
extern crate parens;

use parens::error;
use std::io::{self, Write};
use std::process;

fn main() {
    if let Err(e) = try_main() {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        let _ = writeln!(&mut stderr, "Error: {}", e);
        process::exit(1);
    }
}

fn parse_args() -> clap::ArgMatches<'static> {
    clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            clap::Arg::with_name("log")
                .short("l")
                .long("log")
                .takes_value(true)
                .value_name("FILE")
                .help("Log every line read and every checker's verdict to FILE."),
        )
        .get_matches()
}

fn try_main() -> error::Result<()> {
    let args = parse_args();

    let mut options = parens::Options::new();

    if let Some(log) = args.value_of("log") {
        options = options.log_file(log);
    }

    options.run()
}
