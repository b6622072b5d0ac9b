use std::io::{self, Write};
use std::process;

use calc_lox::report::StreamReporter;
use calc_lox::Session;
use log::{debug, info};

type DynResult = Result<(), Box<dyn std::error::Error>>;

// sysexits: data format error, internal software error
const EXIT_STATIC_ERROR: i32 = 65;
const EXIT_RUNTIME_ERROR: i32 = 70;

fn main() -> DynResult {
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Please enter your expression: ")?;
    out.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        info!("No input given");
    }
    let source = line.trim_end_matches(['\r', '\n']);

    let mut reporter = StreamReporter::new(io::stderr());
    let outcome = Session::new(source).run(&mut out, &mut reporter)?;
    debug!("{:?}", outcome);

    if reporter.had_error() {
        process::exit(EXIT_STATIC_ERROR);
    }
    if reporter.had_runtime_error() {
        process::exit(EXIT_RUNTIME_ERROR);
    }
    Ok(())
}
