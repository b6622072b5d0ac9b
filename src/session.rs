use std::io::{self, Write};

use log::{error, info};

use crate::interpret::{Error, Interpreter};
use crate::parse;
use crate::report::{Diagnostic, Reporter};

/// What a finished [`Session`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub emitted: usize,
}

/// One source string taken through scan, parse and evaluation.
///
/// `run` consumes the session, so the same source cannot be run twice
/// through one handle and nothing is shared between runs.
pub struct Session {
    source: String,
}

impl Session {
    pub fn new(source: impl Into<String>) -> Self {
        Session {
            source: source.into(),
        }
    }

    pub fn run(self, out: &mut dyn Write, reporter: &mut dyn Reporter) -> io::Result<Outcome> {
        info!("Running {:?}", self.source);

        let tokens = parse::lex(&self.source, reporter);
        let exprs = parse::parse(&tokens, reporter);

        let mut itp = Interpreter::new(out);
        match itp.interpret(&exprs) {
            Ok(()) => {}
            Err(Error::WriteFailed(value, err)) => {
                error!("Write value `{}` failed with error: {}", value, err);
                return Err(err);
            }
            Err(err) => {
                error!("Interpreter error: {}", err);
                reporter.report(Diagnostic::from(&err));
            }
        }

        Ok(Outcome {
            emitted: itp.emitted(),
        })
    }
}
