use std::io::Write;

use derive_more::Display;
use log::error;

use crate::interpret::Error;
use crate::parse::ParseError;
use crate::token::Token;

/// Where on its line a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Location {
    #[display(fmt = "")]
    Nowhere,

    #[display(fmt = " at end")]
    End,

    #[display(fmt = " at '{}'", _0)]
    Lexeme(String),
}

impl Location {
    pub fn of(token: &Token) -> Self {
        if token.is_end() {
            Location::End
        } else {
            Location::Lexeme(token.lexeme.clone())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Diagnostic {
    #[display(fmt = "[line {}] Error{}: {}", line, location, message)]
    Static {
        line: usize,
        location: Location,
        message: String,
    },

    #[display(fmt = "{}\n[line {}]", message, line)]
    Runtime { line: usize, message: String },
}

impl Diagnostic {
    pub fn is_runtime(&self) -> bool {
        matches!(self, Diagnostic::Runtime { .. })
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        use ParseError::*;
        let (line, location) = match err {
            UnexpectedCharacter(_, line, _) | ParseToNumber(line, _) => (*line, Location::Nowhere),
            ExpectNumber(token) | UnknownOperator(token) => (token.line, Location::of(token)),
            Eof(line) => (*line, Location::End),
        };
        Diagnostic::Static {
            line,
            location,
            message: err.to_string(),
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        Diagnostic::Runtime {
            line: err.token().map(|t| t.line).unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

/// Receives every diagnostic the pipeline produces, in the order they happen.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Writes each diagnostic to a stream as soon as it arrives.
pub struct StreamReporter<W: Write> {
    writer: W,
    static_count: usize,
    runtime_count: usize,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            static_count: 0,
            runtime_count: 0,
        }
    }

    pub fn had_error(&self) -> bool {
        self.static_count > 0
    }

    pub fn had_runtime_error(&self) -> bool {
        self.runtime_count > 0
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for StreamReporter<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_runtime() {
            self.runtime_count += 1;
        } else {
            self.static_count += 1;
        }
        if let Err(err) = writeln!(self.writer, "{}", diagnostic) {
            error!("Write diagnostic `{}` failed with error: {}", diagnostic, err);
        }
    }
}
