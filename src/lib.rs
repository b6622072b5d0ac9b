//! Evaluates `+ - * /` arithmetic over floating-point literals.
//!
//! Source text is scanned into tokens ([`parse::lex`]), parsed into one tree
//! per top-level expression ([`parse::parse`]) and each tree is evaluated by
//! the [`interpret::Interpreter`]. A [`Session`] drives all three.

pub mod ast;
pub mod interpret;
pub mod parse;
pub mod report;
pub mod session;
pub mod span;
pub mod token;

use std::io::{self, Write};

use report::Reporter;
pub use session::{Outcome, Session};

/// Runs `source` through a fresh [`Session`].
pub fn run(source: &str, out: &mut dyn Write, reporter: &mut dyn Reporter) -> io::Result<Outcome> {
    Session::new(source).run(out, reporter)
}
