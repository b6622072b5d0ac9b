mod context;
mod error;
mod lex;
mod parser;

pub use error::ParseError;
pub use lex::lex;
pub use parser::parse;
