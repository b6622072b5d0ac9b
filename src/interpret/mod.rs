mod error;
mod interpreter;
mod value;

pub use error::Error;
pub use interpreter::Interpreter;
pub use value::Value;
