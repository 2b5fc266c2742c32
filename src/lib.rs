mod parser;
pub use parser::tokenizer::{tokenize_string, Tokenizer, MAX_NESTING};
pub use parser::{Error as TokenizeError, Expression, Operator, Span, Token};

mod error;
pub use error::{Error, Result};

mod store;
pub use store::Variables;

mod interpreter;
pub use interpreter::{Interpreter, MAX_DEPTH};

#[cfg(test)]
mod test;
