mod ast;
mod error;
mod locations;
pub mod tokenizer;

pub use ast::*;
pub use error::Error;
pub use locations::Span;
pub use tokenizer::tokenize_string;
