use crate::parser;

/// Errors surfaced by [`Interpreter::interpret`](crate::Interpreter::interpret).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized or matches no grammar rule.
    #[error("{0}")]
    InvalidInput(String),
    /// A variable was read before anything was assigned to it.
    #[error("Undefined variable {0}")]
    UndefinedVariable(String),
    /// Division or modulo by zero.
    #[error("Arithmetic fault: {0}")]
    ArithmeticFault(String),
}

impl Error {
    pub(crate) fn invalid() -> Self {
        Self::InvalidInput("Invalid input.".to_string())
    }

    pub(crate) fn too_deep() -> Self {
        Self::InvalidInput("Invalid input: expression nested too deeply.".to_string())
    }

    /// True for every kind of invalid input, undefined variables included.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UndefinedVariable(_))
    }
}

impl From<parser::Error> for Error {
    fn from(err: parser::Error) -> Self {
        Self::InvalidInput(format!("Invalid input: failed to tokenize. ({err})"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
