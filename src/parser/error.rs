use super::locations::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(Span, String);

impl Error {
    pub fn new(span: Span, msg: &str) -> Self {
        Self(span, msg.to_string())
    }

    pub fn unrecognized(span: Span, text: &str) -> Self {
        Self(span, format!("unrecognized input '{text}'"))
    }

    pub fn imbalanced(span: Span) -> Self {
        Self::new(span, "Imbalanced parentheses")
    }

    pub fn span(&self) -> Span {
        self.0
    }

    pub fn message(&self) -> &str {
        &self.1
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.1, self.0)
    }
}

impl std::error::Error for Error {}
