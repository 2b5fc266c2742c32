/// A half-open range of byte columns within a single input line.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    pub(super) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at the end of `input`.
    pub(super) fn end_of(input: &str) -> Self {
        Self::new(input.len(), input.len())
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Columns are reported 1-based.
        if self.end > self.start + 1 {
            write!(f, "columns {}-{}", self.start + 1, self.end)
        } else {
            write!(f, "column {}", self.start + 1)
        }
    }
}
