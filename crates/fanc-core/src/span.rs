//! Source code span tracking for error reporting.

/// A byte range of source text together with the line it is reported on.
///
/// `line` is 1-based and refers to the line where the spanned text ends,
/// which is the line a diagnostic for a completed production points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if a byte offset falls inside this span.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merges two spans into a single span covering both.
    ///
    /// The merged span reports the line of whichever input ends last.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let line = if other.end >= self.end {
            other.line
        } else {
            self.line
        };

        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line,
        }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::from(span.start..span.end)
    }
}
