use super::Error;

/// Error returned by the server when a filter expression exceeds the
/// criteria-count limit.
///
/// Recoverable only when the filter is a flat OR-chain of at least 100
/// clauses; the query engine re-issues it in groups of 99.
#[derive(Debug)]
pub(super) struct FilterTooComplexError {
    message: Box<str>,
}

impl std::error::Error for FilterTooComplexError {}

impl core::fmt::Display for FilterTooComplexError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "too many criteria in query: {}", self.message)
    }
}

impl Error {
    /// Creates a filter-too-complex error.
    pub fn filter_too_complex(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FilterTooComplex(FilterTooComplexError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a filter-too-complex error.
    pub fn is_filter_too_complex(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FilterTooComplex(_))
    }
}
