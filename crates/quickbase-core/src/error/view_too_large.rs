use super::Error;

/// Error returned by the server when a query's result view exceeds its size
/// limit. Always recoverable via adaptive paging.
#[derive(Debug)]
pub(super) struct ViewTooLargeError {
    message: Box<str>,
}

impl std::error::Error for ViewTooLargeError {}

impl core::fmt::Display for ViewTooLargeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "view too large: {}", self.message)
    }
}

impl Error {
    /// Creates a view-too-large error.
    pub fn view_too_large(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ViewTooLarge(ViewTooLargeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a view-too-large error.
    pub fn is_view_too_large(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ViewTooLarge(_))
    }
}
