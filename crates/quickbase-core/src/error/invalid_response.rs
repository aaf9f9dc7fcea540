use super::Error;

/// Error when the transport returns a response whose shape does not match
/// the operation that was issued.
#[derive(Debug)]
pub(super) struct InvalidResponseError {
    expected: &'static str,
}

impl std::error::Error for InvalidResponseError {}

impl core::fmt::Display for InvalidResponseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid response: expected {}", self.expected)
    }
}

impl Error {
    /// Creates an invalid-response error naming the expected response shape.
    pub fn invalid_response(expected: &'static str) -> Error {
        Error::from(super::ErrorKind::InvalidResponse(InvalidResponseError {
            expected,
        }))
    }

    /// Returns `true` if this error is an invalid-response error.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidResponse(_))
    }
}
