use super::Error;

/// Error returned when the server abandons a query that exceeded its
/// computation time budget. Handled the same way as a too-large view.
#[derive(Debug)]
pub(super) struct OperationTimeoutError {
    message: Box<str>,
}

impl std::error::Error for OperationTimeoutError {}

impl core::fmt::Display for OperationTimeoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "operation took too long: {}", self.message)
    }
}

impl Error {
    /// Creates an operation-timeout error.
    pub fn operation_timeout(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::OperationTimeout(OperationTimeoutError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an operation-timeout error.
    pub fn is_operation_timeout(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::OperationTimeout(_))
    }
}
