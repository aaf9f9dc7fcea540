mod filter_too_complex;
mod invalid_response;
mod operation_timeout;
mod rate_limited;
mod transport;
mod type_conversion;
mod validation;
mod view_too_large;

use filter_too_complex::FilterTooComplexError;
use invalid_response::InvalidResponseError;
use operation_timeout::OperationTimeoutError;
use rate_limited::RateLimitedError;
use std::sync::Arc;
use transport::TransportError;
use type_conversion::TypeConversionError;
use validation::ValidationError;
use view_too_large::ViewTooLargeError;

/// An error that can occur while talking to a QuickBase table.
///
/// The kind taxonomy mirrors the fault classification returned by the
/// transport: the adaptive query executor branches on it to decide whether a
/// fault is recoverable.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    FilterTooComplex(FilterTooComplexError),
    ViewTooLarge(ViewTooLargeError),
    OperationTimeout(OperationTimeoutError),
    RateLimited(RateLimitedError),
    Transport(TransportError),
    Validation(ValidationError),
    TypeConversion(TypeConversionError),
    InvalidResponse(InvalidResponseError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            FilterTooComplex(err) => core::fmt::Display::fmt(err, f),
            ViewTooLarge(err) => core::fmt::Display::fmt(err, f),
            OperationTimeout(err) => core::fmt::Display::fmt(err, f),
            RateLimited(err) => core::fmt::Display::fmt(err, f),
            Transport(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            InvalidResponse(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner.kind, f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.inner.kind, f)
    }
}

impl std::error::Error for Error {}
