use super::Error;

/// Error from the HTTP transport or any other fault the server does not
/// classify. Never retried.
#[derive(Debug)]
pub(super) struct TransportError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Transport(TransportError {
            inner: Box::new(err),
        }))
    }

    /// Creates a transport error from a bare message, for faults that carry
    /// no underlying error value.
    pub fn transport_message(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Transport(TransportError {
            inner: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a transport error.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Transport(_))
    }
}
