use super::Error;
use chrono::{DateTime, Utc};

/// Error returned when the server throttles the account's API request rate.
///
/// Carries the timestamp the server allows the next attempt at. The query
/// engine blocks until that time and retries the same call.
#[derive(Debug)]
pub(super) struct RateLimitedError {
    retry_at: DateTime<Utc>,
}

impl std::error::Error for RateLimitedError {}

impl core::fmt::Display for RateLimitedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "api request limit exceeded, retry at {}", self.retry_at)
    }
}

impl Error {
    /// Creates a rate-limited error resumable at the given time.
    pub fn rate_limited(retry_at: DateTime<Utc>) -> Error {
        Error::from(super::ErrorKind::RateLimited(RateLimitedError { retry_at }))
    }

    /// Returns `true` if this error is a rate-limited error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RateLimited(_))
    }

    /// The time the server allows the next attempt at, if this is a
    /// rate-limited error.
    pub fn retry_at(&self) -> Option<DateTime<Utc>> {
        match self.kind() {
            super::ErrorKind::RateLimited(err) => Some(err.retry_at),
            _ => None,
        }
    }
}
