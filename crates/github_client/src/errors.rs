//! Error types for repository host operations.
//!
//! Every call made against the repository host fails with exactly one of the
//! variants defined here. The variants describe *how* the host call failed, not
//! which call it was; callers attach that context themselves.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while talking to the repository host.
///
/// ## Examples
///
/// ```rust
/// use github_client::Error;
///
/// let error = Error::HostRejected {
///     status: 404,
///     message: "Not Found".to_string(),
/// };
///
/// assert_eq!(error.status(), Some(404));
/// assert_eq!(error.code(), "HOST_REJECTED");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be built or a request could not be formed.
    ///
    /// This covers malformed base URIs and credentials that cannot be carried
    /// in an HTTP header.
    #[error("Failed to configure the repository host client: {0}")]
    ClientConfiguration(String),

    /// The host could not be reached.
    ///
    /// Connection failures, TLS failures and timeouts all end up here.
    #[error("Repository host is unavailable: {message}")]
    HostUnavailable { message: String },

    /// The host answered with a non-success status code.
    ///
    /// Authentication failures for an invalid credential are reported through
    /// this variant with status 401.
    #[error("Repository host rejected the request with status {status}: {message}")]
    HostRejected { status: u16, message: String },

    /// The host answered, but the body did not have the expected shape.
    #[error("Repository host returned a malformed response: {message}")]
    HostMalformedResponse { message: String },
}

impl Error {
    /// Returns a stable, machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Error::ClientConfiguration(_) => "CLIENT_CONFIGURATION",
            Error::HostUnavailable { .. } => "HOST_UNAVAILABLE",
            Error::HostRejected { .. } => "HOST_REJECTED",
            Error::HostMalformedResponse { .. } => "HOST_MALFORMED_RESPONSE",
        }
    }

    /// Returns the HTTP status reported by the host, if the host rejected the call.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HostRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
