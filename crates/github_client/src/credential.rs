//! Caller-supplied credentials.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;

/// An opaque token that authorizes calls against the repository host.
///
/// A credential is supplied by the caller for a single request and forwarded
/// verbatim on every authenticated host call made while serving that request.
/// It is never stored and never written to logs.
///
/// # Examples
///
/// ```rust
/// use github_client::Credential;
///
/// let credential = Credential::new("ghp_example");
/// assert_eq!(format!("{:?}", credential), "Credential([REDACTED])");
/// ```
pub struct Credential(SecretString);

impl Credential {
    /// Wraps a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Value for the `Authorization` header sent to the host.
    pub(crate) fn authorization_header(&self) -> String {
        format!("token {}", self.0.expose_secret())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}
