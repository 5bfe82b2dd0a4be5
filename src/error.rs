//! Error handling module
//!
//! Defines the error types for the status probe. The two variants keep the
//! "server is down" and "server answered garbage" outcomes distinguishable at
//! the call site, since only the latter points at a protocol mismatch.

use std::io;

use thiserror::Error;

/// Result type used throughout the probe
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors produced by [`query`](crate::probe::query)
///
/// Both variants are recoverable: an unreachable target should be treated as
/// offline, a malformed response as unavailable. Neither indicates a bug in
/// the caller.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The target could not be reached: DNS failure, connection refused or
    /// reset, or the configured timeout expired before a response arrived.
    #[error("Server unreachable: {0}")]
    Unreachable(#[source] io::Error),

    /// The target answered, but the reply did not match the legacy ping
    /// frame layout.
    #[error("Malformed response: {0}")]
    MalformedResponse(&'static str),
}

impl ProbeError {
    /// Build an [`Unreachable`](Self::Unreachable) for an expired timeout
    pub(crate) fn timed_out() -> Self {
        Self::Unreachable(io::Error::new(
            io::ErrorKind::TimedOut,
            "no response within the configured timeout",
        ))
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        Self::Unreachable(err)
    }
}
