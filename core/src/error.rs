//! Error type for remote-call failures.
//!
//! # Design
//! Every operation fails the same way: the remote call did not produce a
//! usable confirmation, local state was left untouched, and the host shows
//! one human-readable line. `RemoteError` is that single surface; the
//! variants exist so tests can distinguish a bad status from a bad body, but
//! callers normally only ever format it.

use std::fmt;

/// A remote call failed or returned malformed data.
#[derive(Debug)]
pub enum RemoteError {
    /// The server answered with a non-success status (300 or above).
    Http { status: u16 },

    /// The response body could not be decoded into the expected shape.
    Decode(String),

    /// The request payload could not be encoded as JSON.
    Encode(String),

    /// A failure with a fixed description, e.g. a refused delete.
    Failed(&'static str),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Http { status } => write!(f, "HTTP error, status: {status}"),
            RemoteError::Decode(msg) => write!(f, "malformed response body: {msg}"),
            RemoteError::Encode(msg) => write!(f, "request encoding failed: {msg}"),
            RemoteError::Failed(description) => f.write_str(description),
        }
    }
}

impl std::error::Error for RemoteError {}
