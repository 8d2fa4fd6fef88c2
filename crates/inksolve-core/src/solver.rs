//! The seam to the inference collaborator.

use thiserror::Error;

/// Failures surfaced by an inference collaborator.
///
/// All of these are terminal for the request that raised them; nothing in
/// the session retries.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("inference service returned HTTP status {0}")]
    Status(u16),
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),
}

/// A synchronous request/response client for the inference collaborator.
///
/// One encoded PNG in, free-form text out. Implementations own the request
/// envelope (instruction string, base64 wrapping) and any transport detail;
/// the session controller only sees this trait.
pub trait SolveClient {
    /// Submit one PNG-encoded drawing and return the model's text.
    fn solve(&self, png: &[u8]) -> Result<String, SolveError>;
}
