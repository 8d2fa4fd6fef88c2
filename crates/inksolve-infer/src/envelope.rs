//! The base64 text envelope wrapping the PNG image for transmission.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// MIME type declared alongside the envelope.
pub const PNG_MIME: &str = "image/png";

/// Wrap encoded PNG bytes in the base64 text envelope.
pub fn wrap(png: &[u8]) -> String {
    STANDARD.encode(png)
}

/// Unwrap the envelope back into PNG bytes (collaborator boundary / tests).
pub fn unwrap(envelope: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(envelope)
}
