//! CPU rasterization of the sketch document.
//!
//! The drawing surface of InkSolve is a fixed-size RGBA raster: the same
//! stroke list paints the screen and, at submission time, produces the
//! [`Snapshot`] that is PNG-encoded and sent to the inference collaborator.

mod codec;
mod rasterize;
mod snapshot;

pub use codec::{decode_png, encode_png};
pub use rasterize::{capture, rasterize, CanvasSpec};
pub use snapshot::Snapshot;

use thiserror::Error;

/// Rasterization and codec errors.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("pixel buffer length {len} does not match {width}x{height} RGBA")]
    BufferMismatch { len: usize, width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("PNG decoding failed: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("unsupported PNG layout: {0}")]
    UnsupportedPng(String),
}
