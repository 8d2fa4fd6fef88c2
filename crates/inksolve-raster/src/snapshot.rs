//! Immutable raster snapshots of the drawing surface.

use crate::RasterError;

/// A height×width×4 RGBA raster captured at submission time.
///
/// Never mutated after creation; the pixel data uses straight (unassociated)
/// alpha, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Snapshot {
    /// Wrap an RGBA buffer, validating its length against the dimensions.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(RasterError::BufferMismatch {
                len: rgba.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA pixel data.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The RGBA value at pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_validation() {
        assert!(Snapshot::new(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Snapshot::new(2, 2, vec![0; 15]),
            Err(RasterError::BufferMismatch { .. })
        ));
    }

    #[test]
    fn test_pixel_lookup() {
        let mut rgba = vec![0u8; 16];
        rgba[4..8].copy_from_slice(&[1, 2, 3, 4]); // pixel (1, 0)
        let snapshot = Snapshot::new(2, 2, rgba).unwrap();
        assert_eq!(snapshot.pixel(1, 0), [1, 2, 3, 4]);
        assert_eq!(snapshot.pixel(0, 1), [0, 0, 0, 0]);
    }
}
