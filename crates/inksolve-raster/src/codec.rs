//! PNG encoding and decoding of snapshots.

use crate::snapshot::Snapshot;
use crate::RasterError;

/// Encode a snapshot as an RGBA8 PNG.
pub fn encode_png(snapshot: &Snapshot) -> Result<Vec<u8>, RasterError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, snapshot.width(), snapshot.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(snapshot.rgba())?;
    }
    Ok(out)
}

/// Decode an RGBA8 PNG back into a snapshot.
///
/// Only the layout produced by [`encode_png`] is accepted; this exists for
/// the collaborator-boundary round trip, not as a general image loader.
pub fn decode_png(data: &[u8]) -> Result<Snapshot, RasterError> {
    let decoder = png::Decoder::new(std::io::Cursor::new(data));
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
        return Err(RasterError::UnsupportedPng(format!(
            "{:?}/{:?}",
            info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());
    Snapshot::new(info.width, info.height, buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkered_snapshot() -> Snapshot {
        let (width, height) = (8u32, 6u32);
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let on = (x + y) % 2 == 0;
                rgba.extend_from_slice(if on {
                    &[255, 255, 255, 255]
                } else {
                    &[0, 0, 0, 255]
                });
            }
        }
        Snapshot::new(width, height, rgba).unwrap()
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let original = checkered_snapshot();
        let png = encode_png(&original).unwrap();
        let decoded = decode_png(&png).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_png_magic_bytes() {
        let png = encode_png(&checkered_snapshot()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_png(b"not a png").is_err());
    }
}
