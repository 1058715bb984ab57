use std::io::{self, Read};

use rawpix_core::prelude::*;
use rayon::prelude::*;

use crate::DecodeError;

/// Single-pass decoder for a raw dump stream.
///
/// Construction reads and validates the header; [`decode`](Self::decode)
/// consumes the decoder and the pixel payload. The split lets callers log the
/// resolved format before committing to the pixel read. The reader is
/// borrowed state: opening and closing it is the caller's responsibility.
///
/// # Example
/// ```rust
/// use rawpix_codec::RawImageDecoder;
/// use rawpix_core::prelude::PixelFormat;
///
/// let mut dump = Vec::new();
/// dump.extend_from_slice(&PixelFormat::R8G8B8A8_UNORM.to_u32().to_le_bytes());
/// dump.extend_from_slice(&4u32.to_le_bytes());
/// dump.extend_from_slice(&1u32.to_le_bytes());
/// dump.extend_from_slice(&1u32.to_le_bytes());
/// dump.extend_from_slice(&[10, 20, 30, 255]);
///
/// let decoder = RawImageDecoder::new(dump.as_slice()).unwrap();
/// assert_eq!(decoder.format_name(), "PIPE_FORMAT_R8G8B8A8_UNORM");
/// let raster = decoder.decode().unwrap();
/// assert_eq!(raster.pixel(0, 0), Some([10, 20, 30]));
/// ```
#[derive(Debug)]
pub struct RawImageDecoder<R> {
    reader: R,
    header: RawHeader,
    format_name: &'static str,
}

impl<R: Read> RawImageDecoder<R> {
    /// Read the header and validate it against the registry.
    ///
    /// Fails with [`DecodeError::UnknownFormat`] or
    /// [`DecodeError::UnsupportedPixelStride`] before any pixel byte is
    /// consumed from `reader`.
    pub fn new(mut reader: R) -> Result<Self, DecodeError> {
        let header = RawHeader::read_from(&mut reader)?;
        let format_name = FormatRegistry::global().resolve(header.format)?;
        if header.cpp != 4 {
            return Err(DecodeError::UnsupportedPixelStride { cpp: header.cpp });
        }
        Ok(Self {
            reader,
            header,
            format_name,
        })
    }

    /// The validated header.
    pub fn header(&self) -> &RawHeader {
        &self.header
    }

    /// Canonical name of the header's format code.
    pub fn format_name(&self) -> &'static str {
        self.format_name
    }

    /// Read the pixel payload and strip alpha into an RGB raster.
    ///
    /// Pixel bytes are taken as literal (R, G, B, A) regardless of the
    /// format's declared swizzle; the producing dump tool reads them the same
    /// way, so e.g. BGRA dumps come out with red and blue exchanged on both
    /// sides. Output row `y`, column `x` is input pixel `y * width + x`.
    pub fn decode(mut self) -> Result<RgbRaster, DecodeError> {
        let width = self.header.width;
        let height = self.header.height;
        let mut raster = RgbRaster::new(width, height).ok_or(DecodeError::Oversized {
            width,
            height,
        })?;
        if raster.is_empty() {
            // Zero-dimension dumps carry no payload; nothing to read.
            return Ok(raster);
        }

        let src_len = self
            .header
            .pixel_bytes()
            .ok_or(DecodeError::Oversized { width, height })?;
        let mut src = vec![0u8; src_len];
        self.reader.read_exact(&mut src).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                DecodeError::Truncated {
                    context: "pixel data",
                }
            } else {
                DecodeError::Io(err)
            }
        })?;

        let row_bytes = width as usize * 3;
        raster
            .data_mut()
            .par_chunks_mut(row_bytes)
            .zip(src.par_chunks(width as usize * 4))
            .for_each(|(dst_line, src_line)| {
                for (dst_px, src_px) in dst_line
                    .chunks_exact_mut(3)
                    .zip(src_line.chunks_exact(4))
                {
                    dst_px[0] = src_px[0];
                    dst_px[1] = src_px[1];
                    dst_px[2] = src_px[2];
                }
            });

        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dump(format: u32, cpp: u32, width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for field in [format, cpp, width, height] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes.extend_from_slice(pixels);
        bytes
    }

    #[test]
    fn decodes_2x2_rgba_dropping_alpha() {
        let pixels = [
            10, 20, 30, 255, //
            40, 50, 60, 255, //
            70, 80, 90, 255, //
            100, 110, 120, 255,
        ];
        let bytes = dump(PixelFormat::R8G8B8A8_UNORM.to_u32(), 4, 2, 2, &pixels);
        let decoder = RawImageDecoder::new(bytes.as_slice()).unwrap();
        assert_eq!(decoder.format_name(), "PIPE_FORMAT_R8G8B8A8_UNORM");

        let raster = decoder.decode().unwrap();
        assert_eq!(raster.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(raster.pixel(1, 0), Some([40, 50, 60]));
        assert_eq!(raster.pixel(0, 1), Some([70, 80, 90]));
        assert_eq!(raster.pixel(1, 1), Some([100, 110, 120]));
    }

    #[test]
    fn rejects_unknown_format_before_reading_pixels() {
        let bytes = dump(0xdead_beef, 4, 1, 1, &[1, 2, 3, 4]);
        let mut cursor = Cursor::new(bytes);
        let err = RawImageDecoder::new(&mut cursor).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFormat(_)));
        assert_eq!(cursor.position(), HEADER_LEN as u64);
    }

    #[test]
    fn rejects_unsupported_pixel_stride_without_pixel_reads() {
        let bytes = dump(PixelFormat::R8G8B8A8_UNORM.to_u32(), 3, 1, 1, &[1, 2, 3]);
        let mut cursor = Cursor::new(bytes);
        let err = RawImageDecoder::new(&mut cursor).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedPixelStride { cpp: 3 }));
        assert_eq!(cursor.position(), HEADER_LEN as u64);
    }

    #[test]
    fn zero_dimension_dump_yields_empty_raster_and_reads_nothing() {
        // Trailing garbage after the header must stay unread.
        let bytes = dump(PixelFormat::R8G8B8A8_UNORM.to_u32(), 4, 0, 3, &[0xab; 8]);
        let mut cursor = Cursor::new(bytes);
        let raster = RawImageDecoder::new(&mut cursor).unwrap().decode().unwrap();
        assert!(raster.is_empty());
        assert_eq!(raster.width(), 0);
        assert_eq!(raster.height(), 3);
        assert_eq!(cursor.position(), HEADER_LEN as u64);
    }

    #[test]
    fn truncated_header_is_reported() {
        let bytes = dump(PixelFormat::R8G8B8A8_UNORM.to_u32(), 4, 2, 2, &[]);
        let err = RawImageDecoder::new(&bytes[..10]).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { context: "header" }));
    }

    #[test]
    fn truncated_pixel_data_is_reported_mid_row() {
        // 2x2 needs 16 payload bytes; provide 7 to stop inside a pixel.
        let bytes = dump(PixelFormat::R8G8B8A8_UNORM.to_u32(), 4, 2, 2, &[1; 7]);
        let err = RawImageDecoder::new(bytes.as_slice())
            .unwrap()
            .decode()
            .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Truncated {
                context: "pixel data"
            }
        ));
    }

    #[test]
    fn wide_row_decode_matches_scalar_strip() {
        // Enough pixels to exercise the parallel row split.
        let width = 64u32;
        let height = 5u32;
        let mut pixels = Vec::new();
        for i in 0..(width * height) {
            let base = (i % 61) as u8;
            pixels.extend_from_slice(&[base, base.wrapping_add(1), base.wrapping_add(2), 0xff]);
        }
        let bytes = dump(PixelFormat::B8G8R8A8_UNORM.to_u32(), 4, width, height, &pixels);
        let raster = RawImageDecoder::new(bytes.as_slice())
            .unwrap()
            .decode()
            .unwrap();
        for y in 0..height {
            for x in 0..width {
                let base = ((y * width + x) % 61) as u8;
                assert_eq!(
                    raster.pixel(x, y),
                    Some([base, base.wrapping_add(1), base.wrapping_add(2)])
                );
            }
        }
    }
}
