use std::{fmt, io, io::Read};

use crate::format::PixelFormat;

/// Size of the on-disk header: four packed little-endian `u32`s, no padding.
pub const HEADER_LEN: usize = 16;

/// Errors from reading a dump header.
#[derive(Debug)]
pub enum HeaderError {
    /// The stream ended before all 16 header bytes were read.
    Truncated,
    /// Underlying read failure other than end-of-stream.
    Io(io::Error),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Truncated => write!(f, "input ended before the {HEADER_LEN}-byte header"),
            HeaderError::Io(err) => write!(f, "header read failed: {err}"),
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::Truncated => None,
            HeaderError::Io(err) => Some(err),
        }
    }
}

/// Fixed header at the front of every raw dump file.
///
/// Field order is wire format: format code, bytes per pixel, width, height.
///
/// # Example
/// ```rust
/// use rawpix_core::prelude::{PixelFormat, RawHeader};
///
/// let mut bytes = Vec::new();
/// bytes.extend_from_slice(&PixelFormat::R8G8B8A8_UNORM.to_u32().to_le_bytes());
/// bytes.extend_from_slice(&4u32.to_le_bytes());
/// bytes.extend_from_slice(&640u32.to_le_bytes());
/// bytes.extend_from_slice(&480u32.to_le_bytes());
///
/// let header = RawHeader::read_from(&mut bytes.as_slice()).unwrap();
/// assert_eq!(header.format, PixelFormat::R8G8B8A8_UNORM);
/// assert_eq!((header.width, header.height), (640, 480));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawHeader {
    /// Bit-packed pixel format code.
    pub format: PixelFormat,
    /// Bytes per pixel as written by the dump hook.
    pub cpp: u32,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
}

impl RawHeader {
    /// Read the 16-byte header from the front of a stream.
    ///
    /// Leaves the stream positioned at the first pixel byte.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, HeaderError> {
        let mut buf = [0u8; HEADER_LEN];
        reader.read_exact(&mut buf).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                HeaderError::Truncated
            } else {
                HeaderError::Io(err)
            }
        })?;
        let word = |off: usize| u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]]);
        Ok(Self {
            format: PixelFormat::from(word(0)),
            cpp: word(4),
            width: word(8),
            height: word(12),
        })
    }

    /// Size of the pixel payload that follows the header, `None` on overflow.
    pub fn pixel_bytes(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.cpp as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(format: u32, cpp: u32, width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN);
        for field in [format, cpp, width, height] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn parses_fields_in_wire_order() {
        let bytes = header_bytes(PixelFormat::B8G8R8A8_UNORM.to_u32(), 4, 1920, 1080);
        let header = RawHeader::read_from(&mut bytes.as_slice()).unwrap();
        assert_eq!(header.format, PixelFormat::B8G8R8A8_UNORM);
        assert_eq!(header.cpp, 4);
        assert_eq!(header.width, 1920);
        assert_eq!(header.height, 1080);
    }

    #[test]
    fn short_header_is_truncated() {
        let bytes = header_bytes(0, 4, 2, 2);
        let err = RawHeader::read_from(&mut &bytes[..HEADER_LEN - 1]).unwrap_err();
        assert!(matches!(err, HeaderError::Truncated));
    }

    #[test]
    fn pixel_bytes_checks_overflow() {
        let header = RawHeader {
            format: PixelFormat::R8G8B8A8_UNORM,
            cpp: 4,
            width: u32::MAX,
            height: u32::MAX,
        };
        assert_eq!(header.pixel_bytes(), None);

        let header = RawHeader { width: 3, height: 2, ..header };
        assert_eq!(header.pixel_bytes(), Some(24));
    }
}
