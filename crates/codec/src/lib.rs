#![doc = include_str!("../README.md")]

pub mod decoder;
pub mod png;

pub use decoder::RawImageDecoder;

use std::io;

use rawpix_core::prelude::*;

/// Errors emitted while decoding a raw dump.
///
/// All variants are fatal for the file being converted; there is no partial
/// result and no retry.
///
/// # Example
/// ```rust
/// use rawpix_codec::DecodeError;
/// use rawpix_core::prelude::PixelFormat;
///
/// let err = DecodeError::UnknownFormat(PixelFormat::from(0xdead_beef));
/// assert!(matches!(err, DecodeError::UnknownFormat(_)));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The header's format code has no registry entry; the channel layout is
    /// unknowable, so the file cannot be decoded.
    #[error("unknown pixel format {0}")]
    UnknownFormat(PixelFormat),
    /// The header claims a pixel stride other than the 4 bytes this decoder
    /// implements.
    #[error("unsupported pixel stride: {cpp} bytes per pixel (only 4 is supported)")]
    UnsupportedPixelStride {
        /// Bytes per pixel found in the header.
        cpp: u32,
    },
    /// The stream ended before the named section was fully read.
    #[error("input truncated while reading {context}")]
    Truncated {
        /// Which part of the file was being read.
        context: &'static str,
    },
    /// Header dimensions whose byte size overflows addressable memory.
    #[error("image dimensions overflow: {width}x{height}")]
    Oversized { width: u32, height: u32 },
    /// Underlying read failure other than end-of-stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RegistryError> for DecodeError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Unknown(code) => DecodeError::UnknownFormat(code),
        }
    }
}

impl From<HeaderError> for DecodeError {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::Truncated => DecodeError::Truncated { context: "header" },
            HeaderError::Io(err) => DecodeError::Io(err),
        }
    }
}

/// Errors from PNG encoding or output publishing.
#[derive(Debug, thiserror::Error)]
pub enum PngError {
    /// The encoder rejected the raster (e.g. zero-dimension images, which
    /// PNG cannot represent).
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    /// Raster buffer did not match its declared dimensions.
    #[error("raster buffer does not match its dimensions")]
    InvalidRaster,
    /// Write or rename failure, with the path that failed.
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: io::Error,
    },
}
