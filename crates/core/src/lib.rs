#![doc = include_str!("../README.md")]

pub mod format;
pub mod header;
pub mod raster;
pub mod registry;

pub mod prelude {
    pub use crate::{
        format::{Channel, ChannelType, Grain, Layout, PixelFormat, Swizzle},
        header::{HeaderError, RawHeader, HEADER_LEN},
        raster::RgbRaster,
        registry::{FormatRegistry, RegistryError},
    };
}
