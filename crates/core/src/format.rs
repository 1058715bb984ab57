use std::fmt;

/// Layout kind held in the low two bits of a [`PixelFormat`] code.
///
/// Exactly one interpretation of the remaining bits applies per code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Swizzled RGBA/depth/stencil channels.
    Rgbazs,
    /// Packed YCbCr, with an optional reversed byte order.
    Ycbcr,
    /// Block-compressed DXT1/3/5.
    Dxt,
}

const LAYOUT_RGBAZS: u32 = 0;
const LAYOUT_YCBCR: u32 = 1;
const LAYOUT_DXT: u32 = 2;

/// Channel role selector for one slot of a [`Swizzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channel {
    R = 0,
    G = 1,
    B = 2,
    A = 3,
    /// Constant zero.
    Zero = 4,
    /// Constant one.
    One = 5,
    Depth = 6,
    Stencil = 7,
}

/// Numeric interpretation of raw channel bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ChannelType {
    Unknown = 0,
    Float = 1,
    /// Unsigned normalized to [0, 1].
    Unorm = 2,
    /// Signed normalized to [-1, 1].
    Snorm = 3,
    /// Unsigned scaled integer.
    Uscaled = 4,
    /// Signed scaled integer.
    Sscaled = 5,
    /// Gamma-encoded sRGB.
    Srgb = 6,
}

/// Unit the four per-channel sizes of an RGBAZS code are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Grain {
    /// Sizes are in bits.
    X1 = 0,
    /// Sizes are in bytes.
    X8 = 1,
    /// Sizes are in 64-bit units.
    X64 = 2,
}

/// Four packed 3-bit channel selectors (x, y, z, w slots).
///
/// # Example
/// ```rust
/// use rawpix_core::prelude::{Channel, Swizzle};
///
/// let swz = Swizzle::new(Channel::R, Channel::G, Channel::B, Channel::A);
/// assert_eq!(swz, Swizzle::RGBA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swizzle(u32);

impl Swizzle {
    /// Pack four channel selectors, 3 bits each, x in the low bits.
    pub const fn new(x: Channel, y: Channel, z: Channel, w: Channel) -> Self {
        Self((x as u32) | (y as u32) << 3 | (z as u32) << 6 | (w as u32) << 9)
    }

    /// Raw 12-bit value, as placed at bit 2 of an RGBAZS code.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const R001: Self = Self::new(Channel::R, Channel::Zero, Channel::Zero, Channel::One);
    pub const RG01: Self = Self::new(Channel::R, Channel::G, Channel::Zero, Channel::One);
    pub const RGB1: Self = Self::new(Channel::R, Channel::G, Channel::B, Channel::One);
    pub const RGBA: Self = Self::new(Channel::R, Channel::G, Channel::B, Channel::A);
    pub const ARGB: Self = Self::new(Channel::A, Channel::R, Channel::G, Channel::B);
    pub const BGRA: Self = Self::new(Channel::B, Channel::G, Channel::R, Channel::A);
    pub const _1RGB: Self = Self::new(Channel::One, Channel::R, Channel::G, Channel::B);
    pub const BGR1: Self = Self::new(Channel::B, Channel::G, Channel::R, Channel::One);
    pub const _0000: Self = Self::new(Channel::Zero, Channel::Zero, Channel::Zero, Channel::Zero);
    pub const _000R: Self = Self::new(Channel::Zero, Channel::Zero, Channel::Zero, Channel::R);
    pub const RRR1: Self = Self::new(Channel::R, Channel::R, Channel::R, Channel::One);
    pub const RRRR: Self = Self::new(Channel::R, Channel::R, Channel::R, Channel::R);
    pub const RRRG: Self = Self::new(Channel::R, Channel::R, Channel::R, Channel::G);
    pub const Z000: Self = Self::new(Channel::Depth, Channel::Zero, Channel::Zero, Channel::Zero);
    pub const _0Z00: Self = Self::new(Channel::Zero, Channel::Depth, Channel::Zero, Channel::Zero);
    pub const SZ00: Self = Self::new(Channel::Stencil, Channel::Depth, Channel::Zero, Channel::Zero);
    pub const ZS00: Self = Self::new(Channel::Depth, Channel::Stencil, Channel::Zero, Channel::Zero);
    pub const S000: Self = Self::new(Channel::Stencil, Channel::Zero, Channel::Zero, Channel::Zero);
}

/// Bit-packed 32-bit pixel-format code.
///
/// The numeric values are shared with the driver-side dump hook; the bit
/// offsets used by the builders are wire format and must not change.
///
/// # Example
/// ```rust
/// use rawpix_core::prelude::{Layout, PixelFormat};
///
/// let fmt = PixelFormat::R8G8B8A8_UNORM;
/// assert_eq!(fmt.layout(), Some(Layout::Rgbazs));
/// assert_eq!(PixelFormat::from(fmt.to_u32()), fmt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PixelFormat(u32);

impl PixelFormat {
    /// Build a swizzled RGBA/depth/stencil code.
    ///
    /// `sizes` are the x/y/z/w channel sizes in units of `grain`; each must
    /// fit in 3 bits.
    pub const fn rgbazs(swz: Swizzle, sizes: [u32; 4], grain: Grain, ty: ChannelType) -> Self {
        Self(
            LAYOUT_RGBAZS
                | swz.bits() << 2
                | sizes[0] << 14
                | sizes[1] << 17
                | sizes[2] << 20
                | sizes[3] << 23
                | (grain as u32) << 26
                | (ty as u32) << 28,
        )
    }

    /// Build a packed YCbCr code.
    pub const fn ycbcr(reversed: bool) -> Self {
        Self(LAYOUT_YCBCR | (reversed as u32) << 2)
    }

    /// Build a block-compressed DXT code (`level` is 1, 3 or 5).
    pub const fn dxt(level: u32, rsize: u32, gsize: u32, bsize: u32, asize: u32) -> Self {
        Self(LAYOUT_DXT | level << 2 | rsize << 5 | gsize << 8 | bsize << 11 | asize << 14)
    }

    /// Raw code value as found in dump headers.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Layout discriminant from the low two bits, `None` for the reserved
    /// value 3.
    pub const fn layout(self) -> Option<Layout> {
        match self.0 & 0x3 {
            LAYOUT_RGBAZS => Some(Layout::Rgbazs),
            LAYOUT_YCBCR => Some(Layout::Ycbcr),
            LAYOUT_DXT => Some(Layout::Dxt),
            _ => None,
        }
    }
}

impl From<u32> for PixelFormat {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl PixelFormat {
    pub const NONE: Self = Self::rgbazs(Swizzle::_0000, [0, 0, 0, 0], Grain::X1, ChannelType::Unknown);

    pub const A8R8G8B8_UNORM: Self = Self::rgbazs(Swizzle::ARGB, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const X8R8G8B8_UNORM: Self = Self::rgbazs(Swizzle::_1RGB, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const B8G8R8A8_UNORM: Self = Self::rgbazs(Swizzle::BGRA, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const B8G8R8X8_UNORM: Self = Self::rgbazs(Swizzle::BGR1, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const A1R5G5B5_UNORM: Self = Self::rgbazs(Swizzle::ARGB, [1, 5, 5, 5], Grain::X1, ChannelType::Unorm);
    pub const A4R4G4B4_UNORM: Self = Self::rgbazs(Swizzle::ARGB, [4, 4, 4, 4], Grain::X1, ChannelType::Unorm);
    pub const R5G6B5_UNORM: Self = Self::rgbazs(Swizzle::RGB1, [5, 6, 5, 0], Grain::X1, ChannelType::Unorm);
    pub const L8_UNORM: Self = Self::rgbazs(Swizzle::RRR1, [1, 1, 1, 0], Grain::X8, ChannelType::Unorm);
    pub const A8_UNORM: Self = Self::rgbazs(Swizzle::_000R, [0, 0, 0, 1], Grain::X8, ChannelType::Unorm);
    pub const I8_UNORM: Self = Self::rgbazs(Swizzle::RRRR, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const A8L8_UNORM: Self = Self::rgbazs(Swizzle::RRRG, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);

    pub const YCBCR: Self = Self::ycbcr(false);
    pub const YCBCR_REV: Self = Self::ycbcr(true);

    pub const Z16_UNORM: Self = Self::rgbazs(Swizzle::Z000, [2, 0, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const Z32_UNORM: Self = Self::rgbazs(Swizzle::Z000, [4, 0, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const Z32_FLOAT: Self = Self::rgbazs(Swizzle::Z000, [4, 0, 0, 0], Grain::X8, ChannelType::Float);
    pub const S8Z24_UNORM: Self = Self::rgbazs(Swizzle::SZ00, [1, 3, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const Z24S8_UNORM: Self = Self::rgbazs(Swizzle::ZS00, [3, 1, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const X8Z24_UNORM: Self = Self::rgbazs(Swizzle::_0Z00, [1, 3, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const Z24X8_UNORM: Self = Self::rgbazs(Swizzle::Z000, [3, 1, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const S8_UNORM: Self = Self::rgbazs(Swizzle::S000, [1, 0, 0, 0], Grain::X8, ChannelType::Unorm);

    pub const R64_FLOAT: Self = Self::rgbazs(Swizzle::R001, [1, 0, 0, 0], Grain::X64, ChannelType::Float);
    pub const R64G64_FLOAT: Self = Self::rgbazs(Swizzle::RG01, [1, 1, 0, 0], Grain::X64, ChannelType::Float);
    pub const R64G64B64_FLOAT: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 0], Grain::X64, ChannelType::Float);
    pub const R64G64B64A64_FLOAT: Self = Self::rgbazs(Swizzle::RGBA, [1, 1, 1, 1], Grain::X64, ChannelType::Float);

    pub const R32_FLOAT: Self = Self::rgbazs(Swizzle::R001, [4, 0, 0, 0], Grain::X8, ChannelType::Float);
    pub const R32G32_FLOAT: Self = Self::rgbazs(Swizzle::RG01, [4, 4, 0, 0], Grain::X8, ChannelType::Float);
    pub const R32G32B32_FLOAT: Self = Self::rgbazs(Swizzle::RGB1, [4, 4, 4, 0], Grain::X8, ChannelType::Float);
    pub const R32G32B32A32_FLOAT: Self = Self::rgbazs(Swizzle::RGBA, [4, 4, 4, 4], Grain::X8, ChannelType::Float);
    pub const R32_UNORM: Self = Self::rgbazs(Swizzle::R001, [4, 0, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const R32G32_UNORM: Self = Self::rgbazs(Swizzle::RG01, [4, 4, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const R32G32B32_UNORM: Self = Self::rgbazs(Swizzle::RGB1, [4, 4, 4, 0], Grain::X8, ChannelType::Unorm);
    pub const R32G32B32A32_UNORM: Self = Self::rgbazs(Swizzle::RGBA, [4, 4, 4, 4], Grain::X8, ChannelType::Unorm);
    pub const R32_USCALED: Self = Self::rgbazs(Swizzle::R001, [4, 0, 0, 0], Grain::X8, ChannelType::Uscaled);
    pub const R32G32_USCALED: Self = Self::rgbazs(Swizzle::RG01, [4, 4, 0, 0], Grain::X8, ChannelType::Uscaled);
    pub const R32G32B32_USCALED: Self = Self::rgbazs(Swizzle::RGB1, [4, 4, 4, 0], Grain::X8, ChannelType::Uscaled);
    pub const R32G32B32A32_USCALED: Self = Self::rgbazs(Swizzle::RGBA, [4, 4, 4, 4], Grain::X8, ChannelType::Uscaled);
    pub const R32_SNORM: Self = Self::rgbazs(Swizzle::R001, [4, 0, 0, 0], Grain::X8, ChannelType::Snorm);
    pub const R32G32_SNORM: Self = Self::rgbazs(Swizzle::RG01, [4, 4, 0, 0], Grain::X8, ChannelType::Snorm);
    pub const R32G32B32_SNORM: Self = Self::rgbazs(Swizzle::RGB1, [4, 4, 4, 0], Grain::X8, ChannelType::Snorm);
    pub const R32G32B32A32_SNORM: Self = Self::rgbazs(Swizzle::RGBA, [4, 4, 4, 4], Grain::X8, ChannelType::Snorm);
    pub const R32_SSCALED: Self = Self::rgbazs(Swizzle::R001, [4, 0, 0, 0], Grain::X8, ChannelType::Sscaled);
    pub const R32G32_SSCALED: Self = Self::rgbazs(Swizzle::RG01, [4, 4, 0, 0], Grain::X8, ChannelType::Sscaled);
    pub const R32G32B32_SSCALED: Self = Self::rgbazs(Swizzle::RGB1, [4, 4, 4, 0], Grain::X8, ChannelType::Sscaled);
    pub const R32G32B32A32_SSCALED: Self = Self::rgbazs(Swizzle::RGBA, [4, 4, 4, 4], Grain::X8, ChannelType::Sscaled);

    pub const R16_UNORM: Self = Self::rgbazs(Swizzle::R001, [2, 0, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const R16G16_UNORM: Self = Self::rgbazs(Swizzle::RG01, [2, 2, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const R16G16B16_UNORM: Self = Self::rgbazs(Swizzle::RGB1, [2, 2, 2, 0], Grain::X8, ChannelType::Unorm);
    pub const R16G16B16A16_UNORM: Self = Self::rgbazs(Swizzle::RGBA, [2, 2, 2, 2], Grain::X8, ChannelType::Unorm);
    pub const R16_USCALED: Self = Self::rgbazs(Swizzle::R001, [2, 0, 0, 0], Grain::X8, ChannelType::Uscaled);
    pub const R16G16_USCALED: Self = Self::rgbazs(Swizzle::RG01, [2, 2, 0, 0], Grain::X8, ChannelType::Uscaled);
    pub const R16G16B16_USCALED: Self = Self::rgbazs(Swizzle::RGB1, [2, 2, 2, 0], Grain::X8, ChannelType::Uscaled);
    pub const R16G16B16A16_USCALED: Self = Self::rgbazs(Swizzle::RGBA, [2, 2, 2, 2], Grain::X8, ChannelType::Uscaled);
    pub const R16_SNORM: Self = Self::rgbazs(Swizzle::R001, [2, 0, 0, 0], Grain::X8, ChannelType::Snorm);
    pub const R16G16_SNORM: Self = Self::rgbazs(Swizzle::RG01, [2, 2, 0, 0], Grain::X8, ChannelType::Snorm);
    pub const R16G16B16_SNORM: Self = Self::rgbazs(Swizzle::RGB1, [2, 2, 2, 0], Grain::X8, ChannelType::Snorm);
    pub const R16G16B16A16_SNORM: Self = Self::rgbazs(Swizzle::RGBA, [2, 2, 2, 2], Grain::X8, ChannelType::Snorm);
    pub const R16_SSCALED: Self = Self::rgbazs(Swizzle::R001, [2, 0, 0, 0], Grain::X8, ChannelType::Sscaled);
    pub const R16G16_SSCALED: Self = Self::rgbazs(Swizzle::RG01, [2, 2, 0, 0], Grain::X8, ChannelType::Sscaled);
    pub const R16G16B16_SSCALED: Self = Self::rgbazs(Swizzle::RGB1, [2, 2, 2, 0], Grain::X8, ChannelType::Sscaled);
    pub const R16G16B16A16_SSCALED: Self = Self::rgbazs(Swizzle::RGBA, [2, 2, 2, 2], Grain::X8, ChannelType::Sscaled);

    pub const R8_UNORM: Self = Self::rgbazs(Swizzle::R001, [1, 0, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const R8G8_UNORM: Self = Self::rgbazs(Swizzle::RG01, [1, 1, 0, 0], Grain::X8, ChannelType::Unorm);
    pub const R8G8B8_UNORM: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 0], Grain::X8, ChannelType::Unorm);
    pub const R8G8B8A8_UNORM: Self = Self::rgbazs(Swizzle::RGBA, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const R8G8B8X8_UNORM: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 1], Grain::X8, ChannelType::Unorm);
    pub const R8_USCALED: Self = Self::rgbazs(Swizzle::R001, [1, 0, 0, 0], Grain::X8, ChannelType::Uscaled);
    pub const R8G8_USCALED: Self = Self::rgbazs(Swizzle::RG01, [1, 1, 0, 0], Grain::X8, ChannelType::Uscaled);
    pub const R8G8B8_USCALED: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 0], Grain::X8, ChannelType::Uscaled);
    pub const R8G8B8A8_USCALED: Self = Self::rgbazs(Swizzle::RGBA, [1, 1, 1, 1], Grain::X8, ChannelType::Uscaled);
    pub const R8G8B8X8_USCALED: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 1], Grain::X8, ChannelType::Uscaled);
    pub const R8_SNORM: Self = Self::rgbazs(Swizzle::R001, [1, 0, 0, 0], Grain::X8, ChannelType::Snorm);
    pub const R8G8_SNORM: Self = Self::rgbazs(Swizzle::RG01, [1, 1, 0, 0], Grain::X8, ChannelType::Snorm);
    pub const R8G8B8_SNORM: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 0], Grain::X8, ChannelType::Snorm);
    pub const R8G8B8A8_SNORM: Self = Self::rgbazs(Swizzle::RGBA, [1, 1, 1, 1], Grain::X8, ChannelType::Snorm);
    pub const R8G8B8X8_SNORM: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 1], Grain::X8, ChannelType::Snorm);
    pub const R8_SSCALED: Self = Self::rgbazs(Swizzle::R001, [1, 0, 0, 0], Grain::X8, ChannelType::Sscaled);
    pub const R8G8_SSCALED: Self = Self::rgbazs(Swizzle::RG01, [1, 1, 0, 0], Grain::X8, ChannelType::Sscaled);
    pub const R8G8B8_SSCALED: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 0], Grain::X8, ChannelType::Sscaled);
    pub const R8G8B8A8_SSCALED: Self = Self::rgbazs(Swizzle::RGBA, [1, 1, 1, 1], Grain::X8, ChannelType::Sscaled);
    pub const R8G8B8X8_SSCALED: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 1], Grain::X8, ChannelType::Sscaled);

    pub const L8_SRGB: Self = Self::rgbazs(Swizzle::RRR1, [1, 1, 1, 0], Grain::X8, ChannelType::Srgb);
    pub const A8_L8_SRGB: Self = Self::rgbazs(Swizzle::RRRG, [1, 1, 1, 1], Grain::X8, ChannelType::Srgb);
    pub const R8G8B8_SRGB: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 0], Grain::X8, ChannelType::Srgb);
    pub const R8G8B8A8_SRGB: Self = Self::rgbazs(Swizzle::RGBA, [1, 1, 1, 1], Grain::X8, ChannelType::Srgb);
    pub const R8G8B8X8_SRGB: Self = Self::rgbazs(Swizzle::RGB1, [1, 1, 1, 1], Grain::X8, ChannelType::Srgb);

    pub const DXT1_RGB: Self = Self::dxt(1, 8, 8, 8, 0);
    pub const DXT1_RGBA: Self = Self::dxt(1, 8, 8, 8, 8);
    pub const DXT3_RGBA: Self = Self::dxt(3, 8, 8, 8, 8);
    pub const DXT5_RGBA: Self = Self::dxt(5, 8, 8, 8, 8);
}
