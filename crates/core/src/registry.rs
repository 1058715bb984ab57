use std::{collections::HashMap, fmt, sync::LazyLock};

use crate::format::PixelFormat;

/// Errors surfaced by format-name lookup.
///
/// # Example
/// ```rust
/// use rawpix_core::prelude::{PixelFormat, RegistryError};
///
/// let err = RegistryError::Unknown(PixelFormat::from(0xdead_beef));
/// assert!(err.to_string().contains("0xdeadbeef"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No name registered for the code. Decoding cannot proceed without the
    /// format's layout, so callers must treat this as fatal.
    Unknown(PixelFormat),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unknown(code) => write!(f, "unknown pixel format {code}"),
        }
    }
}

impl std::error::Error for RegistryError {}

// Each entry pairs a constant with its producer-side spelling; the macro
// derives the string from the constant name so the two cannot drift apart.
macro_rules! format_table {
    ($($name:ident),* $(,)?) => {
        &[$((PixelFormat::$name, concat!("PIPE_FORMAT_", stringify!($name)))),*]
    };
}

static TABLE: &[(PixelFormat, &str)] = format_table![
    NONE,
    A8R8G8B8_UNORM,
    X8R8G8B8_UNORM,
    B8G8R8A8_UNORM,
    B8G8R8X8_UNORM,
    A1R5G5B5_UNORM,
    A4R4G4B4_UNORM,
    R5G6B5_UNORM,
    L8_UNORM,
    A8_UNORM,
    I8_UNORM,
    A8L8_UNORM,
    YCBCR,
    YCBCR_REV,
    Z16_UNORM,
    Z32_UNORM,
    Z32_FLOAT,
    S8Z24_UNORM,
    Z24S8_UNORM,
    X8Z24_UNORM,
    Z24X8_UNORM,
    S8_UNORM,
    R64_FLOAT,
    R64G64_FLOAT,
    R64G64B64_FLOAT,
    R64G64B64A64_FLOAT,
    R32_FLOAT,
    R32G32_FLOAT,
    R32G32B32_FLOAT,
    R32G32B32A32_FLOAT,
    R32_UNORM,
    R32G32_UNORM,
    R32G32B32_UNORM,
    R32G32B32A32_UNORM,
    R32_USCALED,
    R32G32_USCALED,
    R32G32B32_USCALED,
    R32G32B32A32_USCALED,
    R32_SNORM,
    R32G32_SNORM,
    R32G32B32_SNORM,
    R32G32B32A32_SNORM,
    R32_SSCALED,
    R32G32_SSCALED,
    R32G32B32_SSCALED,
    R32G32B32A32_SSCALED,
    R16_UNORM,
    R16G16_UNORM,
    R16G16B16_UNORM,
    R16G16B16A16_UNORM,
    R16_USCALED,
    R16G16_USCALED,
    R16G16B16_USCALED,
    R16G16B16A16_USCALED,
    R16_SNORM,
    R16G16_SNORM,
    R16G16B16_SNORM,
    R16G16B16A16_SNORM,
    R16_SSCALED,
    R16G16_SSCALED,
    R16G16B16_SSCALED,
    R16G16B16A16_SSCALED,
    R8_UNORM,
    R8G8_UNORM,
    R8G8B8_UNORM,
    R8G8B8A8_UNORM,
    R8G8B8X8_UNORM,
    R8_USCALED,
    R8G8_USCALED,
    R8G8B8_USCALED,
    R8G8B8A8_USCALED,
    R8G8B8X8_USCALED,
    R8_SNORM,
    R8G8_SNORM,
    R8G8B8_SNORM,
    R8G8B8A8_SNORM,
    R8G8B8X8_SNORM,
    R8_SSCALED,
    R8G8_SSCALED,
    R8G8B8_SSCALED,
    R8G8B8A8_SSCALED,
    R8G8B8X8_SSCALED,
    L8_SRGB,
    A8_L8_SRGB,
    R8G8B8_SRGB,
    R8G8B8A8_SRGB,
    R8G8B8X8_SRGB,
    DXT1_RGB,
    DXT1_RGBA,
    DXT3_RGBA,
    DXT5_RGBA,
];

static GLOBAL: LazyLock<FormatRegistry> = LazyLock::new(FormatRegistry::from_table);

/// Immutable map from [`PixelFormat`] code to its canonical display name.
///
/// Built once from the literal table at first use and never mutated; lookups
/// are exact numeric matches. Shared read access from multiple threads is
/// fine.
///
/// # Example
/// ```rust
/// use rawpix_core::prelude::{FormatRegistry, PixelFormat};
///
/// let name = FormatRegistry::global()
///     .resolve(PixelFormat::R8G8B8A8_UNORM)
///     .unwrap();
/// assert_eq!(name, "PIPE_FORMAT_R8G8B8A8_UNORM");
/// ```
#[derive(Debug)]
pub struct FormatRegistry {
    by_code: HashMap<u32, &'static str>,
}

impl FormatRegistry {
    fn from_table() -> Self {
        let mut by_code = HashMap::with_capacity(TABLE.len());
        for &(code, name) in TABLE {
            by_code.insert(code.to_u32(), name);
        }
        Self { by_code }
    }

    /// Process-wide registry instance.
    pub fn global() -> &'static FormatRegistry {
        &GLOBAL
    }

    /// Canonical name for `code`, or [`RegistryError::Unknown`] if the code
    /// is not in the table.
    pub fn resolve(&self, code: PixelFormat) -> Result<&'static str, RegistryError> {
        self.by_code
            .get(&code.to_u32())
            .copied()
            .ok_or(RegistryError::Unknown(code))
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// All registered codes with their names, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (PixelFormat, &'static str)> {
        TABLE.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_round_trips_table_names() {
        let reg = FormatRegistry::global();
        for (code, name) in reg.entries() {
            assert_eq!(reg.resolve(code), Ok(name));
        }
    }

    #[test]
    fn resolve_unknown_code_fails() {
        let bogus = PixelFormat::from(0xffff_ffff);
        assert_eq!(
            FormatRegistry::global().resolve(bogus),
            Err(RegistryError::Unknown(bogus))
        );
    }

    #[test]
    fn table_codes_are_injective() {
        // Builder bit fields must not overlap; a collision here means two
        // named constants packed to the same integer.
        let mut seen = HashMap::new();
        for &(code, name) in TABLE {
            if let Some(prev) = seen.insert(code.to_u32(), name) {
                panic!("{prev} and {name} share code {code}");
            }
        }
        assert_eq!(seen.len(), TABLE.len());
        assert_eq!(FormatRegistry::global().len(), TABLE.len());
    }
}
