use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbImage};
use rawpix_core::prelude::RgbRaster;

use crate::PngError;

/// Encode a raster as PNG bytes.
pub fn encode(raster: &RgbRaster) -> Result<Vec<u8>, PngError> {
    let image = RgbImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
        .ok_or(PngError::InvalidRaster)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Encode `raster` and publish it at `path` atomically.
///
/// The PNG is written to a sibling `.tmp` file and renamed into place, so a
/// failure at any point leaves either the previous file or nothing at `path`,
/// never a half-written image. The temp file is removed on failure.
pub fn write_atomic(raster: &RgbRaster, path: &Path) -> Result<(), PngError> {
    let bytes = encode(raster)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, &bytes).map_err(|source| PngError::Io {
        path: tmp.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(PngError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rawpix-png-{}-{name}", std::process::id()))
    }

    #[test]
    fn encode_produces_png_bytes() {
        let raster = RgbRaster::from_vec(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let bytes = encode(&raster).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn encode_rejects_zero_dimension_raster() {
        let raster = RgbRaster::from_vec(0, 0, Vec::new()).unwrap();
        assert!(matches!(encode(&raster), Err(PngError::Encode(_))));
    }

    #[test]
    fn write_atomic_publishes_and_cleans_up_temp() {
        let raster = RgbRaster::from_vec(1, 1, vec![9, 9, 9]).unwrap();
        let out = scratch_path("publish.png");
        write_atomic(&raster, &out).unwrap();

        let written = fs::read(&out).unwrap();
        assert_eq!(&written[..8], &PNG_MAGIC);
        assert!(!tmp_path(&out).exists());
        let _ = fs::remove_file(&out);
    }

    #[test]
    fn failed_encode_leaves_no_output_file() {
        let raster = RgbRaster::from_vec(0, 4, Vec::new()).unwrap();
        let out = scratch_path("never-written.png");
        assert!(write_atomic(&raster, &out).is_err());
        assert!(!out.exists());
        assert!(!tmp_path(&out).exists());
    }
}
