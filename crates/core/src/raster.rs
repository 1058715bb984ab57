/// Tightly packed RGB24 raster owned by the decoder until hand-off.
///
/// Dimensions are plain `u32`: a zero width or height is a legal, empty
/// raster (a dump of an unbound surface), not an error.
///
/// # Example
/// ```rust
/// use rawpix_core::prelude::RgbRaster;
///
/// let raster = RgbRaster::from_vec(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(raster.pixel(1, 0), Some([4, 5, 6]));
/// assert_eq!(raster.pixel(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbRaster {
    /// Allocate a zero-filled raster; `None` if the byte size overflows.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        Some(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing buffer; `None` unless `data.len() == width * height * 3`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        if data.len() != expected {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed RGB bytes, row-major, no stride padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access for decoders filling the raster in place.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take ownership of the pixel buffer (e.g. to hand to an encoder).
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// RGB triple at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[off], self.data[off + 1], self.data[off + 2]])
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(RgbRaster::from_vec(2, 2, vec![0; 11]).is_none());
        assert!(RgbRaster::from_vec(2, 2, vec![0; 12]).is_some());
    }

    #[test]
    fn zero_dimension_raster_is_empty() {
        let raster = RgbRaster::from_vec(0, 4, Vec::new()).unwrap();
        assert!(raster.is_empty());
        assert_eq!(raster.data(), &[] as &[u8]);
        assert_eq!(raster.pixel(0, 0), None);
    }

    #[test]
    fn pixel_indexing_is_row_major() {
        let data: Vec<u8> = (0..18).collect();
        let raster = RgbRaster::from_vec(3, 2, data).unwrap();
        assert_eq!(raster.pixel(0, 0), Some([0, 1, 2]));
        assert_eq!(raster.pixel(2, 0), Some([6, 7, 8]));
        assert_eq!(raster.pixel(0, 1), Some([9, 10, 11]));
        assert_eq!(raster.pixel(2, 1), Some([15, 16, 17]));
    }
}
