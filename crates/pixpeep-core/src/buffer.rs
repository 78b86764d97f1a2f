use ndarray::Array3;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, ViewerError};

/// A decoded 8-bit RGB raster. Immutable once built.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    /// Pixel data, row-major, shape = (height, width, 3)
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Wrap an existing `(height, width, 3)` array. Empty rasters are rejected
    /// here so they never reach a viewport.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if w == 0 || h == 0 || c != COLOR_CHANNEL_COUNT {
            return Err(ViewerError::InvalidDimensions {
                width: w as u32,
                height: h as u32,
            });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Build from tightly packed RGB bytes.
    pub fn from_raw(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self> {
        let shape = (height as usize, width as usize, COLOR_CHANNEL_COUNT);
        let data = Array3::from_shape_vec(shape, rgb)
            .map_err(|_| ViewerError::InvalidDimensions { width, height })?;
        Self::new(data)
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: usize,
        height: usize,
        f: impl Fn(usize, usize) -> [u8; 3],
    ) -> Result<Self> {
        let mut rgb = Vec::with_capacity(width * height * COLOR_CHANNEL_COUNT);
        for y in 0..height {
            for x in 0..width {
                rgb.extend_from_slice(&f(x, y));
            }
        }
        Self::from_raw(width as u32, height as u32, rgb)
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// RGB at `(x, y)`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ]
    }

    /// RGB at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        (x < self.width() && y < self.height()).then(|| self.pixel(x, y))
    }

    /// Packed row-major RGB bytes.
    pub fn as_rgb_bytes(&self) -> &[u8] {
        self.data.as_slice().unwrap_or_default()
    }
}
