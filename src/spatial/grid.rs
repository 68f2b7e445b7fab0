//! Owned RGB pixel grid
//!
//! Rows run along axis 0 and columns along axis 1, so iterating axis 0 yields
//! contiguous scanlines. The grid is never empty in either dimension.

use image::RgbImage;
use ndarray::{Array2, ArrayViewMut2};

use crate::io::error::{Result, invalid_source};

/// One 8-bit RGB pixel
pub type Rgb = [u8; 3];

/// Rectangular, non-empty grid of RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<Rgb>,
}

impl PixelGrid {
    /// Wrap an existing array indexed `[row, column]`
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no rows or no columns
    pub fn new(pixels: Array2<Rgb>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_source(&format!(
                "grid must be at least 1x1, got {cols}x{rows}"
            )));
        }
        Ok(Self { pixels })
    }

    /// Create a grid of `width` x `height` copies of `fill`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(width: usize, height: usize, fill: Rgb) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), fill))
    }

    /// Build a grid from a list of rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the rows
    /// differ in length
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid_source(&format!(
                "row {ragged} has a different length than row 0 ({width})"
            )));
        }

        let flat: Vec<Rgb> = rows.iter().flatten().copied().collect();
        let pixels = Array2::from_shape_vec((rows.len(), width), flat)
            .map_err(|e| invalid_source(&e))?;
        Self::new(pixels)
    }

    /// Copy the pixels of a decoded RGB image
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let pixels = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            image.get_pixel(x as u32, y as u32).0
        });
        Self::new(pixels)
    }

    /// Copy the pixels into an `image` buffer for encoding
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            image::Rgb(self.get(x as usize, y as usize).unwrap_or_default())
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixels.get([y, x]).copied()
    }

    /// Mutable view of the whole grid
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, Rgb> {
        self.pixels.view_mut()
    }
}
