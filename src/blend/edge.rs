//! Edge blending in HLS space
//!
//! Each row is handled on its own: the two outermost pixels give a pair of
//! reference colours, then the pixels near each edge are pushed toward the
//! opposite edge's colour by half the mismatch, fading linearly with distance
//! from the edge. After blending, the two edges of every row agree closely
//! enough that the image tiles horizontally without a visible seam.

use ndarray::{ArrayViewMut1, Axis};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::blend::ramp::RampWidth;
use crate::color::Hls;
use crate::spatial::{PixelGrid, Rgb};

/// Reference colours derived from the outermost pixels of a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeReferences {
    /// Left edge colour after degenerate correction
    pub left: Hls,
    /// Right edge colour after degenerate correction
    pub right: Hls,
    /// Half of `left - right`, per component
    pub half_difference: Hls,
}

impl EdgeReferences {
    /// Compute the references for a row whose edge pixels are `left` and `right`
    ///
    /// Black or white has no meaningful hue or saturation, so a degenerate
    /// edge borrows both from the other edge. Each side reads the other's
    /// uncorrected colour.
    pub fn from_edges(left: Rgb, right: Rgb) -> Self {
        let raw_left = Hls::from_rgb(left);
        let raw_right = Hls::from_rgb(right);

        let left = raw_left.or_chroma_of(raw_right);
        let right = raw_right.or_chroma_of(raw_left);

        Self {
            left,
            right,
            half_difference: left.half_difference(right),
        }
    }

    /// Blend a left-ramp pixel toward the right edge
    pub fn pull_left(&self, pixel: Rgb, factor: f64) -> Rgb {
        Hls::from_rgb(pixel)
            .or_chroma_of(self.left)
            .shifted(self.half_difference, -factor)
            .to_rgb()
    }

    /// Blend a right-ramp pixel toward the left edge
    pub fn pull_right(&self, pixel: Rgb, factor: f64) -> Rgb {
        Hls::from_rgb(pixel)
            .or_chroma_of(self.right)
            .shifted(self.half_difference, factor)
            .to_rgb()
    }
}

/// Rewrites the edge bands of a grid so it tiles horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeBlender {
    ramp_width: RampWidth,
    parallel: bool,
}

impl EdgeBlender {
    /// Sequential blender with the given ramp width
    pub const fn new(ramp_width: RampWidth) -> Self {
        Self {
            ramp_width,
            parallel: false,
        }
    }

    /// Process rows on the rayon thread pool
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configured ramp width
    pub const fn ramp_width(&self) -> RampWidth {
        self.ramp_width
    }

    /// Blend every row of `grid` in place
    pub fn apply(&self, grid: &mut PixelGrid) {
        let ramp_width = self.ramp_width;
        let mut pixels = grid.view_mut();
        let rows = pixels.axis_iter_mut(Axis(0));

        if self.parallel {
            rows.into_par_iter().for_each(|row| blend_row(row, ramp_width));
        } else {
            rows.for_each(|row| blend_row(row, ramp_width));
        }
    }
}

/// Blend `grid` with a sequential pass and hand it back
pub fn blend(mut grid: PixelGrid, ramp_width: RampWidth) -> PixelGrid {
    EdgeBlender::new(ramp_width).apply(&mut grid);
    grid
}

/// Blend a single scanline in place
///
/// Empty rows are left alone.
pub fn blend_row(mut row: ArrayViewMut1<'_, Rgb>, ramp_width: RampWidth) {
    let width = row.len();
    let Some(last) = width.checked_sub(1) else {
        return;
    };
    let (Some(&left), Some(&right)) = (row.get(0), row.get(last)) else {
        return;
    };

    let references = EdgeReferences::from_edges(left, right);
    let spans = ramp_width.spans(width);

    for x in spans.left {
        let factor = ramp_width.left_factor(x);
        if let Some(pixel) = row.get_mut(x) {
            *pixel = references.pull_left(*pixel, factor);
        }
    }

    for x in spans.right {
        let factor = ramp_width.right_factor(width, x);
        if let Some(pixel) = row.get_mut(x) {
            *pixel = references.pull_right(*pixel, factor);
        }
    }
}
