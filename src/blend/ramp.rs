//! Ramp width, ramp column spans and blend factors

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::str::FromStr;

use crate::io::configuration::DEFAULT_RAMP_WIDTH;
use crate::io::error::{BlendError, Result, invalid_parameter};

/// Number of columns from each edge that take part in blending
///
/// Always positive. A width larger than half a row is allowed; the spans
/// are capped per row so the two ramps never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RampWidth(NonZeroUsize);

impl RampWidth {
    /// Ramp width used by the command-line tool
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(DEFAULT_RAMP_WIDTH - 1));

    /// Validate a ramp width
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is zero
    pub fn new(columns: usize) -> Result<Self> {
        NonZeroUsize::new(columns)
            .map(Self)
            .ok_or_else(|| invalid_parameter("ramp_width", &columns, &"must be greater than 0"))
    }

    /// Configured width in columns
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Columns rewritten on each side of a row of `width` pixels
    pub fn spans(self, width: usize) -> RampSpans {
        let ramp = self.get();
        let half = width / 2;
        RampSpans {
            left: 0..ramp.min(half),
            right: width.saturating_sub(ramp).max(half)..width,
        }
    }

    /// Blend factor for column `x` of the left ramp
    ///
    /// 1 at the edge column, falling by `1/ramp` per column.
    pub fn left_factor(self, x: usize) -> f64 {
        1.0 - x as f64 / self.get() as f64
    }

    /// Blend factor for column `x` of the right ramp of a `width`-pixel row
    ///
    /// Measured from one past the last column, so the edge column itself gets
    /// `1 - 1/ramp`.
    pub fn right_factor(self, width: usize, x: usize) -> f64 {
        1.0 - width.saturating_sub(x) as f64 / self.get() as f64
    }
}

impl Default for RampWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RampWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for RampWidth {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self> {
        let columns = s
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("ramp_width", &s, &e))?;
        Self::new(columns)
    }
}

/// Column ranges of the two ramps within one row
///
/// `left.end <= right.start` for every row width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampSpans {
    /// Columns pulled toward the right edge
    pub left: Range<usize>,
    /// Columns pulled toward the left edge
    pub right: Range<usize>,
}

impl RampSpans {
    /// Whether column `x` lies in either ramp
    pub fn contains(&self, x: usize) -> bool {
        self.left.contains(&x) || self.right.contains(&x)
    }

    /// Total number of rewritten columns
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Whether no column is rewritten
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}
