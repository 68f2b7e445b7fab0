//! Pixel storage

/// Owned RGB grid and pixel type
pub mod grid;

pub use grid::{PixelGrid, Rgb};
