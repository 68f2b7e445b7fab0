//! Seam blending for horizontally tiled images
//!
//! The left and right edge bands of every row are nudged toward each other in
//! HLS space so that copies of the image placed side by side meet without a
//! visible seam. The interior of each row is left untouched.

#![forbid(unsafe_code)]

/// Edge blender and ramp geometry
pub mod blend;
/// HLS colour model and channel conversions
pub mod color;
/// Command-line tool, file input/output and error handling
pub mod io;
/// Pixel grid storage
pub mod spatial;

pub use blend::{EdgeBlender, RampWidth, blend};
pub use io::error::{BlendError, Result};
pub use spatial::{PixelGrid, Rgb};
