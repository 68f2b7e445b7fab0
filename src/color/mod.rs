//! Colour conversions used by the blender

/// 8-bit channel normalisation and clamping
pub mod channel;
/// HLS colour type and RGB conversions
pub mod hls;

pub use hls::Hls;
