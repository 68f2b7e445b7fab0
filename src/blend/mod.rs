//! Horizontal seam blending

/// Per-row edge references and the ramp transforms
pub mod edge;
/// Ramp width and the columns each ramp covers
pub mod ramp;

pub use edge::{EdgeBlender, EdgeReferences, blend};
pub use ramp::{RampSpans, RampWidth};
