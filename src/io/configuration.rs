//! Blending defaults and output naming constants

/// Columns from each edge that take part in blending
pub const DEFAULT_RAMP_WIDTH: usize = 500;

// Output settings
/// Suffix added to output file stems
pub const OUTPUT_SUFFIX: &str = "_blended";
/// Extension of every output file (always JPEG)
pub const OUTPUT_EXTENSION: &str = "jpg";
/// Directory created next to the inputs to hold outputs
pub const OUTPUT_DIR_NAME: &str = "output";
/// JPEG quality used when none is given
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Input extensions picked up when scanning a directory (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
