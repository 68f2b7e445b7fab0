//! Image decoding into pixel grids and JPEG export

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{BlendError, Result, WithPath};
use crate::spatial::PixelGrid;

/// Whether `path` carries one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Keep the supported image files among the entries of `dir`, sorted by path
///
/// # Errors
///
/// Returns an error naming `dir` if any entry could not be read
pub fn collect_image_paths<I>(dir: &Path, entries: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| BlendError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory entry",
            source: e,
        })?;
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Decode an image file and convert it to 8-bit RGB
///
/// Alpha is discarded; greyscale and palette images are expanded.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or decodes to an
/// empty image
pub fn load_pixel_grid(path: &Path) -> Result<PixelGrid> {
    let decoded = image::open(path).with_path(path)?;
    PixelGrid::from_rgb_image(&decoded.to_rgb8())
}

/// Encode `grid` as a JPEG file at `output_path`
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - JPEG encoding fails
pub fn save_grid_as_jpeg(grid: &PixelGrid, output_path: &Path, quality: u8) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BlendError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| BlendError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    encoder
        .encode_image(&grid.to_rgb_image())
        .map_err(|e| BlendError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
