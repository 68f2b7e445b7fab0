//! Command-line interface for batch blending of image files

use crate::blend::{EdgeBlender, RampWidth};
use crate::io::configuration::{
    DEFAULT_JPEG_QUALITY, OUTPUT_DIR_NAME, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{BlendError, Result};
use crate::io::image::{
    collect_image_paths, is_supported_image, load_pixel_grid, save_grid_as_jpeg,
};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "seamblend")]
#[command(
    author,
    version,
    about = "Blend the left and right edges of images so they tile horizontally"
)]
/// Command-line arguments for the seam blending tool
pub struct Cli {
    /// Image file or directory of images to process
    #[arg(value_name = "TARGET", default_value = ".")]
    pub target: PathBuf,

    /// Columns from each edge that take part in blending
    #[arg(short, long, default_value_t = RampWidth::DEFAULT)]
    pub ramp_width: RampWidth,

    /// Directory for blended images (defaults to `output` next to the inputs)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JPEG quality of the blended images
    #[arg(
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Blend rows on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Directory that receives the blended images
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.output_dir {
            return dir.clone();
        }
        let base = if self.target.is_dir() {
            self.target.as_path()
        } else {
            self.target.parent().unwrap_or_else(|| Path::new(""))
        };
        base.join(OUTPUT_DIR_NAME)
    }
}

/// Outcome counts of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files blended and written
    pub processed: usize,
    /// Files whose output already existed
    pub skipped: usize,
    /// Files that failed to decode, blend or write
    pub failed: usize,
}

impl BatchSummary {
    /// Number of files considered
    pub const fn total(&self) -> usize {
        self.processed + self.skipped + self.failed
    }

    /// Turn any failure into an error
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::PartialFailure`] if at least one file failed
    pub const fn into_result(self) -> Result<()> {
        if self.failed > 0 {
            Err(BlendError::PartialFailure {
                failed: self.failed,
                total: self.total(),
            })
        } else {
            Ok(())
        }
    }
}

/// Orchestrates batch blending of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    blender: EdgeBlender,
    output_dir: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let blender = EdgeBlender::new(cli.ramp_width).parallel(!cli.sequential);
        let output_dir = cli.resolved_output_dir();

        Self {
            cli,
            blender,
            output_dir,
            progress_manager,
        }
    }

    /// Blend every selected file, continuing past per-file failures
    ///
    /// # Errors
    ///
    /// Returns an error if the target is missing, is a file with an
    /// unsupported extension, or the directory cannot be listed. Failures of
    /// individual files are counted in the summary instead.
    pub fn process(&mut self) -> Result<BatchSummary> {
        let files = self.collect_files()?;
        let mut summary = BatchSummary::default();

        if files.is_empty() {
            return Ok(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            let output_path = self.output_path(file);

            if self.cli.skip_existing() && output_path.exists() {
                if let Some(ref pm) = self.progress_manager {
                    pm.skip_file(file);
                }
                summary.skipped += 1;
                continue;
            }

            match self.process_file(file, &output_path) {
                Ok(()) => summary.processed += 1,
                Err(error) => {
                    self.report_failure(file, &error);
                    summary.failed += 1;
                }
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(summary)
    }

    /// Path the blended version of `input_path` is written to
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        self.output_dir.join(format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        ))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                Ok(vec![target.clone()])
            } else {
                Err(BlendError::UnsupportedTarget {
                    path: target.clone(),
                    reason: "file is not a supported image type",
                })
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| BlendError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            collect_image_paths(target, entries.map(|entry| entry.map(|e| e.path())))
        } else {
            Err(BlendError::UnsupportedTarget {
                path: target.clone(),
                reason: "target must be an image file or a directory",
            })
        }
    }

    fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let mut grid = load_pixel_grid(input_path)?;
        self.blender.apply(&mut grid);
        save_grid_as_jpeg(&grid, output_path, self.cli.quality)?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(input_path, output_path, start_time.elapsed());
        }

        Ok(())
    }

    // Failures are reported even in quiet mode
    #[allow(clippy::print_stderr)]
    fn report_failure(&self, input_path: &Path, error: &BlendError) {
        if let Some(ref pm) = self.progress_manager {
            pm.fail_file(input_path, error);
        } else {
            eprintln!("Failed to blend {}: {error}", input_path.display());
        }
    }
}
