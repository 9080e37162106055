// imgbatch/src/core/mod.rs
pub mod driver;

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use driver::BatchDriver;

/// Largest width or height accepted for any output.
pub const MAX_DIMENSION: u32 = 100_000;

/// Explicit output size in pixels. Both sides are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidParameter(format!(
                "Dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ConvertError::InvalidParameter(format!(
                "Dimensions too large (max {} pixels)",
                MAX_DIMENSION
            )));
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One input file and the output path it will be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl BatchItem {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    /// File name used in progress and log messages.
    pub fn display_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    Converted,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub item: BatchItem,
    pub status: ItemStatus,
}

/// Per-item results of one run, in the order items were processed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, item: BatchItem, status: ItemStatus) {
        self.outcomes.push(ItemOutcome { item, status });
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Items a transform was actually run on.
    pub fn attempted(&self) -> usize {
        self.total() - self.skipped()
    }

    pub fn converted(&self) -> usize {
        self.count(|status| matches!(status, ItemStatus::Converted))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, ItemStatus::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, ItemStatus::Failed(_)))
    }

    pub fn converted_outputs(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == ItemStatus::Converted)
            .map(|outcome| outcome.item.output.as_path())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&BatchItem, &str)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.status {
            ItemStatus::Failed(message) => Some((&outcome.item, message.as_str())),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&ItemStatus) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| predicate(&outcome.status))
            .count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted, {} skipped, {} failed",
            self.converted(),
            self.skipped(),
            self.failed()
        )
    }
}

/// Raster image capabilities: decode, resample and encode.
pub trait ImageCodec {
    fn open(&self, path: &Path) -> Result<DynamicImage>;

    fn resize_to(&self, image: &DynamicImage, size: Dimensions) -> DynamicImage;

    fn save_as(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()>;
}

/// Renders a vector graphic file to a bitmap of exactly `size`.
pub trait VectorRasterizer {
    fn rasterize_to(&self, path: &Path, size: Dimensions) -> Result<RgbaImage>;
}

/// A single-file conversion plugged into [`BatchDriver`].
pub trait Transform {
    /// Progress bar label.
    fn label(&self) -> &str;

    /// Lowercase extensions (without the dot) picked up from directories.
    fn extensions(&self) -> &[&str];

    /// Where the converted form of `input` goes inside `output_dir`.
    fn output_path(&self, input: &Path, output_dir: &Path) -> Result<PathBuf>;

    /// Leave items alone whose output already exists.
    fn skip_existing(&self) -> bool {
        false
    }

    fn apply(&self, item: &BatchItem) -> Result<()>;
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("SVG error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Invalid input path: {} is neither a file nor a directory", .0.display())]
    InvalidInput(PathBuf),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
