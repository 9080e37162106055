// imgbatch/src/tools/resize.rs
use super::{drive, warn_if_empty};
use crate::core::{BatchItem, BatchReport, Dimensions, ImageCodec, Result, Transform};
use crate::processors::{enumerate_inputs, Encoder, InputSet, RasterCodec};
use crate::utils::{same_name_output_path, suffixed_output_path, timestamped_dir};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub size: Dimensions,
    /// Write `<stem>_<W>x<H>.<ext>` instead of reusing the input file name.
    pub create_new_file: bool,
    pub show_progress: bool,
}

impl ResizeConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, size: Dimensions) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            size,
            create_new_file: false,
            show_progress: true,
        }
    }

    pub fn with_new_files(mut self, create_new_file: bool) -> Self {
        self.create_new_file = create_new_file;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Folder runs get their own `images_resized_<timestamp>` directory.
    pub fn output_dir_at(&self, inputs: &InputSet, started: &DateTime<Local>) -> PathBuf {
        match inputs {
            InputSet::Directory { .. } => timestamped_dir(&self.output_dir, started),
            InputSet::File(_) => self.output_dir.clone(),
        }
    }
}

/// Resamples images to an exact width and height.
pub struct Resize<C: ImageCodec = RasterCodec> {
    codec: C,
    size: Dimensions,
    create_new_file: bool,
}

impl<C: ImageCodec> Resize<C> {
    pub fn new(codec: C, size: Dimensions, create_new_file: bool) -> Self {
        Self {
            codec,
            size,
            create_new_file,
        }
    }

    pub fn run(self, config: &ResizeConfig) -> Result<BatchReport> {
        self.run_at(config, Local::now())
    }

    pub fn run_at(self, config: &ResizeConfig, started: DateTime<Local>) -> Result<BatchReport> {
        let inputs = enumerate_inputs(&config.input, self.extensions())?;
        if warn_if_empty(&inputs) {
            return Ok(BatchReport::default());
        }

        let output_dir = config.output_dir_at(&inputs, &started);
        drive(self, &inputs, &output_dir, config.show_progress)
    }
}

impl Resize {
    pub fn from_config(config: &ResizeConfig) -> Self {
        Self::new(RasterCodec::default(), config.size, config.create_new_file)
    }
}

impl<C: ImageCodec> Transform for Resize<C> {
    fn label(&self) -> &str {
        "Resizing images"
    }

    fn extensions(&self) -> &[&str] {
        &["png", "jpg", "jpeg", "gif", "bmp"]
    }

    fn output_path(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        if self.create_new_file {
            suffixed_output_path(input, output_dir, self.size)
        } else {
            same_name_output_path(input, output_dir)
        }
    }

    fn apply(&self, item: &BatchItem) -> Result<()> {
        let format = Encoder::format_for_path(&item.output)?;
        let image = self.codec.open(&item.input)?;
        let resized = self.codec.resize_to(&image, self.size);
        self.codec.save_as(&resized, &item.output, format)
    }
}
