// imgbatch/src/tools/png_to_ico.rs
use super::{drive, warn_if_empty};
use crate::core::{BatchItem, BatchReport, ImageCodec, Result, Transform};
use crate::processors::{enumerate_inputs, RasterCodec};
use crate::utils::converted_output_path;
use image::ImageFormat;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PngToIcoConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub show_progress: bool,
}

impl PngToIcoConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Re-encodes PNG files as multi-resolution ICO files.
pub struct PngToIco<C: ImageCodec = RasterCodec> {
    codec: C,
}

impl<C: ImageCodec> PngToIco<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn run(self, config: &PngToIcoConfig) -> Result<BatchReport> {
        let inputs = enumerate_inputs(&config.input, self.extensions())?;
        if warn_if_empty(&inputs) {
            return Ok(BatchReport::default());
        }

        drive(self, &inputs, &config.output_dir, config.show_progress)
    }
}

impl Default for PngToIco {
    fn default() -> Self {
        Self::new(RasterCodec::default())
    }
}

impl<C: ImageCodec> Transform for PngToIco<C> {
    fn label(&self) -> &str {
        "Converting PNG to ICO"
    }

    fn extensions(&self) -> &[&str] {
        &["png"]
    }

    fn output_path(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        converted_output_path(input, output_dir, "ico")
    }

    fn apply(&self, item: &BatchItem) -> Result<()> {
        let image = self.codec.open(&item.input)?;
        self.codec.save_as(&image, &item.output, ImageFormat::Ico)
    }
}
