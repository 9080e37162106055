// imgbatch/src/processors/codec.rs
use super::{Encoder, Loader, Resizer};
use crate::core::{Dimensions, ImageCodec, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// [`ImageCodec`] built on the `image` and `ico` crates.
#[derive(Default)]
pub struct RasterCodec {
    loader: Loader,
    resizer: Resizer,
    encoder: Encoder,
}

impl ImageCodec for RasterCodec {
    fn open(&self, path: &Path) -> Result<DynamicImage> {
        self.loader.load(path)
    }

    fn resize_to(&self, image: &DynamicImage, size: Dimensions) -> DynamicImage {
        self.resizer.resize_exact(image, size)
    }

    fn save_as(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
        self.encoder.save_with_format(image, path, format)
    }
}
