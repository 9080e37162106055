// imgbatch/src/processors/loader.rs
use crate::core::{ConvertError, Result, MAX_DIMENSION};
use image::{DynamicImage, ImageReader, Limits};
use std::path::Path;

/// Decodes raster files, sniffing the format from content before extension.
#[derive(Clone)]
pub struct Loader {
    limits: Limits,
}

impl Loader {
    /// Refuses images wider or taller than `max_side` before decoding pixels.
    pub fn new(max_side: u32) -> Self {
        let mut limits = Limits::default();
        limits.max_image_width = Some(max_side);
        limits.max_image_height = Some(max_side);
        Self { limits }
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        if std::fs::metadata(path)?.len() == 0 {
            return Err(ConvertError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        let mut reader = ImageReader::open(path)?.with_guessed_format()?;
        log::debug!("Decoding {} as {:?}", path.display(), reader.format());
        reader.limits(self.limits.clone());

        let image = reader.decode().map_err(|e| {
            ConvertError::ProcessingError(format!("Cannot decode {}: {}", path.display(), e))
        })?;

        log::debug!(
            "Decoded {}x{} {:?}",
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(MAX_DIMENSION)
    }
}
