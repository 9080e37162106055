// imgbatch/src/processors/encoder.rs
use crate::core::{ConvertError, Result};
use crate::utils::format_file_size;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Frame sizes written into multi-resolution icons.
pub const ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

const MAX_ICON_SIZE: u32 = 256;

pub struct Encoder {
    jpeg_quality: u8,
}

impl Encoder {
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    /// Encodes fully in memory first, so a failed encode never leaves a
    /// partial file at `path`.
    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        log::debug!("Saving image to {} as {:?}", path.display(), format);

        let bytes = self.encode(image, format)?;
        std::fs::write(path, &bytes)?;

        log::debug!(
            "Saved image: {} ({})",
            path.display(),
            format_file_size(bytes.len() as u64)
        );
        Ok(())
    }

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        match format {
            ImageFormat::Jpeg => self.encode_jpeg(image),
            ImageFormat::Ico => self.encode_ico(image),
            _ => {
                let mut buffer = Cursor::new(Vec::new());
                image.write_to(&mut buffer, format)?;
                Ok(buffer.into_inner())
            }
        }
    }

    /// Output format implied by the file extension.
    pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
        ImageFormat::from_path(path).map_err(|_| {
            ConvertError::InvalidParameter(format!(
                "Cannot determine output format for: {}",
                path.display()
            ))
        })
    }

    /// One thumbnail per standard icon size that fits inside the source.
    pub fn icon_frames(&self, image: &DynamicImage) -> Vec<DynamicImage> {
        let (width, height) = image.dimensions();

        let frames: Vec<DynamicImage> = ICON_SIZES
            .iter()
            .filter(|&&size| size <= width && size <= height)
            .map(|&size| image.thumbnail(size, size))
            .collect();

        if !frames.is_empty() {
            return frames;
        }

        // Smaller than every standard size.
        if width <= MAX_ICON_SIZE && height <= MAX_ICON_SIZE {
            vec![image.clone()]
        } else {
            vec![image.thumbnail(MAX_ICON_SIZE, MAX_ICON_SIZE)]
        }
    }

    fn encode_jpeg(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        // JPEG has no alpha channel.
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, self.jpeg_quality))?;

        Ok(buffer)
    }

    fn encode_ico(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut icon_dir = IconDir::new(ResourceType::Icon);

        for frame in self.icon_frames(image) {
            let rgba = frame.to_rgba8();
            let (width, height) = rgba.dimensions();
            log::debug!("ICO frame: {}x{}", width, height);

            let icon_image = IconImage::from_rgba_data(width, height, rgba.into_raw());
            icon_dir.add_entry(IconDirEntry::encode(&icon_image)?);
        }

        let mut buffer = Vec::new();
        icon_dir.write(&mut buffer)?;
        Ok(buffer)
    }
}

impl Default for Encoder {
    /// Quality 75 matches the usual default of desktop imaging libraries.
    fn default() -> Self {
        Self::new(75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_frames_fit_source() {
        let encoder = Encoder::default();

        let frames = encoder.icon_frames(&DynamicImage::new_rgba8(64, 64));
        let sizes: Vec<(u32, u32)> = frames.iter().map(|f| f.dimensions()).collect();
        assert_eq!(sizes, vec![(16, 16), (24, 24), (32, 32), (48, 48), (64, 64)]);

        let frames = encoder.icon_frames(&DynamicImage::new_rgba8(100, 50));
        let sizes: Vec<(u32, u32)> = frames.iter().map(|f| f.dimensions()).collect();
        assert_eq!(sizes, vec![(16, 8), (24, 12), (32, 16), (48, 24)]);
    }

    #[test]
    fn test_icon_frames_small_source() {
        let frames = Encoder::default().icon_frames(&DynamicImage::new_rgba8(10, 6));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].dimensions(), (10, 6));
    }

    #[test]
    fn test_icon_frames_stop_at_256() {
        let frames = Encoder::default().icon_frames(&DynamicImage::new_rgba8(600, 600));
        let largest = frames.iter().map(|f| f.width()).max();
        assert_eq!(frames.len(), ICON_SIZES.len());
        assert_eq!(largest, Some(256));
    }

    #[test]
    fn test_save_ico_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.ico");

        Encoder::default()
            .save_with_format(&DynamicImage::new_rgba8(48, 48), &path, ImageFormat::Ico)
            .unwrap();

        let icon_dir = IconDir::read(std::fs::File::open(&path).unwrap()).unwrap();
        let sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, vec![16, 24, 32, 48]);
    }

    #[test]
    fn test_save_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");

        Encoder::default()
            .save_with_format(&DynamicImage::new_rgba8(5, 4), &path, ImageFormat::Jpeg)
            .unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.dimensions(), (5, 4));
        assert!(!reloaded.color().has_alpha());
    }

    #[test]
    fn test_failed_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("texture.dds");

        // No DDS encoder exists, so encoding fails before anything is written.
        let result =
            Encoder::default().save_with_format(&DynamicImage::new_rgba8(4, 4), &path, ImageFormat::Dds);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(Encoder::format_for_path(Path::new("notes.xyz")).is_err());
        assert_eq!(
            Encoder::format_for_path(Path::new("photo.JPEG")).unwrap(),
            ImageFormat::Jpeg
        );
    }
}
