// imgbatch/src/processors/rasterizer.rs
use crate::core::{ConvertError, Dimensions, Result, VectorRasterizer};
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::path::Path;
use std::sync::Arc;

/// SVG renderer backed by resvg.
pub struct SvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRasterizer {
    pub fn new() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Makes system fonts available to `<text>` elements.
    pub fn with_system_fonts(mut self) -> Self {
        Arc::make_mut(&mut self.fontdb).load_system_fonts();
        self
    }

    fn parse(&self, path: &Path) -> Result<usvg::Tree> {
        let data = std::fs::read(path)?;

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        options.resources_dir = std::fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.to_path_buf()));

        let tree = usvg::Tree::from_data(&data, &options)?;
        Ok(tree)
    }
}

impl VectorRasterizer for SvgRasterizer {
    fn rasterize_to(&self, path: &Path, size: Dimensions) -> Result<RgbaImage> {
        let tree = self.parse(path)?;
        let svg_size = tree.size();

        log::debug!(
            "Rendering {} ({}x{}) at {}",
            path.display(),
            svg_size.width(),
            svg_size.height(),
            size
        );

        let mut pixmap = tiny_skia::Pixmap::new(size.width, size.height).ok_or_else(|| {
            ConvertError::ProcessingError(format!("Failed to allocate {} pixmap", size))
        })?;

        // Axes scale independently so the output is exactly `size`.
        let transform = tiny_skia::Transform::from_scale(
            size.width as f32 / svg_size.width(),
            size.height as f32 / svg_size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let mut image = RgbaImage::new(size.width, size.height);
        for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }

        Ok(image)
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
