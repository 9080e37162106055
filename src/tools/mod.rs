// imgbatch/src/tools/mod.rs
//! The three batch tools. Each pairs a [`Transform`] with the rules for
//! where its outputs go, and drives it with [`BatchDriver`].

mod png_to_ico;
mod resize;
mod svg_to_png;

pub use png_to_ico::{PngToIco, PngToIcoConfig};
pub use resize::{Resize, ResizeConfig};
pub use svg_to_png::{SvgToPng, SvgToPngConfig};

use crate::core::{BatchDriver, BatchReport, Result, Transform};
use crate::processors::InputSet;
use std::path::Path;

fn drive<T: Transform>(
    transform: T,
    inputs: &InputSet,
    output_dir: &Path,
    show_progress: bool,
) -> Result<BatchReport> {
    BatchDriver::new(transform)
        .with_progress(show_progress)
        .run(&inputs.files(), output_dir)
}

fn warn_if_empty(inputs: &InputSet) -> bool {
    if let InputSet::Directory { dir, files } = inputs {
        if files.is_empty() {
            log::warn!("No matching files found in {}", dir.display());
            return true;
        }
    }
    false
}
