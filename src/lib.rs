pub mod cli;
mod core;
mod processors;
mod tools;
mod utils;

pub use crate::cli::{CommonArgs, PngToIcoCli, ResizeCli, SvgToPngCli};
pub use crate::core::{
    BatchDriver, BatchItem, BatchReport, ConvertError, Dimensions, ImageCodec, ItemOutcome,
    ItemStatus, Result, Transform, VectorRasterizer, MAX_DIMENSION,
};
pub use crate::processors::{
    enumerate_inputs, Encoder, InputSet, Loader, RasterCodec, ResizeAlgorithm, Resizer,
    SvgRasterizer, ICON_SIZES,
};
pub use crate::tools::{PngToIco, PngToIcoConfig, Resize, ResizeConfig, SvgToPng, SvgToPngConfig};
pub use crate::utils::{
    converted_output_path, format_file_size, resolution_dir, same_name_output_path,
    suffixed_output_path, timestamped_dir,
};

pub mod prelude {
    pub use crate::{
        BatchDriver, BatchReport, Dimensions, ImageCodec, PngToIco, Resize, SvgToPng, Transform,
        VectorRasterizer,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
