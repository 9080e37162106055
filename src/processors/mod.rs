// imgbatch/src/processors/mod.rs
mod codec;
mod encoder;
mod enumerator;
mod loader;
mod rasterizer;
mod resizer;

pub use codec::RasterCodec;
pub use encoder::{Encoder, ICON_SIZES};
pub use enumerator::{enumerate_inputs, InputSet};
pub use loader::Loader;
pub use rasterizer::SvgRasterizer;
pub use resizer::{ResizeAlgorithm, Resizer};
