// imgbatch/src/cli.rs
use crate::core::{Dimensions, Result};
use crate::tools::{PngToIcoConfig, ResizeConfig, SvgToPngConfig};
use clap::{Args, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// Flags shared by every tool.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Sets up `env_logger`; `RUST_LOG` overrides the default level.
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(if self.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            })
            .parse_default_env()
            .format_timestamp(None)
            .init();
    }
}

/// Convert PNG images to ICO format.
#[derive(Parser, Debug)]
#[command(name = "png2ico", version, about)]
pub struct PngToIcoCli {
    /// PNG file or folder of PNG files
    #[arg(value_name = "INPUT_FILE_OR_FOLDER")]
    pub input: PathBuf,

    /// Directory the ICO files are written to
    #[arg(value_name = "OUTPUT_DIRECTORY")]
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl PngToIcoCli {
    pub fn config(&self) -> PngToIcoConfig {
        PngToIcoConfig::new(&self.input, &self.output).with_progress(!self.common.quiet)
    }
}

/// Convert SVG files to PNG format with a specified resolution.
#[derive(Parser, Debug)]
#[command(name = "svg2png", version, about)]
pub struct SvgToPngCli {
    /// Folder containing SVG files (a single SVG file also works)
    #[arg(value_name = "INPUT_FOLDER")]
    pub input: PathBuf,

    /// Output resolution in pixels
    #[arg(
        long,
        required = true,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub resolution: Vec<u32>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SvgToPngCli {
    pub fn config(&self) -> Result<SvgToPngConfig> {
        let size = dimensions_from(&self.resolution)?;
        Ok(SvgToPngConfig::new(&self.input, size).with_progress(!self.common.quiet))
    }
}

/// Resize images to a specified size.
#[derive(Parser, Debug)]
#[command(name = "imgresize", version, about)]
pub struct ResizeCli {
    /// Path to the input image or folder
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the output folder
    #[arg(short, long)]
    pub output: PathBuf,

    /// New size as width height
    #[arg(
        short,
        long,
        required = true,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: Vec<u32>,

    /// Write <name>_<W>x<H>.<ext> instead of reusing the input file name
    #[arg(short, long)]
    pub new: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ResizeCli {
    pub fn config(&self) -> Result<ResizeConfig> {
        let size = dimensions_from(&self.size)?;
        Ok(ResizeConfig::new(&self.input, &self.output, size)
            .with_new_files(self.new)
            .with_progress(!self.common.quiet))
    }
}

fn dimensions_from(values: &[u32]) -> Result<Dimensions> {
    match values {
        [width, height] => Dimensions::new(*width, *height),
        _ => Err(crate::core::ConvertError::InvalidParameter(format!(
            "Expected WIDTH HEIGHT, got {} value(s)",
            values.len()
        ))),
    }
}
