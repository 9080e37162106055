use anyhow::Context;
use clap::Parser;
use imgbatch::{Resize, ResizeCli};

fn main() -> anyhow::Result<()> {
    let cli = ResizeCli::parse();
    cli.common.init_logger();

    let config = cli.config()?;
    let report = Resize::from_config(&config)
        .run(&config)
        .with_context(|| format!("Cannot resize {}", config.input.display()))?;

    if report.is_empty() {
        println!("No images found in {}", config.input.display());
        return Ok(());
    }

    println!("Modified files:");
    for output in report.converted_outputs() {
        println!("{}", output.display());
    }

    Ok(())
}
