use anyhow::Context;
use clap::Parser;
use imgbatch::{SvgToPng, SvgToPngCli};

fn main() -> anyhow::Result<()> {
    let cli = SvgToPngCli::parse();
    cli.common.init_logger();

    let config = cli.config()?;
    let report = SvgToPng::with_size(config.size)
        .run(&config)
        .with_context(|| format!("Cannot convert {}", config.input.display()))?;

    if report.is_empty() {
        println!("No SVG files found in {}", config.input.display());
        return Ok(());
    }

    println!("Done ({})", report);

    Ok(())
}
