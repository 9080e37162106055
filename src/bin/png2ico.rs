use anyhow::Context;
use clap::Parser;
use imgbatch::{PngToIco, PngToIcoCli};

fn main() -> anyhow::Result<()> {
    let cli = PngToIcoCli::parse();
    cli.common.init_logger();

    let config = cli.config();
    let report = PngToIco::default()
        .run(&config)
        .with_context(|| format!("Cannot convert {}", config.input.display()))?;

    if report.is_empty() {
        println!("No PNG files found in the specified folder.");
        return Ok(());
    }

    println!(
        "Done ({}). ICO files are saved in: {}",
        report,
        config.output_dir.display()
    );

    Ok(())
}
