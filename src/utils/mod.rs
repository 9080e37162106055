// imgbatch/src/utils/mod.rs
use crate::core::{ConvertError, Dimensions, Result};
use chrono::{DateTime, TimeZone};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

fn file_stem(input: &Path) -> Result<&OsStr> {
    input.file_stem().ok_or_else(|| {
        ConvertError::InvalidParameter(format!("Invalid file name: {}", input.display()))
    })
}

/// `<output_dir>/<stem>.<extension>`
pub fn converted_output_path(input: &Path, output_dir: &Path, extension: &str) -> Result<PathBuf> {
    let mut name = file_stem(input)?.to_os_string();
    name.push(".");
    name.push(extension);
    Ok(output_dir.join(name))
}

/// `<output_dir>/<file name>`
pub fn same_name_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        ConvertError::InvalidParameter(format!("Invalid file name: {}", input.display()))
    })?;
    Ok(output_dir.join(name))
}

/// `<output_dir>/<stem>_<W>x<H>.<original extension>`
pub fn suffixed_output_path(input: &Path, output_dir: &Path, size: Dimensions) -> Result<PathBuf> {
    let mut name = file_stem(input)?.to_os_string();
    name.push(format!("_{}", size));
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    Ok(output_dir.join(name))
}

/// `<base>/converted_to_png_<W>x<H>`
pub fn resolution_dir(base: &Path, size: Dimensions) -> PathBuf {
    base.join(format!("converted_to_png_{}", size))
}

/// `<base>/images_resized_YYYYMMDD_HHMMSS`
pub fn timestamped_dir<Tz>(base: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    base.join(format!("images_resized_{}", at.format("%Y%m%d_%H%M%S")))
}

pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
