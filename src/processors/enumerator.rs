// imgbatch/src/processors/enumerator.rs
use crate::core::{ConvertError, Result};
use crate::utils::has_extension;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What the input path of a run turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSet {
    File(PathBuf),
    Directory { dir: PathBuf, files: Vec<PathBuf> },
}

impl InputSet {
    pub fn files(&self) -> Vec<PathBuf> {
        match self {
            InputSet::File(path) => vec![path.clone()],
            InputSet::Directory { files, .. } => files.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            InputSet::File(_) => false,
            InputSet::Directory { files, .. } => files.is_empty(),
        }
    }
}

/// Resolves `input` into the files to convert.
///
/// A single file is taken as-is. A directory contributes its direct children
/// whose extension is in `extensions` (case-insensitive), sorted by name.
pub fn enumerate_inputs(input: &Path, extensions: &[&str]) -> Result<InputSet> {
    if input.is_file() {
        return Ok(InputSet::File(input.to_path_buf()));
    }

    if !input.is_dir() {
        return Err(ConvertError::InvalidInput(input.to_path_buf()));
    }

    // Symlinks count as what they point to.
    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_extension(entry.path(), extensions))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    log::debug!(
        "Found {} matching file(s) in {}",
        files.len(),
        input.display()
    );

    Ok(InputSet::Directory {
        dir: input.to_path_buf(),
        files,
    })
}
