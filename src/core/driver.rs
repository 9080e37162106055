// imgbatch/src/core/driver.rs
use super::{BatchItem, BatchReport, ItemStatus, Result, Transform};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Runs one [`Transform`] over a list of inputs, one item at a time.
///
/// A failing item is recorded in the report and the loop moves on; only
/// failing to create the output directory aborts the run.
pub struct BatchDriver<T: Transform> {
    transform: T,
    show_progress: bool,
}

impl<T: Transform> BatchDriver<T> {
    pub fn new(transform: T) -> Self {
        Self {
            transform,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[cfg(test)]
    fn transform(&self) -> &T {
        &self.transform
    }

    pub fn run(&self, inputs: &[PathBuf], output_dir: &Path) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        if inputs.is_empty() {
            log::warn!("Nothing to convert");
            return Ok(report);
        }

        std::fs::create_dir_all(output_dir)?;

        log::info!(
            "{}: {} file(s) into {}",
            self.transform.label(),
            inputs.len(),
            output_dir.display()
        );

        let pb = self.create_progress_bar(inputs.len());

        // Output path -> input that claimed it in this run.
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        for input in inputs {
            let (item, status) = self.process_one(input, output_dir, &mut claimed, &pb);
            report.push(item, status);
            pb.inc(1);
        }

        pb.finish_with_message(report.to_string());
        log::info!("{}: {}", self.transform.label(), report);

        Ok(report)
    }

    fn process_one(
        &self,
        input: &Path,
        output_dir: &Path,
        claimed: &mut HashMap<PathBuf, PathBuf>,
        pb: &ProgressBar,
    ) -> (BatchItem, ItemStatus) {
        let output = match self.transform.output_path(input, output_dir) {
            Ok(output) => output,
            Err(e) => {
                let item = BatchItem::new(input.to_path_buf(), output_dir.to_path_buf());
                pb.suspend(|| log::error!("Error converting {}: {}", item.display_name(), e));
                return (item, ItemStatus::Failed(e.to_string()));
            }
        };
        let item = BatchItem::new(input.to_path_buf(), output);

        pb.set_message(item.display_name());

        if let Some(first) = claimed.get(&item.output) {
            let message = format!(
                "output {} collides with {}",
                item.output.display(),
                first.display()
            );
            pb.suspend(|| log::error!("Error converting {}: {}", item.display_name(), message));
            return (item, ItemStatus::Failed(message));
        }
        claimed.insert(item.output.clone(), item.input.clone());

        if self.transform.skip_existing() && item.output.exists() {
            log::debug!("Skipping {}, {} exists", item.display_name(), item.output.display());
            return (item, ItemStatus::Skipped);
        }

        match self.transform.apply(&item) {
            Ok(()) => {
                pb.suspend(|| {
                    log::info!(
                        "Converted: {} to {}",
                        item.input.display(),
                        item.output.display()
                    )
                });
                (item, ItemStatus::Converted)
            }
            Err(e) => {
                pb.suspend(|| log::error!("Error converting {}: {}", item.display_name(), e));
                let message = e.to_string();
                (item, ItemStatus::Failed(message))
            }
        }
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("#>-")),
            Err(e) => log::debug!("Falling back to the default progress style: {}", e),
        }
        pb.set_prefix(self.transform.label().to_string());
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConvertError;
    use std::cell::RefCell;
    use std::fs;

    /// Copies the input, failing for names containing "bad".
    struct CopyTransform {
        skip_existing: bool,
        applied: RefCell<Vec<String>>,
    }

    impl CopyTransform {
        fn new(skip_existing: bool) -> Self {
            Self {
                skip_existing,
                applied: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transform for CopyTransform {
        fn label(&self) -> &str {
            "Copying"
        }

        fn extensions(&self) -> &[&str] {
            &["txt"]
        }

        fn output_path(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
            let name = input
                .file_name()
                .ok_or_else(|| ConvertError::InvalidParameter("no file name".to_string()))?;
            Ok(output_dir.join(name))
        }

        fn skip_existing(&self) -> bool {
            self.skip_existing
        }

        fn apply(&self, item: &BatchItem) -> Result<()> {
            self.applied.borrow_mut().push(item.display_name());
            if item.display_name().contains("bad") {
                return Err(ConvertError::ProcessingError("bad input".to_string()));
            }
            fs::copy(&item.input, &item.output)?;
            Ok(())
        }
    }

    fn write_inputs(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                fs::write(&path, name.as_bytes()).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = input_dir.path().join("out");
        let inputs = write_inputs(input_dir.path(), &["a.txt", "bad.txt", "c.txt"]);

        let driver = BatchDriver::new(CopyTransform::new(false)).with_progress(false);
        let report = driver.run(&inputs, &output_dir).unwrap();

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.converted(), 2);
        assert_eq!(report.failed(), 1);
        assert!(output_dir.join("a.txt").exists());
        assert!(!output_dir.join("bad.txt").exists());
        assert!(output_dir.join("c.txt").exists());
        assert_eq!(driver.transform().applied.borrow().len(), 3);
    }

    #[test]
    fn test_skip_existing_outputs() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = input_dir.path().join("out");
        fs::create_dir_all(&output_dir).unwrap();
        fs::write(output_dir.join("a.txt"), b"old").unwrap();
        let inputs = write_inputs(input_dir.path(), &["a.txt", "b.txt"]);

        let driver = BatchDriver::new(CopyTransform::new(true)).with_progress(false);
        let report = driver.run(&inputs, &output_dir).unwrap();

        assert_eq!(report.skipped(), 1);
        assert_eq!(report.converted(), 1);
        assert_eq!(*driver.transform().applied.borrow(), vec!["b.txt".to_string()]);
        assert_eq!(fs::read(output_dir.join("a.txt")).unwrap(), b"old");
    }

    #[test]
    fn test_colliding_outputs_fail_instead_of_overwriting() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = input_dir.path().join("out");
        let first = input_dir.path().join("a").join("same.txt");
        let second = input_dir.path().join("b").join("same.txt");
        for path in [&first, &second] {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, path.to_string_lossy().as_bytes()).unwrap();
        }

        let driver = BatchDriver::new(CopyTransform::new(false)).with_progress(false);
        let report = driver.run(&[first.clone(), second], &output_dir).unwrap();

        assert_eq!(report.converted(), 1);
        assert_eq!(report.failed(), 1);
        let failures: Vec<_> = report.failures().collect();
        assert!(failures[0].1.contains("collides with"));
        assert_eq!(driver.transform().applied.borrow().len(), 1);
        assert_eq!(
            fs::read(output_dir.join("same.txt")).unwrap(),
            first.to_string_lossy().as_bytes()
        );
    }

    #[test]
    fn test_colliding_output_is_not_reported_as_skipped() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = input_dir.path().join("out");
        let first = input_dir.path().join("a").join("same.txt");
        let second = input_dir.path().join("b").join("same.txt");
        for path in [&first, &second] {
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"x").unwrap();
        }

        let driver = BatchDriver::new(CopyTransform::new(true)).with_progress(false);
        let report = driver.run(&[first, second], &output_dir).unwrap();

        assert_eq!(report.converted(), 1);
        assert_eq!(report.skipped(), 0);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_empty_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("out");

        let driver = BatchDriver::new(CopyTransform::new(false)).with_progress(false);
        let report = driver.run(&[], &output_dir).unwrap();

        assert!(report.is_empty());
        assert!(!output_dir.exists());
    }
}
