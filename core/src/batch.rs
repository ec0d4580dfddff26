use crate::processor::{is_rvmat_file, RvmatProcessor};
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Receiver for human-readable progress lines.
pub trait LogSink {
    fn log(&self, line: &str);
}

impl<F: Fn(&str)> LogSink for F {
    fn log(&self, line: &str) {
        self(line)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.processed.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn failed_paths(&self) -> Vec<&Path> {
        self.failed.iter().map(|f| f.path.as_path()).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs variant generation over a list of files, one at a time.
pub struct BatchProcessor<'a> {
    processor: RvmatProcessor,
    sink: Option<&'a dyn LogSink>,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(processor: RvmatProcessor) -> Self {
        Self {
            processor,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn LogSink) -> Self {
        self.sink = Some(sink);
        self
    }

    fn emit(&self, line: &str) {
        info!("{line}");
        if let Some(sink) = self.sink {
            sink.log(line);
        }
    }

    /// Process every file; a failing file is recorded and the loop moves on.
    pub fn process_files(&self, files: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();
        let total = files.len();
        self.emit(&format!("Processing {total} files..."));

        for (i, path) in files.iter().enumerate() {
            let name = display_name(path);

            if !is_rvmat_file(path) {
                self.emit(&format!("  ✗ not a .rvmat file: {name}"));
                report.failed.push(FailedFile {
                    path: path.clone(),
                    reason: "not a .rvmat file".into(),
                });
                continue;
            }

            self.emit(&format!("Processing ({}/{total}): {name}", i + 1));
            match self.processor.process_rvmat_file(path) {
                Ok(_) => {
                    self.emit("  ✓ done");
                    report.processed.push(path.clone());
                }
                Err(err) => {
                    warn!("{}: {err}", path.display());
                    self.emit(&format!("  ✗ failed: {err}"));
                    report.failed.push(FailedFile {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        self.emit(&format!(
            "Finished: {} succeeded, {} failed",
            report.success_count(),
            report.failure_count()
        ));
        if !report.failed.is_empty() {
            self.emit("Failed files:");
            for failed in &report.failed {
                self.emit(&format!("  - {}", failed.path.display()));
            }
        }

        report
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
