/// Directory scanning for `.rvmat` sources with exclusion of generated variants
use crate::processor::is_rvmat_file;
use crate::variants::variant_markers;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    /// Skip files whose name contains one of `exclude_markers`
    #[serde(default = "default_true")]
    pub exclude_generated: bool,

    /// Lower-case name fragments of already generated files
    #[serde(default = "variant_markers")]
    pub exclude_markers: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_generated: true,
            exclude_markers: variant_markers(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub excluded: Vec<PathBuf>,
    /// Folders that could not be listed; their contents are skipped
    pub unreadable: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub struct RvmatScanner {
    config: ScanConfig,
}

impl RvmatScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Recursively collect `.rvmat` files under `root`, sorted by path.
    ///
    /// Symlinked folders are not entered. Folders that cannot be read are
    /// recorded in [`ScanResult::unreadable`] and the walk goes on.
    pub fn scan(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();
        if !root.is_dir() {
            return result;
        }

        self.scan_recursive(root, &mut result);
        result.files.sort();
        result.excluded.sort();

        info!(
            "found {} .rvmat files in {} ({} excluded, {} unreadable folders)",
            result.files.len(),
            root.display(),
            result.excluded.len(),
            result.unreadable.len()
        );
        result
    }

    fn scan_recursive(&self, current: &Path, result: &mut ScanResult) {
        let entries = match fs::read_dir(current) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot read {}: {err}", current.display());
                result.unreadable.push(current.to_path_buf());
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("cannot list {}: {err}", current.display());
                    if !result.unreadable.iter().any(|p| p == current) {
                        result.unreadable.push(current.to_path_buf());
                    }
                    continue;
                }
            };
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                result.unreadable.push(path);
                continue;
            };

            if file_type.is_dir() {
                self.scan_recursive(&path, result);
            } else if file_type.is_symlink() && path.is_dir() {
                debug!("not following symlinked folder {}", path.display());
            } else if path.is_file() && is_rvmat_file(&path) {
                if self.is_excluded(&path) {
                    debug!("skipping generated file {}", path.display());
                    result.excluded.push(path);
                } else {
                    result.files.push(path);
                }
            }
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if !self.config.exclude_generated {
            return false;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.config
            .exclude_markers
            .iter()
            .any(|marker| name.contains(&marker.to_lowercase()))
    }
}
