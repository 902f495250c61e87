//! Remove-if-present helpers shared by the pruning and configuration steps.
//! Failures are collected rather than returned so one bad path does not
//! stop the removal of the others.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Result of a batch of removals.
#[derive(Debug, Default)]
pub struct CleanupReport {
    /// Paths that existed and were removed
    pub removed: Vec<PathBuf>,
    /// Paths that could not be removed, with the reason
    pub failures: Vec<(PathBuf, io::Error)>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Logs every failure as a warning and returns the messages.
    pub fn warnings(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|(path, err)| {
                let message = format!("Could not remove '{}': {}", path.display(), err);
                warn!("{message}");
                message
            })
            .collect()
    }

    fn record(&mut self, path: &Path, result: io::Result<()>) {
        match result {
            Ok(()) => {
                debug!("Removed '{}'", path.display());
                self.removed.push(path.to_path_buf());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("'{}' already absent", path.display());
            }
            Err(e) => self.failures.push((path.to_path_buf(), e)),
        }
    }

    pub fn remove_dir(&mut self, path: &Path) {
        self.record(path, fs::remove_dir_all(path));
    }

    pub fn remove_file(&mut self, path: &Path) {
        self.record(path, fs::remove_file(path));
    }
}
