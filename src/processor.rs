//! Template directory copying.
//! Walks a template tree and reproduces it byte for byte under a destination,
//! degrading to a skeleton or skipping when the template is not installed.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::layout::{java_source_root, resources_root};

/// What to do when the template directory is not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTemplate {
    /// Create an empty source and resources skeleton instead
    Fallback,
    /// Create nothing
    Skip,
}

/// Outcome of a template copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The template was copied; `files` counts the copied files
    Copied { files: usize },
    /// The template was missing and a skeleton was created
    Fallback,
    /// The template was missing and nothing was created
    Skipped,
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
}

/// Creates the minimal backend layout used when no template is installed.
pub fn create_fallback_skeleton<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    fs::create_dir_all(java_source_root(destination))?;
    fs::create_dir_all(resources_root(destination))?;
    Ok(())
}

/// Copies a template directory tree into `destination`.
///
/// # Arguments
/// * `template_root` - Template directory to copy
/// * `destination` - Directory that receives the copy
/// * `on_missing` - Behavior when `template_root` does not exist
///
/// # Returns
/// * `Result<CopyOutcome>` - What the copy did
///
/// # Errors
/// Any filesystem error during the copy itself is returned; a missing
/// template is not an error.
pub fn copy_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    destination: Q,
    on_missing: MissingTemplate,
) -> Result<CopyOutcome> {
    let template_root = template_root.as_ref();
    let destination = destination.as_ref();

    if !template_root.is_dir() {
        return match on_missing {
            MissingTemplate::Fallback => {
                warn!(
                    "Template directory not found at '{}', creating a basic directory structure instead",
                    template_root.display()
                );
                create_fallback_skeleton(destination)?;
                Ok(CopyOutcome::Fallback)
            }
            MissingTemplate::Skip => {
                warn!(
                    "Template directory not found at '{}', skipping",
                    template_root.display()
                );
                Ok(CopyOutcome::Skipped)
            }
        };
    }

    debug!("Copying template '{}' to '{}'", template_root.display(), destination.display());
    let mut files = 0;

    // Every entry is copied, dotfiles included; templates are reproduced as is.
    for entry in WalkDir::new(template_root) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(template_root).map_err(|e| {
            Error::ValidationError(format!("'{}': {}", entry.path().display(), e))
        })?;
        let target: PathBuf = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            debug!("Copying file: {}", target.display());
            copy_file(entry.path(), &target)?;
            files += 1;
        }
    }

    Ok(CopyOutcome::Copied { files })
}
