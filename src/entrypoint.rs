//! Entry point and build manifest rewriting.
//! Places the application class into the configured package and resolves the
//! project tokens in the Maven build manifest.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::config::ProjectConfig;
use crate::constants::{BUILD_MANIFEST, ENTRY_POINT_TEMPLATE};
use crate::error::Result;
use crate::identifiers::{entry_point_class_name, entry_point_file_name};
use crate::layout::{java_source_root, package_dir};
use crate::processor::write_file;
use crate::renderer::substitute_all;

/// Outcome of [`rewrite_entry_point`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPointOutcome {
    /// The application class was written to this path
    Written(PathBuf),
    /// The template ships no entry point template; nothing was written
    TemplateMissing,
}

/// Renders `MainApplication.java.template` into the package directory.
///
/// The package directory is always created. The `.template` file copied
/// along with the rest of the template is removed from the output so the
/// class exists exactly once.
///
/// # Errors
/// * `Error::IoError` on read or write failures
/// * `Error::UnresolvedPlaceholders` if the template uses unknown tokens
pub fn rewrite_entry_point<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    backend: Q,
    config: &ProjectConfig,
) -> Result<EntryPointOutcome> {
    let backend = backend.as_ref();
    let package_dir = package_dir(backend, config.package_name());
    fs::create_dir_all(&package_dir)?;

    let template = java_source_root(template_root).join(ENTRY_POINT_TEMPLATE);
    if !template.is_file() {
        debug!("No entry point template at {}", template.display());
        return Ok(EntryPointOutcome::TemplateMissing);
    }

    let mapping: IndexMap<String, String> = IndexMap::from([
        ("packageName".to_string(), config.package_name().to_string()),
        (
            "projectNameCamelCase".to_string(),
            entry_point_class_name(config.project_name()),
        ),
    ]);

    let content = fs::read_to_string(&template)?;
    let rendered = substitute_all(&content, &mapping, &template)?;

    let target = package_dir.join(entry_point_file_name(config.project_name()));
    write_file(&target, &rendered)?;
    debug!("Entry point written to {}", target.display());

    let copied = java_source_root(backend).join(ENTRY_POINT_TEMPLATE);
    match fs::remove_file(&copied) {
        Ok(()) => debug!("Removed copied {}", copied.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    Ok(EntryPointOutcome::Written(target))
}

/// Resolves `{{groupId}}`, `{{artifactId}}` and `{{projectName}}` in the
/// backend's `pom.xml`, if there is one.
///
/// Returns the manifest path when it was rewritten.
pub fn render_build_manifest<P: AsRef<Path>>(
    backend: P,
    config: &ProjectConfig,
) -> Result<Option<PathBuf>> {
    let manifest = backend.as_ref().join(BUILD_MANIFEST);
    if !manifest.is_file() {
        debug!("No build manifest at {}", manifest.display());
        return Ok(None);
    }

    let mapping: IndexMap<String, String> = IndexMap::from([
        ("groupId".to_string(), config.group_id().to_string()),
        ("artifactId".to_string(), config.artifact_id().to_string()),
        ("projectName".to_string(), config.project_name().to_string()),
    ]);

    let content = fs::read_to_string(&manifest)?;
    let rendered = substitute_all(&content, &mapping, &manifest)?;
    write_file(&manifest, &rendered)?;
    Ok(Some(manifest))
}
