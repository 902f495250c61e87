//! Project materialization.
//! Composes the copy, rewrite, prune and configure steps into one run and
//! decides which step outcomes degrade and which abort.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{DatabaseType, ProjectConfig};
use crate::constants::{BACKEND_DIR, BACKEND_TEMPLATE, FRONTEND_DIR, FRONTEND_TEMPLATE};
use crate::entrypoint::{render_build_manifest, rewrite_entry_point, EntryPointOutcome};
use crate::error::{Error, Result};
use crate::manifest::write_root_manifest;
use crate::processor::{copy_template, CopyOutcome, MissingTemplate};
use crate::properties::generate_config;
use crate::pruner::{prune_unselected, scaffold_migration_dirs};
use crate::renderer::TemplateRenderer;
use crate::secret::generate_secret;

/// Ensures the project directory is safe to generate into.
///
/// # Arguments
/// * `output_dir` - Target project directory
/// * `force` - Whether to generate into a non-empty directory anyway
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory has content and
///   `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        let is_empty = output_dir.is_dir() && fs::read_dir(output_dir)?.next().is_none();
        if !is_empty {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: output_dir.display().to_string(),
            });
        }
    }
    Ok(output_dir.to_path_buf())
}

/// Summary of one materialization run.
#[derive(Debug)]
pub struct GenerationReport {
    pub project_dir: PathBuf,
    pub backend: CopyOutcome,
    pub frontend: CopyOutcome,
    pub entry_point: EntryPointOutcome,
    pub manifest: PathBuf,
    /// Non-fatal conditions met along the way
    pub warnings: Vec<String>,
}

/// Materializes projects from a templates root.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    templates_root: &'a Path,
    output_root: &'a Path,
    force: bool,
}

impl<'a> Generator<'a> {
    /// Creates a generator.
    ///
    /// # Arguments
    /// * `renderer` - Renderer for the generated properties files
    /// * `templates_root` - Directory holding the `backend` and `frontend` templates
    /// * `output_root` - Directory the project directory is created in
    /// * `force` - Generate into a non-empty project directory
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        templates_root: &'a Path,
        output_root: &'a Path,
        force: bool,
    ) -> Self {
        Self { renderer, templates_root, output_root, force }
    }

    pub fn project_dir(&self, config: &ProjectConfig) -> PathBuf {
        self.output_root.join(config.project_name())
    }

    /// Runs the whole pipeline for `config`.
    ///
    /// Steps run in order: project root, backend copy, build manifest and entry
    /// point rewrite, migration scaffold and prune, properties, frontend copy,
    /// root manifest. Nothing is rolled back when a step fails.
    pub fn materialize(&self, config: &ProjectConfig) -> Result<GenerationReport> {
        let project_dir = ensure_output_dir(self.project_dir(config), self.force)?;
        fs::create_dir_all(&project_dir)?;
        debug!("Materializing project in {}", project_dir.display());

        let mut warnings = Vec::new();

        println!("Setting up Java backend...");
        let backend_template = self.templates_root.join(BACKEND_TEMPLATE);
        let backend_dir = project_dir.join(BACKEND_DIR);
        let backend = copy_template(&backend_template, &backend_dir, MissingTemplate::Fallback)?;
        if backend == CopyOutcome::Fallback {
            warnings.push(format!(
                "Backend template not found at '{}'; created a basic directory structure instead",
                backend_template.display()
            ));
        }

        render_build_manifest(&backend_dir, config)?;

        let entry_point = rewrite_entry_point(&backend_template, &backend_dir, config)?;
        if entry_point == EntryPointOutcome::TemplateMissing {
            let message = "Entry point template not found; no application class was generated";
            warn!("{message}");
            warnings.push(message.to_string());
        }

        scaffold_migration_dirs(&backend_dir)?;
        let pruned =
            prune_unselected(&backend_dir, &DatabaseType::ALL, config.database_type());
        warnings.extend(pruned.warnings());

        let jwt_secret = match config.jwt_secret() {
            Some(secret) => secret.to_string(),
            None => generate_secret(),
        };
        let generated = generate_config(&backend_dir, config, &jwt_secret, self.renderer)?;
        warnings.extend(generated.cleanup.warnings());
        println!("{} generated", config.database_type().properties_file());

        println!("Setting up Angular frontend...");
        let frontend_template = self.templates_root.join(FRONTEND_TEMPLATE);
        let frontend = copy_template(
            &frontend_template,
            project_dir.join(FRONTEND_DIR),
            MissingTemplate::Skip,
        )?;
        if frontend == CopyOutcome::Skipped {
            warnings.push(format!(
                "Frontend template not found at '{}'; skipped frontend setup",
                frontend_template.display()
            ));
        }

        let manifest = write_root_manifest(&project_dir, config.project_name())?;

        Ok(GenerationReport { project_dir, backend, frontend, entry_point, manifest, warnings })
    }
}
