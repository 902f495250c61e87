//! Templates root resolution.
//! The templates root holds the `backend` and `frontend` templates. It is
//! either a local directory or a git repository cloned into the temp dir.
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Represents the source location of the templates.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem templates root
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Classifies a path or URL.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if url.scheme() == "https" || url.scheme() == "git" {
                return Self::Git(s.to_string());
            }
        }

        // SSH git URL format
        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }
}

/// Trait for loading a templates root from different sources.
pub trait TemplateLoader {
    /// Returns a local directory holding the templates.
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for templates on the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path doesn't exist
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(path.to_path_buf())
    }
}

/// Loader for templates kept in a git repository.
pub struct GitLoader<'a, S: AsRef<str>> {
    prompt: &'a dyn Prompter,
    repo: S,
    skip_overwrite_check: bool,
    cache_dir: PathBuf,
}

impl<'a, S: AsRef<str>> GitLoader<'a, S> {
    /// Creates a loader that clones into `<temp dir>/jangular-templates`.
    pub fn new(prompt: &'a dyn Prompter, repo: S, skip_overwrite_check: bool) -> Self {
        let cache_dir = std::env::temp_dir().join("jangular-templates");
        Self { prompt, repo, skip_overwrite_check, cache_dir }
    }

    /// Directory name of the clone, taken from the last URL segment.
    pub fn repo_name(&self) -> &str {
        let repo_url = self.repo.as_ref().trim_end_matches('/');
        let name = repo_url.rsplit(['/', ':']).next().unwrap_or("templates");
        name.trim_end_matches(".git")
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<'_, S> {
    /// # Errors
    /// * `Error::Git2Error` if the clone fails
    fn load(&self) -> Result<PathBuf> {
        let repo_url = self.repo.as_ref();
        let clone_path = self.cache_dir.join(self.repo_name());

        if clone_path.exists() {
            let response = self.prompt.confirm(
                self.skip_overwrite_check,
                format!("Templates '{}' were cloned before. Replace them?", clone_path.display()),
            )?;
            if response {
                fs::remove_dir_all(&clone_path)?;
            } else {
                debug!("Using existing directory '{}'.", clone_path.display());
                return Ok(clone_path);
            }
        }

        debug!("Cloning '{}' to '{}'.", repo_url, clone_path.display());

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, &clone_path)?;
        Ok(clone_path)
    }
}

/// The templates root used when none is given: `templates/` next to the
/// executable, or the templates bundled with the crate sources.
pub fn default_templates_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}

/// Resolves the templates root from an optional `--templates` value.
///
/// Without a value the default root is returned even if it is missing; the
/// generator then degrades per template. An explicit local path must exist.
pub fn load_templates(
    prompt: &dyn Prompter,
    templates: Option<&str>,
    skip_overwrite_check: bool,
) -> Result<PathBuf> {
    let Some(templates) = templates else {
        return Ok(default_templates_root());
    };

    let source = TemplateSource::from_string(templates);
    println!("Using templates from the {source}");

    let loader: Box<dyn TemplateLoader + '_> = match source {
        TemplateSource::Git(repo) => Box::new(GitLoader::new(prompt, repo, skip_overwrite_check)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load()
}
