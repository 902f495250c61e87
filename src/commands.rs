//! `test` and `build` for generated projects.
//! Both run from the project root and delegate to Maven and npm.

use std::path::{Path, PathBuf};

use crate::constants::{BACKEND_DIR, FRONTEND_DIR};
use crate::error::{Error, Result};
use crate::external::ExternalCommand;

/// Which half of the project a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Backend,
    Frontend,
    All,
}

impl Target {
    /// Resolves the `-b`/`-f`/`-a` flags; no flag means everything.
    pub fn from_flags(backend: bool, frontend: bool) -> Self {
        match (backend, frontend) {
            (true, false) => Target::Backend,
            (false, true) => Target::Frontend,
            _ => Target::All,
        }
    }

    fn includes_backend(&self) -> bool {
        matches!(self, Target::Backend | Target::All)
    }

    fn includes_frontend(&self) -> bool {
        matches!(self, Target::Frontend | Target::All)
    }
}

/// Maven program for a backend: the wrapper when the project ships one.
pub fn maven_program<P: AsRef<Path>>(backend_dir: P) -> String {
    let wrapper = backend_dir.as_ref().join(if cfg!(windows) { "mvnw.cmd" } else { "mvnw" });
    if wrapper.is_file() {
        wrapper.display().to_string()
    } else {
        "mvn".to_string()
    }
}

fn project_dirs<P: AsRef<Path>>(project_dir: P, target: Target) -> Result<(PathBuf, PathBuf)> {
    let backend = project_dir.as_ref().join(BACKEND_DIR);
    let frontend = project_dir.as_ref().join(FRONTEND_DIR);
    for (needed, dir) in [(target.includes_backend(), &backend), (target.includes_frontend(), &frontend)] {
        if needed && !dir.is_dir() {
            return Err(Error::ValidationError(format!(
                "'{}' not found; run this command from the root of a generated project",
                dir.display()
            )));
        }
    }
    Ok((backend, frontend))
}

pub fn test_commands<P: AsRef<Path>>(project_dir: P, target: Target) -> Result<Vec<ExternalCommand>> {
    let (backend, frontend) = project_dirs(project_dir, target)?;
    let mut commands = Vec::new();
    if target.includes_backend() {
        commands.push(ExternalCommand::new(maven_program(&backend), &["test"]).in_dir(&backend));
    }
    if target.includes_frontend() {
        commands.push(
            ExternalCommand::new("npm", &["test", "--", "--watch=false"]).in_dir(&frontend),
        );
    }
    Ok(commands)
}

pub fn build_commands<P: AsRef<Path>>(
    project_dir: P,
    target: Target,
    production: bool,
) -> Result<Vec<ExternalCommand>> {
    let (backend, frontend) = project_dirs(project_dir, target)?;
    let mut commands = Vec::new();
    if target.includes_backend() {
        let args: &[&str] = if production {
            &["clean", "package", "-DskipTests"]
        } else {
            &["clean", "package"]
        };
        commands.push(ExternalCommand::new(maven_program(&backend), args).in_dir(&backend));
    }
    if target.includes_frontend() {
        let args: &[&str] = if production {
            &["run", "build", "--", "--configuration", "production"]
        } else {
            &["run", "build"]
        };
        commands.push(ExternalCommand::new("npm", args).in_dir(&frontend));
    }
    Ok(commands)
}

fn run_all(commands: Vec<ExternalCommand>) -> Result<()> {
    for command in commands {
        println!("Running '{command}'...");
        command.run()?;
    }
    Ok(())
}

pub fn handle_test<P: AsRef<Path>>(project_dir: P, target: Target) -> Result<()> {
    run_all(test_commands(project_dir, target)?)
}

pub fn handle_build<P: AsRef<Path>>(project_dir: P, target: Target, production: bool) -> Result<()> {
    run_all(build_commands(project_dir, target, production)?)
}
