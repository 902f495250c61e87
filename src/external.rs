//! External program execution.
//! Build tools, container orchestration and version probes all go through
//! [`ExternalCommand`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// A program invocation with an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new<S: Into<String>>(program: S, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            cwd: None,
        }
    }

    pub fn in_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }

    fn spawn_error(&self, e: std::io::Error) -> Error {
        Error::ExternalCommandError { command: self.to_string(), reason: e.to_string() }
    }

    /// Runs the program with inherited stdio and fails on a non-zero exit.
    pub fn run(&self) -> Result<()> {
        debug!("Running '{}'", self);
        let status = self
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(Error::ExternalCommandError {
                command: self.to_string(),
                reason: format!("exited with {status}"),
            });
        }
        Ok(())
    }

    /// Runs the program and returns stdout followed by stderr.
    ///
    /// The exit status is not checked; version probes such as `java -version`
    /// print to stderr.
    pub fn output(&self) -> Result<String> {
        debug!("Probing '{}'", self);
        let output = self.command().stdin(Stdio::null()).output().map_err(|e| self.spawn_error(e))?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    /// True if the program starts and exits successfully, with output discarded.
    pub fn succeeds(&self) -> bool {
        self.command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
