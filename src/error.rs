//! Error handling for the jangular application.
//! Defines custom error types and results used throughout the application.

use thiserror::Error;

/// Custom error types for jangular operations.
///
/// Conditions that the generator degrades on (a missing template directory,
/// an already-deleted alternative file) are not represented here; they are
/// reported through the step outcome types instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents errors raised while walking a template directory
    #[error("Directory traversal error: {0}.")]
    WalkdirError(#[from] walkdir::Error),

    /// Represents errors that occur while rendering generated files
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON answers: {0}.")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML answers: {0}.")]
    YAMLParseError(#[from] serde_yaml::Error),

    /// Represents errors raised by the interactive prompts
    #[error("Prompt error: {0}.")]
    DialoguerError(#[from] dialoguer::Error),

    /// Represents errors that occur while cloning a template repository
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// The selected database engine is not one of the supported engines
    #[error(
        "Unsupported database type: '{engine}'. Supported types are: mysql, postgresql, mssql."
    )]
    UnsupportedDatabaseEngine { engine: String },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Output directory '{output_dir}' already exists and is not empty. Use --force to generate into it anyway.")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// A generated file still contains `{{token}}` markers
    #[error("Unresolved placeholders in '{path}': {}.", .tokens.join(", "))]
    UnresolvedPlaceholders { path: String, tokens: Vec<String> },

    /// An external program could not be started or exited unsuccessfully
    #[error("Command '{command}' failed: {reason}.")]
    ExternalCommandError { command: String, reason: String },

    /// One or more required tools are missing or outdated
    #[error("System requirements not met: {0}.")]
    RequirementError(String),
}

/// Convenience type alias for Results with jangular's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
