//! jangular scaffolds Java (Spring/Maven) + Angular projects from templates.
//! It copies the bundled templates, substitutes project identifiers,
//! generates the database configuration for one engine and prunes the
//! artifacts of the others.

/// Shared removal bookkeeping for pruning steps
pub mod cleanup;

/// Command-line interface module for the jangular application
pub mod cli;

/// `test` and `build` runners for generated projects
pub mod commands;

/// Database engines, raw answers and the validated project configuration
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Docker-compose menu
pub mod docker;

/// Entry point class and build manifest rewriting
pub mod entrypoint;

/// Error types and handling for the jangular application
pub mod error;

/// External program execution
pub mod external;

/// Project materialization orchestration
pub mod generator;

/// Class, package and database names derived from the project name
pub mod identifiers;

/// The `init` command
pub mod init;

/// Paths inside a generated backend
pub mod layout;

/// Templates root loading from local paths or git repositories
pub mod loader;

/// Logging setup
pub mod logger;

/// Root package.json generation
pub mod manifest;

/// Answer collection from prompts, stdin and answers files
pub mod parser;

/// Template directory copying
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Spring properties generation
pub mod properties;

/// Migration directory scaffolding and pruning
pub mod pruner;

/// Placeholder substitution and template rendering
pub mod renderer;

/// System requirements check
pub mod requirements;

/// Signing secret generation
pub mod secret;
