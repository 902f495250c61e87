//! Command-line interface implementation for jangular.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::Target;
use crate::config::DatabaseType;
use crate::constants::TEMPLATES_ENV;

/// Command-line arguments structure for jangular.
#[derive(Parser, Debug)]
#[command(name = "jangular", author, version, about = "A CLI tool for generating Java + Angular projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Check the system requirements and exit
    #[arg(long = "test")]
    pub check_requirements: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Templates root: a local directory or a git repository URL
    #[arg(long, global = true, env = TEMPLATES_ENV, value_name = "PATH_OR_URL")]
    pub templates: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Java + Angular project
    Init(InitArgs),

    /// Manage the project's containers with docker-compose
    Docker,

    /// Run the generated project's tests
    Test(TargetArgs),

    /// Build the generated project
    Build(BuildArgs),
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Java group ID
    #[arg(short, long)]
    pub group_id: Option<String>,

    /// Java artifact ID
    #[arg(short, long)]
    pub artifact_id: Option<String>,

    /// Database engine, skips the database question
    #[arg(long, value_enum)]
    pub database: Option<DatabaseType>,

    /// Generate into an existing, non-empty project directory
    #[arg(short, long)]
    pub force: bool,

    /// Read answers as JSON or YAML from stdin
    #[arg(short, long, conflicts_with = "answers")]
    pub stdin: bool,

    /// Read answers from a JSON or YAML file
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Accept defaults for every answer that was not provided instead of prompting
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    /// Only the backend
    #[arg(short, long, conflicts_with_all = ["frontend", "all"])]
    pub backend: bool,

    /// Only the frontend
    #[arg(short, long, conflicts_with = "all")]
    pub frontend: bool,

    /// Backend and frontend (the default)
    #[arg(short, long)]
    pub all: bool,
}

impl TargetArgs {
    pub fn target(&self) -> Target {
        Target::from_flags(self.backend, self.frontend)
    }
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Build for production
    #[arg(short, long)]
    pub production: bool,
}

/// Prints the help text without the version banner.
pub fn print_help() {
    let _ = Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help();
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
