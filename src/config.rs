//! Project configuration for generation.
//! This module turns the raw answer set collected from prompts, stdin or an
//! answers file into a validated [`ProjectConfig`].

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARTIFACT_ID, DEFAULT_DB_PASSWORD, DEFAULT_DB_USERNAME, DEFAULT_GROUP_ID,
};
use crate::error::{Error, Result};
use crate::identifiers::{default_db_name, default_package_name, package_to_path};

/// Static information about the running tool, passed into the CLI bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl AppInfo {
    /// Information baked in from the crate manifest at compile time.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }
}

/// Supported relational database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DatabaseType {
    Mysql,
    Postgresql,
    Mssql,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 3] =
        [DatabaseType::Mysql, DatabaseType::Postgresql, DatabaseType::Mssql];

    /// Identifier used in file names, profiles and migration directories.
    pub fn id(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "mysql",
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Mssql => "mssql",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "MySQL",
            DatabaseType::Postgresql => "PostgreSQL",
            DatabaseType::Mssql => "Microsoft SQL Server",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            DatabaseType::Mysql => 3306,
            DatabaseType::Postgresql => 5432,
            DatabaseType::Mssql => 1433,
        }
    }

    pub fn driver_class(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "com.mysql.cj.jdbc.Driver",
            DatabaseType::Postgresql => "org.postgresql.Driver",
            DatabaseType::Mssql => "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        }
    }

    pub fn dialect(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "org.hibernate.dialect.MySQL8Dialect",
            DatabaseType::Postgresql => "org.hibernate.dialect.PostgreSQLDialect",
            DatabaseType::Mssql => "org.hibernate.dialect.SQLServerDialect",
        }
    }

    /// Name of the profile-specific properties file for this engine.
    pub fn properties_file(&self) -> String {
        format!("application-{}.properties", self.id())
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for DatabaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DatabaseType::ALL
            .into_iter()
            .find(|engine| engine.id() == s.trim().to_lowercase())
            .ok_or_else(|| Error::UnsupportedDatabaseEngine { engine: s.to_string() })
    }
}

/// Raw answers as collected from the user. Every field is optional; missing
/// values are filled with defaults when the [`ProjectConfig`] is built.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Answers {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub package_name: Option<String>,
    pub database_type: Option<String>,
    pub db_name: Option<String>,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub jwt_secret: Option<String>,
}

/// Validated configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    group_id: String,
    artifact_id: String,
    package_name: String,
    database_type: DatabaseType,
    db_name: String,
    db_username: String,
    db_password: String,
    jwt_secret: Option<String>,
}

impl ProjectConfig {
    /// Builds the configuration, applying defaults and rejecting invalid
    /// names or an unsupported database engine before anything touches the
    /// filesystem.
    pub fn new(project_name: &str, answers: Answers) -> Result<Self> {
        validate_project_name(project_name)?;

        let group_id = answers.group_id.unwrap_or_else(|| DEFAULT_GROUP_ID.to_string());
        let package_name = answers
            .package_name
            .unwrap_or_else(|| default_package_name(&group_id, project_name));
        validate_package_name(&package_name)?;

        let database_type = match answers.database_type {
            Some(engine) => engine.parse()?,
            None => DatabaseType::Mysql,
        };

        let config = Self {
            project_name: project_name.to_string(),
            artifact_id: answers
                .artifact_id
                .unwrap_or_else(|| DEFAULT_ARTIFACT_ID.to_string()),
            group_id,
            package_name,
            database_type,
            db_name: answers.db_name.unwrap_or_else(|| default_db_name(project_name)),
            db_username: answers
                .db_username
                .unwrap_or_else(|| DEFAULT_DB_USERNAME.to_string()),
            db_password: answers
                .db_password
                .unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
            jwt_secret: answers.jwt_secret.filter(|secret| !secret.is_empty()),
        };
        debug!("Resolved project configuration for '{}'", config.project_name);
        Ok(config)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn db_username(&self) -> &str {
        &self.db_username
    }

    pub fn db_password(&self) -> &str {
        &self.db_password
    }

    pub fn jwt_secret(&self) -> Option<&str> {
        self.jwt_secret.as_deref()
    }
}

fn validate_project_name(project_name: &str) -> Result<()> {
    if project_name.trim().is_empty() {
        return Err(Error::ValidationError("project name must not be empty".to_string()));
    }
    if project_name == "." || project_name == ".." || has_separator(project_name) {
        return Err(Error::ValidationError(format!(
            "project name '{project_name}' must be a plain directory name"
        )));
    }
    Ok(())
}

fn validate_package_name(package_name: &str) -> Result<()> {
    let valid = package_to_path(package_name)
        .iter()
        .all(|segment| !segment.is_empty() && !has_separator(segment));
    if !valid {
        return Err(Error::ValidationError(format!(
            "package name '{package_name}' must be dot-separated non-empty segments"
        )));
    }
    Ok(())
}

fn has_separator(s: &str) -> bool {
    s.contains('/') || s.contains('\\')
}
