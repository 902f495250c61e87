//! Answer collection for `init`.
//! Answers may be preloaded from stdin or an answers file; whatever is
//! missing is asked interactively or, in non-interactive mode, defaulted.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::config::{Answers, DatabaseType};
use crate::constants::{
    DEFAULT_ARTIFACT_ID, DEFAULT_DB_PASSWORD, DEFAULT_DB_USERNAME, DEFAULT_GROUP_ID,
};
use crate::error::Result;
use crate::identifiers::{default_db_name, default_package_name};
use crate::prompt::Prompter;

/// Where preloaded answers come from.
#[derive(Debug)]
pub enum AnswerSource<'a> {
    Stdin,
    File(&'a Path),
    None,
}

/// Values given on the command line that seed the prompt defaults.
#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub database: Option<DatabaseType>,
}

/// Parses an answers document, trying JSON first and YAML second.
/// Empty input yields empty answers.
pub fn parse_answers(content: &str) -> Result<Answers> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Answers::default());
    }
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(json_err) => {
            debug!("Answers are not JSON ({json_err}), trying YAML");
            Ok(serde_yaml::from_str(content)?)
        }
    }
}

pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_answers(&content)
}

pub fn get_answers_from(source: AnswerSource<'_>) -> Result<Answers> {
    match source {
        AnswerSource::Stdin => load_from_stdin(),
        AnswerSource::File(path) => load_from_file(path),
        AnswerSource::None => Ok(Answers::default()),
    }
}

/// Returns the preloaded value, the prompted value, or the default.
fn answer_text(
    prompt: &dyn Prompter,
    interactive: bool,
    preloaded: Option<String>,
    help: &str,
    default: String,
) -> Result<String> {
    match preloaded {
        Some(value) => Ok(value),
        None if interactive => prompt.input(help, default),
        None => Ok(default),
    }
}

/// Collects every answer `init` needs, in the order the questions are asked.
///
/// # Arguments
/// * `prompt` - Prompter used for missing answers
/// * `project_name` - Project slug, used to derive defaults
/// * `options` - Command line values used as defaults
/// * `preloaded` - Answers from stdin or an answers file; these win
/// * `interactive` - Ask for missing answers instead of using defaults
pub fn get_answers(
    prompt: &dyn Prompter,
    project_name: &str,
    options: &InitOptions,
    preloaded: Answers,
    interactive: bool,
) -> Result<Answers> {
    let group_id = answer_text(
        prompt,
        interactive,
        preloaded.group_id,
        "Enter Java group ID",
        options.group_id.clone().unwrap_or_else(|| DEFAULT_GROUP_ID.to_string()),
    )?;

    let artifact_id = answer_text(
        prompt,
        interactive,
        preloaded.artifact_id,
        "Enter Java artifact ID",
        options.artifact_id.clone().unwrap_or_else(|| DEFAULT_ARTIFACT_ID.to_string()),
    )?;

    let package_name = answer_text(
        prompt,
        interactive,
        preloaded.package_name,
        "Enter base package name",
        default_package_name(&group_id, project_name),
    )?;

    let default_engine = options.database.unwrap_or(DatabaseType::Mysql);
    let database_type = match (preloaded.database_type, options.database) {
        (Some(engine), _) => engine,
        (None, Some(engine)) => engine.id().to_string(),
        (None, None) if interactive => {
            let choices: Vec<&str> =
                DatabaseType::ALL.iter().map(DatabaseType::display_name).collect();
            let default = DatabaseType::ALL
                .iter()
                .position(|engine| *engine == default_engine)
                .unwrap_or(0);
            let selected = prompt.select("Select database type", &choices, default)?;
            DatabaseType::ALL.get(selected).unwrap_or(&default_engine).id().to_string()
        }
        (None, None) => default_engine.id().to_string(),
    };

    let db_name = answer_text(
        prompt,
        interactive,
        preloaded.db_name,
        "Enter database name",
        default_db_name(project_name),
    )?;

    let db_username = answer_text(
        prompt,
        interactive,
        preloaded.db_username,
        "Enter database username",
        DEFAULT_DB_USERNAME.to_string(),
    )?;

    let db_password = answer_text(
        prompt,
        interactive,
        preloaded.db_password,
        "Enter database password",
        DEFAULT_DB_PASSWORD.to_string(),
    )?;

    Ok(Answers {
        group_id: Some(group_id),
        artifact_id: Some(artifact_id),
        package_name: Some(package_name),
        database_type: Some(database_type),
        db_name: Some(db_name),
        db_username: Some(db_username),
        db_password: Some(db_password),
        jwt_secret: preloaded.jwt_secret,
    })
}
