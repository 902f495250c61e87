mod common;

use common::{NoPrompter, ScriptedPrompter};
use jangular::config::{Answers, DatabaseType};
use jangular::parser::{get_answers, get_answers_from, parse_answers, AnswerSource, InitOptions};
use tempfile::TempDir;

#[test]
fn test_parse_json_answers() {
    let answers =
        parse_answers(r#"{"groupId": "com.acme", "databaseType": "postgresql"}"#).unwrap();
    assert_eq!(answers.group_id.as_deref(), Some("com.acme"));
    assert_eq!(answers.database_type.as_deref(), Some("postgresql"));
    assert_eq!(answers.db_name, None);
}

#[test]
fn test_parse_yaml_answers() {
    let answers = parse_answers("packageName: com.acme.shop\ndbPassword: s3cret\n").unwrap();
    assert_eq!(answers.package_name.as_deref(), Some("com.acme.shop"));
    assert_eq!(answers.db_password.as_deref(), Some("s3cret"));
}

#[test]
fn test_parse_empty_answers() {
    assert_eq!(parse_answers("  \n").unwrap(), Answers::default());
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(parse_answers(r#"{"groupID": "com.acme"}"#).is_err());
}

#[test]
fn test_answers_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.yml");
    std::fs::write(&path, "artifactId: shop\n").unwrap();

    let answers = get_answers_from(AnswerSource::File(&path)).unwrap();
    assert_eq!(answers.artifact_id.as_deref(), Some("shop"));

    assert_eq!(get_answers_from(AnswerSource::None).unwrap(), Answers::default());
    assert!(get_answers_from(AnswerSource::File(&temp_dir.path().join("missing.yml"))).is_err());
}

#[test]
fn test_interactive_answers_in_order() {
    let prompt = ScriptedPrompter::new(&["com.acme", "", "", "", "", "hunter2"], 1);
    let answers = get_answers(
        &prompt,
        "acme-shop",
        &InitOptions::default(),
        Answers::default(),
        true,
    )
    .unwrap();

    assert_eq!(
        prompt.asked(),
        vec![
            "Enter Java group ID",
            "Enter Java artifact ID",
            "Enter base package name",
            "Select database type",
            "Enter database name",
            "Enter database username",
            "Enter database password",
        ]
    );
    assert_eq!(answers.group_id.as_deref(), Some("com.acme"));
    assert_eq!(answers.artifact_id.as_deref(), Some("backend"));
    // The package default follows the group id entered just before it.
    assert_eq!(answers.package_name.as_deref(), Some("com.acme.acmeshop"));
    assert_eq!(answers.database_type.as_deref(), Some("postgresql"));
    assert_eq!(answers.db_name.as_deref(), Some("acme_shop"));
    assert_eq!(answers.db_username.as_deref(), Some("devuser"));
    assert_eq!(answers.db_password.as_deref(), Some("hunter2"));
    assert_eq!(answers.jwt_secret, None);
}

#[test]
fn test_preloaded_answers_are_not_asked() {
    let preloaded = Answers {
        database_type: Some("mssql".to_string()),
        db_name: Some("shop".to_string()),
        jwt_secret: Some("fixed".to_string()),
        ..Answers::default()
    };
    let prompt = ScriptedPrompter::new(&[], 0);
    let answers = get_answers(&prompt, "shop", &InitOptions::default(), preloaded, true).unwrap();

    assert!(!prompt.asked().iter().any(|q| q == "Select database type"));
    assert!(!prompt.asked().iter().any(|q| q == "Enter database name"));
    assert_eq!(answers.database_type.as_deref(), Some("mssql"));
    assert_eq!(answers.db_name.as_deref(), Some("shop"));
    assert_eq!(answers.jwt_secret.as_deref(), Some("fixed"));
}

#[test]
fn test_non_interactive_defaults() {
    let options = InitOptions {
        group_id: Some("org.demo".to_string()),
        artifact_id: None,
        database: Some(DatabaseType::Mssql),
    };
    let answers = get_answers(&NoPrompter, "my-app", &options, Answers::default(), false).unwrap();

    assert_eq!(answers.group_id.as_deref(), Some("org.demo"));
    assert_eq!(answers.artifact_id.as_deref(), Some("backend"));
    assert_eq!(answers.package_name.as_deref(), Some("org.demo.myapp"));
    assert_eq!(answers.database_type.as_deref(), Some("mssql"));
    assert_eq!(answers.db_name.as_deref(), Some("my_app"));
    assert_eq!(answers.db_password.as_deref(), Some("devpassword"));
}
