mod common;

use std::fs;

use common::{files_under, write, write_fixture_templates};
use jangular::processor::{copy_template, CopyOutcome, MissingTemplate};
use tempfile::TempDir;

#[test]
fn test_copy_reproduces_template_tree() {
    let templates = TempDir::new().unwrap();
    write_fixture_templates(templates.path());
    let output = TempDir::new().unwrap();
    let destination = output.path().join("backend");

    let outcome = copy_template(
        templates.path().join("backend"),
        &destination,
        MissingTemplate::Fallback,
    )
    .unwrap();

    assert_eq!(outcome, CopyOutcome::Copied { files: 5 });
    assert!(!dir_diff::is_different(templates.path().join("backend"), &destination).unwrap());
}

#[test]
fn test_copy_is_verbatim() {
    let templates = TempDir::new().unwrap();
    write_fixture_templates(templates.path());
    let output = TempDir::new().unwrap();

    copy_template(templates.path().join("frontend"), output.path(), MissingTemplate::Skip)
        .unwrap();

    let html = fs::read_to_string(output.path().join("src/app/app.component.html")).unwrap();
    assert_eq!(html, "<h1>{{ title }}</h1>\n");
}

#[test]
fn test_frontend_copy_keeps_every_entry() {
    let templates = TempDir::new().unwrap();
    let template = templates.path().join("frontend");
    write(&template.join(".templateignore"), "src/**\n");
    write(&template.join("src/main.ts"), "bootstrapApplication(AppComponent);\n");
    write(&template.join("src/.DS_Store"), "");
    write(&template.join(".git/HEAD"), "ref: refs/heads/main\n");
    write(&template.join("package.json"), "{}\n");

    let output = TempDir::new().unwrap();
    let destination = output.path().join("frontend");
    let outcome = copy_template(&template, &destination, MissingTemplate::Skip).unwrap();

    assert_eq!(outcome, CopyOutcome::Copied { files: 5 });
    assert!(!dir_diff::is_different(&template, &destination).unwrap());
    assert!(destination.join(".templateignore").is_file());
    assert!(destination.join("src/main.ts").is_file());
    assert_eq!(files_under(&destination).len(), 5);
}

#[test]
fn test_missing_backend_template_falls_back() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let destination = output.path().join("backend");

    let outcome = copy_template(
        templates.path().join("backend"),
        &destination,
        MissingTemplate::Fallback,
    )
    .unwrap();

    assert_eq!(outcome, CopyOutcome::Fallback);
    assert!(destination.join("src/main/java").is_dir());
    assert!(destination.join("src/main/resources").is_dir());
    assert!(files_under(&destination).is_empty());
}

#[test]
fn test_missing_frontend_template_is_skipped() {
    let templates = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let destination = output.path().join("frontend");

    let outcome =
        copy_template(templates.path().join("frontend"), &destination, MissingTemplate::Skip)
            .unwrap();

    assert_eq!(outcome, CopyOutcome::Skipped);
    assert!(!destination.exists());
}
