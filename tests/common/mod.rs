#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use jangular::error::Result;
use jangular::prompt::Prompter;
use walkdir::WalkDir;

/// Answers questions from a script. An empty scripted answer accepts the
/// offered default; an exhausted script accepts every default.
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    selection: usize,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[&str], selection: usize) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
            selection,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: String) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        match self.inputs.borrow_mut().pop_front() {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(default),
        }
    }

    fn select(&self, prompt: &str, _choices: &[&str], _default: usize) -> Result<usize> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.selection)
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        self.asked.borrow_mut().push(prompt);
        Ok(skip)
    }
}

/// Fails the test on any question.
pub struct NoPrompter;

impl Prompter for NoPrompter {
    fn input(&self, prompt: &str, _default: String) -> Result<String> {
        panic!("unexpected question: {prompt}")
    }

    fn select(&self, prompt: &str, _choices: &[&str], _default: usize) -> Result<usize> {
        panic!("unexpected question: {prompt}")
    }

    fn confirm(&self, _skip: bool, prompt: String) -> Result<bool> {
        panic!("unexpected question: {prompt}")
    }
}

/// Templates bundled with the crate.
pub fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small templates root with a backend and a frontend template.
pub fn write_fixture_templates(root: &Path) {
    write(
        &root.join("backend/pom.xml"),
        "<groupId>{{groupId}}</groupId>\n<artifactId>{{artifactId}}</artifactId>\n<name>{{projectName}}</name>\n",
    );
    write(
        &root.join("backend/src/main/java/MainApplication.java.template"),
        "package {{packageName}};\n\npublic class {{projectNameCamelCase}} {}\n",
    );
    for engine in ["mysql", "postgresql", "mssql"] {
        write(
            &root.join(format!(
                "backend/src/main/resources/db/migration/{engine}/V1__init_schema.sql"
            )),
            &format!("-- {engine}\n"),
        );
    }
    write(&root.join("frontend/package.json"), "{ \"name\": \"frontend\" }\n");
    write(
        &root.join("frontend/src/app/app.component.html"),
        "<h1>{{ title }}</h1>\n",
    );
}

/// Every regular file below `dir`.
pub fn files_under(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}
