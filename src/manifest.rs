//! Root `package.json` with convenience scripts for the generated project.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::{ROOT_MANIFEST, ROOT_MANIFEST_VERSION};
use crate::error::Result;
use crate::processor::write_file;

#[derive(Debug, Serialize)]
pub struct RootManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: IndexMap<String, String>,
}

impl RootManifest {
    pub fn new(project_name: &str) -> Self {
        let scripts = [
            ("start:backend", "cd backend && ./mvnw spring-boot:run"),
            ("start:frontend", "cd frontend && npm start"),
            ("build", "cd backend && ./mvnw clean package && cd ../frontend && npm run build"),
            ("install:all", "cd backend && ./mvnw clean install && cd ../frontend && npm install"),
        ]
        .into_iter()
        .map(|(name, command)| (name.to_string(), command.to_string()))
        .collect();

        Self {
            name: project_name.to_string(),
            version: ROOT_MANIFEST_VERSION.to_string(),
            private: true,
            scripts,
        }
    }
}

/// Writes `package.json` into the project root and returns its path.
pub fn write_root_manifest<P: AsRef<Path>>(project_dir: P, project_name: &str) -> Result<PathBuf> {
    let path = project_dir.as_ref().join(ROOT_MANIFEST);
    let content = serde_json::to_string_pretty(&RootManifest::new(project_name))?;
    write_file(&path, &content)?;
    Ok(path)
}
