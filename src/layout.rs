//! Paths inside a generated backend.

use std::path::{Path, PathBuf};

use crate::config::DatabaseType;
use crate::constants::{JAVA_SOURCE_ROOT, MIGRATION_ROOT, RESOURCES_ROOT};
use crate::identifiers::package_to_path;

pub fn java_source_root<P: AsRef<Path>>(backend: P) -> PathBuf {
    JAVA_SOURCE_ROOT.iter().fold(backend.as_ref().to_path_buf(), |path, segment| path.join(segment))
}

pub fn resources_root<P: AsRef<Path>>(backend: P) -> PathBuf {
    RESOURCES_ROOT.iter().fold(backend.as_ref().to_path_buf(), |path, segment| path.join(segment))
}

/// `src/main/java/<package/as/dirs>` under the backend.
pub fn package_dir<P: AsRef<Path>>(backend: P, package_name: &str) -> PathBuf {
    package_to_path(package_name)
        .into_iter()
        .fold(java_source_root(backend), |path, segment| path.join(segment))
}

/// `src/main/resources/db/migration/<engine>` under the backend.
pub fn migration_dir<P: AsRef<Path>>(backend: P, engine: DatabaseType) -> PathBuf {
    MIGRATION_ROOT
        .iter()
        .fold(resources_root(backend), |path, segment| path.join(segment))
        .join(engine.id())
}
