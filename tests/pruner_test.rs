mod common;

use std::fs;

use common::write;
use jangular::config::DatabaseType;
use jangular::layout::migration_dir;
use jangular::pruner::{prune_unselected, scaffold_migration_dirs};
use tempfile::TempDir;

#[test]
fn test_prune_keeps_only_selected_engine() {
    for selected in DatabaseType::ALL {
        let backend = TempDir::new().unwrap();
        write(&migration_dir(backend.path(), DatabaseType::Mysql).join("V1__init.sql"), "");

        scaffold_migration_dirs(backend.path()).unwrap();
        let report = prune_unselected(backend.path(), &DatabaseType::ALL, selected);

        assert!(report.is_clean());
        assert_eq!(report.removed.len(), 2);
        for engine in DatabaseType::ALL {
            assert_eq!(migration_dir(backend.path(), engine).exists(), engine == selected);
        }
    }
}

#[test]
fn test_prune_is_idempotent() {
    let backend = TempDir::new().unwrap();
    scaffold_migration_dirs(backend.path()).unwrap();

    let first = prune_unselected(backend.path(), &DatabaseType::ALL, DatabaseType::Postgresql);
    let second = prune_unselected(backend.path(), &DatabaseType::ALL, DatabaseType::Postgresql);

    assert!(first.is_clean());
    assert!(second.is_clean());
    assert!(second.removed.is_empty());
    assert!(migration_dir(backend.path(), DatabaseType::Postgresql).is_dir());
}

#[test]
fn test_prune_without_migration_dirs() {
    let backend = TempDir::new().unwrap();
    let report = prune_unselected(backend.path(), &DatabaseType::ALL, DatabaseType::Mssql);
    assert!(report.is_clean());
    assert!(report.removed.is_empty());
}

#[test]
fn test_scaffold_keeps_existing_migrations() {
    let backend = TempDir::new().unwrap();
    let script = migration_dir(backend.path(), DatabaseType::Mssql).join("V1__init.sql");
    write(&script, "CREATE TABLE t (id INT);");

    scaffold_migration_dirs(backend.path()).unwrap();

    assert_eq!(fs::read_to_string(&script).unwrap(), "CREATE TABLE t (id INT);");
    for engine in DatabaseType::ALL {
        assert!(migration_dir(backend.path(), engine).is_dir());
    }
}
