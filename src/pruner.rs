//! Database migration directory scaffolding and pruning.
//! Every engine's migration directory is created first so the template stays
//! engine-agnostic, then the directories of the engines that were not
//! selected are removed.

use std::fs;
use std::path::Path;

use log::debug;

use crate::cleanup::CleanupReport;
use crate::config::DatabaseType;
use crate::error::Result;
use crate::layout::migration_dir;

/// Creates `db/migration/<engine>` for every supported engine.
pub fn scaffold_migration_dirs<P: AsRef<Path>>(backend: P) -> Result<()> {
    for engine in DatabaseType::ALL {
        let dir = migration_dir(backend.as_ref(), engine);
        debug!("Creating migration directory: {}", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Removes the migration directory of every engine in `engines` except
/// `selected`.
///
/// Already absent directories are skipped silently; a failure on one engine
/// is recorded in the report and the remaining engines are still attempted.
pub fn prune_unselected<P: AsRef<Path>>(
    backend: P,
    engines: &[DatabaseType],
    selected: DatabaseType,
) -> CleanupReport {
    let mut report = CleanupReport::default();
    for engine in engines.iter().filter(|engine| **engine != selected) {
        report.remove_dir(&migration_dir(backend.as_ref(), *engine));
    }
    report
}
