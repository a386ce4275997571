pub mod query;
pub mod shell;
pub mod summary;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::{DiagnosticSink, StudentsRepository};

/// Load config, applying a `--data-dir` override if given.
pub fn resolve_config(config: Option<&Path>, data_dir: Option<PathBuf>) -> Result<GradebookConfig> {
    let mut config = load_config_from(config)?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    Ok(config)
}

/// Build a repository and load `file` into it.
pub fn load_repository<S: DiagnosticSink>(
    config: &GradebookConfig,
    file: &Path,
    sink: S,
) -> Result<StudentsRepository<S>> {
    let mut repo = StudentsRepository::new(sink);
    repo.load_data(&config.resolve(file))?;
    Ok(repo)
}
