//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::CollectingSink;

use super::{load_repository, resolve_config};

pub fn execute(file: PathBuf, strict: bool, config: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config.as_deref(), None)?;
    let repo = load_repository(&config, &file, CollectingSink::new())?;

    let Some(catalog) = repo.catalog() else {
        return Ok(());
    };
    println!(
        "{}: {} students in {} courses",
        file.display(),
        catalog.students().len(),
        catalog.courses().len()
    );

    let diagnostics = repo.diagnostics().take();
    for d in &diagnostics {
        println!("  [{}] {d}", d.code());
    }

    if diagnostics.is_empty() {
        println!("No problems found.");
    } else {
        let rejected = diagnostics.iter().filter(|d| d.is_record_error()).count();
        println!(
            "\n{} problem(s) found ({} rejected record(s)).",
            diagnostics.len(),
            rejected
        );
        if strict {
            anyhow::bail!("{} problem(s) found in {}", diagnostics.len(), file.display());
        }
    }

    Ok(())
}
