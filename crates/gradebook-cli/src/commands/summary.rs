//! The `gradebook summary` command.

use std::path::PathBuf;

use anyhow::Result;

use super::{load_repository, resolve_config};
use crate::output::{print_json, summary_table, ConsoleSink, OutputFormat};

pub fn execute(file: PathBuf, format: OutputFormat, config: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config.as_deref(), None)?;
    let repo = load_repository(&config, &file, ConsoleSink::batch())?;

    let Some(rows) = repo.summary() else {
        return Ok(());
    };

    match format {
        OutputFormat::Text => println!("{}", summary_table(&rows)),
        OutputFormat::Json => print_json(&rows)?,
    }

    Ok(())
}
