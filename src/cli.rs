//! Command-line driver: build one sheet, apply writes, print its values.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use lookupgrid_core::script::{parse_write, run_script};
use lookupgrid_core::storage::{load_schema, to_json_string, write_json};
use lookupgrid_core::SheetRegistry;

/// Parsed command-line options.
#[derive(Debug, Default)]
pub struct Options {
    pub script: Option<PathBuf>,
    pub schema: Option<PathBuf>,
    pub commands: Vec<String>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub log: Option<String>,
    pub pretty: bool,
    pub no_config: bool,
}

pub fn run(opts: &Options, config: &Config) -> Result<()> {
    let schema_path = opts
        .schema
        .as_ref()
        .or(config.schema.as_ref())
        .context("no schema given; pass --schema <FILE> or set `schema` in config.toml")?;
    let schema = load_schema(schema_path)
        .with_context(|| format!("failed to load schema {}", schema_path.display()))?;

    let registry = SheetRegistry::new();
    let id = registry.create_sheet(schema);

    if let Some(script_path) = &opts.script {
        let text = std::fs::read_to_string(script_path)
            .with_context(|| format!("failed to read {}", script_path.display()))?;
        let updates = run_script(&registry, id, &text)
            .with_context(|| format!("{} failed", script_path.display()))?;
        tracing::info!(writes = updates.len(), "script applied");
    }

    for (idx, command) in opts.commands.iter().enumerate() {
        let write = parse_write(idx + 1, command)
            .with_context(|| format!("bad command '{}'", command))?;
        registry
            .write_cell(id, write.coord, &write.value)
            .with_context(|| format!("command '{}' failed", command))?;
    }

    let values = registry.read_sheet(id)?;
    let pretty = opts.pretty || config.pretty;
    match &opts.output {
        Some(path) => {
            write_json(path, &values, pretty)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => println!("{}", to_json_string(&values, pretty)?),
    }
    Ok(())
}
