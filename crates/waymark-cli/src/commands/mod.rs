//! CLI command implementations

pub mod colliders;
pub mod export;
pub mod import;
pub mod info;
pub mod tokens;

use anyhow::{Context, Result};
use std::path::Path;
use waymark_path::{import_file, PathDocument, PathTable, WaymarkConfig};

/// Layered config, or a single file when `--config` is given
pub fn load_config(path: Option<&str>) -> Result<WaymarkConfig> {
    match path {
        Some(path) => WaymarkConfig::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load config {}", path)),
        None => WaymarkConfig::load().context("Failed to load config"),
    }
}

/// Load a table from a `.toml` path document or a CSV table
pub fn load_table(input: &str, config: &WaymarkConfig) -> Result<PathTable> {
    let is_document = Path::new(input)
        .extension()
        .map(|e| e == "toml")
        .unwrap_or(false);

    if is_document {
        let doc = PathDocument::load(input)
            .with_context(|| format!("Failed to read path document {}", input))?;
        log::info!("Loaded {} path(s) from {}", doc.paths.len(), input);
        return Ok(doc.into_table(config.bezier));
    }

    match import_file(input, &config.import_options())? {
        Some(report) => Ok(report.table),
        None => anyhow::bail!("Could not read CSV table: {}", input),
    }
}
