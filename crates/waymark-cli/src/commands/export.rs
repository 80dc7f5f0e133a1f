//! CSV export command

use anyhow::{Context, Result};
use waymark_path::{export_file, PathDocument, WaymarkConfig};

pub fn run(input: &str, output: &str, config: &WaymarkConfig) -> Result<()> {
    let doc = PathDocument::load(input)
        .with_context(|| format!("Failed to read path document {}", input))?;
    let table = doc.into_table(config.bezier);

    export_file(&table, output).with_context(|| format!("Failed to write {}", output))?;

    println!(
        "Exported {} path(s), {} point(s) to {}",
        table.len(),
        table.iter().map(|p| p.path_points().len()).sum::<usize>(),
        output
    );

    Ok(())
}
