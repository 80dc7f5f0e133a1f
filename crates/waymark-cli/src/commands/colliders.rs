//! Walk-collider generation command

use super::load_table;
use anyhow::{Context, Result};
use waymark_path::{collider_placements, ColliderDocument, WaymarkConfig};

pub fn run(input: &str, output: Option<&str>, config: &WaymarkConfig) -> Result<()> {
    let table = load_table(input, config)?;
    let placements = collider_placements(&table, config.collider_scale);
    let doc = ColliderDocument::new(config.collider_parent.clone(), placements);

    match output {
        Some(output) => {
            doc.save(output)
                .with_context(|| format!("Failed to write {}", output))?;
            println!(
                "Generated {} collider(s) under '{}': {}",
                doc.colliders.len(),
                doc.parent,
                output
            );
        }
        None => print!("{}", doc.to_toml_string()?),
    }

    Ok(())
}
