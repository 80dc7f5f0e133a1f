//! Table summary command

use super::load_table;
use anyhow::Result;
use waymark_path::{PathKindName, WaymarkConfig};

pub fn run(input: &str, config: &WaymarkConfig) -> Result<()> {
    let table = load_table(input, config)?;

    println!("Table: {}", input);
    println!("Paths: {}", table.len());
    println!("Points: {}", table.total_points());

    if !table.is_empty() {
        println!();
        for (ordinal, path) in table.iter().enumerate() {
            let kind = match path.kind.name() {
                PathKindName::Standard => "standard",
                PathKindName::Bezier => "bezier",
            };
            let closure = if path.closed { "closed" } else { "open" };
            let usable = if path.is_usable() { "" } else { "  (not enough points)" };
            println!(
                "  {:>3} {} [{}, {}] points={} segments={} y={}{}",
                ordinal,
                path.name,
                kind,
                closure,
                path.len(),
                path.segments().len(),
                path.origin.y,
                usable
            );
        }
    }

    Ok(())
}
