//! CSV import command

use anyhow::{Context, Result};
use waymark_csv::resolve_table_file;
use waymark_path::{import_file, PathDocument, PathKindName, WaymarkConfig};

pub struct ImportArgs {
    pub input: String,
    pub output: Option<String>,
    pub strict: bool,
    pub bezier: bool,
    pub table: bool,
}

pub fn run(args: ImportArgs, config: &WaymarkConfig) -> Result<()> {
    let path = if args.table {
        resolve_table_file(&config.table_dir, &args.input)
    } else {
        args.input.clone().into()
    };

    let mut options = config.import_options();
    options.strict |= args.strict;
    if args.bezier {
        options.kind = PathKindName::Bezier;
    }

    log::info!("Importing {} (strict: {}, kind: {:?})", path.display(), options.strict, options.kind);
    let report = import_file(&path, &options)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    let Some(report) = report else {
        anyhow::bail!("Could not read CSV table: {}", path.display());
    };

    println!(
        "Imported {} path(s), {} point(s) from {}",
        report.table.len(),
        report.table.total_points(),
        path.display()
    );
    if report.skipped_rows > 0 {
        println!("Skipped {} row(s)", report.skipped_rows);
    }
    for short in report.table.iter().filter(|p| !p.is_usable()) {
        eprintln!(
            "Warning: path '{}' has {} point(s); at least 2 are needed",
            short.name,
            short.len()
        );
    }

    if let Some(output) = &args.output {
        PathDocument::from_table(&report.table)
            .save(output)
            .with_context(|| format!("Failed to write {}", output))?;
        println!("Wrote path document: {}", output);
    }

    Ok(())
}
