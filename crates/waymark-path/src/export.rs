//! Flattening a path table into CSV.
//!
//! Point ids count up across the whole table, starting at 1. The marker
//! row carries the path container's height (`origin.y`), not a per-point
//! value, so per-point elevation does not survive a round trip.

use crate::import::MARKER_PREFIX;
use crate::types::PathTable;
use std::path::Path as FsPath;
use waymark_core::Result;
use waymark_csv::{serialize_rows, write_text_file};

/// Fixed header row
pub const HEADER: [&str; 4] = ["patrolId", "patrolPlan", "patrolX", "patrolY"];

/// Rows for `table`, header first.
pub fn export_rows(table: &PathTable) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = vec![HEADER.iter().map(|h| h.to_string()).collect()];
    let mut point_id = 0usize;

    for (ordinal, path) in table.iter().enumerate() {
        rows.push(vec![
            format!("{}{}", MARKER_PREFIX, path.name),
            path.origin.y.to_string(),
        ]);
        let points = path.path_points();
        log::debug!("Exporting path '{}' with {} points", path.name, points.len());
        for point in points {
            point_id += 1;
            rows.push(vec![
                point_id.to_string(),
                ordinal.to_string(),
                point.x.to_string(),
                point.z.to_string(),
            ]);
        }
    }

    rows
}

/// Serialize `table` to CSV text with `\r\n` row endings.
pub fn export_table(table: &PathTable) -> String {
    serialize_rows(&export_rows(table))
}

/// Write `table` to a CSV file, creating parent directories.
pub fn export_file<P: AsRef<FsPath>>(table: &PathTable, path: P) -> Result<()> {
    write_text_file(path, &export_table(table))
}
