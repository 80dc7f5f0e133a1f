//! Building a path table from CSV text.
//!
//! The first line is a header and is skipped. A row whose first field
//! starts with `#` opens a new path (`#name,elevation`); every other row
//! is a point (`id,ordinal,x,z`) placed at the current path's elevation.

use crate::types::{BezierSettings, PathKind, PathKindName, PathTable};
use std::path::Path as FsPath;
use waymark_core::{Result, Vec3, WaymarkError};
use waymark_csv::{lines, parse_row, read_csv_file};

/// Marker prefix on the first field of a path-start row
pub const MARKER_PREFIX: char = '#';

/// Import behaviour
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    /// Reject malformed rows instead of defaulting them
    pub strict: bool,
    /// Kind given to every imported path
    pub kind: PathKindName,
    pub bezier: BezierSettings,
    /// Where new paths start before their first point
    pub origin: Vec3,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            strict: false,
            kind: PathKindName::Standard,
            bezier: BezierSettings::default(),
            origin: Vec3::ZERO,
        }
    }
}

impl ImportOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }
}

/// Result of a successful import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub table: PathTable,
    /// Rows that were ignored (blank lines, points without a path)
    pub skipped_rows: usize,
}

/// Import a table from CSV text.
///
/// In permissive mode this never fails: bad numbers and missing fields
/// read as 0. Strict mode turns those into [`WaymarkError::ParseError`].
pub fn import_table(text: &str, options: &ImportOptions) -> Result<ImportReport> {
    let mut table = PathTable::with_origin(options.origin);
    let mut current: Option<usize> = None;
    let mut skipped_rows = 0;

    for (index, line) in lines(text).enumerate().skip(1) {
        let line_no = index + 1;
        if line.trim().is_empty() {
            log::warn!("Line {}: blank row skipped", line_no);
            skipped_rows += 1;
            continue;
        }

        let (fields, _) = parse_row(line, 0);
        let first = fields.first().map(String::as_str).unwrap_or_default();

        if let Some(name) = first.strip_prefix(MARKER_PREFIX) {
            if table.contains(name) {
                if options.strict {
                    return Err(WaymarkError::DuplicatePathName(name.to_string()));
                }
                log::warn!("Line {}: path name '{}' used more than once", line_no, name);
            }
            let elevation = number(&fields, 1, "elevation", line_no, options.strict)?;
            let path = table.begin_path(name, PathKind::new(options.kind, options.bezier));
            path.elevation = elevation;
            current = Some(table.len() - 1);
            log::debug!("Importing path '{}' at elevation {}", name, elevation);
            continue;
        }

        let Some(path) = current.and_then(|i| table.get_mut(i)) else {
            if options.strict {
                return Err(WaymarkError::ParseError {
                    line: line_no,
                    message: "point row before any path marker".to_string(),
                });
            }
            log::warn!("Line {}: point row before any path marker, skipped", line_no);
            skipped_rows += 1;
            continue;
        };

        let x = number(&fields, 2, "x", line_no, options.strict)?;
        let z = number(&fields, 3, "z", line_no, options.strict)?;
        let elevation = path.elevation;
        path.place(Vec3::new(x, elevation, z));
    }

    Ok(ImportReport {
        table,
        skipped_rows,
    })
}

/// Import a table from a CSV file.
///
/// Returns `Ok(None)` when the file cannot be read, which callers treat as
/// an empty result.
pub fn import_file<P: AsRef<FsPath>>(path: P, options: &ImportOptions) -> Result<Option<ImportReport>> {
    match read_csv_file(path) {
        Some(content) => import_table(&content, options).map(Some),
        None => Ok(None),
    }
}

fn number(fields: &[String], column: usize, what: &str, line: usize, strict: bool) -> Result<f32> {
    let Some(raw) = fields.get(column) else {
        if strict {
            return Err(WaymarkError::ParseError {
                line,
                message: format!("missing {} (column {})", what, column + 1),
            });
        }
        return Ok(0.0);
    };

    match raw.trim().parse::<f32>() {
        Ok(value) => Ok(value),
        Err(_) if strict => Err(WaymarkError::ParseError {
            line,
            message: format!("invalid {} '{}'", what, raw),
        }),
        Err(_) => Ok(0.0),
    }
}
