//! Blocking text file I/O for CSV tables.

use std::fs;
use std::path::{Path, PathBuf};
use waymark_core::Result;

const BOM: char = '\u{feff}';

/// Read a UTF-8 CSV file into memory.
///
/// Returns `None` if the file is missing or unreadable; the failure is
/// logged and callers carry on with an empty result. A leading byte-order
/// mark is stripped.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => match content.strip_prefix(BOM) {
            Some(stripped) => Some(stripped.to_string()),
            None => Some(content),
        },
        Err(err) => {
            log::warn!("Could not read {}: {}", path.display(), err);
            None
        }
    }
}

/// Location of a named table inside the table directory.
pub fn resolve_table_file<P: AsRef<Path>>(table_dir: P, name: &str) -> PathBuf {
    table_dir.as_ref().join(name)
}

/// Write `data` as UTF-8 (no BOM), creating parent directories as needed.
pub fn write_text_file<P: AsRef<Path>>(path: P, data: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, data)?;
    log::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
