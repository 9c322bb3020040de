//! Input file discovery
//!
//! Scans an input directory recursively for files whose name ends in
//! `.json`, including a file named just `.json`. The match is case-sensitive.
//! Paths are returned sorted so the row order of the output does not depend
//! on the filesystem's directory order.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix of input files
pub const JSON_SUFFIX: &str = ".json";

/// Find all JSON files under `root`
pub fn discover_json_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::discovery(root, "not a directory"));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::discovery(root, e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if is_json_file_name(entry.file_name().to_str()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Whether a file name ends in `.json`; a bare `.json` counts
fn is_json_file_name(name: Option<&str>) -> bool {
    name.is_some_and(|name| name.ends_with(JSON_SUFFIX))
}
