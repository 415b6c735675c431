use std::path::{Path, PathBuf};

use crate::constants::DATA_FILE_MARKER;
use crate::error::{Error, Result};
use walkdir::WalkDir;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| Error::OutputError {
        path: dest_path.display().to_string(),
        e,
    })
}

/// Recursively collects data files under `data_dir`, in lexical path order.
///
/// Every non-directory entry whose name contains `.yaml` is a data file.
pub fn collect_data_files<P: AsRef<Path>>(data_dir: P) -> Result<Vec<PathBuf>> {
    let data_dir = data_dir.as_ref();
    let mut data_files = Vec::new();
    for entry in WalkDir::new(data_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::SourceFetchError {
            source_path: e.path().unwrap_or(data_dir).display().to_string(),
            e: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(DATA_FILE_MARKER) {
            data_files.push(entry.into_path());
        }
    }
    Ok(data_files)
}

/// Directory generated files are written under, for a single data file.
pub fn output_base_for_file<P: AsRef<Path>>(data_file: P) -> PathBuf {
    data_file.as_ref().parent().map(Path::to_path_buf).unwrap_or_default()
}
