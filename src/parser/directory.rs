use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List every entry directly inside `dir`, sorted by name.
///
/// Entries are not filtered by type: sub-directories show up alongside files
/// and are left to the naming rule and the converter to reject.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(entry.path());
    }

    entries.sort();
    Ok(entries)
}

/// List every regular file under `dir`, depth-first, sorted by name per level.
///
/// Directories are left out; file names are not filtered, so non-`.csv`
/// files go through the same naming rule as in a flat listing.
pub fn list_files_recursive(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
