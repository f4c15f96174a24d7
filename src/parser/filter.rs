use std::path::Path;

use crate::cli::path_mapping::INPUT_EXTENSION;

/// Return true if the path ends in the `.csv` extension
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == INPUT_EXTENSION)
}
