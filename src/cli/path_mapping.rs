use std::path::{Path, PathBuf};

use crate::error::{ConversionErrorKind, ConversionResult};

pub const INPUT_EXTENSION: &str = "csv";
pub const OUTPUT_EXTENSION: &str = "json";

/// Swap a trailing `.csv` for `.json`.
///
/// Anything without exactly that extension is rejected rather than truncated.
pub fn replace_extension(path: &Path) -> ConversionResult<PathBuf> {
    if !crate::parser::filter::has_csv_extension(path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return Err(ConversionErrorKind::naming(name, INPUT_EXTENSION).into());
    }

    let mut out = path.to_path_buf();
    out.set_extension(OUTPUT_EXTENSION);
    Ok(out)
}

/// Map an input CSV file into an output JSON file path.
/// This preserves the input directory structure relative to `input_dir`.
pub fn map_input_to_output(
    input_dir: &Path,
    input_file: &Path,
    output_dir: &Path,
) -> ConversionResult<PathBuf> {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    Ok(output_dir.join(replace_extension(relative)?))
}
