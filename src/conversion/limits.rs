use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

/// Check the source size before attempting to read or parse the CSV.
/// Only applies when a memory limit was configured; otherwise any size is read.
pub fn check_source_size_before_read(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    let Some(limit) = config.memory_limit else {
        return Ok(());
    };

    if let Some(size) = source.estimated_size() {
        if size > limit as u64 {
            return Err(ConversionError::conversion(
                ConversionErrorKind::CsvTooLarge {
                    size,
                    limit: limit as u64,
                },
            ));
        }
    }

    Ok(())
}
