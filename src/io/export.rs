//! Export the reconciled view to CSV.
//!
//! Columns mirror the forecast input plus the joined actuals, so the file can
//! be reopened in a spreadsheet next to the sources. Absent actuals are written
//! as empty cells, never as zero.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::ReconciledRecord;
use crate::error::AppError;

/// Write the reconciled view to a CSV file.
pub fn write_view_csv(path: &Path, records: &[ReconciledRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_view(file, records)?;
    tracing::info!(path = %path.display(), rows = records.len(), "exported view");
    Ok(())
}

/// Serialize records to any writer; the header is always written, even for an empty view.
pub fn write_view<W: Write>(out: W, records: &[ReconciledRecord]) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);

    writer
        .write_record(["Store", "ds", "Predicted_Weekly_Sales", "Actual_Weekly_Sales"])
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        writer
            .serialize(r)
            .map_err(|e| AppError::new(4, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush export CSV: {e}")))
}
