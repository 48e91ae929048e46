use std::path::Path;

use sheetplot_ingest::read_first_sheet;
use sheetplot_model::{NormalizationOptions, NormalizedTable, RawSheet, Result};
use tracing::{info, info_span};

use crate::transform::transform;
use crate::validate::validate;

/// Validate an already-read sheet and transform it into a keyed table.
pub fn normalize_sheet(sheet: RawSheet, options: NormalizationOptions) -> Result<NormalizedTable> {
    let rows = validate(sheet)?;
    transform(rows, options)
}

/// Read the first worksheet of the file at `path` and normalize it.
///
/// Fails with a [`ProcessingError`](sheetplot_model::ProcessingError)
/// when the file cannot be read or its contents do not form a usable
/// table.
pub fn normalize(path: &Path, options: NormalizationOptions) -> Result<NormalizedTable> {
    let span = info_span!("normalize", source = %path.display());
    span.in_scope(|| {
        let sheet = read_first_sheet(path)?;
        let table = normalize_sheet(sheet, options)?;
        info!(
            rows = table.total_rows,
            columns = table.total_columns,
            "normalized spreadsheet"
        );
        Ok(table)
    })
}
