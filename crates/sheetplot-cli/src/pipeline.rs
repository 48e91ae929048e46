//! Spreadsheet processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Read**: open the workbook and pull the first worksheet
//! 2. **Normalize**: validate rows and transform them into a keyed table
//! 3. **Fingerprint**: hash and measure the source file
//! 4. **Record**: assemble the upload record for persistence
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info, info_span};

use sheetplot_chart::{ChartSeries, ChartSpec, SeriesSummary, build_series, summarize};
use sheetplot_ingest::{FileFingerprint, WorkbookInfo, fingerprint_file, inspect};
use sheetplot_model::{
    NormalizationOptions, NormalizedTable, SheetInfo, UploadRecord, UploadStatus,
};
use sheetplot_normalize::normalize;

/// Result of normalizing one spreadsheet file.
#[derive(Debug)]
pub struct NormalizeOutcome {
    /// Source file as given on the command line.
    pub source: PathBuf,
    /// The normalized table.
    pub table: NormalizedTable,
    /// Size and checksum of the source file.
    pub fingerprint: FileFingerprint,
    /// Wall-clock processing time.
    pub duration_ms: u128,
}

/// Normalize the file at `path` and fingerprint it.
///
/// Processing failures carry a `ProcessingError` in their chain so the
/// caller can tell data problems from infrastructure failures.
pub fn run_pipeline(path: &Path, options: NormalizationOptions) -> Result<NormalizeOutcome> {
    let span = info_span!("pipeline", source = %path.display());
    span.in_scope(|| {
        let start = Instant::now();
        let table = normalize(path, options)?;
        let fingerprint =
            fingerprint_file(path).with_context(|| format!("fingerprint {}", path.display()))?;
        let outcome = NormalizeOutcome {
            source: path.to_path_buf(),
            table,
            fingerprint,
            duration_ms: start.elapsed().as_millis(),
        };
        info!(
            rows = outcome.table.total_rows,
            columns = outcome.table.total_columns,
            file_size = outcome.fingerprint.size,
            duration_ms = outcome.duration_ms,
            "pipeline complete"
        );
        Ok(outcome)
    })
}

/// Assemble the persistent record of one processed upload.
///
/// The stored file name gets a millisecond timestamp prefix so repeated
/// uploads of the same file never collide.
pub fn build_record(outcome: &NormalizeOutcome, sheets: Vec<SheetInfo>) -> UploadRecord {
    let uploaded_at = Utc::now();
    let original_name = outcome.source.file_name().map_or_else(
        || "upload".to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    UploadRecord {
        file_name: format!("{}-{original_name}", uploaded_at.timestamp_millis()),
        original_name,
        uploaded_at,
        file_size: outcome.fingerprint.size,
        checksum: outcome.fingerprint.sha256.clone(),
        sheets,
        table: outcome.table.clone(),
        status: UploadStatus::Success,
    }
}

/// Inventory of one workbook plus its file fingerprint.
#[derive(Debug)]
pub struct InspectOutcome {
    pub source: PathBuf,
    pub workbook: WorkbookInfo,
    pub fingerprint: FileFingerprint,
}

pub fn run_inspect_pipeline(path: &Path) -> Result<InspectOutcome> {
    let span = info_span!("inspect", source = %path.display());
    span.in_scope(|| {
        let workbook = inspect(path)?;
        let fingerprint =
            fingerprint_file(path).with_context(|| format!("fingerprint {}", path.display()))?;
        debug!(sheets = workbook.sheets.len(), "inspect complete");
        Ok(InspectOutcome {
            source: path.to_path_buf(),
            workbook,
            fingerprint,
        })
    })
}

/// A chart series extracted from a file, with its numeric summary.
#[derive(Debug)]
pub struct ChartOutcome {
    pub series: ChartSeries,
    pub summary: Option<SeriesSummary>,
}

pub fn run_chart_pipeline(
    path: &Path,
    options: NormalizationOptions,
    spec: &ChartSpec,
) -> Result<ChartOutcome> {
    let span = info_span!(
        "chart",
        source = %path.display(),
        x = %spec.x_axis,
        y = %spec.y_axis
    );
    span.in_scope(|| {
        let table = normalize(path, options)?;
        let series = build_series(&table, spec)?;
        let summary = summarize(&series);
        info!(points = series.values.len(), "chart series ready");
        Ok(ChartOutcome { series, summary })
    })
}
