use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::NormalizedTable;

/// Name and dimensions of one worksheet in a workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetInfo {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Success,
    Failed,
}

/// Everything recorded about one processed upload: file identity,
/// provenance, sheet inventory, and the normalized table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub file_name: String,
    pub original_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub file_size: u64,
    pub checksum: String,
    pub sheets: Vec<SheetInfo>,
    pub table: NormalizedTable,
    pub status: UploadStatus,
}
