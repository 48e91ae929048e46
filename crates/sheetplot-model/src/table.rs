use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// A worksheet as read from disk: the sheet name and its rows in file
/// order, before any validation or cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>) -> Self {
        RawSheet {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }
}

/// The output of normalization: named columns plus one keyed record per
/// surviving data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, CellValue>>,
    pub total_rows: usize,
    pub total_columns: usize,
}
