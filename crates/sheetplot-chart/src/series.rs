use serde::{Deserialize, Serialize};
use sheetplot_model::{CellValue, NormalizedTable};
use tracing::debug;

use crate::error::{ChartError, Result};

/// Cap on chart points when a spec does not set its own limit.
pub const DEFAULT_POINT_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// What to plot: the columns feeding each axis, the chart style, and an
/// optional cap on the number of points. `limit: None` takes every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub x_axis: String,
    pub y_axis: String,
    pub kind: ChartKind,
    pub limit: Option<usize>,
}

impl ChartSpec {
    pub fn new(x_axis: impl Into<String>, y_axis: impl Into<String>, kind: ChartKind) -> Self {
        ChartSpec {
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
            kind,
            limit: Some(DEFAULT_POINT_LIMIT),
        }
    }
}

/// Labels and numeric values pulled from a normalized table, ready to
/// hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub x_axis: String,
    pub y_axis: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Extract one series from the table. Both axis columns must exist, and
/// every Y cell within the limit must read as a number; a null or
/// non-numeric Y cell is an error rather than a silent gap.
pub fn build_series(table: &NormalizedTable, spec: &ChartSpec) -> Result<ChartSeries> {
    for axis in [&spec.x_axis, &spec.y_axis] {
        if !table.headers.iter().any(|header| header == axis) {
            return Err(ChartError::UnknownColumn(axis.clone()));
        }
    }

    let limit = spec.limit.unwrap_or(usize::MAX);
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (row, record) in table.rows.iter().take(limit).enumerate() {
        let value = record
            .get(&spec.y_axis)
            .and_then(CellValue::as_number)
            .ok_or_else(|| ChartError::NonNumericValue {
                column: spec.y_axis.clone(),
                row,
            })?;
        labels.push(record.get(&spec.x_axis).map_or_else(String::new, CellValue::render));
        values.push(value);
    }
    debug!(points = values.len(), kind = ?spec.kind, "built chart series");

    Ok(ChartSeries {
        x_axis: spec.x_axis.clone(),
        y_axis: spec.y_axis.clone(),
        kind: spec.kind,
        labels,
        values,
    })
}

/// Count, mean, min and max of the series values. An empty series has
/// no summary.
pub fn summarize(series: &ChartSeries) -> Option<SeriesSummary> {
    if series.values.is_empty() {
        return None;
    }
    let count = series.values.len();
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in &series.values {
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }
    Some(SeriesSummary {
        count,
        mean: sum / count as f64,
        min,
        max,
    })
}
