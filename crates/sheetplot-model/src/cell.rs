use serde::{Deserialize, Serialize};

/// A spreadsheet cell: text, a number, or nothing.
///
/// Serialization is untagged so rows write as plain JSON scalars
/// (`"Bob"`, `30.0`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        CellValue::Number(value.into())
    }

    /// True when the cell is null or an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(text) => text.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Numeric view of the cell: numbers pass through, text parses via
    /// [`parse_numeral`], null has no numeric view.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => parse_numeral(text),
            CellValue::Null => None,
        }
    }

    /// Display form: text as-is, numbers without trailing zeros, null as
    /// the empty string.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(value) => format_number(*value),
            CellValue::Null => String::new(),
        }
    }
}

/// Parse a numeral the way normalization coerces numbers: trim first,
/// reject the empty string, accept only finite values. Null and blank
/// cells never count as numeric.
pub fn parse_numeral(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format a number without a trailing fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
