use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("column {0:?} not found in table headers")]
    UnknownColumn(String),
    #[error("value in column {column:?} at data row {row} is not numeric")]
    NonNumericValue { column: String, row: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
