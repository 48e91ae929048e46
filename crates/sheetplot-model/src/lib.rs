//! Core data model for spreadsheet normalization: cell values, raw and
//! normalized tables, cleanup options, and the processing error taxonomy.

pub mod cell;
pub mod error;
pub mod options;
pub mod record;
pub mod table;

pub use cell::{CellValue, format_number, parse_numeral};
pub use error::{ErrorKind, ProcessingError, Result};
pub use options::NormalizationOptions;
pub use record::{SheetInfo, UploadRecord, UploadStatus};
pub use table::{NormalizedTable, RawSheet};
