//! Reading uploaded workbooks from disk and fingerprinting the files.

pub mod fingerprint;
pub mod workbook;

pub use fingerprint::{FileFingerprint, fingerprint_file};
pub use workbook::{WorkbookInfo, inspect, read_first_sheet};
