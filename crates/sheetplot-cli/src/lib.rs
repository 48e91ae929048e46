//! CLI library components for the spreadsheet normalizer.

pub mod logging;
pub mod pipeline;
