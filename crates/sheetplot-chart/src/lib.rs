//! Chart series extraction and summaries over normalized tables.

pub mod error;
pub mod series;

pub use error::{ChartError, Result};
pub use series::{
    ChartKind, ChartSeries, ChartSpec, DEFAULT_POINT_LIMIT, SeriesSummary, build_series, summarize,
};
