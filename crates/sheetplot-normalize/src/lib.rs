//! Turning raw worksheet rows into validated, keyed tables.

pub mod pipeline;
pub mod transform;
pub mod validate;

pub use pipeline::{normalize, normalize_sheet};
pub use transform::transform;
pub use validate::{is_blank_row, validate};
