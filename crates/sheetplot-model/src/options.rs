use serde::{Deserialize, Serialize};

/// Cleanup knobs applied while transforming raw rows into records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizationOptions {
    /// Trim leading and trailing whitespace from text cells.
    pub trim_strings: bool,
    /// Coerce numeric-looking text into numbers.
    pub convert_numbers: bool,
    /// Replace empty-string cells with null.
    pub remove_empty_strings: bool,
}

impl NormalizationOptions {
    /// All cleanup passes enabled.
    pub fn all() -> Self {
        NormalizationOptions {
            trim_strings: true,
            convert_numbers: true,
            remove_empty_strings: true,
        }
    }
}
