use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("invalid spreadsheet data format")]
    InvalidFormat,
    #[error("missing headers in spreadsheet")]
    MissingHeaders,
    #[error("spreadsheet contains no data")]
    EmptyData,
    #[error("error reading spreadsheet file: {0}")]
    Parse(String),
    #[error("error transforming spreadsheet data: {0}")]
    Transform(String),
}

/// Stable machine-readable tag for a [`ProcessingError`], independent of
/// the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    MissingHeaders,
    EmptyData,
    Parse,
    Transform,
}

impl ProcessingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessingError::InvalidFormat => ErrorKind::InvalidFormat,
            ProcessingError::MissingHeaders => ErrorKind::MissingHeaders,
            ProcessingError::EmptyData => ErrorKind::EmptyData,
            ProcessingError::Parse(_) => ErrorKind::Parse,
            ProcessingError::Transform(_) => ErrorKind::Transform,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ErrorKind::InvalidFormat => "invalid-format",
            ErrorKind::MissingHeaders => "missing-headers",
            ErrorKind::EmptyData => "empty-data",
            ErrorKind::Parse => "parse",
            ErrorKind::Transform => "transform",
        };
        f.write_str(token)
    }
}

pub type Result<T> = std::result::Result<T, ProcessingError>;
