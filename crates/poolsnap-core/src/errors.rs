use crate::selection::SelectionError;
use thiserror::Error;

/// Result type alias using PoolSnapError
pub type Result<T> = std::result::Result<T, PoolSnapError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    InvalidSelection,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidSelection => "ERR_INVALID_SELECTION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// (operation, snapshot path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snapshot path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the snapshot path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for poolsnap operations
///
/// Malformed records and attribute lines never show up here: the parser
/// skips them. Only I/O, lookup and selection failures are surfaced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolSnapError {
    /// A snapshot file could not be opened or read
    #[error("Failed to read snapshot {path}: {message}")]
    SnapshotRead { path: String, message: String },

    /// The snapshot directory could not be listed
    #[error("Failed to read directory {path}: {message}")]
    DirectoryRead { path: String, message: String },

    /// The discovery pattern could not be compiled
    #[error("Invalid snapshot pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A snapshot label was requested that is not in the catalog
    #[error("Snapshot not found: {label}")]
    SnapshotNotFound { label: String },

    /// The user did not pick a usable pair of snapshots
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// A result could not be serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<PoolSnapError> for ExError {
    fn from(err: PoolSnapError) -> Self {
        match err {
            PoolSnapError::SnapshotRead { path, message } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            PoolSnapError::DirectoryRead { path, message } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            PoolSnapError::InvalidPattern { pattern, message } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_message(format!("pattern '{}': {}", pattern, message))
            }

            PoolSnapError::SnapshotNotFound { label } => ExError::new(ExErrorKind::NotFound)
                .with_path(label)
                .with_message("Snapshot not found"),

            PoolSnapError::Selection(err) => {
                ExError::new(ExErrorKind::InvalidSelection).with_message(err.to_string())
            }

            PoolSnapError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to PoolSnapError
impl From<serde_json::Error> for PoolSnapError {
    fn from(err: serde_json::Error) -> Self {
        PoolSnapError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::InvalidSelection, "ERR_INVALID_SELECTION"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_snapshot_read_maps_to_io() {
        let err = PoolSnapError::SnapshotRead {
            path: "pool_snapshot_1.txt".to_string(),
            message: "No such file or directory".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Io);
        assert_eq!(ex.path(), Some("pool_snapshot_1.txt"));
    }

    #[test]
    fn test_display_includes_code_op_and_path() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("parse_snapshot_file")
            .with_path("a.txt")
            .with_message("boom");
        assert_eq!(
            err.to_string(),
            "[ERR_IO] in operation 'parse_snapshot_file': boom (path: a.txt)"
        );
    }

    #[test]
    fn test_selection_error_converts() {
        let err: PoolSnapError = SelectionError::TooFewSnapshots { available: 1 }.into();
        let ex: ExError = err.into();
        assert_eq!(ex.code(), "ERR_INVALID_SELECTION");
    }
}
