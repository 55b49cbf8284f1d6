use thiserror::Error;

/// Core error type for schema resolution and record shredding
#[derive(Error, Debug)]
pub enum ParquetError {
    /// Leaf type name missing from the type registry
    #[error("invalid parquet type: {type_name} (field {path})")]
    UnknownType { path: String, type_name: String },

    /// Declared or defaulted encoding missing from the codec registry
    #[error("unsupported parquet encoding: {encoding} (field {path})")]
    UnsupportedEncoding { path: String, encoding: String },

    /// Declared or defaulted compression missing from the compression registry
    #[error("unsupported compression method: {compression} (field {path})")]
    UnsupportedCompression { path: String, compression: String },

    /// Path lookup hit a missing segment or tried to descend into a leaf
    #[error("field not found: {path}")]
    FieldNotFound { path: String },

    /// Field declares both nested fields and a scalar type
    #[error("field {path} declares both `fields` and `type`")]
    AmbiguousFieldSpec { path: String },

    /// Field name contains the column key separator
    #[error("invalid field name {path}: names may not contain ','")]
    InvalidFieldName { path: String },

    /// Field declares neither nested fields nor a scalar type
    #[error("field {path} declares neither `fields` nor `type`")]
    MissingFieldType { path: String },

    /// Record is missing a value for a required field
    #[error("missing required field: {path}")]
    MissingRequiredField { path: String },

    /// Record holds several values for a non-repeated field
    #[error("too many values for field {path}: got {count}, field is not repeated")]
    TooManyValues { path: String, count: usize },

    /// Record value does not fit the field it is stored in
    #[error("type mismatch for field {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// Column data whose levels and values disagree
    #[error("invalid column data for {path}: {reason}")]
    InvalidColumn { path: String, reason: String },

    /// Errors raised by parquet-rs while exporting the schema
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Declaration parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for schema operations
pub type Result<T> = std::result::Result<T, ParquetError>;

/// Render a field path the way error messages show it
pub fn display_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(".")
}

impl ParquetError {
    /// Create a new field-not-found error
    pub fn field_not_found<S: AsRef<str>>(segments: &[S]) -> Self {
        ParquetError::FieldNotFound {
            path: display_path(segments),
        }
    }

    /// Create a new type mismatch error
    pub fn type_mismatch<S: AsRef<str>>(
        segments: &[S],
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        ParquetError::TypeMismatch {
            path: display_path(segments),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a new invalid column error
    pub fn invalid_column(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ParquetError::InvalidColumn {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The offending field path, if this error is tied to one
    pub fn path(&self) -> Option<&str> {
        match self {
            ParquetError::UnknownType { path, .. }
            | ParquetError::UnsupportedEncoding { path, .. }
            | ParquetError::UnsupportedCompression { path, .. }
            | ParquetError::FieldNotFound { path }
            | ParquetError::AmbiguousFieldSpec { path }
            | ParquetError::InvalidFieldName { path }
            | ParquetError::MissingFieldType { path }
            | ParquetError::MissingRequiredField { path }
            | ParquetError::TooManyValues { path, .. }
            | ParquetError::TypeMismatch { path, .. }
            | ParquetError::InvalidColumn { path, .. } => Some(path),
            ParquetError::Parquet(_) | ParquetError::Json(_) => None,
        }
    }
}
