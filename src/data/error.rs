use thiserror::Error;

/// Problems with the shape of a launch table, independent of file format.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },

    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedType { column: &'static str, data_type: String },

    #[error("row {row}: null value in column '{column}'")]
    NullValue { row: usize, column: &'static str },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}
