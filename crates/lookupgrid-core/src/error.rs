//! Error types for lookupgrid core.

use thiserror::Error;

use lookupgrid_engine::engine::{ColumnType, Coord, LookupSyntaxError};

/// Errors that can occur while creating, writing or reading sheets
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Sheet ID: {sheet_id} does not exist.")]
    UnknownSheet { sheet_id: String },

    #[error("Column '{column}' does not exist in sheet with ID '{sheet_id}'.")]
    UnknownColumn { column: String, sheet_id: String },

    #[error(
        "Invalid value for column '{column}'. Expected type: '{expected}', but received: '{received}'."
    )]
    InvalidValue {
        column: String,
        expected: ColumnType,
        received: String,
    },

    #[error(
        "Lookup ({}, {}) creates a cycle, which is not allowed.",
        .target.column,
        .target.row
    )]
    CyclicReference { target: Coord },

    #[error(transparent)]
    MalformedLookup(#[from] LookupSyntaxError),

    #[error("Value for cell {coord} cannot be empty.")]
    EmptyValue { coord: Coord },

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<SheetError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SheetError {
    /// The underlying error, looking through script line wrappers.
    pub fn root(&self) -> &SheetError {
        match self {
            SheetError::Script { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
