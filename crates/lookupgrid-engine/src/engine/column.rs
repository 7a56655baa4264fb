//! Column types and literal validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The primitive type declared for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Boolean,
    Int,
    Double,
    String,
}

impl ColumnType {
    pub const ALL: [ColumnType; 4] = [
        ColumnType::Boolean,
        ColumnType::Int,
        ColumnType::Double,
        ColumnType::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Int => "int",
            ColumnType::Double => "double",
            ColumnType::String => "string",
        }
    }

    /// Whether a raw literal is acceptable for this column type.
    /// - boolean: `true`/`false`, any case
    /// - int: non-negative, digits only
    /// - double: anything `f64` parses (surrounding whitespace allowed)
    /// - string: anything
    pub fn conforms(self, raw: &str) -> bool {
        match self {
            ColumnType::Boolean => {
                raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false")
            }
            ColumnType::Int => !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()),
            ColumnType::Double => raw.trim().parse::<f64>().is_ok(),
            ColumnType::String => true,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ColumnType::ALL.iter().map(|t| t.name()).collect();
                format!(
                    "Invalid type '{}'. Valid types are: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}
