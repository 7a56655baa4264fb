//! Sheet column schemas.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetError};
use lookupgrid_engine::engine::ColumnType;

/// A declared column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        ColumnDef {
            name: name.into(),
            kind,
        }
    }
}

/// Immutable column schema of a sheet, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnDef>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self> {
        if columns.is_empty() {
            return Err(SheetError::InvalidSchema(
                "a sheet needs at least one column".to_string(),
            ));
        }
        for (i, column) in columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(SheetError::InvalidSchema(format!(
                    "column {} has an empty name",
                    i + 1
                )));
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(SheetError::InvalidSchema(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
        }
        Ok(Schema { columns })
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            columns: Vec<ColumnDef>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Schema::new(raw.columns).map_err(serde::de::Error::custom)
    }
}
