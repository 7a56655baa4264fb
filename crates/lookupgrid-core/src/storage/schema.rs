//! Loading sheet schemas from disk.
//!
//! JSON files use `{"columns": [{"name": "A", "type": "string"}]}`; TOML
//! files use `[[columns]]` tables with the same keys.

use std::path::Path;

use crate::error::{Result, SheetError};
use crate::schema::Schema;

/// Refuse to read schema files larger than this.
pub const MAX_SCHEMA_FILE_BYTES: u64 = 1024 * 1024;

/// Schema text formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// Pick a format from the file extension; anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SchemaFormat::Toml,
            _ => SchemaFormat::Json,
        }
    }
}

/// Parse schema text.
pub fn parse_schema(content: &str, format: SchemaFormat) -> Result<Schema> {
    let schema = match format {
        SchemaFormat::Json => serde_json::from_str(content)?,
        SchemaFormat::Toml => toml::from_str(content)?,
    };
    Ok(schema)
}

/// Load a schema file.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_SCHEMA_FILE_BYTES {
        return Err(SheetError::InvalidSchema(format!(
            "refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_SCHEMA_FILE_BYTES
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_schema(&content, SchemaFormat::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookupgrid_engine::engine::ColumnType;

    #[test]
    fn test_parse_json_schema() {
        let schema = parse_schema(
            r#"{"columns": [{"name": "A", "type": "string"}, {"name": "B", "type": "boolean"}]}"#,
            SchemaFormat::Json,
        )
        .unwrap();
        assert_eq!(schema.column_type("A"), Some(ColumnType::String));
        assert_eq!(schema.column_type("B"), Some(ColumnType::Boolean));
    }

    #[test]
    fn test_parse_toml_schema() {
        let schema = parse_schema(
            "[[columns]]\nname = \"A\"\ntype = \"int\"\n\n[[columns]]\nname = \"D\"\ntype = \"double\"\n",
            SchemaFormat::Toml,
        )
        .unwrap();
        assert_eq!(schema.column_type("A"), Some(ColumnType::Int));
        assert_eq!(schema.column_type("D"), Some(ColumnType::Double));
    }

    #[test]
    fn test_bad_schema_reports_error() {
        assert!(matches!(
            parse_schema(r#"{"columns": [{"name": "A", "type": "date"}]}"#, SchemaFormat::Json),
            Err(SheetError::Json(_))
        ));
        assert!(matches!(
            parse_schema("columns = 3", SchemaFormat::Toml),
            Err(SheetError::Toml(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SchemaFormat::from_path(Path::new("s.toml")), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path(Path::new("s.TOML")), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path(Path::new("s.json")), SchemaFormat::Json);
        assert_eq!(SchemaFormat::from_path(Path::new("schema")), SchemaFormat::Json);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("lookupgrid_no_such_schema.json");
        assert!(matches!(load_schema(&path), Err(SheetError::Io(_))));
    }
}
