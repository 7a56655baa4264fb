//! Batch write scripts.
//!
//! One write per line, `<column>,<row> = <value>`. Whitespace around the
//! column and row is ignored, and a single space after `=` is taken as the
//! separator. Everything else up to the end of the line is the value, so
//! literals keep their leading and trailing spaces:
//!
//! ```text
//! # comments and blank lines are skipped
//! A,3 = 3
//! A,1 = lookup(A,3)
//! ```

use crate::error::{Result, SheetError};
use crate::registry::{SheetId, SheetRegistry};
use crate::sheet::CellUpdate;
use lookupgrid_engine::engine::Coord;

/// A parsed script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub coord: Coord,
    pub value: String,
}

/// Parse a whole script. Nothing is applied if any line is malformed.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push(parse_write(line, raw)?);
    }
    Ok(lines)
}

/// Parse a single `<column>,<row> = <value>` write.
pub fn parse_write(line: usize, text: &str) -> Result<ScriptLine> {
    let parse_err = |message: &str| SheetError::Parse {
        line,
        message: message.to_string(),
    };

    let (target, value) = text
        .split_once('=')
        .ok_or_else(|| parse_err("expected '<column>,<row> = <value>'"))?;
    let (column, row) = target
        .split_once(',')
        .ok_or_else(|| parse_err("expected '<column>,<row>' before '='"))?;
    let (column, row) = (column.trim(), row.trim());
    if column.is_empty() || row.is_empty() {
        return Err(parse_err("column and row cannot be empty"));
    }

    Ok(ScriptLine {
        line,
        coord: Coord::new(column, row),
        value: value.strip_prefix(' ').unwrap_or(value).to_string(),
    })
}

/// Apply a script to one sheet, stopping at the first failing write.
///
/// Writes before the failing line stay applied.
pub fn run_script(registry: &SheetRegistry, id: SheetId, text: &str) -> Result<Vec<CellUpdate>> {
    let lines = parse_script(text)?;
    let mut updates = Vec::with_capacity(lines.len());
    for ScriptLine { line, coord, value } in lines {
        let update = registry
            .write_cell(id, coord, &value)
            .map_err(|source| SheetError::Script {
                line,
                source: Box::new(source),
            })?;
        updates.push(update);
    }
    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, Schema};
    use lookupgrid_engine::engine::ColumnType;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lines = parse_script("# header\n\nA,1 = lookup(B,2)\n  B , 2=x\n").unwrap();
        assert_eq!(
            lines,
            vec![
                ScriptLine {
                    line: 3,
                    coord: Coord::new("A", "1"),
                    value: "lookup(B,2)".to_string(),
                },
                ScriptLine {
                    line: 4,
                    coord: Coord::new("B", "2"),
                    value: "x".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_literal_whitespace_is_kept() {
        let lines = parse_script("A,1 =  padded \n  A,2 =x  \n").unwrap();
        assert_eq!(lines[0].value, " padded ");
        assert_eq!(lines[1].coord, Coord::new("A", "2"));
        assert_eq!(lines[1].value, "x  ");

        let write = parse_write(1, "A,3 = lookup(A,1) ").unwrap();
        assert_eq!(write.value, "lookup(A,1) ");
    }

    #[test]
    fn test_run_stores_padded_literals() {
        let registry = SheetRegistry::new();
        let schema = Schema::new(vec![ColumnDef::new("A", ColumnType::String)]).unwrap();
        let id = registry.create_sheet(schema);

        run_script(&registry, id, "A,1 =  padded \nA,2 = lookup(A,1) \n").unwrap();
        let values = registry.read_sheet(id).unwrap();
        assert_eq!(values[&Coord::new("A", "1")], " padded ");
        assert_eq!(values[&Coord::new("A", "2")], " padded ");
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = parse_script("A,1 = 1\nA1 = 2\n").unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 2, .. }));

        let err = parse_script("A,1 2\n").unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 1, .. }));

        let err = parse_script(",1 = 2\n").unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_run_stops_at_first_failure() {
        let registry = SheetRegistry::new();
        let schema = Schema::new(vec![ColumnDef::new("A", ColumnType::Int)]).unwrap();
        let id = registry.create_sheet(schema);

        let err = run_script(&registry, id, "A,1 = 1\nA,2 = x\nA,3 = 3\n").unwrap_err();
        assert!(matches!(err, SheetError::Script { line: 2, .. }));
        assert!(matches!(err.root(), SheetError::InvalidValue { .. }));

        let values = registry.read_sheet(id).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[&Coord::new("A", "1")], "1");
    }

    #[test]
    fn test_run_returns_updates_in_order() {
        let registry = SheetRegistry::new();
        let schema = Schema::new(vec![ColumnDef::new("A", ColumnType::String)]).unwrap();
        let id = registry.create_sheet(schema);

        let updates = run_script(&registry, id, "A,2 = v\nA,1 = lookup(A,2)\n").unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].coord, Coord::new("A", "1"));
        assert_eq!(updates[1].value.as_deref(), Some("v"));
    }
}
