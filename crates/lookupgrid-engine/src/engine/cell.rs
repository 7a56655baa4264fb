//! Cell value classification.
//!
//! A raw value written to a cell is either a literal, stored as-is, or a
//! lookup of another cell written as `lookup(<column>,<row>)`. The column
//! token may carry decorative quotes (`lookup("A",1)`, `lookup(“A”,1)`),
//! which are stripped.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use super::cell_ref::Coord;

const LOOKUP_PREFIX: &str = "lookup(";

const DECORATIVE_QUOTES: &[char] = &['"', '\'', '\u{201c}', '\u{201d}'];

/// How a cell is defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellInput {
    Literal(String),
    Lookup(Coord),
}

/// A value that starts like a lookup but cannot be read as one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed lookup '{raw}': expected lookup(<column>,<row>)")]
pub struct LookupSyntaxError {
    pub raw: String,
}

impl CellInput {
    /// Classify a raw value.
    /// - Starts with `lookup(` -> Lookup (must be well formed)
    /// - Otherwise -> Literal, kept verbatim
    pub fn from_input(raw: &str) -> Result<CellInput, LookupSyntaxError> {
        let trimmed = raw.trim();
        if !trimmed.starts_with(LOOKUP_PREFIX) {
            return Ok(CellInput::Literal(raw.to_string()));
        }

        let malformed = || LookupSyntaxError {
            raw: raw.to_string(),
        };
        let caps = lookup_re().captures(trimmed).ok_or_else(malformed)?;

        let column = caps["column"]
            .trim()
            .trim_matches(DECORATIVE_QUOTES)
            .trim();
        let row = caps["row"].trim();
        if column.is_empty() || row.is_empty() {
            return Err(malformed());
        }

        Ok(CellInput::Lookup(Coord::new(column, row)))
    }
}

fn lookup_re() -> &'static Regex {
    static LOOKUP_RE: OnceLock<Regex> = OnceLock::new();
    LOOKUP_RE.get_or_init(|| {
        Regex::new(r"^lookup\((?<column>[^,()]*),(?<row>[^,()]*)\)$")
            .expect("lookup regex must compile")
    })
}
