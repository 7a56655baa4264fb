//! Literal cell storage.
//!
//! Holds only cells whose current definition is a literal. Type checking
//! happens before values reach this layer.

use std::collections::HashMap;

use super::cell_ref::Coord;

/// Sparse map from coordinate to literal value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellStore {
    cells: HashMap<Coord, String>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional overwrite. Returns the previous literal, if any.
    pub fn put(&mut self, coord: Coord, value: impl Into<String>) -> Option<String> {
        self.cells.insert(coord, value.into())
    }

    pub fn get(&self, coord: &Coord) -> Option<&str> {
        self.cells.get(coord).map(String::as_str)
    }

    /// No-op when absent.
    pub fn remove(&mut self, coord: &Coord) -> Option<String> {
        self.cells.remove(coord)
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.cells.contains_key(coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &str)> {
        self.cells.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
