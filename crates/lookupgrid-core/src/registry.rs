//! Process-wide registry of sheets.
//!
//! Each sheet sits behind its own lock so that the cycle check and the edge
//! updates of a write happen as one step, reads see a consistent store and
//! edge set, and different sheets never wait on each other.

use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{Result, SheetError};
use crate::schema::Schema;
use crate::sheet::{CellUpdate, Sheet, SheetSnapshot};
use lookupgrid_engine::engine::Coord;

/// Opaque sheet identifier.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetId(Uuid);

impl SheetId {
    /// A fresh random identifier.
    pub fn new_v4() -> Self {
        SheetId(Uuid::new_v4())
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SheetId {
    type Err = SheetError;

    /// Text that is not a valid identifier cannot name a sheet.
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(SheetId)
            .map_err(|_| SheetError::UnknownSheet {
                sheet_id: s.to_string(),
            })
    }
}

/// Thread-safe map from sheet id to sheet.
#[derive(Debug, Default)]
pub struct SheetRegistry {
    sheets: DashMap<SheetId, Arc<RwLock<Sheet>>>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sheet with the given schema.
    pub fn create_sheet(&self, schema: Schema) -> SheetId {
        let id = SheetId::new_v4();
        tracing::info!(sheet = %id, columns = schema.columns().len(), "sheet created");
        self.sheets
            .insert(id, Arc::new(RwLock::new(Sheet::new(id, schema))));
        id
    }

    /// Clone the sheet handle out so the map shard is not held while the
    /// sheet lock is.
    fn sheet(&self, id: SheetId) -> Result<Arc<RwLock<Sheet>>> {
        self.sheets
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| SheetError::UnknownSheet {
                sheet_id: id.to_string(),
            })
    }

    pub fn schema(&self, id: SheetId) -> Result<Schema> {
        Ok(self.sheet(id)?.read().schema().clone())
    }

    /// Write one cell. Serialized with every other access to the same sheet.
    pub fn write_cell(&self, id: SheetId, coord: Coord, raw: &str) -> Result<CellUpdate> {
        let sheet = self.sheet(id)?;
        let mut sheet = sheet.write();
        sheet.write_cell(coord, raw)
    }

    /// Observable values of every cell in the sheet.
    pub fn read_sheet(&self, id: SheetId) -> Result<BTreeMap<Coord, String>> {
        Ok(self.sheet(id)?.read().read())
    }

    pub fn snapshot(&self, id: SheetId) -> Result<SheetSnapshot> {
        Ok(self.sheet(id)?.read().snapshot())
    }

    /// Run `f` against a consistent view of the sheet.
    pub fn with_sheet<R>(&self, id: SheetId, f: impl FnOnce(&Sheet) -> R) -> Result<R> {
        let sheet = self.sheet(id)?;
        let guard = sheet.read();
        Ok(f(&guard))
    }

    pub fn sheet_ids(&self) -> Vec<SheetId> {
        let mut ids: Vec<SheetId> = self.sheets.iter().map(|entry| *entry.key()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
