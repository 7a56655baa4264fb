use std::collections::BTreeMap;

use crate::registry::SheetId;
use crate::schema::Schema;
use lookupgrid_engine::engine::{CellInput, CellStore, Coord, LookupLinks, resolve};

/// Observable state of a cell after a successful write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate {
    pub coord: Coord,
    /// `None` when the cell is a lookup whose chain ends without a literal.
    pub value: Option<String>,
}

/// Full definition state of a sheet: literals and lookup edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SheetSnapshot {
    pub cells: BTreeMap<Coord, String>,
    pub links: BTreeMap<Coord, Coord>,
}

/// A sheet: schema, literal store and lookup edges, owned together.
#[derive(Debug)]
pub struct Sheet {
    pub(crate) id: SheetId,
    pub(crate) schema: Schema,
    pub(crate) store: CellStore,
    pub(crate) links: LookupLinks,
}

impl Sheet {
    pub fn new(id: SheetId, schema: Schema) -> Self {
        Sheet {
            id,
            schema,
            store: CellStore::new(),
            links: LookupLinks::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> &CellStore {
        &self.store
    }

    pub fn links(&self) -> &LookupLinks {
        &self.links
    }

    /// Observable value of every cell that has one.
    pub fn read(&self) -> BTreeMap<Coord, String> {
        resolve(&self.store, &self.links)
    }

    /// How `coord` is currently defined, if at all.
    pub fn definition(&self, coord: &Coord) -> Option<CellInput> {
        if let Some(target) = self.links.forward(coord) {
            return Some(CellInput::Lookup(target.clone()));
        }
        self.store
            .get(coord)
            .map(|value| CellInput::Literal(value.to_string()))
    }

    pub fn snapshot(&self) -> SheetSnapshot {
        SheetSnapshot {
            cells: self
                .store
                .iter()
                .map(|(k, v)| (k.clone(), v.to_string()))
                .collect(),
            links: self
                .links
                .iter()
                .map(|(s, t)| (s.clone(), t.clone()))
                .collect(),
        }
    }
}
