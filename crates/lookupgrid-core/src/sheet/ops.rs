use super::{CellUpdate, Sheet};
use crate::error::{Result, SheetError};
use lookupgrid_engine::engine::{CellInput, ColumnType, Coord, detect_cycle, resolve_cell};

impl Sheet {
    /// Set a cell from a raw value: a literal or `lookup(<column>,<row>)`.
    ///
    /// On error nothing changes: every check runs before the store or the
    /// lookup edges are touched.
    pub fn write_cell(&mut self, coord: Coord, raw: &str) -> Result<CellUpdate> {
        if raw.is_empty() {
            return Err(SheetError::EmptyValue { coord });
        }
        let kind = self.column_type(&coord.column)?;

        match CellInput::from_input(raw)? {
            CellInput::Literal(value) => self.write_literal(coord, kind, value),
            CellInput::Lookup(target) => self.write_lookup(coord, target),
        }
    }

    fn column_type(&self, column: &str) -> Result<ColumnType> {
        self.schema
            .column_type(column)
            .ok_or_else(|| SheetError::UnknownColumn {
                column: column.to_string(),
                sheet_id: self.id.to_string(),
            })
    }

    fn write_literal(&mut self, coord: Coord, kind: ColumnType, value: String) -> Result<CellUpdate> {
        if !kind.conforms(&value) {
            tracing::debug!(sheet = %self.id, cell = %coord, expected = %kind, "rejected literal");
            return Err(SheetError::InvalidValue {
                column: coord.column,
                expected: kind,
                received: value,
            });
        }

        if let Some(old_target) = self.links.unlink_source(&coord) {
            tracing::debug!(sheet = %self.id, cell = %coord, old_target = %old_target, "lookup replaced by literal");
        }
        self.store.put(coord.clone(), value.clone());
        tracing::debug!(sheet = %self.id, cell = %coord, "literal written");

        Ok(CellUpdate {
            coord,
            value: Some(value),
        })
    }

    fn write_lookup(&mut self, coord: Coord, target: Coord) -> Result<CellUpdate> {
        self.column_type(&target.column)?;

        if let Some(path) = detect_cycle(&self.links, &coord, &target) {
            tracing::debug!(sheet = %self.id, cell = %coord, ?path, "rejected cyclic lookup");
            return Err(SheetError::CyclicReference { target });
        }

        let installed = self.links.install(coord.clone(), target.clone());
        self.store.remove(&coord);
        tracing::debug!(
            sheet = %self.id,
            cell = %coord,
            target = %target,
            replaced = ?installed.replaced,
            evicted = ?installed.evicted,
            "lookup installed"
        );

        let value = resolve_cell(&self.store, &self.links, &coord);
        Ok(CellUpdate { coord, value })
    }
}
