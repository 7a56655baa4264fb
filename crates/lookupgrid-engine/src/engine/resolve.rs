//! Read-side resolution of lookup chains.

use std::collections::BTreeMap;

use super::{CellStore, Coord, LookupLinks};

/// Compute the observable value of every cell.
///
/// Literals report themselves. Each literal's value is then copied back
/// along the unique chain of cells that look it up. Cells whose chain never
/// reaches a literal are absent from the result.
pub fn resolve(store: &CellStore, links: &LookupLinks) -> BTreeMap<Coord, String> {
    let mut values = BTreeMap::new();
    for (coord, value) in store.iter() {
        values.insert(coord.clone(), value.to_string());
        for source in links.sources(coord) {
            values.insert(source.clone(), value.to_string());
        }
    }
    values
}

/// Observable value of a single cell: its literal, or the literal at the end
/// of its lookup chain.
pub fn resolve_cell(store: &CellStore, links: &LookupLinks, coord: &Coord) -> Option<String> {
    if let Some(value) = store.get(coord) {
        return Some(value.to_string());
    }
    let end = links.targets(coord).last()?;
    store.get(end).map(str::to_string)
}
