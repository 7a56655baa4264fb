//! JSON encoding of observable sheet values.
//!
//! Keys use the tuple form consumers already depend on, e.g.
//! `{"('A', '10')": "hello"}`.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use lookupgrid_engine::engine::Coord;

/// Encode observable values as a JSON object keyed by `('<column>', '<row>')`.
pub fn encode_observable(values: &BTreeMap<Coord, String>) -> Value {
    let map: Map<String, Value> = values
        .iter()
        .map(|(coord, value)| (coord.to_string(), Value::String(value.clone())))
        .collect();
    Value::Object(map)
}

/// Render observable values as JSON text.
pub fn to_json_string(values: &BTreeMap<Coord, String>, pretty: bool) -> Result<String> {
    let encoded = encode_observable(values);
    let text = if pretty {
        serde_json::to_string_pretty(&encoded)?
    } else {
        serde_json::to_string(&encoded)?
    };
    Ok(text)
}

/// Write observable values to a JSON file.
pub fn write_json(path: &Path, values: &BTreeMap<Coord, String>, pretty: bool) -> Result<()> {
    let text = to_json_string(values, pretty)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
