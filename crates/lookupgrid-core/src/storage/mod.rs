//! Transport encoding and schema files

pub mod json;
pub mod schema;

pub use json::{encode_observable, to_json_string, write_json};
pub use schema::{load_schema, parse_schema};
