//! Lookup engine API.
//!
//! This module provides the per-sheet reference machinery:
//!
//! - [`Coord`] - `(column, row)` cell coordinates and their transport key form
//! - [`CellInput`] - Literal/lookup classification of raw values
//! - [`ColumnType`] - Declared column types and literal validation
//! - [`CellStore`] - Literal cell storage
//! - [`LookupLinks`] - One-to-one lookup edges (forward and backward)
//! - [`detect_cycle`] - Circular lookup detection
//! - [`resolve`] - Observable values through lookup chains

mod cell;
mod cell_ref;
mod column;
mod cycle;
mod format;
mod links;
mod resolve;
mod store;

pub use cell::{CellInput, LookupSyntaxError};
pub use cell_ref::Coord;
pub use column::ColumnType;
pub use cycle::detect_cycle;
pub use format::quote_token;
pub use links::{Installed, LookupLinks, Walk};
pub use resolve::{resolve, resolve_cell};
pub use store::CellStore;
