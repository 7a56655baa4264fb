//! Sheet state and the cell write path.

mod ops;
mod state;

pub use state::{CellUpdate, Sheet, SheetSnapshot};
