//! lookupgrid-core - Sheet model, registry and storage.

pub mod error;
pub mod registry;
pub mod schema;
pub mod script;
pub mod sheet;
pub mod storage;

pub use error::{Result, SheetError};
pub use registry::{SheetId, SheetRegistry};
pub use schema::{ColumnDef, Schema};
pub use sheet::{CellUpdate, Sheet, SheetSnapshot};

pub use lookupgrid_engine::engine::{CellInput, ColumnType, Coord};
