//! Core library for the Catalog Management Editor (CME).
//! Loads catalog records from CSV, projects them through a single-column
//! filter into an editable view, reconciles view edits back into the backing
//! store, and writes the store out on explicit save.

mod catalog;
mod gui;
mod session;
pub mod statics;

pub use catalog::{Activity, CatalogError, CatalogRow, Column, LoadedCatalog, RowId};
pub use gui::run_gui;
pub use session::{EditorSession, Filter};
