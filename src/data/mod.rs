//! Game tables and their external data files
//!
//! This module holds the built-in tables and loads overrides from RON files,
//! so balance changes never need a rebuild.

pub mod defaults;
pub mod error;
pub mod loader;

pub use error::TableError;
pub use loader::{GameTables, TABLES_VERSION};
