//! Vehicle-rental back office: client registration, lookup, and deletion over
//! SQLite, plus a flat-file archive for best-effort export/import.
//!
//! Layering: `domain` holds the entity and the store port, `core` layers
//! validation and uniqueness on top of the port, `adapters` implements the
//! port with rusqlite.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::sqlite::SqliteStore;
pub use config::{toml_config::BackOfficeConfig, CliConfig};
pub use crate::core::{ClientFileArchive, ClientRepository};
pub use domain::model::ClientRecord;
pub use utils::error::{ClientError, Result};
