//! Application catalog module
//!
//! This module holds the static, ordered list of applications shown by the portal.
//! The catalog is bundled with the binary as JSON and can be replaced by an external
//! file named in the configuration. It is read-only once loaded.

pub mod loader;
pub mod models;

pub use loader::Catalog;
pub use models::{AppRecord, Category, CategoryFilter};
