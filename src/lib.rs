//! `App Portal` - searchable desktop portal for internal applications
//!
//! Shows a categorized catalog of internal tools with free-text search, favorites
//! and a light/dark theme. Favorites and theme persist in a small key-value store
//! in the user's data directory; everything else is recomputed from the catalog
//! on every change.
//!
//! # Layout
//!
//! - [`catalog`]: bundled or configured list of applications
//! - [`filter`]: pure category and text filtering
//! - [`storage`]: key-value persistence, favorites and theme stores
//! - [`controller`]: view state and the snapshot rendered by the GUI
//! - [`config`], [`utils`]: configuration, logging, host integration

// Module declarations
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{PortalError, Result};
