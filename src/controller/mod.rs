//! Application logic controller module
//!
//! This module holds the portal's view state and derives what the window shows.
//!
//! # Overview
//!
//! The portal controller:
//! - **Owns view state**: search query, active category, favorites, theme
//! - **Recomputes views** from the catalog on every change, with no caching
//! - **Persists** favorites and theme synchronously as each change happens
//! - **Opens links** for activated cards through an injected opener
//!
//! # Event Flow
//!
//! ```text
//! GUI callback → PortalController mutation → stores written
//!                         ↓
//!                    PortalView → GUI models
//! ```
//!
//! All four pieces of state change independently; any value may follow any other.

pub mod portal_controller;

pub use portal_controller::{CardView, PortalController, PortalView};
