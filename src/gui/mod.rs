//! GUI module
//!
//! Provides the Slint-based portal window and keeps it in sync with the
//! portal controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
