//! Utility modules
//!
//! Provides logging, startup profiling, host theme detection and link launching.

pub mod launcher;
pub mod logging;
pub mod startup_profiler;
pub mod system_theme;

pub use launcher::{LinkOpener, SystemLinkOpener};
pub use logging::init_logging;
pub use system_theme::{FixedThemeProbe, HostThemeProbe, SystemThemeProbe};
