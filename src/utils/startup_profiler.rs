//! Startup time profiling
//!
//! Records how long each initialization phase takes from process start until the
//! portal window is ready, and logs a summary once startup completes.

use parking_lot::Mutex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Startup budget before the summary is logged as a warning
const STARTUP_TARGET: Duration = Duration::from_millis(500);

/// Startup phase identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPhase {
    /// Application entry point
    AppStart,
    /// Logging system initialization
    LoggingInit,
    /// Configuration loading
    ConfigLoad,
    /// Catalog loading and validation
    CatalogLoad,
    /// Storage, favorites and theme loading
    StorageLoad,
    /// Window creation and first render
    GuiInit,
    /// Application fully initialized
    AppReady,
}

impl StartupPhase {
    /// Get a human-readable name for the phase
    pub fn name(self) -> &'static str {
        match self {
            Self::AppStart => "Application Start",
            Self::LoggingInit => "Logging Initialization",
            Self::ConfigLoad => "Configuration Load",
            Self::CatalogLoad => "Catalog Load",
            Self::StorageLoad => "Storage Load",
            Self::GuiInit => "GUI Init",
            Self::AppReady => "Application Ready",
        }
    }
}

/// Duration recorded for one phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseTiming {
    /// The startup phase
    pub phase: StartupPhase,
    /// Time since the previous phase was recorded
    pub duration: Duration,
}

struct ProfilerState {
    last_phase_end: Instant,
    timings: Vec<PhaseTiming>,
}

/// Startup profiler for tracking initialization performance
pub struct StartupProfiler {
    app_start: Instant,
    state: Mutex<ProfilerState>,
}

impl StartupProfiler {
    /// Create a profiler starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            app_start: now,
            state: Mutex::new(ProfilerState {
                last_phase_end: now,
                timings: Vec::new(),
            }),
        }
    }

    /// Record that `phase` just finished
    pub fn record_phase(&self, phase: StartupPhase) {
        let now = Instant::now();
        let mut state = self.state.lock();
        let duration = now.duration_since(state.last_phase_end);
        state.last_phase_end = now;
        state.timings.push(PhaseTiming { phase, duration });

        debug!(
            "Startup phase: {} completed in {:.2}ms",
            phase.name(),
            duration.as_secs_f64() * 1000.0
        );
    }

    /// Time since the profiler was created
    pub fn total_startup_time(&self) -> Duration {
        self.app_start.elapsed()
    }

    /// All recorded phase timings, in order
    pub fn timings(&self) -> Vec<PhaseTiming> {
        self.state.lock().timings.clone()
    }

    /// Log the per-phase breakdown
    pub fn log_summary(&self) {
        let total = self.total_startup_time();
        let total_ms = total.as_secs_f64() * 1000.0;

        info!("Startup completed in {:.2}ms", total_ms);
        for timing in self.timings() {
            info!(
                "  {}: {:.2}ms",
                timing.phase.name(),
                timing.duration.as_secs_f64() * 1000.0
            );
        }

        if total > STARTUP_TARGET {
            warn!(
                "Startup took longer than {}ms",
                STARTUP_TARGET.as_millis()
            );
        }
    }
}

impl Default for StartupProfiler {
    fn default() -> Self {
        Self::new()
    }
}

static STARTUP_PROFILER: LazyLock<StartupProfiler> = LazyLock::new(StartupProfiler::new);

/// Get the global startup profiler instance
pub fn get_profiler() -> &'static StartupProfiler {
    &STARTUP_PROFILER
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_record_phase_order_and_duration() {
        let profiler = StartupProfiler::new();

        thread::sleep(Duration::from_millis(10));
        profiler.record_phase(StartupPhase::LoggingInit);
        thread::sleep(Duration::from_millis(10));
        profiler.record_phase(StartupPhase::CatalogLoad);

        let timings = profiler.timings();
        assert_eq!(timings.len(), 2);
        assert_eq!(timings[0].phase, StartupPhase::LoggingInit);
        assert_eq!(timings[1].phase, StartupPhase::CatalogLoad);
        assert!(timings.iter().all(|t| t.duration >= Duration::from_millis(10)));
    }

    #[test]
    fn test_total_startup_time() {
        let profiler = StartupProfiler::new();
        thread::sleep(Duration::from_millis(20));
        assert!(profiler.total_startup_time() >= Duration::from_millis(20));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(StartupPhase::AppStart.name(), "Application Start");
        assert_eq!(StartupPhase::StorageLoad.name(), "Storage Load");
    }

    #[test]
    fn test_global_profiler_is_shared() {
        assert!(std::ptr::eq(get_profiler(), get_profiler()));
    }
}
