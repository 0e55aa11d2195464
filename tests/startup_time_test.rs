//! Startup time tests
//!
//! Verifies that loading everything the window needs (bundled catalog, storage,
//! favorites and theme) stays well inside the startup budget, and that the
//! profiler reports the phases it was given.

use appportal::config::PortalConfig;
use appportal::controller::PortalController;
use appportal::utils::FixedThemeProbe;
use appportal::utils::SystemLinkOpener;
use appportal::utils::startup_profiler::{StartupPhase, StartupProfiler};
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_profiler_records_phases_in_order() {
    let profiler = StartupProfiler::new();
    assert!(profiler.timings().is_empty());

    profiler.record_phase(StartupPhase::AppStart);
    std::thread::sleep(Duration::from_millis(5));
    profiler.record_phase(StartupPhase::ConfigLoad);
    profiler.record_phase(StartupPhase::AppReady);

    let phases: Vec<StartupPhase> = profiler.timings().iter().map(|t| t.phase).collect();
    assert_eq!(
        phases,
        [
            StartupPhase::AppStart,
            StartupPhase::ConfigLoad,
            StartupPhase::AppReady
        ]
    );
    assert!(profiler.timings()[1].duration >= Duration::from_millis(5));
    assert!(profiler.total_startup_time() >= Duration::from_millis(5));
}

#[test]
fn test_phase_durations_sum_within_total() {
    let profiler = StartupProfiler::new();
    for phase in [
        StartupPhase::AppStart,
        StartupPhase::LoggingInit,
        StartupPhase::CatalogLoad,
        StartupPhase::StorageLoad,
        StartupPhase::GuiInit,
    ] {
        std::thread::sleep(Duration::from_millis(1));
        profiler.record_phase(phase);
    }

    let summed: Duration = profiler.timings().iter().map(|t| t.duration).sum();
    assert!(summed <= profiler.total_startup_time());
}

#[test]
fn test_portal_loads_quickly() {
    let data_dir = TempDir::new().unwrap();

    let start = Instant::now();
    let portal = PortalController::open(
        &PortalConfig::default(),
        data_dir.path(),
        &FixedThemeProbe(None),
        Box::new(SystemLinkOpener),
    )
    .unwrap();
    let view = portal.view();
    let elapsed = start.elapsed();

    assert!(!view.cards.is_empty());
    // Generous bound so slow CI machines do not flake
    assert!(
        elapsed < Duration::from_secs(2),
        "portal load took {elapsed:?}"
    );
}
