// Integration tests for the countdown core: decomposition, the refresh
// loop, configuration, and session persistence working together.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use countdown_rings::models::breakdown::{TimeBreakdown, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
use countdown_rings::models::target::CountdownTarget;
use countdown_rings::services::clock::FixedClock;
use countdown_rings::services::config::AppConfig;
use countdown_rings::services::countdown::{spawn_refresh, CountdownService};
use countdown_rings::services::session::{load_session, save_session, SessionState, WindowGeometry};
use pretty_assertions::assert_eq;

#[test]
fn test_configured_target_drives_the_countdown() {
    let config = AppConfig {
        target: "2026-07-01T09:00:00+02:00".to_string(),
        destination: Some("Berlin".to_string()),
        ..AppConfig::default()
    };

    let target = config.target();
    assert!(target.is_parsed());

    let two_days_before = target.instant_ms() - 2 * MS_PER_DAY - 90 * MS_PER_MINUTE;
    let mut service = CountdownService::new(target, FixedClock(two_days_before));

    let breakdown = service.refresh();
    assert_eq!(breakdown.days, 2);
    assert_eq!(breakdown.hours, 1);
    assert_eq!(breakdown.minutes, 30);
    assert_eq!(breakdown.seconds, 0);
    assert!(!service.is_arrived());
}

#[test]
fn test_bad_target_fails_soft_into_arrived_display() {
    let config = AppConfig {
        target: "sometime in october".to_string(),
        ..AppConfig::default()
    };

    let target = config.target();
    assert!(!target.is_parsed());
    // The raw value stands in for the formatted date
    assert_eq!(target.human_readable(), "sometime in october");

    // The countdown still runs on the fallback instant and shows arrived
    let mut service = CountdownService::new(target, FixedClock(1_000_000_000));
    let breakdown = service.refresh();
    assert_eq!(breakdown, TimeBreakdown::default());
    assert!(service.is_arrived());
}

#[test]
fn test_refresh_loop_publishes_into_a_shared_slot() {
    let target_ms = 10 * MS_PER_HOUR;
    let now_ms = 7 * MS_PER_HOUR;

    let slot = Arc::new(Mutex::new(TimeBreakdown::default()));
    let ticks = Arc::new(AtomicUsize::new(0));

    let sink_slot = Arc::clone(&slot);
    let sink_ticks = Arc::clone(&ticks);
    let handle = spawn_refresh(
        target_ms,
        FixedClock(now_ms),
        Duration::from_millis(5),
        move |breakdown| {
            *sink_slot.lock().unwrap() = breakdown;
            sink_ticks.fetch_add(1, Ordering::SeqCst);
        },
    );

    let deadline = Instant::now() + Duration::from_secs(2);
    while ticks.load(Ordering::SeqCst) < 3 {
        assert!(Instant::now() < deadline, "refresh loop never ticked");
        std::thread::sleep(Duration::from_millis(2));
    }
    handle.stop();

    let published = *slot.lock().unwrap();
    assert_eq!(published.hours, 3);
    assert_eq!(published.total_remaining_ms, 3 * MS_PER_HOUR);

    // Deterministic cancellation: nothing is published after stop
    let after_stop = ticks.load(Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(ticks.load(Ordering::SeqCst), after_stop);
}

#[test]
fn test_named_zone_and_offset_agree() {
    let via_zone = CountdownTarget::parse("2026-03-01T08:00:00", Some("America/Toronto"), None);
    let via_offset = CountdownTarget::parse("2026-03-01T08:00:00-05:00", None, None);

    assert!(via_zone.is_parsed());
    assert_eq!(via_zone.instant_ms(), via_offset.instant_ms());
}

#[test]
fn test_session_state_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    // First run saves its window placement
    {
        let session = SessionState {
            window_geometry: Some(WindowGeometry {
                x: 200.0,
                y: 140.0,
                width: 800.0,
                height: 600.0,
            }),
        };
        save_session(&path, &session).unwrap();
    }

    // Second run restores it
    {
        let loaded = load_session(&path).unwrap();
        let geometry = loaded.window_geometry.unwrap();
        assert!(geometry.is_plausible());
        assert_eq!(geometry.width, 800.0);
        assert_eq!(geometry.x, 200.0);
    }
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countdown.toml");

    let config = AppConfig {
        target: "2026-12-31T23:59:59Z".to_string(),
        timezone: None,
        destination: Some("Reykjavik".to_string()),
        title: "New year".to_string(),
        theme: "dark".to_string(),
    };
    std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}
