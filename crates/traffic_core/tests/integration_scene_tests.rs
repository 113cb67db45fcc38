use traffic_core::palette::CAR_COLORS;
use traffic_core::plate::is_valid_plate;
use traffic_core::scene::SceneParams;
use traffic_core::telemetry::{SceneFrame, TrafficSnapshots};
use traffic_core::test_helpers::SceneHarness;

#[test]
fn spawned_vehicles_respect_the_geometry_bounds() {
    let mut harness = SceneHarness::new(
        SceneParams::default()
            .with_seed(99)
            .with_spawn_probability(1.0),
    );
    harness.run_events(1 + 50);

    let frame = harness
        .world
        .get_resource::<SceneFrame>()
        .expect("scene frame");
    assert!(!frame.vehicles.is_empty());
    for vehicle in &frame.vehicles {
        assert!((0.0..=570.0).contains(&vehicle.x));
        assert!((70.0..100.0).contains(&vehicle.width));
        assert!((80.0..120.0).contains(&vehicle.height));
        assert!(CAR_COLORS.contains(&vehicle.color));
        assert!(is_valid_plate(&vehicle.plate), "bad plate {}", vehicle.plate);
    }
}

#[test]
fn history_rows_are_captured_at_the_configured_interval() {
    let mut harness = SceneHarness::new(SceneParams::default().with_seed(4));
    // 200 ticks cover a little over three seconds of scene time.
    harness.run_events(1 + 200);

    let history = harness
        .world
        .get_resource::<TrafficSnapshots>()
        .expect("history");
    assert!(history.snapshots.len() >= 3);
    let times: Vec<u64> = history.snapshots.iter().map(|s| s.timestamp_ms).collect();
    for pair in times.windows(2) {
        assert!(pair[1] - pair[0] >= 1000, "rows too close: {times:?}");
    }
    assert_eq!(history.last_snapshot_at, times.last().copied());
}

#[test]
fn history_is_bounded_by_the_rolling_cap() {
    let mut harness = SceneHarness::new(SceneParams::default().with_seed(4));
    {
        let mut config = harness
            .world
            .resource_mut::<traffic_core::telemetry::SnapshotConfig>();
        config.interval_ms = 16;
        config.max_snapshots = 10;
    }
    harness.run_events(1 + 500);

    let history = harness
        .world
        .get_resource::<TrafficSnapshots>()
        .expect("history");
    assert_eq!(history.snapshots.len(), 10);
}

#[test]
fn a_quiet_scene_reports_idle_statistics() {
    let mut harness = SceneHarness::new(
        SceneParams::default()
            .with_seed(0)
            .with_spawn_probability(0.0),
    );
    harness.run_events(1 + 100);

    let stats = harness.stats();
    assert_eq!(stats.vehicle_count, 0);
    assert_eq!(stats.longest_duration_secs, 0);
    assert_eq!(stats.proximity.label(), "N/A");
    assert_eq!(harness.assessment().text, "No vehicles detected.");
}
