//! Scene runner: advances the clock and routes events into the ECS.
//!
//! Each step pops the next event from [SimulationClock], inserts it as
//! [CurrentEvent], then runs the schedule. Systems filter on the event kind,
//! so one schedule serves both the simulation and camera paths.

use bevy_ecs::prelude::Res;
use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::systems::{
    camera_sample::camera_sample_system, despawn::despawn_exited_system,
    movement::movement_system, scene_started::scene_started_system,
    snapshot::capture_snapshot_system, spawner::vehicle_spawner_system, stats::stats_system,
};

fn is_scene_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SceneStarted)
        .unwrap_or(false)
}

fn is_tick(event: Option<Res<CurrentEvent>>) -> bool {
    event.map(|e| e.0.kind == EventKind::Tick).unwrap_or(false)
}

fn is_camera_sample(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CameraSample)
        .unwrap_or(false)
}

/// Condition: statistics-history capture interval has elapsed.
fn should_capture_snapshot(
    clock: Option<Res<SimulationClock>>,
    config: Option<Res<crate::telemetry::SnapshotConfig>>,
    snapshots: Option<Res<crate::telemetry::TrafficSnapshots>>,
) -> bool {
    let Some(clock) = clock else {
        return false;
    };
    let Some(config) = config else {
        return false;
    };
    let Some(snapshots) = snapshots else {
        return false;
    };

    let now = clock.now();
    match snapshots.last_snapshot_at {
        None => true,
        Some(last) => now.saturating_sub(last) >= config.interval_ms,
    }
}

/// Runs one scene step: pops the next event, inserts it as [CurrentEvent],
/// then runs the schedule. Returns `false` when no event is pending.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> bool {
    let event = match world.resource_mut::<SimulationClock>().pop_next() {
        Some(e) => e,
        None => return false,
    };
    world.insert_resource(CurrentEvent(event));
    schedule.run(world);
    true
}

/// Runs up to `max_steps` scene steps; returns the number executed. The tick
/// loop reschedules itself forever, so callers always bound their stepping.
pub fn run_steps(world: &mut World, schedule: &mut Schedule, max_steps: usize) -> usize {
    let mut steps = 0;
    while steps < max_steps && run_next_event(world, schedule) {
        steps += 1;
    }
    steps
}

/// Builds the scene schedule. The whole pipeline is chained, with
/// [apply_deferred] barriers so removals free capacity before the spawn roll
/// and fresh spawns move and count within the same tick; one event therefore
/// runs as an atomic unit. Event-kind conditions keep inactive systems out
/// of the way.
pub fn scene_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.add_systems(
        (
            scene_started_system.run_if(is_scene_started),
            despawn_exited_system.run_if(is_tick),
            apply_deferred,
            vehicle_spawner_system.run_if(is_tick),
            apply_deferred,
            movement_system.run_if(is_tick),
            stats_system.run_if(is_tick),
            camera_sample_system.run_if(is_camera_sample),
        )
            .chain(),
    );

    // History capture observes whatever the event just wrote, so it is
    // ordered after both writers and gated by its own interval condition.
    schedule.add_systems(
        capture_snapshot_system
            .run_if(should_capture_snapshot)
            .after(stats_system)
            .after(camera_sample_system),
    );

    schedule
}

/// Initializes a freshly built scene by scheduling the SceneStarted event at
/// time 0. Call after [crate::scene::build_scene], before stepping.
pub fn initialize_scene(world: &mut World) {
    let mut clock = world.resource_mut::<SimulationClock>();
    clock.schedule_at(0, EventKind::SceneStarted);
}
