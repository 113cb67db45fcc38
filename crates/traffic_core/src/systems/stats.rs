use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::analysis::{assess, CurrentAssessment};
use crate::clock::{CurrentEvent, EventKind, SimulationClock, ONE_SEC_MS};
use crate::ecs::{BodyColor, Dimensions, LicensePlate, Position, Vehicle};
use crate::scene::SceneConfig;
use crate::stats::{classify_proximity, ProximityCounts, TrafficStats};
use crate::telemetry::{SceneFrame, VehicleSnapshot};

/// Closes out each tick: recomputes the displayed statistics and analysis
/// from post-movement positions, publishes the render frame, and schedules
/// the next tick.
pub fn stats_system(
    mut clock: ResMut<SimulationClock>,
    config: Res<SceneConfig>,
    vehicles: Query<(&Vehicle, &Position, &Dimensions, &BodyColor, &LicensePlate)>,
    mut stats: ResMut<TrafficStats>,
    mut assessment: ResMut<CurrentAssessment>,
    mut frame: ResMut<SceneFrame>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::Tick {
        return;
    }

    let now = clock.now();
    let mut longest_duration_secs = 0;
    let mut counts = ProximityCounts::default();
    let mut snapshots = Vec::new();

    for (vehicle, position, dimensions, color, plate) in &vehicles {
        let duration_secs = now.saturating_sub(vehicle.entered_at) / ONE_SEC_MS;
        longest_duration_secs = longest_duration_secs.max(duration_secs);
        counts.add(classify_proximity(position.y, config.canvas_height));
        snapshots.push(VehicleSnapshot {
            x: position.x,
            y: position.y,
            width: dimensions.width,
            height: dimensions.height,
            color: color.0,
            plate: plate.0.clone(),
            entered_at: vehicle.entered_at,
        });
    }

    stats.vehicle_count = snapshots.len();
    stats.longest_duration_secs = longest_duration_secs;
    stats.proximity = counts.most_frequent(snapshots.len());
    assessment.0 = assess(
        stats.vehicle_count,
        stats.longest_duration_secs,
        stats.proximity,
        config.max_vehicles,
    );
    frame.vehicles = snapshots;

    clock.schedule_in(config.frame_interval_ms, EventKind::Tick);
}
