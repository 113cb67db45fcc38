use bevy_ecs::prelude::{Res, ResMut};

use crate::analysis::{assess, CurrentAssessment};
use crate::camera::CameraStatsModel;
use crate::clock::{CurrentEvent, EventKind, SimulationClock, ONE_SEC_MS};
use crate::scene::SceneConfig;
use crate::stats::{ProximitySummary, TrafficStats};

/// Camera-mode statistics: a fresh random reading once per interval. The
/// displayed duration is whole seconds of camera uptime.
pub fn camera_sample_system(
    mut clock: ResMut<SimulationClock>,
    config: Res<SceneConfig>,
    mut model: ResMut<CameraStatsModel>,
    mut stats: ResMut<TrafficStats>,
    mut assessment: ResMut<CurrentAssessment>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::CameraSample {
        return;
    }

    let reading = model.sample(config.max_vehicles);
    stats.vehicle_count = reading.vehicle_count;
    stats.longest_duration_secs = clock.now() / ONE_SEC_MS;
    stats.proximity = ProximitySummary::Bucket(reading.proximity);
    assessment.0 = assess(
        stats.vehicle_count,
        stats.longest_duration_secs,
        stats.proximity,
        config.max_vehicles,
    );

    clock.schedule_in(config.camera_sample_interval_ms, EventKind::CameraSample);
}
