use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::scene::{SceneConfig, SceneMode};

/// Kicks off the active path: the first animation tick fires immediately,
/// the first camera sample after one full interval.
pub fn scene_started_system(
    mut clock: ResMut<SimulationClock>,
    mode: Res<SceneMode>,
    config: Res<SceneConfig>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::SceneStarted {
        return;
    }

    match *mode {
        SceneMode::Simulation => {
            log::info!("simulation started");
            clock.schedule_in(0, EventKind::Tick);
        }
        SceneMode::Camera => {
            log::info!("camera statistics sampler started");
            clock.schedule_in(config.camera_sample_interval_ms, EventKind::CameraSample);
        }
    }
}
