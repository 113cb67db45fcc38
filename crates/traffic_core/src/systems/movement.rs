use bevy_ecs::prelude::{Query, Res, With};

use crate::clock::{CurrentEvent, EventKind};
use crate::ecs::{Position, Vehicle};
use crate::scene::SceneConfig;

/// Advances every vehicle one speed step down the canvas.
pub fn movement_system(
    config: Res<SceneConfig>,
    mut vehicles: Query<&mut Position, With<Vehicle>>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::Tick {
        return;
    }

    for mut position in &mut vehicles {
        position.y += config.vehicle_speed;
    }
}
