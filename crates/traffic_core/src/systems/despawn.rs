use bevy_ecs::prelude::{Commands, Entity, Query, Res, With};

use crate::clock::{CurrentEvent, EventKind};
use crate::ecs::{Dimensions, Position, Vehicle};
use crate::scene::SceneConfig;

/// Drops vehicles that have fully left the bottom of the canvas. Runs at the
/// start of each tick, so a vehicle is visible on the tick it reaches the
/// exit line and gone on the next.
pub fn despawn_exited_system(
    mut commands: Commands,
    config: Res<SceneConfig>,
    vehicles: Query<(Entity, &Position, &Dimensions), With<Vehicle>>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::Tick {
        return;
    }

    for (entity, position, dimensions) in &vehicles {
        if position.y >= config.canvas_height + dimensions.height {
            log::debug!("vehicle exited at y {:.0}", position.y);
            commands.entity(entity).despawn();
        }
    }
}
