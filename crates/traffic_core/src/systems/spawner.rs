use bevy_ecs::prelude::{Commands, Query, Res, ResMut, With};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::ecs::{BodyColor, Dimensions, LicensePlate, Position, Vehicle};
use crate::scene::SceneConfig;
use crate::spawn::SpawnModel;

/// Probabilistic vehicle entry: one spawn roll per tick while under the cap.
pub fn vehicle_spawner_system(
    mut commands: Commands,
    clock: Res<SimulationClock>,
    config: Res<SceneConfig>,
    mut spawn_model: ResMut<SpawnModel>,
    vehicles: Query<(), With<Vehicle>>,
    event: Res<CurrentEvent>,
) {
    if event.0.kind != EventKind::Tick {
        return;
    }
    if vehicles.iter().count() >= config.max_vehicles {
        return;
    }
    if !spawn_model.roll_spawn(config.spawn_probability) {
        return;
    }

    let seed = spawn_model.sample_vehicle(config.canvas_width);
    log::debug!("vehicle {} entering at x {:.0}", seed.plate, seed.x);
    commands.spawn((
        Vehicle {
            entered_at: clock.now(),
        },
        Position {
            x: seed.x,
            y: seed.y,
        },
        Dimensions {
            width: seed.width,
            height: seed.height,
        },
        BodyColor(seed.color),
        LicensePlate(seed.plate),
    ));
}
