//! Randomized vehicle creation. All randomness for the simulation path goes
//! through [SpawnModel] so a fixed seed reproduces an identical scene.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::palette::{Rgb, CAR_COLORS};
use crate::plate::random_plate;

/// Vehicles enter above the canvas and fall into view.
pub const SPAWN_Y: f64 = -80.0;

/// Horizontal span reserved on the right so the widest body still fits.
const SPAWN_X_MARGIN: f64 = 70.0;

const MIN_WIDTH: f64 = 70.0;
const MAX_WIDTH: f64 = 100.0;
const MIN_HEIGHT: f64 = 80.0;
const MAX_HEIGHT: f64 = 120.0;

/// Everything randomized at vehicle creation, in one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSeed {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub plate: String,
}

#[derive(Resource)]
pub struct SpawnModel {
    rng: StdRng,
}

impl SpawnModel {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// One per-tick spawn roll.
    pub fn roll_spawn(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Draws the geometry, body color, and plate for a new vehicle.
    pub fn sample_vehicle(&mut self, canvas_width: f64) -> VehicleSeed {
        let x_span = (canvas_width - SPAWN_X_MARGIN).max(0.0);
        VehicleSeed {
            x: self.rng.gen_range(0.0..=x_span),
            y: SPAWN_Y,
            width: self.rng.gen_range(MIN_WIDTH..MAX_WIDTH),
            height: self.rng.gen_range(MIN_HEIGHT..MAX_HEIGHT),
            color: CAR_COLORS[self.rng.gen_range(0..CAR_COLORS.len())],
            plate: random_plate(&mut self.rng),
        }
    }
}
