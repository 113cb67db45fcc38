//! Scene parameters and world construction.

use bevy_ecs::prelude::{Resource, World};

use crate::analysis::CurrentAssessment;
use crate::camera::CameraStatsModel;
use crate::clock::{SimulationClock, FRAME_MS, ONE_SEC_MS};
use crate::spawn::SpawnModel;
use crate::stats::TrafficStats;
use crate::telemetry::{SceneFrame, SnapshotConfig, TrafficSnapshots};

const DEFAULT_CANVAS_WIDTH: f64 = 640.0;
const DEFAULT_CANVAS_HEIGHT: f64 = 360.0;
const DEFAULT_MAX_VEHICLES: usize = 3;
const DEFAULT_SPAWN_PROBABILITY: f64 = 0.015;
const DEFAULT_VEHICLE_SPEED: f64 = 1.0;

/// Which path drives the displayed statistics. The two are mutually
/// exclusive; a world is built for exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub enum SceneMode {
    Simulation,
    Camera,
}

/// Fixed per-scene configuration, shared by all systems.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SceneConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// At most this many vehicles live at once.
    pub max_vehicles: usize,
    /// Per-tick chance of spawning one vehicle while under the cap.
    pub spawn_probability: f64,
    /// Pixels per tick of downward movement.
    pub vehicle_speed: f64,
    pub frame_interval_ms: u64,
    pub camera_sample_interval_ms: u64,
}

/// Parameters for building a scene.
#[derive(Debug, Clone)]
pub struct SceneParams {
    pub mode: SceneMode,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub max_vehicles: usize,
    pub spawn_probability: f64,
    pub vehicle_speed: f64,
    pub frame_interval_ms: u64,
    pub camera_sample_interval_ms: u64,
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            mode: SceneMode::Simulation,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            max_vehicles: DEFAULT_MAX_VEHICLES,
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            vehicle_speed: DEFAULT_VEHICLE_SPEED,
            frame_interval_ms: FRAME_MS,
            camera_sample_interval_ms: ONE_SEC_MS,
            seed: None,
        }
    }
}

impl SceneParams {
    pub fn with_mode(mut self, mode: SceneMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_vehicles(mut self, max_vehicles: usize) -> Self {
        self.max_vehicles = max_vehicles;
        self
    }

    pub fn with_spawn_probability(mut self, probability: f64) -> Self {
        self.spawn_probability = probability;
        self
    }

    pub fn with_vehicle_speed(mut self, speed: f64) -> Self {
        self.vehicle_speed = speed;
        self
    }

    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    fn config(&self) -> SceneConfig {
        SceneConfig {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            max_vehicles: self.max_vehicles,
            spawn_probability: self.spawn_probability,
            vehicle_speed: self.vehicle_speed,
            frame_interval_ms: self.frame_interval_ms,
            camera_sample_interval_ms: self.camera_sample_interval_ms,
        }
    }
}

/// Populates a fresh world with every resource the scene schedule needs.
pub fn build_scene(world: &mut World, params: SceneParams) {
    log::info!(
        "building {:?} scene (cap {}, seed {:?})",
        params.mode,
        params.max_vehicles,
        params.seed
    );
    world.insert_resource(SimulationClock::default());
    world.insert_resource(params.config());
    world.insert_resource(params.mode);
    world.insert_resource(SpawnModel::new(params.seed));
    // Derive a distinct stream for the camera sampler so both models can
    // share one user-facing seed.
    world.insert_resource(CameraStatsModel::new(
        params.seed.map(|seed| seed ^ 0x5eed_cafe),
    ));
    world.insert_resource(TrafficStats::default());
    world.insert_resource(CurrentAssessment::default());
    world.insert_resource(SceneFrame::default());
    world.insert_resource(SnapshotConfig::default());
    world.insert_resource(TrafficSnapshots::default());
}
