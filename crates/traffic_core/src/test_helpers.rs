//! Deterministic scene driving for tests.

use bevy_ecs::prelude::{Schedule, World};

use crate::analysis::{Assessment, CurrentAssessment};
use crate::ecs::Vehicle;
use crate::runner::{initialize_scene, run_next_event, scene_schedule};
use crate::scene::{build_scene, SceneParams};
use crate::stats::TrafficStats;

/// A built scene plus its schedule, stepped one event at a time.
pub struct SceneHarness {
    pub world: World,
    pub schedule: Schedule,
}

impl SceneHarness {
    /// Builds and initializes a scene; the first step processes SceneStarted.
    pub fn new(params: SceneParams) -> Self {
        let mut world = World::new();
        build_scene(&mut world, params);
        initialize_scene(&mut world);
        Self {
            world,
            schedule: scene_schedule(),
        }
    }

    /// Processes the next pending event; `false` when none is queued.
    pub fn step(&mut self) -> bool {
        run_next_event(&mut self.world, &mut self.schedule)
    }

    /// Processes exactly `count` events, panicking if the queue runs dry.
    pub fn run_events(&mut self, count: usize) {
        for i in 0..count {
            assert!(self.step(), "event queue empty after {i} events");
        }
    }

    pub fn stats(&self) -> TrafficStats {
        *self
            .world
            .get_resource::<TrafficStats>()
            .expect("TrafficStats resource")
    }

    pub fn assessment(&self) -> Assessment {
        self.world
            .get_resource::<CurrentAssessment>()
            .expect("CurrentAssessment resource")
            .0
    }

    pub fn live_vehicle_count(&mut self) -> usize {
        self.world.query::<&Vehicle>().iter(&self.world).count()
    }
}
