pub mod analysis;
pub mod camera;
pub mod clock;
pub mod ecs;
pub mod palette;
pub mod plate;
pub mod runner;
pub mod scene;
pub mod spawn;
pub mod stats;
pub mod systems;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
