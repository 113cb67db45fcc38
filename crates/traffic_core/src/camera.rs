//! Fabricated statistics for camera mode.
//!
//! The camera path never inspects frame pixels; once per second it draws a
//! vehicle count and a proximity bucket at random and feeds them into the
//! same displayed statistics the simulation path uses.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::stats::Proximity;

/// One fabricated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraReading {
    pub vehicle_count: usize,
    pub proximity: Proximity,
}

#[derive(Resource)]
pub struct CameraStatsModel {
    rng: StdRng,
}

impl CameraStatsModel {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Uniform count in `[0, max_vehicles]` and a uniform proximity bucket.
    pub fn sample(&mut self, max_vehicles: usize) -> CameraReading {
        const BUCKETS: [Proximity; 3] = [Proximity::Close, Proximity::Medium, Proximity::Far];
        CameraReading {
            vehicle_count: self.rng.gen_range(0..=max_vehicles),
            proximity: BUCKETS[self.rng.gen_range(0..BUCKETS.len())],
        }
    }
}
