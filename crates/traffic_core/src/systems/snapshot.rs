use bevy_ecs::prelude::{Res, ResMut};

use crate::analysis::CurrentAssessment;
use crate::clock::SimulationClock;
use crate::stats::TrafficStats;
use crate::telemetry::{SnapshotConfig, TrafficSnapshot, TrafficSnapshots};

/// Appends the current statistics to the rolling history. Gated by the
/// runner's interval condition.
pub fn capture_snapshot_system(
    clock: Res<SimulationClock>,
    config: Res<SnapshotConfig>,
    stats: Res<TrafficStats>,
    assessment: Res<CurrentAssessment>,
    mut snapshots: ResMut<TrafficSnapshots>,
) {
    let now = clock.now();
    snapshots.snapshots.push_back(TrafficSnapshot {
        timestamp_ms: now,
        vehicle_count: stats.vehicle_count,
        longest_duration_secs: stats.longest_duration_secs,
        proximity: stats.proximity,
        severity: assessment.0.severity,
    });
    while snapshots.snapshots.len() > config.max_snapshots {
        snapshots.snapshots.pop_front();
    }
    snapshots.last_snapshot_at = Some(now);
}
