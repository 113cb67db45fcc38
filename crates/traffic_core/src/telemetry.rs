//! Render-state and statistics-history snapshots consumed by the UI.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::analysis::Severity;
use crate::palette::Rgb;
use crate::stats::ProximitySummary;

/// Snapshot of one vehicle for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub plate: String,
    pub entered_at: u64,
}

/// Per-tick render state. Rewritten in full on every tick so the UI never
/// reads a half-updated scene.
#[derive(Debug, Default, Resource)]
pub struct SceneFrame {
    pub vehicles: Vec<VehicleSnapshot>,
}

/// One row of the statistics history.
#[derive(Debug, Clone, Copy)]
pub struct TrafficSnapshot {
    pub timestamp_ms: u64,
    pub vehicle_count: usize,
    pub longest_duration_secs: u64,
    pub proximity: ProximitySummary,
    pub severity: Severity,
}

/// Snapshot capture configuration.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SnapshotConfig {
    pub interval_ms: u64,
    pub max_snapshots: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            max_snapshots: 600,
        }
    }
}

/// Rolling statistics history, in memory only.
#[derive(Debug, Default, Resource)]
pub struct TrafficSnapshots {
    pub snapshots: VecDeque<TrafficSnapshot>,
    pub last_snapshot_at: Option<u64>,
}
