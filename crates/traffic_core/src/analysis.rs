//! Heuristic traffic analysis: a pure classification of the displayed
//! statistics into a human-readable status line.

use bevy_ecs::prelude::Resource;

use crate::stats::{Proximity, ProximitySummary};

/// How alarming the current reading is; the UI maps this to a text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Ok,
    Warning,
    Alert,
}

/// One status line plus its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub text: &'static str,
    pub severity: Severity,
}

/// The assessment derived from the most recent statistics update.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentAssessment(pub Assessment);

impl Default for CurrentAssessment {
    fn default() -> Self {
        Self(Assessment {
            text: "No vehicles detected.",
            severity: Severity::Info,
        })
    }
}

/// Single-vehicle duration (secs) above which a Close vehicle is flagged as
/// a potential follower.
const FOLLOWER_SECS: u64 = 10;
/// Single-vehicle duration (secs) above which the reading is a warning.
const LINGERING_SECS: u64 = 5;
/// Duration (secs) above which a full scene reads as settled traffic flow.
const SETTLED_FLOW_SECS: u64 = 15;

/// Classifies the displayed statistics. Pure and stateless; the thresholds
/// are fixed, nothing is learned from data.
pub fn assess(
    vehicle_count: usize,
    longest_duration_secs: u64,
    proximity: ProximitySummary,
    max_vehicles: usize,
) -> Assessment {
    if vehicle_count == 0 {
        return Assessment {
            text: "No vehicles detected.",
            severity: Severity::Info,
        };
    }
    if vehicle_count == 1 {
        if longest_duration_secs >= FOLLOWER_SECS
            && proximity == ProximitySummary::Bucket(Proximity::Close)
        {
            return Assessment {
                text: "Potential consistent follower detected: one vehicle \
                       has been close for an extended period.",
                severity: Severity::Alert,
            };
        }
        if longest_duration_secs >= LINGERING_SECS {
            return Assessment {
                text: "One vehicle consistently behind. Monitoring...",
                severity: Severity::Warning,
            };
        }
        return Assessment {
            text: "One vehicle detected. Normal movement.",
            severity: Severity::Ok,
        };
    }
    if vehicle_count >= max_vehicles && longest_duration_secs >= SETTLED_FLOW_SECS {
        return Assessment {
            text: "Normal traffic flow. Multiple vehicles detected.",
            severity: Severity::Ok,
        };
    }
    Assessment {
        text: "Multiple vehicles detected. Traffic flow appears normal.",
        severity: Severity::Ok,
    }
}
