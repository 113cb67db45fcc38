use bevy_ecs::prelude::Component;

use crate::palette::Rgb;

/// A simulated vehicle. Everything except position is fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct Vehicle {
    /// Simulation time (ms) when the vehicle entered the scene; on-screen
    /// duration is derived from it, never stored.
    pub entered_at: u64,
}

/// Top-left corner in canvas coordinates. Vehicles start above the canvas
/// (negative y) and fall downward.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct BodyColor(pub Rgb);

/// Synthetic plate string, three letters, a dash, three digits.
#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct LicensePlate(pub String);
