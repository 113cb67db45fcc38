//! Fixed UI strings and status colors.

use eframe::egui::Color32;

pub const IDLE_MESSAGE: &str = "Press \"Start Camera Feed\" or \"Start Simulation\" to begin.";

pub const CAMERA_WAITING_MESSAGE: &str =
    "Camera feed active. Visualizing conceptual vehicle data... (no real detection)";

pub const CAMERA_ERROR_MESSAGE: &str =
    "Error: Could not access camera. Make sure permissions are granted.";

pub const INFO_COLOR: Color32 = Color32::from_rgb(0xFF, 0xB8, 0x6C);
pub const OK_COLOR: Color32 = Color32::from_rgb(0x50, 0xFA, 0x7B);
pub const WARNING_COLOR: Color32 = Color32::from_rgb(0xFF, 0xB8, 0x6C);
pub const ALERT_COLOR: Color32 = Color32::from_rgb(0xFF, 0x55, 0x55);
pub const ACTIVE_COLOR: Color32 = Color32::from_rgb(0x8B, 0xE9, 0xFD);
