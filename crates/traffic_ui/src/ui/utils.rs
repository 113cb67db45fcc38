//! Small display helpers shared across the UI.

use eframe::egui::Color32;

use traffic_core::analysis::Severity;
use traffic_core::palette::Rgb;

use crate::ui::constants::{ALERT_COLOR, INFO_COLOR, OK_COLOR, WARNING_COLOR};

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => INFO_COLOR,
        Severity::Ok => OK_COLOR,
        Severity::Warning => WARNING_COLOR,
        Severity::Alert => ALERT_COLOR,
    }
}

pub fn body_color(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

/// Duration label as shown in the statistics panel, e.g. `12s`.
pub fn format_duration_secs(secs: u64) -> String {
    format!("{secs}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_label_has_the_seconds_suffix() {
        assert_eq!(format_duration_secs(0), "0s");
        assert_eq!(format_duration_secs(42), "42s");
    }

    #[test]
    fn severities_map_to_distinct_alarm_colors() {
        assert_eq!(severity_color(Severity::Alert), ALERT_COLOR);
        assert_eq!(severity_color(Severity::Ok), OK_COLOR);
        // Info and warning intentionally share the same amber.
        assert_eq!(severity_color(Severity::Info), severity_color(Severity::Warning));
    }

    #[test]
    fn body_color_preserves_the_palette_triple() {
        assert_eq!(body_color(Rgb(0xC0, 0xC0, 0xC0)), Color32::from_rgb(192, 192, 192));
    }
}
