//! Dashboard: viewing surface, statistics, analysis line, and history plot.

use eframe::egui::{self, Color32, RichText, Vec2};
use egui_plot::{Line, Plot};

use traffic_core::scene::SceneConfig;
use traffic_core::stats::TrafficStats;
use traffic_core::telemetry::{SceneFrame, TrafficSnapshots};

use crate::app::{AppMode, TrafficApp};
use crate::ui::constants::{
    ACTIVE_COLOR, ALERT_COLOR, CAMERA_WAITING_MESSAGE, IDLE_MESSAGE, INFO_COLOR,
};
use crate::ui::rendering::draw_scene;
use crate::ui::utils::{format_duration_secs, severity_color};

pub fn render_dashboard(ui: &mut egui::Ui, app: &mut TrafficApp) {
    render_surface(ui, app);
    ui.add_space(8.0);
    render_statistics(ui, app);
    ui.add_space(8.0);
    render_analysis(ui, app);
    ui.add_space(8.0);
    render_history(ui, app);
}

/// The viewing surface: simulated scene, live camera frame, or an empty
/// placeholder while idle.
fn render_surface(ui: &mut egui::Ui, app: &TrafficApp) {
    ui.group(|ui| {
        let Some(config) = app.world.get_resource::<SceneConfig>() else {
            return;
        };
        let width = ui.available_width().min(760.0);
        let height = width * (config.canvas_height / config.canvas_width) as f32;
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        match app.mode {
            AppMode::Simulation => {
                if let Some(frame) = app.world.get_resource::<SceneFrame>() {
                    draw_scene(&painter, rect, frame, config);
                }
            }
            AppMode::Camera => {
                if let Some(texture) = &app.camera_texture {
                    painter.image(
                        texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                } else {
                    painter.rect_filled(rect, 0.0, Color32::from_gray(12));
                }
            }
            AppMode::Idle => {
                painter.rect_filled(rect, 0.0, Color32::from_gray(12));
            }
        }
    });
}

fn render_statistics(ui: &mut egui::Ui, app: &TrafficApp) {
    let Some(stats) = app.world.get_resource::<TrafficStats>() else {
        return;
    };
    ui.group(|ui| {
        ui.heading("Detection Statistics");
        egui::Grid::new("traffic_stats").striped(true).show(ui, |ui| {
            ui.label("Number of vehicles");
            ui.label(stats.vehicle_count.to_string());
            ui.end_row();
            ui.label("Longest tracked duration");
            ui.label(format_duration_secs(stats.longest_duration_secs));
            ui.end_row();
            ui.label("Most frequent proximity");
            ui.label(stats.proximity.label());
            ui.end_row();
        });
    });
}

fn render_analysis(ui: &mut egui::Ui, app: &TrafficApp) {
    let (text, color) = analysis_line(app);
    ui.group(|ui| {
        ui.heading("Analysis");
        ui.label(RichText::new(text).color(color).strong());
    });
}

/// The status line mirrors whichever state the app is in: error, idle
/// prompt, camera warm-up, or the live assessment.
fn analysis_line(app: &TrafficApp) -> (String, Color32) {
    if let Some(error) = &app.camera_error {
        return (error.clone(), ALERT_COLOR);
    }
    match app.mode {
        AppMode::Idle => (IDLE_MESSAGE.to_string(), INFO_COLOR),
        AppMode::Camera if !app.camera_started => {
            (CAMERA_WAITING_MESSAGE.to_string(), ACTIVE_COLOR)
        }
        _ => {
            let assessment = app
                .world
                .get_resource::<traffic_core::analysis::CurrentAssessment>()
                .map(|current| current.0)
                .unwrap_or_else(|| traffic_core::analysis::CurrentAssessment::default().0);
            (
                assessment.text.to_string(),
                severity_color(assessment.severity),
            )
        }
    }
}

fn render_history(ui: &mut egui::Ui, app: &TrafficApp) {
    let Some(history) = app.world.get_resource::<TrafficSnapshots>() else {
        return;
    };
    let mut vehicle_counts = Vec::with_capacity(history.snapshots.len());
    let mut durations = Vec::with_capacity(history.snapshots.len());
    for snapshot in history.snapshots.iter() {
        let t = snapshot.timestamp_ms as f64 / 1000.0;
        vehicle_counts.push([t, snapshot.vehicle_count as f64]);
        durations.push([t, snapshot.longest_duration_secs as f64]);
    }

    ui.group(|ui| {
        ui.heading("History");
        Plot::new("traffic_history")
            .height(180.0)
            .x_axis_formatter(|mark, _range| format!("{:.0}s", mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Vehicles", vehicle_counts.clone())
                        .color(Color32::from_rgb(80, 140, 255)),
                );
                plot_ui.line(
                    Line::new("Longest duration (s)", durations.clone())
                        .color(Color32::from_rgb(255, 140, 0)),
                );
            });
    });
}
