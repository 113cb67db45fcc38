//! Control panel: mode buttons and scene parameters.

use eframe::egui;

use traffic_core::clock::SimulationClock;

use crate::app::{AppMode, TrafficApp};

pub fn render_control_panel(ui: &mut egui::Ui, app: &mut TrafficApp) {
    ui.horizontal(|ui| {
        if ui.button("Start Camera Feed").clicked() {
            app.start_camera();
        }
        if ui.button("Start Simulation").clicked() {
            app.start_simulation();
        }
        if ui
            .add_enabled(app.mode != AppMode::Idle, egui::Button::new("Stop"))
            .clicked()
        {
            app.stop();
        }
    });

    let scene_now_ms = app
        .world
        .get_resource::<SimulationClock>()
        .map(|clock| clock.now())
        .unwrap_or(0);
    ui.horizontal(|ui| {
        ui.label(format!("Mode: {}", mode_label(app.mode)));
        ui.label(format!("Scene time: {:.1}s", scene_now_ms as f64 / 1000.0));
        ui.label(format!("Events processed: {}", app.steps_executed));
    });

    egui::CollapsingHeader::new("Scene parameters")
        .default_open(false)
        .show(ui, |ui| {
            let can_edit = app.mode == AppMode::Idle;
            ui.horizontal(|ui| {
                ui.label("Vehicle cap");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut app.max_vehicles).range(1..=10),
                );
                ui.label("Spawn probability");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut app.spawn_probability)
                        .range(0.0..=1.0)
                        .speed(0.001),
                );
                ui.label("Speed (px/tick)");
                ui.add_enabled(
                    can_edit,
                    egui::DragValue::new(&mut app.vehicle_speed)
                        .range(0.5..=10.0)
                        .speed(0.1),
                );
            });
            ui.horizontal(|ui| {
                ui.add_enabled(can_edit, egui::Checkbox::new(&mut app.seed_enabled, "Seed"));
                ui.add_enabled(
                    can_edit && app.seed_enabled,
                    egui::DragValue::new(&mut app.seed_value).range(0..=u64::MAX),
                );
            });
        });
}

fn mode_label(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Idle => "Idle",
        AppMode::Simulation => "Simulation",
        AppMode::Camera => "Camera",
    }
}
