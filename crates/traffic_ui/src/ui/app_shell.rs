use std::time::{Duration, Instant};

use eframe::egui;

use crate::app::{AppMode, TrafficApp};
use crate::ui::controls::render_control_panel;
use crate::ui::dashboard::render_dashboard;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tailwatch Traffic Monitor",
        options,
        Box::new(|_cc| Ok(Box::new(TrafficApp::new()))),
    )
}

impl eframe::App for TrafficApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_camera(ctx);

        if self.mode != AppMode::Idle {
            let now = Instant::now();
            let last = self.last_frame_instant.unwrap_or(now);
            let mut delta_secs = now.saturating_duration_since(last).as_secs_f64();
            if delta_secs <= 0.0 {
                delta_secs = 0.016;
            }
            self.last_frame_instant = Some(now);
            self.sim_budget_ms += delta_secs * 1000.0;
            self.advance_by_budget();
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            render_control_panel(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_dashboard(ui, self);
        });
    }
}
