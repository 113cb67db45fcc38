//! Scene canvas painting.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};

use traffic_core::scene::SceneConfig;
use traffic_core::telemetry::{SceneFrame, VehicleSnapshot};

use crate::ui::utils::body_color;

const PLATE_MAX_WIDTH: f64 = 60.0;
const PLATE_MAX_HEIGHT: f64 = 20.0;
const PLATE_BOTTOM_MARGIN: f64 = 5.0;
const PLATE_MIN_FONT: f64 = 8.0;

/// Maps scene coordinates (canvas units) onto a screen rectangle.
#[derive(Debug, Clone, Copy)]
pub struct SceneProjection {
    rect: Rect,
    scale_x: f32,
    scale_y: f32,
}

impl SceneProjection {
    pub fn new(rect: Rect, config: &SceneConfig) -> Self {
        Self {
            rect,
            scale_x: rect.width() / config.canvas_width as f32,
            scale_y: rect.height() / config.canvas_height as f32,
        }
    }

    pub fn point(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(
            self.rect.left() + x as f32 * self.scale_x,
            self.rect.top() + y as f32 * self.scale_y,
        )
    }

    pub fn rect(&self, x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::from_min_size(
            self.point(x, y),
            Vec2::new(
                width as f32 * self.scale_x,
                height as f32 * self.scale_y,
            ),
        )
    }

    fn font_px(&self, scene_px: f64) -> f32 {
        scene_px as f32 * self.scale_y
    }
}

/// Plate rectangle and font size in scene units, or `None` when the plate
/// would not fit on the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_px: f64,
}

/// Positions the plate near the bottom of the body, centered. The plate is
/// drawn only when it lands in the lower half of the body.
pub fn plate_layout(x: f64, y: f64, width: f64, height: f64) -> Option<PlateLayout> {
    let plate_width = (width * 0.8).min(PLATE_MAX_WIDTH);
    let plate_height = (height * 0.2).min(PLATE_MAX_HEIGHT);
    let plate_x = x + (width - plate_width) / 2.0;
    let plate_y = y + height - plate_height - PLATE_BOTTOM_MARGIN;
    if plate_y <= y + height / 2.0 {
        return None;
    }
    Some(PlateLayout {
        x: plate_x,
        y: plate_y,
        width: plate_width,
        height: plate_height,
        font_px: (plate_height * 0.7).max(PLATE_MIN_FONT),
    })
}

/// Paints the whole simulated scene: road background plus every vehicle in
/// the current frame.
pub fn draw_scene(
    painter: &egui::Painter,
    rect: Rect,
    frame: &SceneFrame,
    config: &SceneConfig,
) {
    painter.rect_filled(rect, 0.0, Color32::BLACK);
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(1.0, Color32::from_gray(60)),
        StrokeKind::Middle,
    );

    let projection = SceneProjection::new(rect, config);
    for vehicle in &frame.vehicles {
        draw_vehicle(painter, &projection, vehicle);
    }
}

fn draw_vehicle(painter: &egui::Painter, projection: &SceneProjection, vehicle: &VehicleSnapshot) {
    let body = projection.rect(vehicle.x, vehicle.y, vehicle.width, vehicle.height);
    painter.rect_filled(body, 0.0, body_color(vehicle.color));
    painter.rect_stroke(
        body,
        0.0,
        Stroke::new(2.0, Color32::WHITE),
        StrokeKind::Middle,
    );

    let Some(plate) = plate_layout(vehicle.x, vehicle.y, vehicle.width, vehicle.height) else {
        return;
    };
    let plate_rect = projection.rect(plate.x, plate.y, plate.width, plate.height);
    painter.rect_filled(plate_rect, 0.0, Color32::from_rgb(0xF0, 0xF0, 0xF0));
    painter.rect_stroke(
        plate_rect,
        0.0,
        Stroke::new(1.0, Color32::from_gray(51)),
        StrokeKind::Middle,
    );
    painter.text(
        plate_rect.center(),
        Align2::CENTER_CENTER,
        &vehicle.plate,
        FontId::monospace(projection.font_px(plate.font_px)),
        Color32::BLACK,
    );
}
