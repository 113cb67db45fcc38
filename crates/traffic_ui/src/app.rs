//! Application state and lifecycle for the traffic monitor UI.

pub mod camera;

use std::time::Instant;

use bevy_ecs::prelude::World;
use eframe::egui;

use traffic_core::clock::SimulationClock;
use traffic_core::runner::{initialize_scene, run_next_event, scene_schedule};
use traffic_core::scene::{build_scene, SceneMode, SceneParams};

use crate::app::camera::{CameraEvent, CameraFeed};
use crate::ui::constants::CAMERA_ERROR_MESSAGE;

/// Which path is currently running. The two active modes are mutually
/// exclusive; switching always goes through [TrafficApp::stop].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Simulation,
    Camera,
}

/// Main application state for the traffic monitor.
pub struct TrafficApp {
    pub world: World,
    pub schedule: bevy_ecs::schedule::Schedule,
    pub mode: AppMode,
    pub steps_executed: usize,
    pub sim_budget_ms: f64,
    pub last_frame_instant: Option<Instant>,
    pub max_vehicles: usize,
    pub spawn_probability: f64,
    pub vehicle_speed: f64,
    pub seed_enabled: bool,
    pub seed_value: u64,
    pub camera: Option<CameraFeed>,
    /// Set once the first camera frame arrives and the sampler is running.
    pub camera_started: bool,
    pub camera_texture: Option<egui::TextureHandle>,
    pub camera_error: Option<String>,
}

impl TrafficApp {
    pub fn new() -> Self {
        let max_vehicles = 3;
        let spawn_probability = 0.015;
        let vehicle_speed = 1.0;
        let seed_enabled = false;
        let seed_value = 123;

        // The idle world exists so the dashboard always has default
        // statistics to show; it is never stepped.
        let mut world = World::new();
        build_scene(&mut world, SceneParams::default());
        let schedule = scene_schedule();

        Self {
            world,
            schedule,
            mode: AppMode::Idle,
            steps_executed: 0,
            sim_budget_ms: 0.0,
            last_frame_instant: None,
            max_vehicles,
            spawn_probability,
            vehicle_speed,
            seed_enabled,
            seed_value,
            camera: None,
            camera_started: false,
            camera_texture: None,
            camera_error: None,
        }
    }

    /// Scene parameters from the current UI state.
    pub fn current_params(&self, mode: SceneMode) -> SceneParams {
        let mut params = SceneParams::default()
            .with_mode(mode)
            .with_max_vehicles(self.max_vehicles)
            .with_spawn_probability(self.spawn_probability)
            .with_vehicle_speed(self.vehicle_speed);
        if self.seed_enabled {
            params = params.with_seed(self.seed_value);
        }
        params
    }

    /// Starts the synthetic animation, tearing down whatever ran before.
    pub fn start_simulation(&mut self) {
        self.stop();
        log::info!("starting simulation mode");
        let mut world = World::new();
        build_scene(&mut world, self.current_params(SceneMode::Simulation));
        initialize_scene(&mut world);
        self.world = world;
        self.schedule = scene_schedule();
        self.mode = AppMode::Simulation;
        self.steps_executed = 0;
        self.sim_budget_ms = 0.0;
        self.last_frame_instant = Some(Instant::now());
    }

    /// Starts the camera passthrough, tearing down whatever ran before. The
    /// fabricated-statistics sampler only begins once the first frame
    /// arrives (see [TrafficApp::poll_camera]); until then the scene clock
    /// holds no events.
    pub fn start_camera(&mut self) {
        self.stop();
        log::info!("starting camera mode");
        let mut world = World::new();
        build_scene(&mut world, self.current_params(SceneMode::Camera));
        self.world = world;
        self.schedule = scene_schedule();
        self.mode = AppMode::Camera;
        self.steps_executed = 0;
        self.sim_budget_ms = 0.0;
        self.camera = Some(CameraFeed::start());
    }

    /// Stops whichever mode is active: joins the capture thread, cancels
    /// every pending clock event, then rebuilds an idle world so the
    /// displayed statistics fall back to their defaults.
    pub fn stop(&mut self) {
        if let Some(feed) = self.camera.take() {
            log::info!("releasing camera feed");
            feed.stop();
        }
        if let Some(mut clock) = self.world.get_resource_mut::<SimulationClock>() {
            clock.clear();
        }
        let mut world = World::new();
        build_scene(&mut world, SceneParams::default());
        self.world = world;
        self.schedule = scene_schedule();
        self.mode = AppMode::Idle;
        self.steps_executed = 0;
        self.sim_budget_ms = 0.0;
        self.last_frame_instant = None;
        self.camera_started = false;
        self.camera_texture = None;
        self.camera_error = None;
    }

    /// Drains capture-thread events: keeps the newest frame as the display
    /// texture, starts the sampler on the first frame, and falls back to
    /// idle with the fixed error message when the device fails.
    pub fn poll_camera(&mut self, ctx: &egui::Context) {
        let Some(feed) = self.camera.as_ref() else {
            return;
        };

        let mut latest_frame = None;
        let mut error = None;
        for event in feed.drain() {
            match event {
                CameraEvent::Frame(image) => latest_frame = Some(image),
                CameraEvent::Error(message) => {
                    error = Some(message);
                    break;
                }
            }
        }

        if let Some(message) = error {
            log::warn!("camera failure: {message}");
            self.stop();
            self.camera_error = Some(CAMERA_ERROR_MESSAGE.to_string());
            return;
        }

        if let Some(image) = latest_frame {
            match self.camera_texture.as_mut() {
                Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.camera_texture =
                        Some(ctx.load_texture("camera_frame", image, egui::TextureOptions::LINEAR))
                }
            }
            if !self.camera_started {
                log::info!("first camera frame received, starting sampler");
                initialize_scene(&mut self.world);
                self.camera_started = true;
                self.sim_budget_ms = 0.0;
                self.last_frame_instant = Some(Instant::now());
            }
        }
    }

    /// Advances the scene clock by the accumulated real-time budget,
    /// processing every event that falls inside it.
    pub fn advance_by_budget(&mut self) {
        let mut remaining = self.sim_budget_ms.max(0.0);
        while let Some((next_ts, sim_now)) = self
            .world
            .get_resource::<SimulationClock>()
            .and_then(|clock| Some((clock.next_event_time()?, clock.now())))
        {
            if next_ts <= sim_now {
                if !run_next_event(&mut self.world, &mut self.schedule) {
                    break;
                }
                self.steps_executed += 1;
                continue;
            }

            let gap = (next_ts - sim_now) as f64;
            if gap > remaining {
                break;
            }
            if !run_next_event(&mut self.world, &mut self.schedule) {
                break;
            }
            self.steps_executed += 1;
            remaining -= gap;
        }
        self.sim_budget_ms = remaining;
    }
}
