//! Background camera capture.
//!
//! A worker thread owns the device and streams decoded RGB frames over a
//! channel; the UI thread never blocks on the camera. Frames are displayed
//! as-is and never inspected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use eframe::egui;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

/// One message from the capture thread.
pub enum CameraEvent {
    Frame(egui::ColorImage),
    /// Device open or decode failure; the worker exits after sending it.
    Error(String),
}

/// Handle to a running capture thread.
pub struct CameraFeed {
    receiver: Receiver<CameraEvent>,
    stop_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl CameraFeed {
    /// Spawns the capture thread on the default device. Open failures are
    /// reported through the event channel, not here.
    pub fn start() -> Self {
        let (sender, receiver) = channel();
        let stop_flag = Arc::new(AtomicBool::new(false));
        let worker_flag = Arc::clone(&stop_flag);
        let worker = std::thread::spawn(move || capture_loop(sender, worker_flag));
        Self {
            receiver,
            stop_flag,
            worker: Some(worker),
        }
    }

    /// All events received since the last poll.
    pub fn drain(&self) -> Vec<CameraEvent> {
        self.receiver.try_iter().collect()
    }

    /// Signals the worker and waits for it to release the device.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for CameraFeed {
    fn drop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn capture_loop(sender: Sender<CameraEvent>, stop_flag: Arc<AtomicBool>) {
    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
    let mut camera = match Camera::new(CameraIndex::Index(0), requested) {
        Ok(camera) => camera,
        Err(error) => {
            let _ = sender.send(CameraEvent::Error(error.to_string()));
            return;
        }
    };
    if let Err(error) = camera.open_stream() {
        let _ = sender.send(CameraEvent::Error(error.to_string()));
        return;
    }
    log::info!("camera '{}' streaming", camera.info().human_name());

    while !stop_flag.load(Ordering::Relaxed) {
        let frame = match camera.frame() {
            Ok(frame) => frame,
            Err(error) => {
                let _ = sender.send(CameraEvent::Error(error.to_string()));
                break;
            }
        };
        let decoded = match frame.decode_image::<RgbFormat>() {
            Ok(decoded) => decoded,
            Err(error) => {
                let _ = sender.send(CameraEvent::Error(error.to_string()));
                break;
            }
        };
        let size = [decoded.width() as usize, decoded.height() as usize];
        let image = egui::ColorImage::from_rgb(size, decoded.as_raw());
        // A closed receiver means the feed was dropped; exit quietly.
        if sender.send(CameraEvent::Frame(image)).is_err() {
            break;
        }
    }

    let _ = camera.stop_stream();
    log::info!("camera released");
}
