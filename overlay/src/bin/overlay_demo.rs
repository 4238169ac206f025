//! Runs a simulated render loop and logs what the overlay would draw.

use frame_meter_host::{Canvas, Color};
use frame_meter_overlay::{init_logging, FrameOverlay, OverlayConfig};
use log::{debug, info, LevelFilter, SetLoggerError};
use std::thread;
use std::time::Duration;

const FRAMES: u32 = 240;
const DRAW_EVERY: u32 = 60;

/// Canvas that writes text to the log and counts the bars it is asked to draw.
struct LogCanvas {
    color: Color,
    lines: usize,
}

impl Canvas for LogCanvas {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        if self.color == frame_meter::WARNING_COLOR {
            log::warn!("[{x}, {y}] {text}");
        } else {
            info!("[{x}, {y}] {text}");
        }
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        debug!("line ({x0}, {y0}) -> ({x1}, {y1})");
        self.lines += 1;
    }
}

fn main() -> Result<(), SetLoggerError> {
    init_logging(LevelFilter::Info)?;

    let mut overlay = FrameOverlay::new(OverlayConfig {
        label: Some("demo".to_string()),
        history_capacity: 60,
        ..OverlayConfig::default()
    });
    let mut canvas = LogCanvas {
        color: Color::WHITE,
        lines: 0,
    };

    for frame in 1..=FRAMES {
        overlay.begin_frame();
        // every fourth frame the simulation gets heavy
        let physics = if frame % 4 == 0 { 9 } else { 3 };
        thread::sleep(Duration::from_millis(physics));
        overlay.tick("physics");
        thread::sleep(Duration::from_millis(4));
        overlay.tick("render");
        overlay.end_frame();

        // waiting for the next vsync
        thread::sleep(Duration::from_millis(5));

        if frame % DRAW_EVERY == 0 {
            overlay.draw(&mut canvas);
        }
    }

    info!(
        "{FRAMES} frames, last frame {} ms, {} history bars drawn",
        overlay.timer().frame_time_millis(),
        canvas.lines
    );
    Ok(())
}
