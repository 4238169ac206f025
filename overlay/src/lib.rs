//! On-screen frame statistics for a render loop.

mod config;
mod logging;
mod report;

use frame_meter::{FrameTimer, ScalarHistory};
use frame_meter_host::{Canvas, Clock, SystemClock};
use log::{debug, info};

pub use config::OverlayConfig;
pub use logging::init_logging;

/// Frame timer and FPS history driven together.
///
/// Call [`begin_frame`](Self::begin_frame) and [`end_frame`](Self::end_frame)
/// around the update part of every frame, [`draw`](Self::draw) whenever the
/// overlay should be rendered.
pub struct FrameOverlay<C: Clock = SystemClock> {
    timer: FrameTimer<C>,
    history: ScalarHistory,
    report: report::FpsReport,
    config: OverlayConfig,
}

impl FrameOverlay<SystemClock> {
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_clock(SystemClock::new(), config)
    }
}

impl<C: Clock> FrameOverlay<C> {
    pub fn with_clock(clock: C, config: OverlayConfig) -> Self {
        let report = report::FpsReport::new(clock.now_micros(), config.report_interval);
        let mut overlay = Self {
            timer: FrameTimer::with_clock(clock),
            history: ScalarHistory::new(config.history_capacity, config.history_auto_scale),
            report,
            config: OverlayConfig::default(),
        };
        overlay.set_config(config);
        overlay
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: OverlayConfig) {
        debug!("overlay settings changed: {config:?}");
        self.timer
            .set_warnings(config.warnings.min_framerate, config.warnings.max_load);
        self.history.set_capacity(config.history_capacity);
        self.history.set_auto_scale(config.history_auto_scale);
        self.history.set_max(config.history_max);
        self.report.set_interval(config.report_interval);
        self.config = config;
    }

    pub fn timer(&self) -> &FrameTimer<C> {
        &self.timer
    }

    pub fn history(&self) -> &ScalarHistory {
        &self.history
    }

    pub fn begin_frame(&mut self) {
        self.timer.begin();
    }

    pub fn tick(&mut self, name: &str) {
        self.timer.tick(name);
    }

    /// Closes the frame and records its frame rate in the history.
    ///
    /// Returns the average frame rate whenever a report interval has passed.
    pub fn end_frame(&mut self) -> Option<f32> {
        self.timer.end();
        self.history.add(self.timer.fps());
        let fps = self.report.update(self.timer.time_end());
        if let Some(fps) = fps {
            info!("FPS: {:.2}", fps);
        }
        fps
    }

    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let (x, y) = self.config.position;
        match &self.config.label {
            Some(label) => self
                .timer
                .draw_labeled(canvas, x, y, label, self.config.draw_ticks),
            None => self.timer.draw(canvas, x, y),
        }
        self.history.draw(
            canvas,
            x as f32,
            y as f32 + self.config.history_offset,
            self.config.history_height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_meter::{NORMAL_COLOR, WARNING_COLOR};
    use frame_meter_host::test::{DrawCall, ManualClock, RecordingCanvas};
    use std::time::Duration;

    fn frame(
        overlay: &mut FrameOverlay<ManualClock>,
        clock: &ManualClock,
        update: u64,
        idle: u64,
    ) -> Option<f32> {
        overlay.begin_frame();
        clock.advance(update / 2);
        overlay.tick("physics");
        clock.advance(update - update / 2);
        let fps = overlay.end_frame();
        clock.advance(idle);
        fps
    }

    #[test]
    fn test_frames_feed_history() {
        let clock = ManualClock::new();
        let config = OverlayConfig {
            history_capacity: 3,
            ..OverlayConfig::default()
        };
        let mut overlay = FrameOverlay::with_clock(clock.clone(), config);

        for _ in 0..5 {
            frame(&mut overlay, &clock, 10_000, 10_000);
        }
        assert_eq!(overlay.history().len(), 3);
        assert!(overlay.history().samples().all(|fps| (fps - 50.0).abs() < 1e-3));
    }

    #[test]
    fn test_report_after_interval() {
        let clock = ManualClock::new();
        let config = OverlayConfig {
            report_interval: Duration::from_millis(100),
            ..OverlayConfig::default()
        };
        let mut overlay = FrameOverlay::with_clock(clock.clone(), config);

        let reports: Vec<f32> = (0..10)
            .filter_map(|_| frame(&mut overlay, &clock, 5_000, 15_000))
            .collect();
        // frame ends land at 5 ms, 25 ms, ... 185 ms
        assert_eq!(reports.len(), 1);
        assert!((reports[0] - 6.0 / 0.105).abs() < 1e-2);
    }

    #[test]
    fn test_draw_text_then_history() {
        let clock = ManualClock::new();
        let config = OverlayConfig {
            position: (4, 8),
            history_height: 20.0,
            history_offset: 2.0,
            ..OverlayConfig::default()
        };
        let mut overlay = FrameOverlay::with_clock(clock.clone(), config);
        frame(&mut overlay, &clock, 10_000, 10_000);
        frame(&mut overlay, &clock, 10_000, 10_000);

        let mut canvas = RecordingCanvas::new();
        overlay.draw(&mut canvas);

        let texts = canvas.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, 4);
        assert_eq!(texts[0].1, 8);
        assert_eq!(texts[0].2, "50.0 fps (physics: 25%)");
        assert_eq!(texts[0].3, NORMAL_COLOR);

        // first frame ran 100 fps against the clock origin, second 50 fps
        let lines = canvas.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (4.0, 30.0, 4.0, 20.0));
        assert_eq!(lines[1], (5.0, 30.0, 5.0, 10.0));
        assert_eq!(canvas.color(), NORMAL_COLOR);
    }

    #[test]
    fn test_labeled_overlay_warns() {
        let clock = ManualClock::new();
        let config = OverlayConfig {
            label: Some("update".to_string()),
            draw_ticks: false,
            ..OverlayConfig::default()
        };
        let mut overlay = FrameOverlay::with_clock(clock.clone(), config);
        frame(&mut overlay, &clock, 95_000, 5_000);
        frame(&mut overlay, &clock, 95_000, 5_000);

        let mut canvas = RecordingCanvas::new();
        overlay.draw(&mut canvas);
        assert_eq!(
            canvas.calls()[..3],
            [
                DrawCall::SetColor(WARNING_COLOR),
                DrawCall::Text {
                    x: 10,
                    y: 20,
                    text: "update: 10.0 fps (95%)".to_string(),
                    color: WARNING_COLOR,
                },
                DrawCall::SetColor(NORMAL_COLOR),
            ]
        );
    }

    #[test]
    fn test_set_config_applies_to_components() {
        let clock = ManualClock::new();
        let mut overlay = FrameOverlay::with_clock(clock.clone(), OverlayConfig::default());
        overlay.set_config(OverlayConfig {
            warnings: frame_meter::Warnings {
                min_framerate: 30.0,
                max_load: 0.5,
            },
            history_capacity: 7,
            history_auto_scale: false,
            history_max: 144.0,
            ..OverlayConfig::default()
        });
        assert_eq!(overlay.timer().warnings().min_framerate, 30.0);
        assert_eq!(overlay.history().capacity(), 7);
        assert!(!overlay.history().auto_scale());
        assert_eq!(overlay.history().max(), 144.0);
        assert_eq!(overlay.config().history_capacity, 7);
    }

    #[test]
    fn test_init_logging_only_once() {
        assert!(init_logging(log::LevelFilter::Warn).is_ok());
        assert!(init_logging(log::LevelFilter::Warn).is_err());
    }
}
