use frame_meter::Warnings;
use std::time::Duration;

/// Settings of a [`FrameOverlay`](crate::FrameOverlay).
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub warnings: Warnings,
    /// Screen position of the status text.
    pub position: (i32, i32),
    /// Prefix of the status text, `None` draws it unlabeled.
    pub label: Option<String>,
    /// Only used together with `label`, the unlabeled text always shows ticks.
    pub draw_ticks: bool,
    pub history_capacity: usize,
    pub history_auto_scale: bool,
    /// Scale ceiling when not auto-scaling.
    pub history_max: f32,
    pub history_height: f32,
    /// Vertical distance between the status text and the top of the graph.
    pub history_offset: f32,
    pub report_interval: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            warnings: Warnings::default(),
            position: (10, 20),
            label: None,
            draw_ticks: true,
            history_capacity: 100,
            history_auto_scale: true,
            history_max: 60.0,
            history_height: 40.0,
            history_offset: 10.0,
            report_interval: Duration::from_secs(1),
        }
    }
}
