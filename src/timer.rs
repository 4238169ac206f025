use frame_meter_host::{Canvas, Clock, Color, ColorScope, SystemClock};
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;
use std::fmt::Write;

/// Text color while the frame is within the [`Warnings`] thresholds.
pub const NORMAL_COLOR: Color = Color::WHITE;
/// Text color once the frame rate or the load crosses a threshold.
pub const WARNING_COLOR: Color = Color::RED;

/// Thresholds that switch the overlay into its warning color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Warnings {
    pub min_framerate: f32,
    /// Update time as a ratio of the frame time, not a percentage.
    pub max_load: f32,
}

impl Default for Warnings {
    fn default() -> Self {
        Self {
            min_framerate: 10.0,
            max_load: 0.9,
        }
    }
}

/// Measures one frame of a render loop at a time.
///
/// A frame is bracketed by [`begin`](Self::begin) and [`end`](Self::end).
/// Frame time is measured end-to-end, the update time begin-to-end. Named
/// checkpoints recorded with [`tick`](Self::tick) in between are reported as
/// a share of the frame time.
///
/// Checkpoints survive from one frame to the next. A checkpoint that was not
/// recorded again reports 0%; use [`clear_ticks`](Self::clear_ticks) to drop
/// them instead.
pub struct FrameTimer<C: Clock = SystemClock> {
    clock: C,
    time_begin: u64,
    time_end: u64,
    time_frame: u64,
    time_update: u64,
    ticks: HashMap<String, u64>,
    ticks_sorted: Vec<(String, u64)>,
    warnings: Warnings,
}

impl FrameTimer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for FrameTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            time_begin: 0,
            time_end: 0,
            time_frame: 0,
            time_update: 0,
            ticks: HashMap::new(),
            ticks_sorted: Vec::new(),
            warnings: Warnings::default(),
        }
    }

    pub fn begin(&mut self) {
        self.time_begin = self.clock.now_micros();
    }

    pub fn tick(&mut self, name: &str) {
        let now = self.clock.now_micros();
        match self.ticks.get_mut(name) {
            Some(time) => *time = now,
            None => {
                self.ticks.insert(name.to_string(), now);
            }
        }
    }

    pub fn end(&mut self) {
        let now = self.clock.now_micros();
        // wrapping: calling end() without begin() is meaningless, not fatal
        self.time_frame = now.wrapping_sub(self.time_end);
        self.time_update = now.wrapping_sub(self.time_begin);
        self.time_end = now;

        self.ticks_sorted.clear();
        self.ticks_sorted
            .extend(self.ticks.iter().map(|(name, time)| (name.clone(), *time)));
        // name breaks ties so the order does not depend on hashing
        self.ticks_sorted
            .sort_by(|(a_name, a_time), (b_name, b_time)| {
                a_time.cmp(b_time).then_with(|| a_name.cmp(b_name))
            });

        trace!(
            "frame {} us, update {} us, {} ticks",
            self.time_frame,
            self.time_update,
            self.ticks_sorted.len()
        );
    }

    pub fn clear_ticks(&mut self) {
        self.ticks.clear();
        self.ticks_sorted.clear();
    }

    /// Instantaneous frame rate of the last frame, 0 before any frame time
    /// was measured.
    pub fn fps(&self) -> f32 {
        if self.time_frame != 0 {
            (1_000_000.0 / self.time_frame as f64) as f32
        } else {
            0.0
        }
    }

    /// Update time divided by frame time.
    ///
    /// Only meaningful once [`end`](Self::end) measured a non-zero frame
    /// time; before that the result is not finite.
    pub fn load(&self) -> f32 {
        self.time_update as f32 / self.time_frame as f32
    }

    pub fn frame_time(&self) -> f64 {
        self.time_frame as f64 / 1_000_000.0
    }

    pub fn frame_time_f32(&self) -> f32 {
        self.frame_time() as f32
    }

    pub fn frame_time_micros(&self) -> u64 {
        self.time_frame
    }

    pub fn frame_time_millis(&self) -> u64 {
        self.time_frame / 1000
    }

    pub fn update_time_micros(&self) -> u64 {
        self.time_update
    }

    pub fn time_begin(&self) -> u64 {
        self.time_begin
    }

    pub fn time_end(&self) -> u64 {
        self.time_end
    }

    /// Checkpoints as of the last [`end`](Self::end), oldest first.
    pub fn ticks_sorted(&self) -> &[(String, u64)] {
        &self.ticks_sorted
    }

    /// Share of the frame time spent before each checkpoint, in percent.
    ///
    /// The first checkpoint is measured from the frame's begin, every other
    /// one from its predecessor.
    pub fn tick_shares(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        let mut previous = self.time_begin;
        self.ticks_sorted.iter().map(move |(name, time)| {
            let share = if *time > previous && self.time_frame != 0 {
                100.0 * (*time - previous) as f32 / self.time_frame as f32
            } else {
                0.0
            };
            previous = *time;
            (name.as_str(), share)
        })
    }

    pub fn warnings(&self) -> Warnings {
        self.warnings
    }

    pub fn set_warnings(&mut self, min_framerate: f32, max_load: f32) {
        debug!("warnings set to {min_framerate} fps, {max_load} load");
        self.warnings = Warnings {
            min_framerate,
            max_load,
        };
    }

    pub fn is_warning(&self) -> bool {
        self.fps() < self.warnings.min_framerate || self.load() > self.warnings.max_load
    }

    /// `"<fps> fps (<breakdown>)"`, where the breakdown lists the checkpoint
    /// shares when `use_ticks` is set and any were recorded, the load
    /// otherwise. Checkpoints only show up after the next [`end`](Self::end).
    pub fn format(&self, fps_precision: usize, load_precision: usize, use_ticks: bool) -> String {
        let mut out = format!("{:.*} fps (", fps_precision, self.fps());
        if use_ticks && !self.ticks_sorted.is_empty() {
            for (index, (name, share)) in self.tick_shares().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                if share > 0.0 {
                    let _ = write!(out, "{name}: {share:.load_precision$}%");
                } else {
                    let _ = write!(out, "{name}: 0%");
                }
            }
        } else {
            let _ = write!(out, "{:.*}%", load_precision, self.load() * 100.0);
        }
        out.push(')');
        out
    }

    fn status_color(&self) -> Color {
        if self.is_warning() {
            WARNING_COLOR
        } else {
            NORMAL_COLOR
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, x: i32, y: i32) {
        let text = self.to_string();
        let mut canvas = ColorScope::new(canvas, self.status_color());
        canvas.draw_text(x, y, &text);
    }

    pub fn draw_labeled(
        &self,
        canvas: &mut dyn Canvas,
        x: i32,
        y: i32,
        label: &str,
        draw_ticks: bool,
    ) {
        let text = format!("{label}: {}", self.format(1, 0, draw_ticks));
        let mut canvas = ColorScope::new(canvas, self.status_color());
        canvas.draw_text(x, y, &text);
    }
}

impl<C: Clock> fmt::Display for FrameTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(1, 0, true))
    }
}

impl<C: Clock> fmt::Debug for FrameTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameTimer")
            .field("time_begin", &self.time_begin)
            .field("time_end", &self.time_end)
            .field("time_frame", &self.time_frame)
            .field("time_update", &self.time_update)
            .field("ticks_sorted", &self.ticks_sorted)
            .field("warnings", &self.warnings)
            .finish()
    }
}
