use frame_meter_host::Canvas;
use log::debug;
use std::collections::VecDeque;

/// Bounded history of a scalar, drawn as a row of vertical bars.
#[derive(Debug, Clone)]
pub struct ScalarHistory {
    capacity: usize,
    samples: VecDeque<f32>,
    max: f32,
    auto_scale: bool,
}

impl ScalarHistory {
    pub fn new(capacity: usize, auto_scale: bool) -> Self {
        Self {
            capacity,
            samples: VecDeque::new(),
            max: 0.0,
            auto_scale,
        }
    }

    /// Takes effect on the next [`add`](Self::add), existing samples are
    /// kept until then.
    pub fn set_capacity(&mut self, capacity: usize) {
        debug!("history capacity {} -> {capacity}", self.capacity);
        self.capacity = capacity;
    }

    /// Fixed scale ceiling, overwritten on draw while auto-scaling.
    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }

    pub fn set_auto_scale(&mut self, auto_scale: bool) {
        self.auto_scale = auto_scale;
    }

    pub fn add(&mut self, value: f32) {
        self.samples.push_front(value);
        while self.samples.len() > self.capacity {
            self.samples.pop_back();
        }
    }

    /// Most recent first.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn auto_scale(&self) -> bool {
        self.auto_scale
    }

    /// Draws one bar per sample, most recent at `x`, growing up from
    /// `y + height`. A sample equal to the scale maximum spans the full
    /// height.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, x: f32, y: f32, height: f32) {
        if self.auto_scale {
            self.max = self.samples.iter().copied().fold(0.0, f32::max);
        }
        if self.max <= 0.0 {
            debug!("history scale is {}, nothing to draw", self.max);
            return;
        }

        let baseline = y + height;
        for (offset, sample) in self.samples.iter().enumerate() {
            let bar_x = x + offset as f32;
            canvas.draw_line(bar_x, baseline, bar_x, baseline - sample / self.max * height);
        }
    }
}
