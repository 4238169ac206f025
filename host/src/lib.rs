//! Capabilities the host environment hands to the frame meter: a monotonic
//! clock and a 2D canvas.

pub mod color;

use log::debug;
use std::ops::{Deref, DerefMut};
use std::time::Instant;

pub use color::Color;

/// Monotonic microsecond clock.
///
/// Values must never decrease across calls within a process run.
pub trait Clock {
    fn now_micros(&self) -> u64;
}

/// Minimal drawing surface used by the `draw` methods.
pub trait Canvas {
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);
}

/// Microseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_micros(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}

/// Overrides the canvas color for as long as the scope lives.
///
/// The color that was active before is restored when the scope is dropped,
/// so early returns and panics unwinding through a draw call leave the
/// canvas as they found it.
pub struct ColorScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    previous: Color,
}

impl<'a, C: Canvas + ?Sized> ColorScope<'a, C> {
    pub fn new(canvas: &'a mut C, color: Color) -> Self {
        let previous = canvas.color();
        debug!("color override {previous:?} -> {color:?}");
        canvas.set_color(color);
        Self { canvas, previous }
    }
}

impl<C: Canvas + ?Sized> Deref for ColorScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for ColorScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for ColorScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.set_color(self.previous);
    }
}
