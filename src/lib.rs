//! Frame timing for real-time render loops.
//!
//! [`FrameTimer`] measures frame rate, load and named checkpoints of a frame,
//! [`ScalarHistory`] keeps recent values around for a bar graph. Both draw
//! through the host capabilities of [`frame_meter_host`].

mod history;
mod timer;

pub use frame_meter_host as host;
pub use history::ScalarHistory;
pub use timer::{FrameTimer, Warnings, NORMAL_COLOR, WARNING_COLOR};
