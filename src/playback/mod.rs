//! Playback position discretization.

mod monitor;

pub use monitor::{PlaybackEvent, PlaybackMonitor};
