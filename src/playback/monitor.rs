//! Discretizes the continuous playback position into per-second events.

/// Events derived from the video surface's notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback entered a new whole second.
    Tick(u64),
    /// Playback position jumped; shown-quiz tracking starts over.
    Reset,
}

/// Turns the high-frequency position stream into at most one tick per
/// second.
///
/// The underlying surface reports positions far more often than once per
/// second; without suppression a quiz at the current second would match on
/// every report.
#[derive(Debug)]
pub struct PlaybackMonitor {
    // Sentinel -1 so the very first report of second 0 still ticks.
    last_emitted_second: i64,
}

impl PlaybackMonitor {
    pub fn new() -> Self {
        Self {
            last_emitted_second: -1,
        }
    }

    /// Handle a position-change notification.
    ///
    /// Emits a tick when the floor of `position` differs from the last
    /// emitted second; repeats within the same second emit nothing.
    pub fn position_changed(&mut self, position: f64) -> Option<PlaybackEvent> {
        let second = position.max(0.0).floor() as i64;
        if second == self.last_emitted_second {
            return None;
        }

        self.last_emitted_second = second;
        Some(PlaybackEvent::Tick(second as u64))
    }

    /// Handle an explicit seek notification.
    ///
    /// The last emitted second is left alone; the next position report
    /// produces a fresh tick on its own once it lands in a new second.
    pub fn seeked(&mut self) -> PlaybackEvent {
        PlaybackEvent::Reset
    }
}

impl Default for PlaybackMonitor {
    fn default() -> Self {
        Self::new()
    }
}
