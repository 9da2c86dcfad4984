//! Simulated video surface for the demo player.
//!
//! Stands in for a real media element: a clock task advances the playback
//! position while playing and reports it over a channel, the way a video
//! surface fires position-changed notifications.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;

use crate::surface::VideoSurface;

/// Notifications the playback surface pushes to the host loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VideoNotification {
    PositionChanged(f64),
    Seeked,
}

/// How often the simulated surface reports its position.
const POSITION_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
struct SimState {
    position: f64,
    duration: f64,
    playing: bool,
}

/// Handle to the simulated video player. Clones share one underlying
/// state, so the presenter's pause is visible to the clock task.
#[derive(Clone)]
pub struct SimVideo {
    state: Arc<Mutex<SimState>>,
    notify: mpsc::UnboundedSender<VideoNotification>,
}

impl SimVideo {
    /// Create the surface and the notification channel the host listens
    /// on.
    pub fn new(duration: f64) -> (Self, mpsc::UnboundedReceiver<VideoNotification>) {
        let (notify, notifications) = mpsc::unbounded_channel();
        let video = Self {
            state: Arc::new(Mutex::new(SimState {
                position: 0.0,
                duration,
                playing: true,
            })),
            notify,
        };

        (video, notifications)
    }

    /// Spawn the clock task that advances playback and reports positions.
    /// The task exits once the host drops the notification receiver.
    pub fn spawn_clock(&self) {
        let video = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POSITION_INTERVAL);
            loop {
                interval.tick().await;

                let position = {
                    let mut state = video.lock();
                    if !state.playing {
                        None
                    } else {
                        state.position = (state.position
                            + POSITION_INTERVAL.as_secs_f64())
                        .min(state.duration);
                        if state.position >= state.duration {
                            state.playing = false;
                        }
                        Some(state.position)
                    }
                };

                let Some(position) = position else { continue };
                if video
                    .notify
                    .send(VideoNotification::PositionChanged(position))
                    .is_err()
                {
                    break;
                }
            }
        });
    }

    pub fn position(&self) -> f64 {
        self.lock().position
    }

    pub fn duration(&self) -> f64 {
        self.lock().duration
    }

    pub fn is_playing(&self) -> bool {
        self.lock().playing
    }

    pub fn set_playing(&self, playing: bool) {
        self.lock().playing = playing;
    }

    pub fn toggle_playing(&self) {
        let mut state = self.lock();
        state.playing = !state.playing;
    }

    /// Jump to `position`, clamped to the clip, and report the seek.
    ///
    /// A position report follows immediately, like a media element firing
    /// a position update right after `seeked`, so a paused player still
    /// reflects the jump.
    pub fn seek_to(&self, position: f64) {
        let clamped = {
            let mut state = self.lock();
            state.position = position.clamp(0.0, state.duration);
            state.position
        };

        let _ = self.notify.send(VideoNotification::Seeked);
        let _ = self
            .notify
            .send(VideoNotification::PositionChanged(clamped));
    }

    /// Relative seek; negative deltas scrub backwards.
    pub fn seek_by(&self, delta: f64) {
        let target = self.position() + delta;
        self.seek_to(target.max(0.0));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VideoSurface for SimVideo {
    fn pause(&mut self) {
        self.set_playing(false);
    }

    fn resume(&mut self) {
        self.set_playing(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_clamps_and_notifies() {
        let (video, mut notifications) = SimVideo::new(60.0);

        video.seek_to(90.0);
        assert_eq!(video.position(), 60.0);
        assert_eq!(
            notifications.try_recv(),
            Ok(VideoNotification::Seeked)
        );
        assert_eq!(
            notifications.try_recv(),
            Ok(VideoNotification::PositionChanged(60.0))
        );

        video.seek_by(-1000.0);
        assert_eq!(video.position(), 0.0);
    }

    #[test]
    fn test_pause_and_resume_through_the_surface_trait() {
        let (video, _notifications) = SimVideo::new(60.0);
        let mut surface = video.clone();

        assert!(video.is_playing());
        surface.pause();
        assert!(!video.is_playing());
        surface.resume();
        assert!(video.is_playing());
    }
}
