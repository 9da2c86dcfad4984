//! # quiz-overlay
//!
//! Timestamp-triggered multiple-choice quizzes over video playback.
//!
//! At authored seconds the presenter pauses the video, shows a question
//! with four labelled options, grades the viewer's answer, signals the
//! result, and resumes playback after a short feedback delay. Quizzes
//! persist across sessions as one serialized collection in a key-value
//! store.
//!
//! The core is headless: the video surface, audio feedback, rendering,
//! and confirmation prompts are capability traits in [`surface`],
//! implemented by the hosting application. A terminal demo host lives in
//! [`player`].
//!
//! ## Usage
//!
//! ```rust
//! use quiz_overlay::{
//!     AlwaysConfirm, MemoryStore, PlaybackEvent, PlaybackMonitor, QuizStore,
//! };
//!
//! let mut store = QuizStore::restore(Box::new(MemoryStore::new()));
//! let options = [
//!     "3".to_string(),
//!     "4".to_string(),
//!     "5".to_string(),
//!     "6".to_string(),
//! ];
//! store
//!     .add(30, "What is 2 + 2?", options, 1, &mut AlwaysConfirm)
//!     .unwrap();
//!
//! let mut monitor = PlaybackMonitor::new();
//! assert_eq!(monitor.position_changed(30.2), Some(PlaybackEvent::Tick(30)));
//! assert!(store.find_by_time(30).is_some());
//! ```

pub mod models;
pub mod playback;
pub mod player;
pub mod presenter;
pub mod store;
pub mod surface;

pub use models::{NUM_OPTIONS, OPTION_LABELS, Quiz};
pub use playback::{PlaybackEvent, PlaybackMonitor};
pub use presenter::{DedupTracker, FEEDBACK_DELAY, Phase, QuizPresenter, SubmitOutcome};
pub use store::{AddQuizError, FileStore, KeyValueStore, MemoryStore, QuizStore, STORAGE_KEY};
pub use surface::{
    AlwaysConfirm, AudioFeedback, ConfirmPrompt, Feedback, NeverConfirm, QuizScreen,
    VideoSurface,
};
