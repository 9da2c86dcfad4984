//! Capability interfaces the core drives.
//!
//! The state machine never touches a concrete video player, audio device,
//! or rendering surface. Hosts supply implementations of these traits and
//! the core calls through them at its transition points.

use crate::models::Quiz;

/// The external video playback surface.
///
/// Position and seek notifications flow to the core through the host's
/// event loop, not through this trait; the core only ever pauses and
/// resumes.
pub trait VideoSurface {
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Grading feedback sounds. Fire-and-forget; the core never reads a result.
pub trait AudioFeedback {
    fn signal_correct(&mut self);
    fn signal_incorrect(&mut self);
}

/// Grading outcome handed to the quiz screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
}

/// The overlay that displays a quiz and its grading feedback.
///
/// `show_quiz` renders the question and its four options in stored order;
/// the surface labels them A–D. A `show_quiz` call starts a fresh
/// presentation: any previous selection or feedback is gone.
pub trait QuizScreen {
    fn show_quiz(&mut self, quiz: &Quiz);
    fn show_feedback(&mut self, feedback: &Feedback);
    fn hide(&mut self);
}

/// Yes/no gate for replacing or destructive operations.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompt that accepts everything.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Prompt that declines everything.
pub struct NeverConfirm;

impl ConfirmPrompt for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}
