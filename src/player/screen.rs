//! Overlay state shared between the presenter's screen capability and the
//! render loop.

use std::sync::{Arc, Mutex, PoisonError};

use crate::models::{NUM_OPTIONS, Quiz};
use crate::surface::{Feedback, QuizScreen};

/// What the overlay currently shows and which option the viewer has
/// picked. Written by the presenter through [`QuizScreen`], read each
/// frame by the views.
#[derive(Debug, Clone, Default)]
pub struct OverlayModel {
    pub quiz: Option<Quiz>,
    pub feedback: Option<Feedback>,
    pub selected: Option<usize>,
}

/// Cloneable handle over one overlay model.
#[derive(Clone, Default)]
pub struct SharedOverlay(Arc<Mutex<OverlayModel>>);

impl SharedOverlay {
    pub fn snapshot(&self) -> OverlayModel {
        self.lock().clone()
    }

    pub fn selected(&self) -> Option<usize> {
        self.lock().selected
    }

    /// Move the selection down, starting at the first option.
    pub fn select_next(&self) {
        let mut model = self.lock();
        model.selected = Some(match model.selected {
            Some(index) => (index + 1) % NUM_OPTIONS,
            None => 0,
        });
    }

    /// Move the selection up, starting at the first option.
    pub fn select_previous(&self) {
        let mut model = self.lock();
        model.selected = Some(match model.selected {
            Some(index) => (index + NUM_OPTIONS - 1) % NUM_OPTIONS,
            None => 0,
        });
    }

    pub fn select(&self, index: usize) {
        if index < NUM_OPTIONS {
            self.lock().selected = Some(index);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, OverlayModel> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl QuizScreen for SharedOverlay {
    fn show_quiz(&mut self, quiz: &Quiz) {
        let mut model = self.lock();
        model.quiz = Some(quiz.clone());
        model.feedback = None;
        model.selected = None;
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.lock().feedback = Some(feedback.clone());
    }

    fn hide(&mut self) {
        let mut model = self.lock();
        model.quiz = None;
        model.feedback = None;
        model.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz::new(
            10,
            "Q".to_string(),
            [
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            0,
        )
    }

    #[test]
    fn test_show_quiz_starts_with_no_selection() {
        let overlay = SharedOverlay::default();
        overlay.select(2);

        let mut screen = overlay.clone();
        screen.show_quiz(&quiz());

        let model = overlay.snapshot();
        assert!(model.quiz.is_some());
        assert_eq!(model.selected, None);
    }

    #[test]
    fn test_selection_wraps_in_both_directions() {
        let overlay = SharedOverlay::default();

        overlay.select_next();
        assert_eq!(overlay.selected(), Some(0));
        overlay.select_previous();
        assert_eq!(overlay.selected(), Some(3));
        overlay.select_next();
        assert_eq!(overlay.selected(), Some(0));
    }

    #[test]
    fn test_hide_clears_everything() {
        let overlay = SharedOverlay::default();
        let mut screen = overlay.clone();
        screen.show_quiz(&quiz());
        overlay.select(1);
        screen.show_feedback(&Feedback {
            correct: true,
            message: "ok".to_string(),
        });

        screen.hide();

        let model = overlay.snapshot();
        assert!(model.quiz.is_none());
        assert!(model.feedback.is_none());
        assert_eq!(model.selected, None);
    }
}
