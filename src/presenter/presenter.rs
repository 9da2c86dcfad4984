//! The presentation state machine.
//!
//! Reacts to playback ticks by pausing the video and showing a quiz,
//! grades the viewer's answer, and resumes playback once the feedback
//! delay has run out. All methods are synchronous; the host's event loop
//! owns the clock and calls [`QuizPresenter::dismiss`] when the delay
//! elapses.

use std::time::Duration;

use crate::models::Quiz;
use crate::store::QuizStore;
use crate::surface::{AudioFeedback, Feedback, QuizScreen, VideoSurface};

use super::DedupTracker;

/// How long grading feedback stays on screen before playback resumes.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(3000);

/// Where the presenter currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No quiz displayed; the video may be playing.
    Idle,
    /// A quiz is displayed, the video is paused, nothing graded yet.
    AwaitingAnswer,
    /// Grading feedback is displayed; a dismissal is pending.
    Feedback,
}

/// Outcome of an answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was selected; the viewer must choose before proceeding.
    NoSelection,
    /// Graded. The host should dismiss after [`FEEDBACK_DELAY`].
    Graded { correct: bool },
    /// No quiz is awaiting an answer.
    NotAwaiting,
}

enum State {
    Idle,
    AwaitingAnswer { quiz: Quiz },
    Feedback { quiz: Quiz },
}

/// Drives one quiz presentation at a time against the capability surfaces.
pub struct QuizPresenter {
    state: State,
    shown: DedupTracker,
    video: Box<dyn VideoSurface>,
    audio: Box<dyn AudioFeedback>,
    screen: Box<dyn QuizScreen>,
}

impl QuizPresenter {
    pub fn new(
        video: Box<dyn VideoSurface>,
        audio: Box<dyn AudioFeedback>,
        screen: Box<dyn QuizScreen>,
    ) -> Self {
        Self {
            state: State::Idle,
            shown: DedupTracker::new(),
            video,
            audio,
            screen,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::AwaitingAnswer { .. } => Phase::AwaitingAnswer,
            State::Feedback { .. } => Phase::Feedback,
        }
    }

    /// Quiz currently on screen, if any.
    pub fn active_quiz(&self) -> Option<&Quiz> {
        match &self.state {
            State::Idle => None,
            State::AwaitingAnswer { quiz } | State::Feedback { quiz } => Some(quiz),
        }
    }

    /// Handle a playback tick.
    ///
    /// Only an idle presenter looks for a quiz; ticks arriving while one
    /// is on screen are ignored. A quiz already shown since the last seek
    /// is skipped without side effects.
    pub fn on_tick(&mut self, second: u64, store: &QuizStore) {
        if !matches!(self.state, State::Idle) {
            return;
        }

        let Some(quiz) = store.find_by_time(second) else {
            return;
        };
        if self.shown.has_shown(quiz.id) {
            return;
        }

        log::debug!("showing quiz {} at {}s", quiz.id, quiz.time);
        self.video.pause();
        self.screen.show_quiz(quiz);
        self.shown.mark_shown(quiz.id);
        self.state = State::AwaitingAnswer { quiz: quiz.clone() };
    }

    /// Grade a submission against the active quiz.
    ///
    /// A submission without a selection is rejected and the presenter
    /// stays where it is. Otherwise feedback is rendered, exactly one
    /// audio signal fires, and the presenter moves to [`Phase::Feedback`].
    pub fn submit(&mut self, selected: Option<usize>) -> SubmitOutcome {
        let quiz = match &self.state {
            State::AwaitingAnswer { quiz } => quiz.clone(),
            _ => return SubmitOutcome::NotAwaiting,
        };
        let Some(selected) = selected else {
            return SubmitOutcome::NoSelection;
        };

        let correct = selected == quiz.correct_answer;
        let feedback = if correct {
            self.audio.signal_correct();
            Feedback {
                correct: true,
                message: "✓ Correct! Well done!".to_string(),
            }
        } else {
            self.audio.signal_incorrect();
            Feedback {
                correct: false,
                message: format!(
                    "✗ Incorrect. The correct answer was: {}",
                    quiz.correct_option()
                ),
            }
        };

        self.screen.show_feedback(&feedback);
        self.state = State::Feedback { quiz };
        SubmitOutcome::Graded { correct }
    }

    /// Hide the overlay and resume playback.
    ///
    /// Invoked by the host when the feedback delay elapses. Calls in any
    /// other phase are no-ops, so a stale timer cannot disturb a newer
    /// presentation.
    pub fn dismiss(&mut self) {
        if !matches!(self.state, State::Feedback { .. }) {
            return;
        }

        self.screen.hide();
        self.video.resume();
        self.state = State::Idle;
    }

    /// Handle a seek.
    ///
    /// Clears shown-quiz tracking in any phase. An active presentation is
    /// not interrupted; dedup only governs future tick matching.
    pub fn on_seek(&mut self) {
        self.shown.reset();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::NUM_OPTIONS;
    use crate::store::MemoryStore;
    use crate::surface::AlwaysConfirm;

    /// Records every capability call the presenter makes.
    #[derive(Default)]
    struct Calls {
        pauses: usize,
        resumes: usize,
        correct_signals: usize,
        incorrect_signals: usize,
        shown_questions: Vec<String>,
        feedback: Vec<Feedback>,
        hides: usize,
    }

    /// Cloneable handle implementing all three surfaces over one recorder.
    #[derive(Clone, Default)]
    struct Surfaces(Rc<RefCell<Calls>>);

    impl VideoSurface for Surfaces {
        fn pause(&mut self) {
            self.0.borrow_mut().pauses += 1;
        }

        fn resume(&mut self) {
            self.0.borrow_mut().resumes += 1;
        }
    }

    impl AudioFeedback for Surfaces {
        fn signal_correct(&mut self) {
            self.0.borrow_mut().correct_signals += 1;
        }

        fn signal_incorrect(&mut self) {
            self.0.borrow_mut().incorrect_signals += 1;
        }
    }

    impl QuizScreen for Surfaces {
        fn show_quiz(&mut self, quiz: &Quiz) {
            self.0.borrow_mut().shown_questions.push(quiz.question.clone());
        }

        fn show_feedback(&mut self, feedback: &Feedback) {
            self.0.borrow_mut().feedback.push(feedback.clone());
        }

        fn hide(&mut self) {
            self.0.borrow_mut().hides += 1;
        }
    }

    fn options() -> [String; NUM_OPTIONS] {
        [
            "Paris".to_string(),
            "Rome".to_string(),
            "Berlin".to_string(),
            "Madrid".to_string(),
        ]
    }

    /// Store with one quiz at 10s (correct: Rome) and one at 30s.
    fn store() -> QuizStore {
        let mut store = QuizStore::restore(Box::new(MemoryStore::new()));
        store
            .add(10, "Capital of Italy?", options(), 1, &mut AlwaysConfirm)
            .unwrap();
        store
            .add(30, "Capital of Spain?", options(), 3, &mut AlwaysConfirm)
            .unwrap();
        store
    }

    fn presenter(surfaces: &Surfaces) -> QuizPresenter {
        QuizPresenter::new(
            Box::new(surfaces.clone()),
            Box::new(surfaces.clone()),
            Box::new(surfaces.clone()),
        )
    }

    #[test]
    fn test_tick_without_matching_quiz_stays_idle() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(7, &store());

        assert_eq!(presenter.phase(), Phase::Idle);
        assert_eq!(surfaces.0.borrow().pauses, 0);
    }

    #[test]
    fn test_tick_at_quiz_time_pauses_and_presents() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(10, &store());

        assert_eq!(presenter.phase(), Phase::AwaitingAnswer);
        let calls = surfaces.0.borrow();
        assert_eq!(calls.pauses, 1);
        assert_eq!(calls.shown_questions, vec!["Capital of Italy?".to_string()]);
    }

    #[test]
    fn test_tick_while_presenting_is_ignored() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);
        let store = store();

        presenter.on_tick(10, &store);
        presenter.on_tick(30, &store);

        assert_eq!(surfaces.0.borrow().pauses, 1);
        assert_eq!(
            presenter.active_quiz().map(|quiz| quiz.time),
            Some(10)
        );
    }

    #[test]
    fn test_shown_quiz_does_not_retrigger() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);
        let store = store();

        presenter.on_tick(10, &store);
        presenter.submit(Some(1));
        presenter.dismiss();

        presenter.on_tick(10, &store);

        assert_eq!(presenter.phase(), Phase::Idle);
        assert_eq!(surfaces.0.borrow().pauses, 1);
    }

    #[test]
    fn test_seek_reset_allows_exactly_one_retrigger() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);
        let store = store();

        presenter.on_tick(10, &store);
        presenter.submit(Some(1));
        presenter.dismiss();

        presenter.on_seek();
        presenter.on_tick(10, &store);
        assert_eq!(presenter.phase(), Phase::AwaitingAnswer);

        presenter.submit(Some(1));
        presenter.dismiss();
        presenter.on_tick(10, &store);
        assert_eq!(presenter.phase(), Phase::Idle);
        assert_eq!(surfaces.0.borrow().pauses, 2);
    }

    #[test]
    fn test_submit_without_selection_is_rejected() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(10, &store());
        let outcome = presenter.submit(None);

        assert_eq!(outcome, SubmitOutcome::NoSelection);
        assert_eq!(presenter.phase(), Phase::AwaitingAnswer);
        let calls = surfaces.0.borrow();
        assert_eq!(calls.correct_signals, 0);
        assert_eq!(calls.incorrect_signals, 0);
        assert!(calls.feedback.is_empty());
    }

    #[test]
    fn test_correct_submission_signals_correct() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(10, &store());
        let outcome = presenter.submit(Some(1));

        assert_eq!(outcome, SubmitOutcome::Graded { correct: true });
        assert_eq!(presenter.phase(), Phase::Feedback);
        let calls = surfaces.0.borrow();
        assert_eq!(calls.correct_signals, 1);
        assert_eq!(calls.incorrect_signals, 0);
        assert_eq!(calls.feedback.len(), 1);
        assert!(calls.feedback[0].correct);
        assert_eq!(calls.feedback[0].message, "✓ Correct! Well done!");
    }

    #[test]
    fn test_incorrect_submission_names_the_correct_option() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(10, &store());
        let outcome = presenter.submit(Some(0));

        assert_eq!(outcome, SubmitOutcome::Graded { correct: false });
        let calls = surfaces.0.borrow();
        assert_eq!(calls.correct_signals, 0);
        assert_eq!(calls.incorrect_signals, 1);
        assert!(!calls.feedback[0].correct);
        assert_eq!(
            calls.feedback[0].message,
            "✗ Incorrect. The correct answer was: Rome"
        );
    }

    #[test]
    fn test_dismiss_hides_resumes_and_returns_to_idle() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(10, &store());
        presenter.submit(Some(1));
        presenter.dismiss();

        assert_eq!(presenter.phase(), Phase::Idle);
        let calls = surfaces.0.borrow();
        assert_eq!(calls.hides, 1);
        assert_eq!(calls.resumes, 1);
    }

    #[test]
    fn test_dismiss_outside_feedback_is_a_no_op() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.dismiss();
        presenter.on_tick(10, &store());
        presenter.dismiss();

        assert_eq!(presenter.phase(), Phase::AwaitingAnswer);
        let calls = surfaces.0.borrow();
        assert_eq!(calls.hides, 0);
        assert_eq!(calls.resumes, 0);
    }

    #[test]
    fn test_submit_outside_awaiting_is_a_no_op() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);
        let store = store();

        assert_eq!(presenter.submit(Some(0)), SubmitOutcome::NotAwaiting);

        presenter.on_tick(10, &store);
        presenter.submit(Some(1));
        assert_eq!(presenter.submit(Some(1)), SubmitOutcome::NotAwaiting);
        assert_eq!(surfaces.0.borrow().correct_signals, 1);
    }

    #[test]
    fn test_seek_during_feedback_keeps_the_presentation() {
        let surfaces = Surfaces::default();
        let mut presenter = presenter(&surfaces);

        presenter.on_tick(10, &store());
        presenter.submit(Some(1));
        presenter.on_seek();

        // The active session survives; only dedup state was cleared.
        assert_eq!(presenter.phase(), Phase::Feedback);
        assert_eq!(surfaces.0.borrow().hides, 0);
    }
}
