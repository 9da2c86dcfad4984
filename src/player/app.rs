//! Host application state for the demo player.
//!
//! Owns the core instances (store, monitor, presenter) plus the
//! TUI-side state: which screen is up, the add-quiz form, the quiz-list
//! cursor, and the pending feedback-dismissal deadline.

use crossterm::event::KeyCode;
use tokio::time::Instant;
use uuid::Uuid;

use crate::models::NUM_OPTIONS;
use crate::playback::{PlaybackEvent, PlaybackMonitor};
use crate::presenter::{FEEDBACK_DELAY, Phase, QuizPresenter, SubmitOutcome};
use crate::store::QuizStore;
use crate::surface::{AlwaysConfirm, ConfirmPrompt, NeverConfirm};

use super::screen::SharedOverlay;
use super::sim::{SimVideo, VideoNotification};

/// What the host is showing besides the video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Transport controls and the quiz list.
    Player,
    /// The add-quiz form.
    Editor,
    /// Replace confirmation for a form submitted at an occupied second.
    ConfirmReplace { draft: QuizDraft },
    /// Delete confirmation for the quiz under the list cursor.
    ConfirmDelete { id: Uuid },
}

/// Which editor field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Time,
    Question,
    Option(usize),
    Correct,
}

impl EditorField {
    fn next(self) -> Self {
        match self {
            EditorField::Time => EditorField::Question,
            EditorField::Question => EditorField::Option(0),
            EditorField::Option(index) if index + 1 < NUM_OPTIONS => {
                EditorField::Option(index + 1)
            }
            EditorField::Option(_) => EditorField::Correct,
            EditorField::Correct => EditorField::Time,
        }
    }

    fn previous(self) -> Self {
        match self {
            EditorField::Time => EditorField::Correct,
            EditorField::Question => EditorField::Time,
            EditorField::Option(0) => EditorField::Question,
            EditorField::Option(index) => EditorField::Option(index - 1),
            EditorField::Correct => EditorField::Option(NUM_OPTIONS - 1),
        }
    }
}

/// The add-quiz form. Fields hold raw text; validation happens on
/// submission.
#[derive(Debug, Default)]
pub struct EditorForm {
    pub time: String,
    pub question: String,
    pub options: [String; NUM_OPTIONS],
    pub correct: usize,
    pub focus: EditorField,
    pub error: Option<String>,
}

impl EditorForm {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            EditorField::Time => {
                if c.is_ascii_digit() {
                    self.time.push(c);
                }
            }
            EditorField::Question => self.question.push(c),
            EditorField::Option(index) => self.options[index].push(c),
            EditorField::Correct => {
                if let Some(index) = answer_index_for(c) {
                    self.correct = index;
                }
            }
        }
    }

    pub fn pop_char(&mut self) {
        self.error = None;
        match self.focus {
            EditorField::Time => {
                self.time.pop();
            }
            EditorField::Question => {
                self.question.pop();
            }
            EditorField::Option(index) => {
                self.options[index].pop();
            }
            EditorField::Correct => {}
        }
    }
}

/// Map `a`–`d` or `1`–`4` onto an option index.
fn answer_index_for(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        'a' => Some(0),
        'b' => Some(1),
        'c' => Some(2),
        'd' => Some(3),
        digit @ '1'..='4' => Some(digit as usize - '1' as usize),
        _ => None,
    }
}

/// A parsed form submission waiting on replace confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    pub time: u64,
    pub question: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
}

/// Everything the demo player holds between events.
pub struct PlayerApp {
    pub store: QuizStore,
    pub presenter: QuizPresenter,
    pub monitor: PlaybackMonitor,
    pub video: SimVideo,
    pub overlay: SharedOverlay,
    pub mode: Mode,
    pub editor: EditorForm,
    pub list_cursor: usize,
    pub status: Option<String>,
    pub dismiss_at: Option<Instant>,
    pub should_quit: bool,
    resume_after_editor: bool,
}

impl PlayerApp {
    pub fn new(
        store: QuizStore,
        presenter: QuizPresenter,
        video: SimVideo,
        overlay: SharedOverlay,
    ) -> Self {
        Self {
            store,
            presenter,
            monitor: PlaybackMonitor::new(),
            video,
            overlay,
            mode: Mode::Player,
            editor: EditorForm::default(),
            list_cursor: 0,
            status: None,
            dismiss_at: None,
            should_quit: false,
            resume_after_editor: false,
        }
    }

    /// Feed a video surface notification through the monitor into the
    /// presenter.
    pub fn handle_notification(&mut self, notification: VideoNotification) {
        let event = match notification {
            VideoNotification::PositionChanged(position) => {
                self.monitor.position_changed(position)
            }
            VideoNotification::Seeked => Some(self.monitor.seeked()),
        };

        match event {
            Some(PlaybackEvent::Tick(second)) => self.presenter.on_tick(second, &self.store),
            Some(PlaybackEvent::Reset) => self.presenter.on_seek(),
            None => {}
        }
    }

    /// The pending feedback-dismissal timer fired.
    pub fn handle_dismiss_due(&mut self) {
        self.dismiss_at = None;
        self.presenter.dismiss();
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match &self.mode {
            Mode::Player => self.handle_player_key(key),
            Mode::Editor => self.handle_editor_key(key),
            Mode::ConfirmReplace { draft } => {
                let draft = draft.clone();
                self.handle_confirm_replace_key(key, draft);
            }
            Mode::ConfirmDelete { id } => {
                let id = *id;
                self.handle_confirm_delete_key(key, id);
            }
        }
    }

    fn handle_player_key(&mut self, key: KeyCode) {
        match self.presenter.phase() {
            Phase::AwaitingAnswer => self.handle_overlay_key(key),
            // The dismissal timer owns this phase.
            Phase::Feedback => {}
            Phase::Idle => self.handle_transport_key(key),
        }
    }

    fn handle_overlay_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.overlay.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.overlay.select_next(),
            KeyCode::Char(c @ ('a' | 'b' | 'c' | 'd')) => {
                self.overlay.select(c as usize - 'a' as usize);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let selected = self.overlay.selected();
                if let SubmitOutcome::Graded { .. } = self.presenter.submit(selected) {
                    self.dismiss_at = Some(Instant::now() + FEEDBACK_DELAY);
                }
            }
            _ => {}
        }
    }

    fn handle_transport_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(' ') => self.video.toggle_playing(),
            KeyCode::Left => self.video.seek_by(-5.0),
            KeyCode::Right => self.video.seek_by(5.0),
            KeyCode::Char('e') => self.open_editor(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn move_cursor_down(&mut self) {
        let max = self.store.len().saturating_sub(1);
        self.list_cursor = (self.list_cursor + 1).min(max);
    }

    fn move_cursor_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
    }

    fn request_delete(&mut self) {
        if let Some(quiz) = self.store.list().get(self.list_cursor) {
            self.mode = Mode::ConfirmDelete { id: quiz.id };
        }
    }

    fn open_editor(&mut self) {
        self.resume_after_editor = self.video.is_playing();
        self.video.set_playing(false);
        self.mode = Mode::Editor;
    }

    fn close_editor(&mut self) {
        // Never resume over a presentation's pause.
        if self.resume_after_editor && self.presenter.phase() == Phase::Idle {
            self.video.set_playing(true);
        }
        self.mode = Mode::Player;
    }

    fn handle_editor_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.close_editor(),
            KeyCode::Tab | KeyCode::Down => self.editor.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.editor.focus_previous(),
            KeyCode::Enter => self.submit_editor(),
            KeyCode::Backspace => self.editor.pop_char(),
            KeyCode::Char(c) => self.editor.push_char(c),
            _ => {}
        }
    }

    fn submit_editor(&mut self) {
        let Ok(time) = self.editor.time.trim().parse::<u64>() else {
            self.editor.error =
                Some("Time must be a non-negative whole number of seconds".to_string());
            return;
        };

        let draft = QuizDraft {
            time,
            question: self.editor.question.trim().to_string(),
            options: self.editor.options.clone().map(|opt| opt.trim().to_string()),
            correct_answer: self.editor.correct,
        };

        if self.store.find_by_time(time).is_some() {
            self.mode = Mode::ConfirmReplace { draft };
            return;
        }

        self.commit_draft(draft, &mut NeverConfirm);
    }

    fn commit_draft(&mut self, draft: QuizDraft, confirm: &mut dyn ConfirmPrompt) {
        match self.store.add(
            draft.time,
            &draft.question,
            draft.options,
            draft.correct_answer,
            confirm,
        ) {
            Ok(quiz) => {
                // Reset the form for the next quiz, correct answer back to A.
                self.editor = EditorForm::default();
                self.status = Some(format!("Added quiz at {}s", quiz.time));
                self.close_editor();
            }
            Err(err) => {
                self.editor.error = Some(err.to_string());
                self.mode = Mode::Editor;
            }
        }
    }

    fn handle_confirm_replace_key(&mut self, key: KeyCode, draft: QuizDraft) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.commit_draft(draft, &mut AlwaysConfirm);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Editor;
            }
            _ => {}
        }
    }

    fn handle_confirm_delete_key(&mut self, key: KeyCode, id: Uuid) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.store.delete(id);
                self.list_cursor = self.list_cursor.min(self.store.len().saturating_sub(1));
                self.status = Some("Deleted quiz".to_string());
                self.mode = Mode::Player;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Player;
            }
            _ => {}
        }
    }
}
