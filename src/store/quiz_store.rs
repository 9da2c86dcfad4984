//! Ordered quiz collection with persistence.

use std::fmt;

use uuid::Uuid;

use crate::models::{NUM_OPTIONS, OPTION_LABELS, Quiz};
use crate::surface::ConfirmPrompt;

use super::KeyValueStore;

/// Fixed key the whole collection is persisted under.
pub const STORAGE_KEY: &str = "video_quizzes";

/// Why an add was rejected. No rejection mutates or persists anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddQuizError {
    /// The question text was empty.
    EmptyQuestion,
    /// The option at this index was empty.
    EmptyOption(usize),
    /// The correct-answer index was outside the four options.
    AnswerOutOfRange(usize),
    /// A quiz already exists at this second and replacement was declined.
    ReplaceDeclined(u64),
}

impl fmt::Display for AddQuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddQuizError::EmptyQuestion => write!(f, "Question must not be empty"),
            AddQuizError::EmptyOption(index) => {
                let label = OPTION_LABELS.get(*index).copied().unwrap_or('?');
                write!(f, "Option {} must not be empty", label)
            }
            AddQuizError::AnswerOutOfRange(index) => {
                write!(f, "Correct answer index {} is out of range", index)
            }
            AddQuizError::ReplaceDeclined(time) => {
                write!(f, "Kept the existing quiz at {} seconds", time)
            }
        }
    }
}

impl std::error::Error for AddQuizError {}

/// Owner of all quiz definitions for the session.
///
/// The collection is always sorted ascending by trigger time and holds at
/// most one quiz per second. Every successful mutation is persisted to the
/// backing key-value store before it returns.
pub struct QuizStore {
    quizzes: Vec<Quiz>,
    storage: Box<dyn KeyValueStore>,
}

impl QuizStore {
    /// Build a store over `storage`, restoring any persisted collection.
    ///
    /// A missing, unparsable, or shape-invalid record yields an empty
    /// collection rather than an error.
    pub fn restore(storage: Box<dyn KeyValueStore>) -> Self {
        let quizzes = match storage.get(STORAGE_KEY) {
            Some(raw) => decode(&raw),
            None => Vec::new(),
        };

        Self { quizzes, storage }
    }

    /// Validate and insert a new quiz.
    ///
    /// When a quiz already exists at `time`, `confirm` is asked whether to
    /// replace it; a declined replacement rejects the add and leaves the
    /// store untouched. On success the collection is re-sorted, persisted,
    /// and the created quiz returned.
    pub fn add(
        &mut self,
        time: u64,
        question: &str,
        options: [String; NUM_OPTIONS],
        correct_answer: usize,
        confirm: &mut dyn ConfirmPrompt,
    ) -> Result<Quiz, AddQuizError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AddQuizError::EmptyQuestion);
        }
        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(AddQuizError::EmptyOption(index));
        }
        if correct_answer >= NUM_OPTIONS {
            return Err(AddQuizError::AnswerOutOfRange(correct_answer));
        }

        if self.find_by_time(time).is_some() {
            let message = format!("A quiz already exists at {} seconds. Replace it?", time);
            if !confirm.confirm(&message) {
                return Err(AddQuizError::ReplaceDeclined(time));
            }
            self.quizzes.retain(|quiz| quiz.time != time);
        }

        let quiz = Quiz::new(time, question.to_string(), options, correct_answer);
        self.quizzes.push(quiz.clone());
        self.quizzes.sort_by_key(|quiz| quiz.time);
        self.persist();

        Ok(quiz)
    }

    /// Remove the quiz with `id` if present. Idempotent; an unknown id is
    /// a no-op and writes nothing.
    pub fn delete(&mut self, id: Uuid) {
        let before = self.quizzes.len();
        self.quizzes.retain(|quiz| quiz.id != id);
        if self.quizzes.len() != before {
            self.persist();
        }
    }

    /// Exact-match lookup by trigger second.
    pub fn find_by_time(&self, second: u64) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.time == second)
    }

    /// Canonical snapshot for rendering, ascending by time.
    pub fn list(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Serialize the whole collection under [`STORAGE_KEY`].
    pub fn persist(&mut self) {
        match serde_json::to_string(&self.quizzes) {
            Ok(json) => self.storage.set(STORAGE_KEY, &json),
            Err(err) => log::warn!("failed to serialize quiz collection: {}", err),
        }
    }
}

/// Parse a persisted collection. Anything malformed yields an empty one.
fn decode(raw: &str) -> Vec<Quiz> {
    let mut quizzes: Vec<Quiz> = match serde_json::from_str(raw) {
        Ok(quizzes) => quizzes,
        Err(err) => {
            log::warn!("ignoring malformed quiz collection: {}", err);
            return Vec::new();
        }
    };

    if quizzes.iter().any(|quiz| !quiz.is_valid()) {
        log::warn!("ignoring quiz collection with out-of-shape records");
        return Vec::new();
    }

    quizzes.sort_by_key(|quiz| quiz.time);

    if quizzes.windows(2).any(|pair| pair[0].time == pair[1].time) {
        log::warn!("ignoring quiz collection with duplicate trigger times");
        return Vec::new();
    }

    quizzes
}
