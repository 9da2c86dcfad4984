use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of answer options every quiz carries.
pub const NUM_OPTIONS: usize = 4;

/// Labels shown next to the options, in stored order.
pub const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

/// A single timestamped question.
///
/// `time` is the playback second the quiz triggers at; the store keeps at
/// most one quiz per `time`. `options` order is meaningful (labelled A–D)
/// and survives persistence unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub time: u64,
    pub question: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
}

impl Quiz {
    /// Create a quiz with a freshly assigned id.
    pub fn new(
        time: u64,
        question: String,
        options: [String; NUM_OPTIONS],
        correct_answer: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            question,
            options,
            correct_answer,
        }
    }

    /// Text of the correct option, or an empty string when the record is
    /// out of shape.
    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Whether the record satisfies the store invariants: non-empty
    /// question, four non-empty options, answer index in bounds.
    pub fn is_valid(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.iter().all(|opt| !opt.trim().is_empty())
            && self.correct_answer < NUM_OPTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quiz {
        Quiz::new(
            30,
            "What is 2 + 2?".to_string(),
            [
                "3".to_string(),
                "4".to_string(),
                "5".to_string(),
                "6".to_string(),
            ],
            1,
        )
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_correct_option() {
        assert_eq!(sample().correct_option(), "4");
    }

    #[test]
    fn test_correct_option_out_of_shape() {
        let mut quiz = sample();
        quiz.correct_answer = 9;
        assert_eq!(quiz.correct_option(), "");
    }

    #[test]
    fn test_is_valid() {
        assert!(sample().is_valid());

        let mut quiz = sample();
        quiz.question = "   ".to_string();
        assert!(!quiz.is_valid());

        let mut quiz = sample();
        quiz.options[2] = String::new();
        assert!(!quiz.is_valid());

        let mut quiz = sample();
        quiz.correct_answer = NUM_OPTIONS;
        assert!(!quiz.is_valid());
    }
}
