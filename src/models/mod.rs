//! Data model for the quiz timeline.

mod quiz;

pub use quiz::{NUM_OPTIONS, OPTION_LABELS, Quiz};
