//! Quiz persistence: the key-value capability and the quiz collection.

mod kv;
mod quiz_store;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use quiz_store::{AddQuizError, QuizStore, STORAGE_KEY};
