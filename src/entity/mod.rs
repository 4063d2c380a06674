mod prompt;

pub use prompt::{PromptRecord, RecordId};
