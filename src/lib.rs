pub mod catalog;
pub mod cli;
pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod gallery;
pub mod host;
pub mod intro;
pub mod leaderboard;
pub mod navigation;
pub mod search;
pub mod view;

pub use catalog::{CatalogStore, DataSource, FileSource, JsonSource};
pub use config::GalleryConfig;
pub use entity::{PromptRecord, RecordId};
pub use error::{GalleryError, Result};
pub use gallery::Gallery;
pub use host::{Host, MemoryHost};
pub use navigation::JumpOutcome;
