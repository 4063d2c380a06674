use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::leaderboard::DEFAULT_LEADERBOARD_SIZE;

/// Configuration for the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Catalog JSON file
    pub data: PathBuf,
    /// Rows in the leaderboard overlay
    pub leaderboard_size: usize,
    /// Wait after closing the overlay before scrolling to a card
    pub scroll_delay_ms: u64,
    /// How long a jumped-to card stays highlighted
    pub highlight_ms: u64,
    /// How long the copy button shows its confirmation
    pub copy_feedback_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data/prompts.json"),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
            scroll_delay_ms: 300,
            highlight_ms: 2000,
            copy_feedback_ms: 2000,
        }
    }
}

impl GalleryConfig {
    /// Load from a YAML file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}
