//! Session-scoped "intro already shown" flag.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub trait SessionStore {
    fn intro_shown(&self) -> bool;

    fn mark_intro_shown(&mut self) -> Result<()>;

    /// Forget the flag, as if the session had ended.
    fn clear(&mut self) -> Result<()>;
}

/// Flag that lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemorySession {
    shown: bool,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn intro_shown(&self) -> bool {
        self.shown
    }

    fn mark_intro_shown(&mut self) -> Result<()> {
        self.shown = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.shown = false;
        Ok(())
    }
}

/// Flag kept as a marker file.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Marker in the OS temp directory, which outlives the process but not
    /// the login session.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("prompt-gallery-intro-shown"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    fn intro_shown(&self) -> bool {
        self.path.exists()
    }

    fn mark_intro_shown(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, "true")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
