//! One-time animated intro that gates the page reveal.
//!
//! The script types a tagline, erases it, types the repository link, erases
//! back to the `#`, makes it glow, then swaps in the logo and reveals the rest
//! of the page. It plays once per session; later loads jump straight to the
//! final state.

mod session;
mod terminal;

pub use session::{FileSession, MemorySession, SessionStore};
pub use terminal::TerminalSurface;

use std::time::Duration;

use tracing::info;

use crate::error::Result;

pub const TAGLINE: &str = "Create your imagination.....!";
pub const REPO_LINK: &str = "#https://github.com/mohiuddin0035/";

/// Where the intro draws.
pub trait IntroSurface {
    /// Replace the typed text.
    fn set_text(&mut self, text: &str);

    fn hide_cursor(&mut self);

    fn set_glow(&mut self, on: bool);

    /// Replace the typed text with the final logo.
    fn show_logo(&mut self, animated: bool);

    /// Show the subtitle and search box.
    fn reveal(&mut self, animated: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntroStep {
    Pause(Duration),
    /// Append one character at a time.
    Type { text: String, per_char: Duration },
    /// Delete from the end until `keep` characters remain.
    Backspace { keep: usize, per_char: Duration },
    HideCursor,
    Glow(bool),
    ShowLogo,
    Reveal,
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// The intro as shipped with the gallery.
pub fn default_script() -> Vec<IntroStep> {
    vec![
        IntroStep::Pause(ms(500)),
        IntroStep::Type {
            text: TAGLINE.to_string(),
            per_char: ms(70),
        },
        IntroStep::Pause(ms(1500)),
        IntroStep::Backspace {
            keep: 0,
            per_char: ms(30),
        },
        IntroStep::Pause(ms(300)),
        IntroStep::Type {
            text: REPO_LINK.to_string(),
            per_char: ms(70),
        },
        IntroStep::Pause(ms(800)),
        IntroStep::Backspace {
            keep: 1,
            per_char: ms(60),
        },
        IntroStep::HideCursor,
        IntroStep::Glow(true),
        IntroStep::Pause(ms(1200)),
        IntroStep::Glow(false),
        IntroStep::ShowLogo,
        IntroStep::Reveal,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroOutcome {
    Played,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    steps: Vec<IntroStep>,
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self::new(default_script())
    }
}

impl IntroSequencer {
    pub fn new(steps: Vec<IntroStep>) -> Self {
        Self { steps }
    }

    /// Wall time of a full playback.
    pub fn total_duration(&self) -> Duration {
        let mut len = 0usize;
        let mut total = Duration::ZERO;
        for step in &self.steps {
            match step {
                IntroStep::Pause(d) => total += *d,
                IntroStep::Type { text, per_char } => {
                    let n = text.chars().count();
                    len += n;
                    total += *per_char * n as u32;
                }
                IntroStep::Backspace { keep, per_char } => {
                    let n = len.saturating_sub(*keep);
                    len -= n;
                    total += *per_char * n as u32;
                }
                _ => {}
            }
        }
        total
    }

    /// Run every step in order. There is no resumption if this future is
    /// dropped halfway.
    pub async fn play<S: IntroSurface>(&self, surface: &mut S) {
        let mut text = String::new();
        for step in &self.steps {
            match step {
                IntroStep::Pause(d) => tokio::time::sleep(*d).await,
                IntroStep::Type { text: typed, per_char } => {
                    for c in typed.chars() {
                        text.push(c);
                        surface.set_text(&text);
                        tokio::time::sleep(*per_char).await;
                    }
                }
                IntroStep::Backspace { keep, per_char } => {
                    while text.chars().count() > *keep {
                        text.pop();
                        surface.set_text(&text);
                        tokio::time::sleep(*per_char).await;
                    }
                }
                IntroStep::HideCursor => surface.hide_cursor(),
                IntroStep::Glow(on) => surface.set_glow(*on),
                IntroStep::ShowLogo => surface.show_logo(true),
                IntroStep::Reveal => surface.reveal(true),
            }
        }
    }

    /// Jump to the final state without animation.
    pub fn skip<S: IntroSurface>(&self, surface: &mut S) {
        surface.hide_cursor();
        surface.show_logo(false);
        surface.reveal(false);
    }

    /// Play once per session, skip afterwards.
    pub async fn start<F, S>(&self, session: &mut F, surface: &mut S) -> Result<IntroOutcome>
    where
        F: SessionStore,
        S: IntroSurface,
    {
        if session.intro_shown() {
            info!("intro already shown this session, skipping");
            self.skip(surface);
            return Ok(IntroOutcome::Skipped);
        }

        self.play(surface).await;
        session.mark_intro_shown()?;
        Ok(IntroOutcome::Played)
    }
}
