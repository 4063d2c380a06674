use std::io::{self, Write};

use crate::view::html::LOGO_TEXT;

use super::IntroSurface;

const CLEAR_LINE: &str = "\r\x1b[2K";
const GLOW: &str = "\x1b[1;94m";
const RESET: &str = "\x1b[0m";
const CURSOR: char = '█';

/// Draws the intro on a single terminal line.
pub struct TerminalSurface<W: Write> {
    out: W,
    text: String,
    cursor: bool,
    glow: bool,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            text: String::new(),
            cursor: true,
            glow: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn redraw(&mut self) {
        let mut line = String::from(CLEAR_LINE);
        if self.glow {
            line.push_str(GLOW);
        }
        line.push_str(&self.text);
        if self.glow {
            line.push_str(RESET);
        }
        if self.cursor {
            line.push(CURSOR);
        }
        // A closed terminal is not worth failing the intro over.
        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> IntroSurface for TerminalSurface<W> {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.redraw();
    }

    fn hide_cursor(&mut self) {
        self.cursor = false;
        self.redraw();
    }

    fn set_glow(&mut self, on: bool) {
        self.glow = on;
        self.redraw();
    }

    fn show_logo(&mut self, _animated: bool) {
        self.glow = false;
        self.text = LOGO_TEXT.to_string();
        self.redraw();
    }

    fn reveal(&mut self, _animated: bool) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
