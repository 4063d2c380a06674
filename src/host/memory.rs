use std::collections::{BTreeSet, HashMap};

use crate::error::{GalleryError, Result};
use crate::leaderboard::Leaderboard;
use crate::view::html::{self, Decorations, Page};
use crate::view::CardGrid;

use super::Host;

/// Host that keeps the page state in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    /// `None` until the first render.
    grid: Option<CardGrid>,
    leaderboard: Leaderboard,
    clock: String,
    search: String,
    leaderboard_open: bool,
    classes: HashMap<String, BTreeSet<String>>,
    copy_labels: HashMap<String, String>,
    clipboard: Option<String>,
    clipboard_denied: bool,
    scrolled: Vec<String>,
    renders: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose clipboard always refuses writes.
    pub fn without_clipboard() -> Self {
        Self {
            clipboard_denied: true,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> Option<&CardGrid> {
        self.grid.as_ref()
    }

    /// Number of card elements currently shown.
    pub fn card_count(&self) -> usize {
        self.grid.as_ref().map_or(0, |g| g.cards().len())
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn has_class(&self, dom_id: &str, class: &str) -> bool {
        self.classes
            .get(dom_id)
            .is_some_and(|set| set.contains(class))
    }

    pub fn copy_button_label(&self, dom_id: &str) -> Option<&str> {
        self.copy_labels.get(dom_id).map(String::as_str)
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Elements scrolled into view, oldest first.
    pub fn scrolled(&self) -> &[String] {
        &self.scrolled
    }

    /// How many times the card container was replaced.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    fn element_exists(&self, dom_id: &str) -> bool {
        self.grid
            .as_ref()
            .is_some_and(|g| g.find(dom_id).is_some())
    }

    /// Write the current state as a standalone HTML document.
    pub fn to_html(&self, title: &str) -> String {
        let empty = CardGrid::Cards(Vec::new());
        html::page(
            &Page {
                title,
                search_value: &self.search,
                clock: &self.clock,
                grid: self.grid.as_ref().unwrap_or(&empty),
                leaderboard: &self.leaderboard,
                leaderboard_open: self.leaderboard_open,
            },
            self,
        )
    }
}

impl Decorations for MemoryHost {
    fn classes(&self, dom_id: &str) -> Vec<String> {
        self.classes
            .get(dom_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn copy_label(&self, dom_id: &str) -> Option<String> {
        self.copy_labels.get(dom_id).cloned()
    }
}

impl Host for MemoryHost {
    fn show_cards(&mut self, grid: &CardGrid) {
        // Fresh elements: nothing carries over from the previous render.
        self.classes.clear();
        self.copy_labels.clear();
        self.grid = Some(grid.clone());
        self.renders += 1;
    }

    fn show_leaderboard(&mut self, board: &Leaderboard) {
        self.leaderboard = board.clone();
    }

    fn set_clock(&mut self, text: &str) {
        self.clock = text.to_string();
    }

    fn search_value(&self) -> String {
        self.search.clone()
    }

    fn set_search_value(&mut self, value: &str) {
        self.search = value.to_string();
    }

    fn set_leaderboard_open(&mut self, open: bool) {
        self.leaderboard_open = open;
    }

    fn is_leaderboard_open(&self) -> bool {
        self.leaderboard_open
    }

    fn scroll_into_view(&mut self, dom_id: &str) -> bool {
        if !self.element_exists(dom_id) {
            return false;
        }
        self.scrolled.push(dom_id.to_string());
        true
    }

    fn add_class(&mut self, dom_id: &str, class: &str) -> bool {
        if !self.element_exists(dom_id) {
            return false;
        }
        self.classes
            .entry(dom_id.to_string())
            .or_default()
            .insert(class.to_string());
        true
    }

    fn remove_class(&mut self, dom_id: &str, class: &str) {
        if let Some(set) = self.classes.get_mut(dom_id) {
            set.remove(class);
        }
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard_denied {
            return Err(GalleryError::Clipboard("clipboard access denied".to_string()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn set_copy_label(&mut self, dom_id: &str, label: Option<&str>) {
        match label {
            Some(label) => {
                self.copy_labels.insert(dom_id.to_string(), label.to_string());
            }
            None => {
                self.copy_labels.remove(dom_id);
            }
        }
    }
}
