//! The display surface the gallery drives.
//!
//! In a browser this is the DOM. [`MemoryHost`] keeps the same state in
//! plain structs so it can be inspected by tests and written out as HTML.

mod memory;

pub use memory::MemoryHost;

use crate::error::Result;
use crate::leaderboard::Leaderboard;
use crate::view::CardGrid;

/// Class added to a card after a leaderboard jump.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Class added to a card once it has scrolled into view.
pub const VISIBLE_CLASS: &str = "visible";

pub trait Host: Send + 'static {
    /// Replace the card container content.
    fn show_cards(&mut self, grid: &CardGrid);

    /// Replace the leaderboard list content.
    fn show_leaderboard(&mut self, board: &Leaderboard);

    fn set_clock(&mut self, text: &str);

    /// Current value of the search input.
    fn search_value(&self) -> String;

    fn set_search_value(&mut self, value: &str);

    fn set_leaderboard_open(&mut self, open: bool);

    fn is_leaderboard_open(&self) -> bool;

    /// Scroll an element to the viewport center. `false` if it does not exist.
    fn scroll_into_view(&mut self, dom_id: &str) -> bool;

    /// `false` if the element does not exist.
    fn add_class(&mut self, dom_id: &str, class: &str) -> bool;

    /// Removing an absent class is a no-op.
    fn remove_class(&mut self, dom_id: &str, class: &str);

    fn write_clipboard(&mut self, text: &str) -> Result<()>;

    /// Set the copy button label of a card; `None` restores the idle label.
    fn set_copy_label(&mut self, dom_id: &str, label: Option<&str>);
}
