//! View projection of the catalog.
//!
//! Turns records into host-independent card structures. A host decides how
//! to display them; [`html`] serializes them to the page markup.

pub mod html;
pub mod utils;

use serde::Serialize;
use tracing::debug;

use crate::entity::{PromptRecord, RecordId};

pub use self::utils::{card_dom_id, format_rating};

/// Text shown instead of cards when nothing matches.
pub const NO_RESULTS: &str = "No prompts found._";

/// Highest rating the star row can show.
pub const MAX_STARS: f64 = 5.0;

/// Full stars plus an optional half star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u32,
    pub half: bool,
}

impl StarRating {
    /// Any non-zero fractional part earns a half star, however small.
    pub fn from_rating(rating: f64) -> Self {
        let clamped = if rating.is_finite() {
            rating.clamp(0.0, MAX_STARS)
        } else {
            0.0
        };
        Self {
            full: clamped.floor() as u32,
            half: clamped.fract() != 0.0,
        }
    }

    pub fn glyphs(&self) -> String {
        let mut stars = "★".repeat(self.full as usize);
        if self.half {
            stars.push('½');
        }
        stars
    }
}

/// One prompt card as the host will show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub dom_id: String,
    pub id: RecordId,
    pub title: String,
    pub image: String,
    pub prompt: String,
    pub tags: Vec<String>,
    pub rating: f64,
    pub stars: StarRating,
}

impl Card {
    pub fn from_record(record: &PromptRecord) -> Self {
        let rating = record.score();
        Self {
            dom_id: card_dom_id(&record.id),
            id: record.id.clone(),
            title: record.title.clone(),
            image: record.image.clone(),
            prompt: record.prompt.clone(),
            tags: record.tags.clone(),
            rating,
            stars: StarRating::from_rating(rating),
        }
    }
}

/// Full content of the card container. Every render replaces it whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "lowercase")]
pub enum CardGrid {
    /// The "no results" placeholder.
    #[default]
    Empty,
    Cards(Vec<Card>),
}

impl CardGrid {
    pub fn cards(&self) -> &[Card] {
        match self {
            CardGrid::Empty => &[],
            CardGrid::Cards(cards) => cards,
        }
    }

    pub fn find(&self, dom_id: &str) -> Option<&Card> {
        self.cards().iter().find(|c| c.dom_id == dom_id)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardGrid::Empty)
    }
}

/// Project records into cards, in input order.
pub fn render<'a, I>(records: I) -> CardGrid
where
    I: IntoIterator<Item = &'a PromptRecord>,
{
    let cards: Vec<Card> = records.into_iter().map(Card::from_record).collect();
    debug!(cards = cards.len(), "rendered card grid");

    if cards.is_empty() {
        CardGrid::Empty
    } else {
        CardGrid::Cards(cards)
    }
}
