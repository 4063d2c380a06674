//! Top-N ranking of the catalog by editor rating.

use std::fmt;

use serde::Serialize;

use crate::entity::{PromptRecord, RecordId};

/// Number of rows shown in the leaderboard overlay.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Rank marker shown in front of a leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
    Plain(usize),
}

impl Badge {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Badge::Gold,
            2 => Badge::Silver,
            3 => Badge::Bronze,
            n => Badge::Plain(n),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Gold => write!(f, "🥇"),
            Badge::Silver => write!(f, "🥈"),
            Badge::Bronze => write!(f, "🥉"),
            Badge::Plain(n) => write!(f, "#{}", n),
        }
    }
}

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub badge: Badge,
    pub id: RecordId,
    pub title: String,
    pub rating: f64,
}

impl LeaderboardEntry {
    /// The first row gets the gold accent.
    pub fn is_top(&self) -> bool {
        self.rank == 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank the `n` best-rated records.
///
/// Missing ratings count as zero. The sort is stable, so equal ratings keep
/// their catalog order.
pub fn top_n(records: &[PromptRecord], n: usize) -> Leaderboard {
    let mut sorted: Vec<&PromptRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.score().total_cmp(&a.score()));

    let entries = sorted
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(index, record)| {
            let rank = index + 1;
            LeaderboardEntry {
                rank,
                badge: Badge::for_rank(rank),
                id: record.id.clone(),
                title: record.title.clone(),
                rating: record.score(),
            }
        })
        .collect();

    Leaderboard { entries }
}
