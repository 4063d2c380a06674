use crate::entity::{PromptRecord, RecordId};

/// Ordered list of prompt records for the current session.
///
/// The only way to change the content is [`CatalogStore::replace`]; every
/// view (cards, filter results, leaderboard) is derived fresh from it.
#[derive(Debug, Default, Clone)]
pub struct CatalogStore {
    records: Vec<PromptRecord>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the whole catalog.
    pub fn replace(&mut self, records: Vec<PromptRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    /// First record whose id matches. Ids are assumed unique.
    pub fn get(&self, id: &RecordId) -> Option<&PromptRecord> {
        self.records.iter().find(|r| r.id.same_as(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
