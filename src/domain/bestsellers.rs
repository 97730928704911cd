//! Run-scoped bestseller snapshot.

use serde::Deserialize;

/// One listed book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BestsellerEntry {
    pub title: String,
    pub rank: u32,
}

/// A snapshot of one bestseller list, fetched once and shared by every title.
///
/// Entries keep the order the service returned them in (rank order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestsellerList {
    pub name: String,
    pub entries: Vec<BestsellerEntry>,
}

impl BestsellerList {
    pub fn new(name: impl Into<String>, entries: Vec<BestsellerEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// The empty snapshot used when the list could not be fetched.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rank of `title`, matched case-insensitively against the full listed title.
    ///
    /// First match in list order wins. Linear, but lists hold ~15 entries.
    pub fn rank_of(&self, title: &str) -> Option<u32> {
        let needle = title.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.title.to_lowercase() == needle)
            .map(|e| e.rank)
    }
}
