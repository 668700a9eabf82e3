//! Recent searches and the slots that offer them for re-submission.

use tracing::debug;

pub const DEFAULT_HISTORY_SLOTS: usize = 3;

/// Queries in submission order, most recent last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn from_entries(entries: Vec<String>, capacity: usize) -> Self {
        Self { entries, capacity }
    }

    /// Append `query` unless it is already among the last `capacity` entries,
    /// dropping the oldest entries past capacity
    pub fn record(&mut self, query: &str) -> bool {
        let recent = self.entries.len().saturating_sub(self.capacity);
        if self.entries[recent..].iter().any(|e| e == query) {
            return false;
        }
        self.entries.push(query.to_string());
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl Default for SearchHistory {
    /// Room for the current query plus one entry per slot
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SLOTS + 1)
    }
}

/// One history slot: the button text and the query value its form submits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySlot {
    pub text: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySlots {
    slots: Vec<HistorySlot>,
}

impl HistorySlots {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![HistorySlot::default(); count],
        }
    }

    /// Fill the slots with the queries before the current one (the last entry),
    /// most recent first. Slots with no matching entry keep their content.
    pub fn apply(&mut self, history: &[String]) -> usize {
        let prior = &history[..history.len().saturating_sub(1)];
        let mut filled = 0;
        for (slot, query) in self.slots.iter_mut().zip(prior.iter().rev()) {
            slot.text = query.clone();
            slot.query = query.clone();
            filled += 1;
        }
        debug!(filled, slots = self.slots.len(), "history slots updated");
        filled
    }

    pub fn slots(&self) -> &[HistorySlot] {
        &self.slots
    }

    /// 1-based, matching the `histN`/`queryN` element ids
    pub fn slot(&self, number: usize) -> Option<&HistorySlot> {
        number.checked_sub(1).and_then(|i| self.slots.get(i))
    }
}

impl Default for HistorySlots {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SLOTS)
    }
}
