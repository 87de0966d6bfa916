//! Bounded stack of past generations used for backward stepping.
//!
//! The store never grows past its capacity. When it is full, the older half
//! is discarded in one batch before the next push. Entries are never evicted
//! one at a time.

pub use chronolife_data::HistoryEntry;
use chronolife_data::CellStates;

/// Default number of generations kept for backward stepping.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Smallest capacity for which halving still leaves an entry behind.
pub const MIN_HISTORY_CAPACITY: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    /// Oldest first; the top of the stack is the last element.
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStore {
    /// Creates an empty store. Capacities below [`MIN_HISTORY_CAPACITY`] are raised.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_HISTORY_CAPACITY);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a generation, compacting first when the store is full.
    pub fn push(&mut self, generation: u64, cells: CellStates) {
        if self.entries.len() >= self.capacity {
            self.compact();
        }
        self.entries.push(HistoryEntry::new(generation, cells));
    }

    /// Keeps only the newest `capacity / 2` entries.
    fn compact(&mut self) {
        let keep = self.capacity / 2;
        let discard = self.entries.len().saturating_sub(keep);
        self.entries.drain(..discard);
        tracing::debug!(discarded = discard, kept = keep, "History compacted");
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from newest to oldest, in the order `pop` would return them.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_generations(store: &mut HistoryStore, range: std::ops::Range<u64>) {
        for generation in range {
            store.push(generation, CellStates::new(1, 1));
        }
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut store = HistoryStore::default();
        push_generations(&mut store, 0..3);
        assert_eq!(store.peek().map(|e| e.generation), Some(2));
        assert_eq!(store.pop().map(|e| e.generation), Some(2));
        assert_eq!(store.pop().map(|e| e.generation), Some(1));
        assert_eq!(store.pop().map(|e| e.generation), Some(0));
        assert!(store.pop().is_none());
    }

    #[test]
    fn test_fills_to_capacity_without_compacting() {
        let mut store = HistoryStore::new(100);
        push_generations(&mut store, 0..100);
        assert_eq!(store.count(), 100);
        assert_eq!(store.iter().last().map(|e| e.generation), Some(0));
    }

    #[test]
    fn test_push_on_full_store_halves_it() {
        let mut store = HistoryStore::new(100);
        push_generations(&mut store, 0..101);
        assert_eq!(store.count(), 51);
        // Generations 50..=99 survived, plus the new 100.
        assert_eq!(store.iter().last().map(|e| e.generation), Some(50));
        assert_eq!(store.peek().map(|e| e.generation), Some(100));
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut store = HistoryStore::new(10);
        for generation in 0..1_000 {
            store.push(generation, CellStates::new(1, 1));
            assert!(store.count() <= store.capacity());
        }
    }

    #[test]
    fn test_odd_capacity_keeps_floor_half() {
        let mut store = HistoryStore::new(5);
        push_generations(&mut store, 0..6);
        // 5 entries -> keep 2 (3, 4) -> push 5
        let generations: Vec<u64> = store.iter().map(|e| e.generation).collect();
        assert_eq!(generations, vec![5, 4, 3]);
    }

    #[test]
    fn test_tiny_capacity_is_raised() {
        let store = HistoryStore::new(0);
        assert_eq!(store.capacity(), MIN_HISTORY_CAPACITY);
    }

    #[test]
    fn test_clear() {
        let mut store = HistoryStore::default();
        push_generations(&mut store, 0..10);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
    }
}
