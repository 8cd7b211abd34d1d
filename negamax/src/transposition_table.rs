use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The true value is at least `value`.
    Lower,
    /// The true value is at most `value`.
    Upper,
}

#[derive(Debug, Clone)]
pub struct TableEntry<A> {
    pub depth: usize,
    pub value: i32,
    pub bound: Bound,
    pub best_action: Option<A>,
}

/// Results of previously searched states keyed by their transposition entry.
///
/// The table is cleared once it reaches capacity.
pub struct TranspositionTable<K, A> {
    entries: HashMap<K, TableEntry<A>>,
    capacity: usize,
}

impl<K, A> TranspositionTable<K, A>
where
    K: Hash + Eq,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, key: &K) -> Option<&TableEntry<A>> {
        self.entries.get(key)
    }

    pub fn store(&mut self, key: K, entry: TableEntry<A>) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            trace!("Transposition table reached {} entries, clearing", self.capacity);
            self.entries.clear();
        }

        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
