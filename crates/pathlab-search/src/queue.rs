//! Sorted priority queue with in-place weight relaxation.
//!
//! Entries are stored sorted *descending* by weight so that [`pop`]
//! removes the minimum from the tail in O(1). Insertion is a linear scan;
//! graphs built on an interactive canvas stay small enough (tens to low
//! hundreds of nodes) that a heap would buy nothing. Ties are broken by
//! insertion order: among equal weights, the entry added first pops first.
//!
//! [`pop`]: PriorityQueue::pop

/// A node index paired with its current frontier weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueueEntry {
    pub item: usize,
    pub weight: f64,
}

impl QueueEntry {
    /// Create an entry.
    #[inline]
    pub const fn new(item: usize, weight: f64) -> Self {
        Self { item, weight }
    }
}

/// Outcome of [`PriorityQueue::lower_weight`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// The entry's weight was strictly lowered and the entry repositioned.
    Lowered,
    /// The entry already had an equal or lower weight; nothing changed.
    Unchanged,
    /// No entry for the item is queued — it was already extracted, so
    /// there is nothing left to relax.
    Missing,
}

/// A collection of `(item, weight)` entries supporting extract-min.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    entries: Vec<QueueEntry>,
}

impl PriorityQueue {
    /// Build a queue from entries taken verbatim, without sorting.
    ///
    /// Callers must supply entries already in descending-weight order; in
    /// practice every search seeds the queue with exactly one entry.
    pub fn new(entries: Vec<QueueEntry>) -> Self {
        Self { entries }
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, keeping the storage sorted descending by weight.
    ///
    /// An entry ties with existing equal-weight entries by landing in
    /// front of them in storage, i.e. behind them in pop order.
    pub fn add(&mut self, entry: QueueEntry) {
        let at = self
            .entries
            .iter()
            .position(|e| e.weight <= entry.weight)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, entry);
    }

    /// Remove and return the minimum-weight entry, or `None` when empty.
    #[inline]
    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.entries.pop()
    }

    /// Lower `item`'s weight to `weight` if that is strictly smaller,
    /// repositioning the entry to keep the sort order.
    ///
    /// This is Dijkstra's decrease-key. A missing item is not an error:
    /// it means the entry was already extracted and finalized.
    pub fn lower_weight(&mut self, item: usize, weight: f64) -> Relaxation {
        let Some(at) = self.entries.iter().position(|e| e.item == item) else {
            return Relaxation::Missing;
        };
        if self.entries[at].weight <= weight {
            return Relaxation::Unchanged;
        }
        let mut entry = self.entries.remove(at);
        entry.weight = weight;
        self.add(entry);
        Relaxation::Lowered
    }
}
