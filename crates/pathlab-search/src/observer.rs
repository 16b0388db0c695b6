//! Observation of search progress.
//!
//! Algorithms report progress synchronously through a [`SearchObserver`].
//! The presentation layer replays the emitted events with artificial delay
//! to animate a run; the engine itself never waits. Observers must not
//! mutate the graph under search.

/// Receiver for traversal progress events.
///
/// All methods default to no-ops, so an observer only implements the
/// events it cares about.
pub trait SearchObserver {
    /// A node entered the frontier for the first time.
    fn discovered(&mut self, _idx: usize) {}

    /// A node was taken off the frontier and examined.
    fn visited(&mut self, _idx: usize) {}

    /// A goal node was reached. Most algorithms fire this at most once;
    /// Bellman-Ford fires it for every reachable goal candidate.
    fn found(&mut self, _idx: usize) {}
}

/// Silent observer.
impl SearchObserver for () {}

/// One recorded progress event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    Discovered(usize),
    Visited(usize),
    Found(usize),
}

/// Observer that records every event in order, for replay or assertions.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in emission order.
    #[inline]
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Drop all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SearchObserver for EventLog {
    fn discovered(&mut self, idx: usize) {
        self.events.push(SearchEvent::Discovered(idx));
    }

    fn visited(&mut self, idx: usize) {
        self.events.push(SearchEvent::Visited(idx));
    }

    fn found(&mut self, idx: usize) {
        self.events.push(SearchEvent::Found(idx));
    }
}
