//! Static catalog of the available algorithms.
//!
//! The UI lists algorithms from [`all`], remembers the stable string id of
//! the user's pick, and later hands the id back to [`run`]. Ids survive
//! catalog reordering; an id the catalog no longer knows yields `None`
//! rather than an error, since a stale selection is an ordinary condition
//! after the catalog changes.

use pathlab_core::{Graph, GraphError};

use crate::heuristic::Heuristic;
use crate::observer::SearchObserver;
use crate::result::SearchResult;
use crate::{astar, bellman_ford, best_first, bfs, dfs, dijkstra};

/// The closed set of search algorithms, heuristic-bound where relevant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    Dfs,
    Bfs,
    Dijkstra,
    BellmanFord,
    BestFirst(Heuristic),
    AStar(Heuristic),
}

impl AlgorithmKind {
    /// Validate inputs, then run the algorithm to completion.
    ///
    /// Validation is the only fallible part: a structurally broken graph
    /// or an out-of-range origin fails fast before any traversal. An
    /// unreachable goal is not an error — the result carries an empty
    /// path.
    pub fn run<O: SearchObserver>(
        self,
        graph: &Graph,
        origin: usize,
        obs: &mut O,
    ) -> Result<SearchResult, GraphError> {
        graph.validate_origin(origin)?;
        log::debug!(
            "running {:?} on {} nodes from origin {}",
            self,
            graph.len(),
            origin
        );
        Ok(match self {
            AlgorithmKind::Dfs => dfs(graph, origin, obs),
            AlgorithmKind::Bfs => bfs(graph, origin, obs),
            AlgorithmKind::Dijkstra => dijkstra(graph, origin, obs),
            AlgorithmKind::BellmanFord => bellman_ford(graph, origin, obs),
            AlgorithmKind::BestFirst(h) => best_first(graph, origin, h, obs),
            AlgorithmKind::AStar(h) => astar(graph, origin, h, obs),
        })
    }
}

/// A catalog entry: stable id, display name, entry point.
#[derive(Copy, Clone, Debug)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: AlgorithmKind,
}

/// The catalog, in presentation order.
pub const ALGORITHMS: &[AlgorithmInfo] = &[
    AlgorithmInfo {
        id: "dfs",
        name: "Depth First Search (DFS)",
        kind: AlgorithmKind::Dfs,
    },
    AlgorithmInfo {
        id: "bfs",
        name: "Breadth First Search (BFS)",
        kind: AlgorithmKind::Bfs,
    },
    AlgorithmInfo {
        id: "dijkstra-algorithm",
        name: "Dijkstra's Algorithm",
        kind: AlgorithmKind::Dijkstra,
    },
    AlgorithmInfo {
        id: "bellman-ford-algorithm",
        name: "Bellman-Ford Algorithm",
        kind: AlgorithmKind::BellmanFord,
    },
    AlgorithmInfo {
        id: "best-first-search",
        name: "Best First Search",
        kind: AlgorithmKind::BestFirst(Heuristic::Min),
    },
    AlgorithmInfo {
        id: "a-star",
        name: "A*",
        kind: AlgorithmKind::AStar(Heuristic::Min),
    },
];

/// All catalog entries, in presentation order.
#[inline]
pub fn all() -> &'static [AlgorithmInfo] {
    ALGORITHMS
}

/// Find a catalog entry by id. `None` for unknown (possibly stale) ids.
pub fn lookup(id: &str) -> Option<&'static AlgorithmInfo> {
    ALGORITHMS.iter().find(|info| info.id == id)
}

/// Run the algorithm registered under `id`.
///
/// Returns `Ok(None)` when the id is unknown; validation failures are
/// the only errors.
pub fn run<O: SearchObserver>(
    id: &str,
    graph: &Graph,
    origin: usize,
    obs: &mut O,
) -> Result<Option<SearchResult>, GraphError> {
    match lookup(id) {
        Some(info) => info.kind.run(graph, origin, obs).map(Some),
        None => Ok(None),
    }
}

/// Run every catalog entry silently, for side-by-side comparison.
pub fn run_all(
    graph: &Graph,
    origin: usize,
) -> Result<Vec<(&'static AlgorithmInfo, SearchResult)>, GraphError> {
    graph.validate_origin(origin)?;
    let mut results = Vec::with_capacity(ALGORITHMS.len());
    for info in ALGORITHMS {
        results.push((info, info.kind.run(graph, origin, &mut ())?));
    }
    Ok(results)
}
