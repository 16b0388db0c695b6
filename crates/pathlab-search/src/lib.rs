//! Graph-search algorithms for interactively built canvas graphs.
//!
//! This crate implements the pathfinding engine behind the canvas UI:
//!
//! - **DFS** and **BFS** ([`dfs`], [`bfs`]) — unweighted traversal
//! - **Best-First Search** ([`best_first`]) — greedy descent on a heuristic
//! - **Dijkstra** ([`dijkstra`]) — cost-ordered search with relaxation
//! - **A\*** ([`astar`]) — cost plus heuristic
//! - **Bellman-Ford** ([`bellman_ford`]) — full edge-relaxation passes
//!
//! All algorithms share one contract: a read-only [`Graph`], an origin
//! index, and a [`SearchObserver`] receiving discovery/visit/found events
//! synchronously during traversal. They return a [`SearchResult`] whose
//! path runs from the reached goal *back* to the origin, empty when no
//! goal is reachable. Callers going through [`registry`] get eager input
//! validation; direct callers are expected to pass a validated graph and
//! an in-range origin.
//!
//! | Algorithm | Frontier | Weights |
//! |---|---|---|
//! | DFS / BFS | stack / queue | none |
//! | Best-First | [`PriorityQueue`] on `h` | heuristic only |
//! | Dijkstra | [`PriorityQueue`] on `g` | Euclidean |
//! | A\* | [`PriorityQueue`] on `g + h` | Euclidean + heuristic |
//! | Bellman-Ford | none (edge passes) | Euclidean |

mod astar;
mod bellman_ford;
mod best_first;
mod bfs;
mod dfs;
mod dijkstra;
mod heuristic;
mod metrics;
mod observer;
mod queue;
pub mod registry;
mod result;

pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use best_first::best_first;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use heuristic::Heuristic;
pub use metrics::{
    avg_distance_to_goals, euclidean, max_distance_to_goals, min_distance_to_goals, path_distance,
    sum_distance_to_goals,
};
pub use observer::{EventLog, SearchEvent, SearchObserver};
pub use queue::{PriorityQueue, QueueEntry, Relaxation};
pub use registry::{AlgorithmInfo, AlgorithmKind};
pub use result::SearchResult;

pub use pathlab_core::{Graph, GraphError, Node, NodeKind, Position};
