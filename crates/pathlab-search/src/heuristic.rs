//! Heuristic estimates of distance-to-goal.

use pathlab_core::{Graph, Position};

use crate::metrics::{
    avg_distance_to_goals, max_distance_to_goals, min_distance_to_goals, sum_distance_to_goals,
};

/// How to aggregate straight-line distances to the goal set into a single
/// per-node estimate.
///
/// `Min` (nearest goal) is the default and the only admissible choice for
/// A* on Euclidean edge weights; the others are offered for experimenting
/// with greedy search behavior. With zero goals, `Min`/`Max` estimate
/// `f64::INFINITY` and `Avg`/`Sum` estimate `0.0` (see the corresponding
/// functions in [`crate::metrics`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Min,
    Max,
    Avg,
    Sum,
}

impl Heuristic {
    /// Aggregate estimate from `pos` to the goal set.
    pub fn estimate(self, pos: Position, goals: &[Position]) -> f64 {
        match self {
            Heuristic::Min => min_distance_to_goals(pos, goals),
            Heuristic::Max => max_distance_to_goals(pos, goals),
            Heuristic::Avg => avg_distance_to_goals(pos, goals),
            Heuristic::Sum => sum_distance_to_goals(pos, goals),
        }
    }

    /// Build the per-node estimate table for one search call.
    ///
    /// Recomputed fresh each call; the graph may have changed between
    /// calls, so the table is never cached.
    pub fn table(self, graph: &Graph) -> Vec<f64> {
        let goals = graph.goal_positions();
        graph
            .nodes()
            .iter()
            .map(|node| self.estimate(node.position, &goals))
            .collect()
    }
}
