use pathlab_core::Graph;

use crate::heuristic::Heuristic;
use crate::metrics::euclidean;
use crate::observer::SearchObserver;
use crate::queue::{PriorityQueue, QueueEntry};
use crate::result::{NO_PARENT, SearchResult, compute_path};

/// A* search: frontier ordered by cost-so-far plus heuristic estimate.
///
/// A node's cost-so-far is fixed when it is first discovered and never
/// relaxed on a cheaper rediscovery, unlike [`crate::dijkstra`]. This is
/// inherited behavior kept deliberately; with the straight-line
/// [`Heuristic::Min`] estimate (which is consistent for Euclidean edge
/// weights) the discovery order favors cheap routes anyway, but exotic
/// heuristics can yield suboptimal paths. Iterations count queue pops.
pub fn astar<O: SearchObserver>(
    graph: &Graph,
    origin: usize,
    heuristic: Heuristic,
    obs: &mut O,
) -> SearchResult {
    let mut discovered = vec![false; graph.len()];
    let mut cost = vec![0.0_f64; graph.len()];
    let mut order = vec![NO_PARENT; graph.len()];
    let htable = heuristic.table(graph);
    let mut queue = PriorityQueue::new(vec![QueueEntry::new(origin, htable[origin])]);
    let mut iterations = 0;
    let mut found = None;

    discovered[origin] = true;

    while let Some(entry) = queue.pop() {
        let idx = entry.item;
        iterations += 1;
        obs.visited(idx);

        if graph.nodes()[idx].is_final() {
            obs.found(idx);
            found = Some(idx);
            break;
        }

        for next in graph.neighbors(idx) {
            if discovered[next] {
                continue;
            }
            cost[next] =
                cost[idx] + euclidean(graph.nodes()[idx].position, graph.nodes()[next].position);
            order[next] = idx;
            discovered[next] = true;
            obs.discovered(next);

            queue.add(QueueEntry::new(next, cost[next] + htable[next]));
        }
    }

    SearchResult {
        path: compute_path(&order, found),
        iterations,
    }
}
