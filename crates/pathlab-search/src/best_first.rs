use pathlab_core::Graph;

use crate::heuristic::Heuristic;
use crate::observer::SearchObserver;
use crate::queue::{PriorityQueue, QueueEntry};
use crate::result::{NO_PARENT, SearchResult, compute_path};

/// Greedy best-first search: always expand the frontier node with the
/// smallest heuristic estimate.
///
/// Ignores accumulated cost entirely, so the result can be arbitrarily
/// worse than the shortest path; each node is discovered at most once, so
/// the search always terminates on a finite graph. Iterations count
/// queue pops.
pub fn best_first<O: SearchObserver>(
    graph: &Graph,
    origin: usize,
    heuristic: Heuristic,
    obs: &mut O,
) -> SearchResult {
    let mut discovered = vec![false; graph.len()];
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
            queue.add(QueueEntry::new(next, htable[next]));
            order[next] = idx;
            discovered[next] = true;
            obs.discovered(next);
        }
    }

    SearchResult {
        path: compute_path(&order, found),
        iterations,
    }
}
