use std::collections::VecDeque;

use pathlab_core::Graph;

use crate::observer::SearchObserver;
use crate::result::{NO_PARENT, SearchResult, compute_path};

/// Breadth-first search from `origin` to the first goal reached.
///
/// The frontier is a FIFO queue, so the path to the first goal visited
/// has the minimum hop count. Iterations count queue pops.
pub fn bfs<O: SearchObserver>(graph: &Graph, origin: usize, obs: &mut O) -> SearchResult {
    let mut discovered = vec![false; graph.len()];
    let mut order = vec![NO_PARENT; graph.len()];
    let mut queue = VecDeque::from([origin]);
    let mut iterations = 0;
    let mut found = None;

    discovered[origin] = true;

    while let Some(idx) = queue.pop_front() {
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
            order[next] = idx;
            discovered[next] = true;
            obs.discovered(next);
            queue.push_back(next);
        }
    }

    SearchResult {
        path: compute_path(&order, found),
        iterations,
    }
}
