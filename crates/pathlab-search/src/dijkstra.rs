use pathlab_core::Graph;

use crate::metrics::euclidean;
use crate::observer::SearchObserver;
use crate::queue::{PriorityQueue, QueueEntry, Relaxation};
use crate::result::{NO_PARENT, SearchResult, compute_path};

/// Dijkstra's algorithm over Euclidean edge weights.
///
/// Frontier weights are exact accumulated path costs. Rediscovering a
/// queued node through a cheaper route relaxes its weight in place via
/// [`PriorityQueue::lower_weight`]; the predecessor table is updated only
/// when the weight actually dropped. The first goal popped is therefore
/// the cheapest reachable one. Iterations count queue pops.
pub fn dijkstra<O: SearchObserver>(graph: &Graph, origin: usize, obs: &mut O) -> SearchResult {
    let mut visited = vec![false; graph.len()];
    let mut discovered = vec![false; graph.len()];
    let mut order = vec![NO_PARENT; graph.len()];
    let mut queue = PriorityQueue::new(vec![QueueEntry::new(origin, 0.0)]);
    let mut iterations = 0;
    let mut found = None;

    visited[origin] = true;

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
            if visited[next] {
                continue;
            }
            let weight = entry.weight
                + euclidean(graph.nodes()[idx].position, graph.nodes()[next].position);

            if !discovered[next] {
                queue.add(QueueEntry::new(next, weight));
                discovered[next] = true;
                obs.discovered(next);
                order[next] = idx;
            } else if queue.lower_weight(next, weight) == Relaxation::Lowered {
                order[next] = idx;
            }
        }

        visited[idx] = true;
    }

    SearchResult {
        path: compute_path(&order, found),
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::path_distance;
    use pathlab_core::{Node, Position};

    fn positions(g: &Graph, path: &[usize]) -> Vec<Position> {
        path.iter().map(|&i| g.nodes()[i].position).collect()
    }

    #[test]
    fn unit_chain() {
        let mut g = Graph::default();
        for i in 0..3 {
            g.add_node(Node::normal(Position::new(i as f64, 0.0)));
        }
        g.add_node(Node::goal(Position::new(3.0, 0.0)));
        for i in 1..4 {
            g.connect(i - 1, i);
        }

        let result = dijkstra(&g, 0, &mut ());
        assert_eq!(result.path, vec![3, 2, 1, 0]);
        assert_eq!(path_distance(&positions(&g, &result.path)), 3.0);
    }

    #[test]
    fn relaxation_reroutes_through_cheaper_parent() {
        // Goal 3 is first discovered from 2 (total ~7.1), then relaxed
        // when 1 is popped (total 6.0). The predecessor must follow.
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::normal(Position::new(5.0, 0.0)));
        g.add_node(Node::normal(Position::new(0.0, 2.0)));
        g.add_node(Node::goal(Position::new(5.0, 1.0)));
        g.connect(0, 1);
        g.connect(0, 2);
        g.connect(1, 3);
        g.connect(2, 3);

        let result = dijkstra(&g, 0, &mut ());
        assert_eq!(result.path, vec![3, 1, 0]);
        let total = path_distance(&positions(&g, &result.path));
        assert!((total - 6.0).abs() < 1e-9);
    }

    #[test]
    fn picks_cheapest_goal_among_several() {
        // Goal 2 is two cheap hops away (total 4), goal 1 one long hop (9).
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::goal(Position::new(9.0, 0.0)));
        g.add_node(Node::goal(Position::new(2.0, 2.0)));
        g.add_node(Node::normal(Position::new(2.0, 0.0)));
        g.connect(0, 1);
        g.connect(0, 3);
        g.connect(3, 2);

        let result = dijkstra(&g, 0, &mut ());
        assert_eq!(result.path, vec![2, 3, 0]);
    }

    #[test]
    fn no_goal_yields_empty_path() {
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::normal(Position::new(1.0, 0.0)));
        g.connect(0, 1);

        let result = dijkstra(&g, 0, &mut ());
        assert!(result.path.is_empty());
        assert_eq!(result.iterations, 2);
    }
}
