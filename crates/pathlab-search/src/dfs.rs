use pathlab_core::Graph;

use crate::observer::SearchObserver;
use crate::result::{NO_PARENT, SearchResult, compute_path};

/// Depth-first search from `origin` to the first goal reached.
///
/// The frontier is a LIFO stack, so exploration dives along the highest
/// recently-discovered neighbor index. The returned path is not
/// guaranteed shortest. Iterations count stack pops.
pub fn dfs<O: SearchObserver>(graph: &Graph, origin: usize, obs: &mut O) -> SearchResult {
    let mut discovered = vec![false; graph.len()];
    let mut order = vec![NO_PARENT; graph.len()];
    let mut stack = vec![origin];
    let mut iterations = 0;
    let mut found = None;

    discovered[origin] = true;

    while let Some(idx) = stack.pop() {
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
            stack.push(next);
        }
    }

    SearchResult {
        path: compute_path(&order, found),
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_core::{Node, Position};

    fn chain_to_goal() -> Graph {
        let mut g = Graph::default();
        for i in 0..3 {
            g.add_node(Node::normal(Position::new(i as f64, 0.0)));
        }
        g.add_node(Node::goal(Position::new(3.0, 0.0)));
        for i in 1..4 {
            g.connect(i - 1, i);
        }
        g
    }

    #[test]
    fn chain_returns_goal_to_origin() {
        let result = dfs(&chain_to_goal(), 0, &mut ());
        assert_eq!(result.path, vec![3, 2, 1, 0]);
        assert_eq!(result.iterations, 4);
    }

    #[test]
    fn dives_into_last_discovered_branch() {
        // 0 connects to 1 and 2; both connect to goal 3. DFS pops the
        // later-discovered neighbor (2) first.
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::normal(Position::new(1.0, 1.0)));
        g.add_node(Node::normal(Position::new(1.0, -1.0)));
        g.add_node(Node::goal(Position::new(2.0, 0.0)));
        g.connect(0, 1);
        g.connect(0, 2);
        g.connect(1, 3);
        g.connect(2, 3);

        let result = dfs(&g, 0, &mut ());
        assert_eq!(result.path, vec![3, 2, 0]);
    }

    #[test]
    fn no_goal_yields_empty_path() {
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::normal(Position::new(1.0, 0.0)));
        g.connect(0, 1);

        let result = dfs(&g, 0, &mut ());
        assert!(!result.is_found());
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn origin_is_goal() {
        let mut g = Graph::default();
        g.add_node(Node::goal(Position::ZERO));
        let result = dfs(&g, 0, &mut ());
        assert_eq!(result.path, vec![0]);
        assert_eq!(result.iterations, 1);
    }
}
