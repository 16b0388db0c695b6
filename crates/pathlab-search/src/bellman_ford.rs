use pathlab_core::Graph;

use crate::metrics::{euclidean, path_distance};
use crate::observer::SearchObserver;
use crate::result::{NO_PARENT, SearchResult, compute_path};

/// Bellman-Ford over Euclidean edge weights.
///
/// Runs up to `|V|` relaxation passes over every adjacency-matrix cell,
/// exiting early once a pass changes no distance. Iterations count the
/// edge cells scanned, so each undirected edge contributes two per pass.
/// No `visited` events are emitted; `discovered` fires once for every
/// edge endpoint, reachable or not, and `found` fires for each goal whose
/// reconstructed candidate path leads back to the origin. Among those
/// candidates the globally nearest goal wins.
pub fn bellman_ford<O: SearchObserver>(graph: &Graph, origin: usize, obs: &mut O) -> SearchResult {
    let n = graph.len();
    let mut discovered = vec![false; n];
    let mut order = vec![NO_PARENT; n];
    let mut distances = vec![f64::INFINITY; n];
    let mut iterations = 0;

    distances[origin] = 0.0;
    discovered[origin] = true;
    obs.discovered(origin);

    for pass in 0..n {
        let mut updated = false;

        for i in 0..n {
            for j in graph.neighbors(i) {
                iterations += 1;

                let distance = distances[i]
                    + euclidean(graph.nodes()[i].position, graph.nodes()[j].position);

                if distance < distances[j] {
                    updated = true;
                    distances[j] = distance;
                    order[j] = i;
                }
                if !discovered[j] {
                    discovered[j] = true;
                    obs.discovered(j);
                }
            }
        }

        if !updated {
            log::trace!("bellman-ford converged after {} passes", pass + 1);
            break;
        }
    }

    // Pick the nearest goal whose candidate path actually reaches the
    // origin; goals left disconnected in the predecessor table lose.
    let mut best = None;
    let mut best_distance = f64::INFINITY;

    for idx in graph.final_indices() {
        let candidate = compute_path(&order, Some(idx));
        if candidate.last() != Some(&origin) {
            continue;
        }
        let points: Vec<_> = candidate.iter().map(|&i| graph.nodes()[i].position).collect();
        let distance = path_distance(&points);

        obs.found(idx);

        if distance < best_distance {
            best = Some(idx);
            best_distance = distance;
        }
    }

    SearchResult {
        path: compute_path(&order, best),
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathlab_core::{Node, Position};

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

        let result = bellman_ford(&g, 0, &mut ());
        assert_eq!(result.path, vec![3, 2, 1, 0]);
    }

    #[test]
    fn prefers_globally_nearest_goal() {
        // Goal 1 sits one hop away at distance 9; goal 4 is farther in
        // index order but nearer by distance (2 + 2).
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::goal(Position::new(9.0, 0.0)));
        g.add_node(Node::normal(Position::new(2.0, 0.0)));
        g.add_node(Node::normal(Position::new(0.0, 5.0)));
        g.add_node(Node::goal(Position::new(2.0, 2.0)));
        g.connect(0, 1);
        g.connect(0, 2);
        g.connect(0, 3);
        g.connect(2, 4);

        let result = bellman_ford(&g, 0, &mut ());
        assert_eq!(result.path, vec![4, 2, 0]);
    }

    #[test]
    fn unreachable_goal_is_skipped() {
        // Goal 2 floats in its own component; goal 3 is connected.
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::normal(Position::new(1.0, 0.0)));
        g.add_node(Node::goal(Position::new(50.0, 50.0)));
        g.add_node(Node::goal(Position::new(2.0, 0.0)));
        g.connect(0, 1);
        g.connect(1, 3);

        let result = bellman_ford(&g, 0, &mut ());
        assert_eq!(result.path, vec![3, 1, 0]);
    }

    #[test]
    fn all_goals_unreachable_yields_empty_path() {
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::goal(Position::new(5.0, 0.0)));

        let result = bellman_ford(&g, 0, &mut ());
        assert!(result.path.is_empty());
    }

    #[test]
    fn iterations_count_edge_cells_per_pass() {
        // One undirected edge = two matrix cells. The first pass relaxes,
        // the second confirms convergence: 2 cells x 2 passes.
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::ZERO));
        g.add_node(Node::goal(Position::new(1.0, 0.0)));
        g.connect(0, 1);

        let result = bellman_ford(&g, 0, &mut ());
        assert_eq!(result.iterations, 4);
        assert_eq!(result.path, vec![1, 0]);
    }
}
