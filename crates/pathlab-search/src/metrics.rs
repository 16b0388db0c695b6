//! Distance metrics and goal-set aggregators.

use pathlab_core::Position;

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Total length of a polyline: the sum of consecutive pairwise distances.
///
/// Zero for sequences of length ≤ 1.
pub fn path_distance(points: &[Position]) -> f64 {
    points.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}

/// Distance from `pos` to the nearest goal.
///
/// Returns `f64::INFINITY` for an empty goal set, so a goal-less
/// heuristic search degrades to insertion-order exploration.
pub fn min_distance_to_goals(pos: Position, goals: &[Position]) -> f64 {
    goals
        .iter()
        .map(|&g| euclidean(pos, g))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `pos` to the farthest goal.
///
/// Returns `f64::INFINITY` for an empty goal set, matching
/// [`min_distance_to_goals`].
pub fn max_distance_to_goals(pos: Position, goals: &[Position]) -> f64 {
    if goals.is_empty() {
        return f64::INFINITY;
    }
    goals
        .iter()
        .map(|&g| euclidean(pos, g))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Sum of distances from `pos` to every goal. Zero for an empty goal set.
pub fn sum_distance_to_goals(pos: Position, goals: &[Position]) -> f64 {
    goals.iter().map(|&g| euclidean(pos, g)).sum()
}

/// Mean distance from `pos` to the goals. Zero for an empty goal set.
pub fn avg_distance_to_goals(pos: Position, goals: &[Position]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    sum_distance_to_goals(pos, goals) / goals.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_345() {
        let d = euclidean(Position::new(0.0, 0.0), Position::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn path_distance_short_sequences() {
        assert_eq!(path_distance(&[]), 0.0);
        assert_eq!(path_distance(&[Position::new(2.0, 2.0)]), 0.0);
    }

    #[test]
    fn path_distance_sums_segments() {
        let points = [
            Position::new(0.0, 0.0),
            Position::new(3.0, 4.0),
            Position::new(3.0, 10.0),
        ];
        assert_eq!(path_distance(&points), 11.0);
    }

    #[test]
    fn aggregators() {
        let goals = [Position::new(3.0, 4.0), Position::new(0.0, 10.0)];
        let p = Position::ZERO;
        assert_eq!(min_distance_to_goals(p, &goals), 5.0);
        assert_eq!(max_distance_to_goals(p, &goals), 10.0);
        assert_eq!(sum_distance_to_goals(p, &goals), 15.0);
        assert_eq!(avg_distance_to_goals(p, &goals), 7.5);
    }

    #[test]
    fn empty_goal_set_sentinels() {
        let p = Position::new(1.0, 1.0);
        assert_eq!(min_distance_to_goals(p, &[]), f64::INFINITY);
        assert_eq!(max_distance_to_goals(p, &[]), f64::INFINITY);
        assert_eq!(sum_distance_to_goals(p, &[]), 0.0);
        assert_eq!(avg_distance_to_goals(p, &[]), 0.0);
    }
}
