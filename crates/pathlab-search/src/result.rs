//! Search outcome and path reconstruction.

/// Predecessor-table sentinel: the node has no recorded parent (it is the
/// origin, or was never discovered).
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Outcome of one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Node indices from the reached goal back to the origin. Empty when
    /// no goal was reached.
    pub path: Vec<usize>,
    /// Algorithm-defined work counter, exposed for run comparison only.
    pub iterations: usize,
}

impl SearchResult {
    /// Whether a goal was reached.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Walk the predecessor table from `last` back to the root.
///
/// Returns the goal-to-origin index sequence, or an empty path when
/// `last` is `None`.
pub(crate) fn compute_path(order: &[usize], last: Option<usize>) -> Vec<usize> {
    let Some(last) = last else {
        return Vec::new();
    };
    let mut path = Vec::new();
    let mut idx = last;
    while idx != NO_PARENT {
        path.push(idx);
        idx = order[idx];
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_root() {
        let order = vec![NO_PARENT, 0, 1, 2];
        assert_eq!(compute_path(&order, Some(3)), vec![3, 2, 1, 0]);
        assert_eq!(compute_path(&order, Some(0)), vec![0]);
    }

    #[test]
    fn none_yields_empty() {
        assert_eq!(compute_path(&[NO_PARENT], None), Vec::<usize>::new());
    }
}
