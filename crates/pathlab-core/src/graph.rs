//! The adjacency-matrix graph built interactively on the canvas.
//!
//! A [`Graph`] is an ordered sequence of [`Node`]s plus a square, symmetric
//! boolean matrix recording undirected edges. Nodes are identified by their
//! index in the sequence; indices are stable for the lifetime of one search
//! call. The mutating methods ([`Graph::add_node`], [`Graph::connect`],
//! [`Graph::disconnect`]) preserve the matrix invariants by construction;
//! graphs received from outside (e.g. deserialized snapshots) should be
//! checked with [`Graph::validate`] before searching.

use thiserror::Error;

use crate::geom::Position;

/// Role of a node in a search: an ordinary waypoint or a goal.
///
/// A graph may contain any number of `Final` nodes; each is a candidate
/// goal and every search terminates on the first one it reaches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    #[default]
    Normal,
    Final,
}

/// A graph node: its kind plus its position on the canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
}

impl Node {
    /// Create an ordinary node at `position`.
    #[inline]
    pub const fn normal(position: Position) -> Self {
        Self {
            kind: NodeKind::Normal,
            position,
        }
    }

    /// Create a goal node at `position`.
    #[inline]
    pub const fn goal(position: Position) -> Self {
        Self {
            kind: NodeKind::Final,
            position,
        }
    }

    /// Whether this node is a goal.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.kind == NodeKind::Final
    }
}

/// Structural defects reported by [`Graph::validate`] and origin-bounds
/// checks at the search boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("adjacency matrix has {matrix} rows but the graph has {nodes} nodes")]
    SizeMismatch { nodes: usize, matrix: usize },
    #[error("adjacency matrix row {row} has {len} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("adjacency matrix is asymmetric at ({i}, {j})")]
    Asymmetric { i: usize, j: usize },
    #[error("origin index {origin} out of range for graph of {len} nodes")]
    OriginOutOfRange { origin: usize, len: usize },
}

/// An undirected graph over canvas positions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
    matrix: Vec<Vec<bool>>,
}

impl Graph {
    /// Build a graph from parts. The parts are taken as-is; call
    /// [`validate`](Self::validate) to check the matrix invariants.
    pub fn new(nodes: Vec<Node>, matrix: Vec<Vec<bool>>) -> Self {
        Self { nodes, matrix }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `idx`, or `None` if out of range.
    #[inline]
    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// All nodes, in index order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether an edge connects `i` and `j`.
    #[inline]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.matrix[i][j]
    }

    /// Neighbors of `i` in ascending index order.
    ///
    /// Column order is observable: it fixes the discovery order of every
    /// search algorithm.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix[i]
            .iter()
            .enumerate()
            .filter_map(|(j, &edge)| edge.then_some(j))
    }

    /// Indices of all `Final` nodes, in index order.
    pub fn final_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_final())
            .map(|(idx, _)| idx)
    }

    /// Positions of all `Final` nodes, in index order.
    pub fn goal_positions(&self) -> Vec<Position> {
        self.final_indices()
            .map(|idx| self.nodes[idx].position)
            .collect()
    }

    /// Append a node with no edges, returning its index.
    pub fn add_node(&mut self, node: Node) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        for row in self.matrix.iter_mut() {
            row.push(false);
        }
        self.matrix.push(vec![false; idx + 1]);
        idx
    }

    /// Add the undirected edge `i`–`j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn connect(&mut self, i: usize, j: usize) {
        self.matrix[i][j] = true;
        self.matrix[j][i] = true;
    }

    /// Remove the undirected edge `i`–`j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn disconnect(&mut self, i: usize, j: usize) {
        self.matrix[i][j] = false;
        self.matrix[j][i] = false;
    }

    /// Check the matrix invariants: one row per node, square, symmetric.
    ///
    /// Graphs built through [`add_node`](Self::add_node) and
    /// [`connect`](Self::connect) hold these by construction; snapshots
    /// arriving from the outside world may not.
    pub fn validate(&self) -> Result<(), GraphError> {
        let n = self.nodes.len();
        if self.matrix.len() != n {
            return Err(GraphError::SizeMismatch {
                nodes: n,
                matrix: self.matrix.len(),
            });
        }
        for (row, cols) in self.matrix.iter().enumerate() {
            if cols.len() != n {
                return Err(GraphError::RaggedMatrix {
                    row,
                    len: cols.len(),
                    expected: n,
                });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if self.matrix[i][j] != self.matrix[j][i] {
                    return Err(GraphError::Asymmetric { i, j });
                }
            }
        }
        Ok(())
    }

    /// Validate the graph and check `origin` is a valid node index.
    pub fn validate_origin(&self, origin: usize) -> Result<(), GraphError> {
        self.validate()?;
        if origin >= self.nodes.len() {
            return Err(GraphError::OriginOutOfRange {
                origin,
                len: self.nodes.len(),
            });
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let mut g = Graph::default();
        g.add_node(Node::normal(Position::new(0.0, 0.0)));
        g.add_node(Node::goal(Position::new(3.0, 4.0)));
        g.connect(0, 1);

        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert!(back.validate().is_ok());
    }
}
