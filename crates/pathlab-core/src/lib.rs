//! **pathlab-core** — Graph model and geometry for canvas-based graph search.
//!
//! This crate provides the foundational types used across the *pathlab*
//! workspace: a continuous 2D position, nodes tagged as normal or final
//! (goal) nodes, and an undirected adjacency-matrix graph with eager
//! structural validation.

pub mod geom;
pub mod graph;

pub use geom::Position;
pub use graph::{Graph, GraphError, Node, NodeKind};
