//! hg-graph: graph/model layer for hyperg.
//!
//! Provides:
//! - Core graph data structures (Node, Edge, NodeDescription, Nodes, Graph)
//! - Connected-component labeling (Components)
//! - Derived queries (neighbors, fringe, subgraph, core nodes)
//!
//! # Example
//!
//! ```
//! use hg_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("a", "b");
//! graph.add_edge("a", "c");
//!
//! assert_eq!(graph.number_of_nodes(), 3);
//! assert!(graph.neighbors("a").contains("b"));
//! assert!(graph.is_connected());
//! ```

pub mod components;
pub mod edge;
pub mod graph;
pub mod nodes;

// Re-exports for ergonomics
pub use components::Components;
pub use edge::Edge;
pub use graph::Graph;
pub use nodes::{DegreeOrder, Node, NodeDescription, Nodes, UNLABELED};
