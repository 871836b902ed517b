//! Connected-component labeling.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::Graph;
use crate::nodes::{Node, UNLABELED};

/// A full partition of a graph's nodes into connected components.
///
/// The partition is computed once in [`Components::new`] and is a snapshot:
/// the borrow it holds keeps the graph unmodified for the lifetime of the
/// labeling, and there is no re-sync once it is dropped.
///
/// Component ids start at 0 and are assigned in the order roots are first
/// encountered while iterating the registry; two nodes share an id iff a
/// path of edges connects them.
#[derive(Debug)]
pub struct Components<'g> {
    graph: &'g Graph,
    component_ids: HashMap<Node, i32>,
    component_sizes: HashMap<i32, usize>,
    components_count: usize,
}

impl<'g> Components<'g> {
    /// Label every node of `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        let mut this = Self {
            graph,
            component_ids: HashMap::with_capacity(graph.number_of_nodes()),
            component_sizes: HashMap::new(),
            components_count: 0,
        };
        for node in graph.nodes() {
            if !this.is_labeled(node) {
                this.label_from(node);
                this.components_count += 1;
            }
        }
        debug!(
            nodes = graph.number_of_nodes(),
            components = this.components_count,
            "component labeling complete"
        );
        this
    }

    /// The graph this partition was computed over.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    fn is_labeled(&self, node: &str) -> bool {
        self.component_ids.contains_key(node)
    }

    /// Flood the component of `root` with the next id. Uses an explicit
    /// stack; recursion depth would otherwise scale with component diameter.
    fn label_from(&mut self, root: &Node) {
        let graph = self.graph;
        let id = self.components_count as i32;
        self.component_ids.insert(root.clone(), id);
        let mut size = 1usize;

        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            for neighbor in graph.neighbors(&node) {
                if !self.component_ids.contains_key(neighbor.as_str()) {
                    self.component_ids.insert(neighbor.clone(), id);
                    size += 1;
                    stack.push(neighbor.clone());
                }
            }
        }
        self.component_sizes.insert(id, size);
    }

    /// Component id assigned to `node`, or -1 for nodes absent from the
    /// graph at construction time.
    pub fn node_component_id(&self, node: &str) -> i32 {
        self.component_ids.get(node).copied().unwrap_or(UNLABELED)
    }

    /// Number of nodes labeled `component_id`; 0 for unknown ids.
    pub fn component_size(&self, component_id: i32) -> usize {
        self.component_sizes.get(&component_id).copied().unwrap_or(0)
    }

    pub fn components_count(&self) -> usize {
        self.components_count
    }

    /// Id of the largest component by node count, ties going to the
    /// smallest id; -1 when the graph had no nodes.
    pub fn max_component_id(&self) -> i32 {
        let mut best = UNLABELED;
        let mut best_size = 0usize;
        for id in 0..self.components_count as i32 {
            let size = self.component_size(id);
            if size > best_size {
                best = id;
                best_size = size;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge_and_isolated_node() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_node("c");
        g.add_edge("a", "b");

        let components = Components::new(&g);
        assert_eq!(components.components_count(), 2);

        let ab = components.node_component_id("a");
        assert_eq!(components.node_component_id("b"), ab);
        assert_eq!(components.component_size(ab), 2);

        let c = components.node_component_id("c");
        assert_ne!(c, ab);
        assert_eq!(components.component_size(c), 1);
    }

    #[test]
    fn ids_follow_registry_order() {
        let mut g = Graph::new();
        g.add_node("first");
        g.add_node("second");
        g.add_edge("second", "third");

        let components = Components::new(&g);
        assert_eq!(components.node_component_id("first"), 0);
        assert_eq!(components.node_component_id("second"), 1);
        assert_eq!(components.node_component_id("third"), 1);
    }

    #[test]
    fn two_disjoint_edges() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "d");

        let components = Components::new(&g);
        assert_eq!(components.components_count(), 2);
        assert_eq!(components.component_size(0), 2);
        assert_eq!(components.component_size(1), 2);
        // tie broken toward the smaller id
        assert_eq!(components.max_component_id(), 0);
    }

    #[test]
    fn unknown_lookups_return_sentinels() {
        let g = Graph::new();
        let components = Components::new(&g);
        assert_eq!(components.components_count(), 0);
        assert_eq!(components.node_component_id("ghost"), UNLABELED);
        assert_eq!(components.component_size(42), 0);
        assert_eq!(components.max_component_id(), UNLABELED);
    }

    #[test]
    fn max_component_id_prefers_size() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_edge("x", "y");
        g.add_edge("y", "z");

        let components = Components::new(&g);
        assert_eq!(components.max_component_id(), 1);
        assert_eq!(components.component_size(1), 3);
    }

    #[test]
    fn long_path_labels_without_recursion() {
        // deep chain; explicit stack keeps this safe at any length
        let mut g = Graph::new();
        for i in 0..10_000 {
            g.add_edge(format!("n{i}"), format!("n{}", i + 1));
        }

        let components = Components::new(&g);
        assert_eq!(components.components_count(), 1);
        assert_eq!(components.component_size(0), 10_001);
    }

    #[test]
    fn graph_accessor_returns_borrowed_graph() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        let components = Components::new(&g);
        assert_eq!(components.graph().number_of_nodes(), 2);
    }
}
