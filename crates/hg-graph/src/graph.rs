//! The undirected graph: edge list, node registry, adjacency map.

use std::collections::{BTreeSet, HashMap};

use crate::components::Components;
use crate::edge::Edge;
use crate::nodes::{DegreeOrder, Node, NodeDescription, Nodes};

/// Neighbor set handed out for nodes without any recorded edge.
static NO_NEIGHBORS: BTreeSet<Node> = BTreeSet::new();

/// Undirected graph composed of an append-only edge list, a node registry,
/// and a symmetric adjacency map.
///
/// The edge list and the per-node degree counters record every `add_edge`
/// call, parallel edges included; the adjacency sets deduplicate them. Both
/// behaviors are load-bearing for callers, so neither is normalized toward
/// the other.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    nodes: Nodes,
    adj_map: HashMap<Node, BTreeSet<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &Nodes {
        &self.nodes
    }

    /// Node registry, reordered by degree before it is borrowed out.
    pub fn sorted_nodes(&mut self, direction: DegreeOrder) -> &Nodes {
        self.nodes.sort_by_degree(direction);
        &self.nodes
    }

    /// Raw edge records in insertion order, duplicates included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the edge list. Can exceed the number of distinct neighbor
    /// relationships when parallel edges were added.
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.nodes.exists(node)
    }

    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn add_node(&mut self, node: impl Into<Node>) {
        self.nodes.add_node(node);
    }

    /// Record an edge between `a` and `b`, creating either endpoint as
    /// needed. Every call appends one edge record and bumps both degree
    /// counters once, while the adjacency sets absorb duplicates.
    pub fn add_edge(&mut self, a: impl Into<Node>, b: impl Into<Node>) {
        let a = a.into();
        let b = b.into();
        self.edges.push(Edge::new(a.clone(), b.clone()));
        self.nodes.add_node(a.clone());
        self.nodes.add_node(b.clone());
        self.adj_map.entry(a.clone()).or_default().insert(b.clone());
        self.adj_map.entry(b.clone()).or_default().insert(a.clone());
        self.nodes.increment_degree(&a);
        self.nodes.increment_degree(&b);
    }

    /// Neighbor set of `node`; empty for nodes without any recorded edge,
    /// known or not.
    pub fn neighbors(&self, node: &str) -> &BTreeSet<Node> {
        self.adj_map.get(node).unwrap_or(&NO_NEIGHBORS)
    }

    /// Degree counter of `node`; 0 for unknown nodes.
    pub fn degree(&self, node: &str) -> u32 {
        self.nodes.description(node).degree()
    }

    /// External boundary of a node subset: every neighbor of a member that
    /// is not itself a member.
    pub fn fringe_nodes<I, S>(&self, container: I) -> BTreeSet<Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members: Vec<S> = container.into_iter().collect();
        let member_set: BTreeSet<&str> = members.iter().map(|m| m.as_ref()).collect();

        let mut fringe = BTreeSet::new();
        for member in &member_set {
            for neighbor in self.neighbors(member) {
                if !member_set.contains(neighbor.as_str()) {
                    fringe.insert(neighbor.clone());
                }
            }
        }
        fringe
    }

    /// Graph induced by `container`: exactly those nodes, plus every edge
    /// record (parallel ones included) whose endpoints both lie inside.
    /// Degrees in the result reflect only the retained records.
    pub fn subgraph<I, S>(&self, container: I) -> Graph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members: Vec<S> = container.into_iter().collect();
        let member_set: BTreeSet<&str> = members.iter().map(|m| m.as_ref()).collect();

        let mut sub = Graph::new();
        for &member in &member_set {
            sub.add_node(member);
        }
        for edge in &self.edges {
            let (a, b) = edge.node_pair();
            if member_set.contains(a.as_str()) && member_set.contains(b.as_str()) {
                sub.add_edge(a.clone(), b.clone());
            }
        }
        sub
    }

    /// Nodes whose degree is at least `threshold`.
    pub fn core_nodes(&self, threshold: u32) -> BTreeSet<Node> {
        self.nodes
            .iter()
            .filter(|n| self.degree(n.as_str()) >= threshold)
            .cloned()
            .collect()
    }

    /// Subgraph induced by the largest connected component, by node count;
    /// ties go to the lowest component id.
    pub fn large_component(&self) -> Graph {
        let components = Components::new(self);
        let target = components.max_component_id();
        let members: Vec<&Node> = self
            .nodes
            .iter()
            .filter(|n| components.node_component_id(n.as_str()) == target)
            .collect();
        self.subgraph(members)
    }

    /// True iff the graph has at most one connected component. Trivially
    /// true for the empty graph.
    pub fn is_connected(&self) -> bool {
        Components::new(self).components_count() <= 1
    }

    pub fn node_description(&self, node: &str) -> NodeDescription {
        self.nodes.description(node)
    }

    pub fn set_node_description(&mut self, node: &str, description: NodeDescription) {
        self.nodes.set_description(node, description);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn edge_list() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[a-e]", "[a-e]"), 0..20)
    }

    proptest! {
        #[test]
        fn symmetry_holds_for_random_graphs(edges in edge_list()) {
            let mut g = Graph::new();
            for (a, b) in &edges {
                g.add_edge(a.clone(), b.clone());
            }
            for node in g.nodes() {
                for neighbor in g.neighbors(node) {
                    prop_assert!(g.neighbors(neighbor).contains(node));
                }
            }
        }

        #[test]
        fn degree_counts_add_edge_calls(edges in edge_list()) {
            let mut g = Graph::new();
            let mut calls: std::collections::HashMap<String, u32> = Default::default();
            for (a, b) in &edges {
                g.add_edge(a.clone(), b.clone());
                *calls.entry(a.clone()).or_default() += 1;
                *calls.entry(b.clone()).or_default() += 1;
            }
            for (node, count) in &calls {
                prop_assert_eq!(g.degree(node), *count);
            }
        }
    }
}
