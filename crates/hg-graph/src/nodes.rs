//! Node registry with insertion-ordered iteration.

use std::collections::HashMap;

use hg_core::{Coordinates, EMBEDDING_DIM};

/// Graph vertices are plain string identifiers supplied by the caller.
pub type Node = String;

/// Component id of a node that has not been labeled yet.
pub const UNLABELED: i32 = -1;

/// Per-node bookkeeping owned by the registry entry.
///
/// `degree` counts `add_edge` calls touching the node, parallel edges
/// included. `coordinates` is a placeholder for the embedding optimizer and
/// only has to round-trip here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeDescription {
    degree: u32,
    component_id: i32,
    coordinates: Coordinates,
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            degree: 0,
            component_id: UNLABELED,
            coordinates: [0.0; EMBEDDING_DIM],
        }
    }
}

impl NodeDescription {
    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn increment_degree(&mut self) {
        self.degree += 1;
    }

    pub fn component_id(&self) -> i32 {
        self.component_id
    }

    pub fn set_component_id(&mut self, id: i32) {
        self.component_id = id;
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }
}

/// Direction for [`Nodes::sort_by_degree`].
///
/// The embedding pipeline walks vertices highest-degree-first, so
/// `Descending` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegreeOrder {
    Ascending,
    #[default]
    Descending,
}

/// Registry mapping each node to its description.
///
/// Iteration yields nodes in insertion order until an explicit
/// [`sort_by_degree`](Nodes::sort_by_degree) reorders the sequence. The key
/// set and the order list are maintained in lockstep; registration only
/// happens through [`add_node`](Nodes::add_node).
#[derive(Debug, Clone, Default)]
pub struct Nodes {
    descriptions: HashMap<Node, NodeDescription>,
    order: Vec<Node>,
}

impl Nodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `node` with a fresh description; no-op if already present.
    pub fn add_node(&mut self, node: impl Into<Node>) {
        let node = node.into();
        if !self.descriptions.contains_key(&node) {
            self.order.push(node.clone());
            self.descriptions.insert(node, NodeDescription::default());
        }
    }

    pub fn exists(&self, node: &str) -> bool {
        self.descriptions.contains_key(node)
    }

    /// Bump the degree counter; silently ignored for unknown nodes.
    pub fn increment_degree(&mut self, node: &str) {
        if let Some(description) = self.descriptions.get_mut(node) {
            description.increment_degree();
        }
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Copy of the stored description, or a default one for unknown nodes.
    pub fn description(&self, node: &str) -> NodeDescription {
        self.descriptions.get(node).cloned().unwrap_or_default()
    }

    /// Replace the stored description; silently ignored for unknown nodes,
    /// since registering must go through `add_node` to keep the iteration
    /// sequence consistent with the key set.
    pub fn set_description(&mut self, node: &str, description: NodeDescription) {
        if let Some(slot) = self.descriptions.get_mut(node) {
            *slot = description;
        }
    }

    /// Nodes in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.order.iter()
    }

    /// Reorder iteration by current degree. The sort is stable: nodes with
    /// equal degree keep their previous relative order.
    pub fn sort_by_degree(&mut self, direction: DegreeOrder) {
        let descriptions = &self.descriptions;
        let degree_of = |n: &Node| descriptions.get(n).map_or(0, |d| d.degree);
        match direction {
            DegreeOrder::Ascending => self.order.sort_by_key(|n| degree_of(n)),
            DegreeOrder::Descending => {
                self.order.sort_by_key(|n| core::cmp::Reverse(degree_of(n)))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = &'a Node;
    type IntoIter = core::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
