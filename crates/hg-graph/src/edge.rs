//! Canonicalized undirected edges.

use core::fmt;
use core::hash::{Hash, Hasher};

use hg_core::Real;

use crate::nodes::Node;

/// An unordered pair of nodes, stored with the lexicographically smaller
/// endpoint first so `Edge::new("b", "a")` equals `Edge::new("a", "b")`.
///
/// `value` and `weight` ride along for the embedding pipeline and never
/// participate in equality or hashing: two edges over the same pair are the
/// same edge whatever their attributes say. Self-loops are permitted and
/// canonicalize to `(a, a)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pair: (Node, Node),
    value: Real,
    weight: Real,
}

impl Edge {
    /// Edge with both attributes zeroed.
    pub fn new(a: impl Into<Node>, b: impl Into<Node>) -> Self {
        Self::with_attrs(a, b, 0.0, 0.0)
    }

    /// Edge carrying pipeline attributes. No validation is performed.
    pub fn with_attrs(a: impl Into<Node>, b: impl Into<Node>, value: Real, weight: Real) -> Self {
        let a = a.into();
        let b = b.into();
        let pair = if a <= b { (a, b) } else { (b, a) };
        Self {
            pair,
            value,
            weight,
        }
    }

    /// Canonical endpoints, smaller node first.
    pub fn node_pair(&self) -> (&Node, &Node) {
        (&self.pair.0, &self.pair.1)
    }

    pub fn value(&self) -> Real {
        self.value
    }

    pub fn set_value(&mut self, value: Real) {
        self.value = value;
    }

    pub fn weight(&self) -> Real {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Real) {
        self.weight = weight;
    }

    /// Deterministic string form of the canonical pair. Equal edges always
    /// produce identical strings, so this doubles as a hash basis.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.pair == other.pair
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pair.0, self.pair.1)
    }
}
