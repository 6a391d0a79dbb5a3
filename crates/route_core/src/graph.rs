use crate::constants::Weight;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash};

/// Default integer typer for node and edge indices
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> From<Idx> for EdgeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        EdgeIndex(ix)
    }
}

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

/// A named place of the delivery network, e.g. a warehouse or a customer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Node {
            name: name.into(),
            lat,
            lon,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Edge<Idx = DefaultIdx> {
    pub source: NodeIndex<Idx>,
    pub target: NodeIndex<Idx>,
    pub weight: Weight,
    #[serde(default = "Default::default")]
    pub is_bidir: bool,
}

impl Edge {
    pub fn new(
        source: NodeIndex<DefaultIdx>,
        target: NodeIndex<DefaultIdx>,
        weight: Weight,
    ) -> Self {
        Edge {
            source,
            target,
            weight,
            is_bidir: false,
        }
    }

    pub fn new_bidir(
        source: NodeIndex<DefaultIdx>,
        target: NodeIndex<DefaultIdx>,
        weight: Weight,
    ) -> Self {
        Edge {
            source,
            target,
            weight,
            is_bidir: true,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
            is_bidir: self.is_bidir,
        }
    }

    /// Returns true if this edge can be traversed from `source` to `target`.
    fn connects(&self, source: NodeIndex, target: NodeIndex) -> bool {
        (self.source == source && self.target == target)
            || (self.is_bidir && self.source == target && self.target == source)
    }
}

#[derive(Debug, Clone)]
pub struct Graph<Idx = DefaultIdx> {
    pub edges_in: Vec<Vec<EdgeIndex<Idx>>>,
    pub edges_out: Vec<Vec<EdgeIndex<Idx>>>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<Idx>>,
    names: FxHashMap<String, NodeIndex<Idx>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            edges_in: Vec::new(),
            edges_out: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            names: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            edges_in: Vec::with_capacity(num_nodes),
            edges_out: Vec::with_capacity(num_nodes),
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            names: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Add a new `edge` to the graph.
    ///
    /// **Panics** if the Graph is at the maximum number of edges for its index
    /// type
    /// **Panics** if the source or target node does not exist
    ///
    /// If the two nodes are already connected in the direction(s) of `edge` by
    /// an edge of the same kind (directed or bidirectional), the existing edge
    /// takes over the new weight and its index is returned. Otherwise returns
    /// the index of the new created edge, so a directed edge never changes the
    /// weight of a bidirectional one.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );

        // Redefining a road overwrites its weight, the latest definition wins
        for old_idx in self.edges_out[edge.source.index()].iter() {
            let old_edge = &self.edges[old_idx.index()];
            if old_edge.is_bidir == edge.is_bidir
                && old_edge.connects(edge.source, edge.target)
                && (!edge.is_bidir || old_edge.connects(edge.target, edge.source))
            {
                debug!(
                    "Updating weight of edge {:?} from {} to {}",
                    old_idx, old_edge.weight, edge.weight
                );
                let old_idx = *old_idx;
                self.edges[old_idx.index()].weight = edge.weight;
                return old_idx;
            }
        }

        self.edges_out[edge.source.index()].push(edge_idx);
        self.edges_in[edge.target.index()].push(edge_idx);

        if edge.is_bidir {
            self.edges_out[edge.target.index()].push(edge_idx);
            self.edges_in[edge.source.index()].push(edge_idx);
        }

        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Adds a new node to the graph.
    ///
    /// Node names are unique: adding a node whose name is already known
    /// moves the existing node to the new coordinates and returns its index.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&node_idx) = self.names.get(&node.name) {
            self.nodes[node_idx.index()] = node;
            return node_idx;
        }

        let node_idx: NodeIndex = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new node
        self.edges_in.push(Vec::new());
        self.edges_out.push(Vec::new());

        self.names.insert(node.name.clone(), node_idx);
        self.nodes.push(node);

        node_idx
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Looks up a node by its name
    pub fn node_index_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(name).copied()
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns the edges leaving `node_idx`. Bidirectional edges stored in the
    /// opposite direction are reversed so `source` is always `node_idx`.
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.edges_out[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            if edge.source == node_idx {
                (*edge_idx, edge.clone())
            } else {
                (*edge_idx, edge.reverse())
            }
        })
    }

    /// Returns the weight of the edge from `source` to `target`, if there is one
    pub fn edge_weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.neighbors_outgoing(source)
            .find(|(_, edge)| edge.target == target)
            .map(|(_, edge)| edge.weight)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph has {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        )
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0 , 1, 3.0) Returns a bidirectional edge
///
/// edge!(0 => 1, 3.0) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new_bidir($source.into(), $target.into(), $weight)
    };
}

/// Macro to create a node with a given name, lat, lon
/// node!("A", 1.0, 1.0)
#[macro_export]
macro_rules! node {
    ($name:expr, $lat:expr, $lon:expr) => {
        $crate::graph::Node::new($name, $lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        let b = g.add_node(node!("B", 0.0, 0.0));

        let edge1 = g.add_edge(edge!(a => b, 2.0));
        let edge2 = g.add_edge(edge!(a => b, 5.0));

        assert_eq!(g.edges.len(), 1);
        assert_eq!(edge1, edge2);
        assert_eq!(g.edges[edge1.index()].weight, 5.0);
    }

    #[test]
    fn redefined_bidir_edge_in_reverse_direction() {
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        let b = g.add_node(node!("B", 0.0, 0.0));

        g.add_edge(edge!(a, b, 2.0));
        g.add_edge(edge!(b, a, 7.0));

        assert_eq!(g.edges.len(), 1);
        assert_eq!(g.edge_weight(a, b), Some(7.0));
        assert_eq!(g.edge_weight(b, a), Some(7.0));
    }

    #[test]
    fn directed_edge_does_not_replace_opposite_direction() {
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        let b = g.add_node(node!("B", 0.0, 0.0));

        g.add_edge(edge!(a => b, 2.0));
        g.add_edge(edge!(b => a, 3.0));

        assert_eq!(g.edges.len(), 2);
        assert_eq!(g.edge_weight(a, b), Some(2.0));
        assert_eq!(g.edge_weight(b, a), Some(3.0));
    }

    #[test]
    fn directed_edge_does_not_change_bidir_edge() {
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        let b = g.add_node(node!("B", 0.0, 0.0));

        let bidir = g.add_edge(edge!(a, b, 2.0));
        let directed = g.add_edge(edge!(a => b, 3.0));

        assert_ne!(bidir, directed);
        assert_eq!(g.edges.len(), 2);
        assert_eq!(g.edges[bidir.index()].weight, 2.0);
        assert_eq!(g.edge_weight(b, a), Some(2.0));
    }

    #[test]
    fn bidir_edge_is_visible_from_both_ends() {
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        let b = g.add_node(node!("B", 0.0, 0.0));
        g.add_edge(edge!(a, b, 1.5));

        let from_b: Vec<_> = g.neighbors_outgoing(b).collect();
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_b[0].1.source, b);
        assert_eq!(from_b[0].1.target, a);

        assert_eq!(g.edges_in[a.index()], vec![EdgeIndex::new(0)]);
    }

    #[test]
    fn nodes_are_unique_by_name() {
        let mut g = Graph::new();
        let a = g.add_node(node!("Depot", 1.0, 2.0));
        let again = g.add_node(node!("Depot", 3.0, 4.0));

        assert_eq!(a, again);
        assert_eq!(g.nodes.len(), 1);
        assert_eq!(g.node(a).unwrap().lat, 3.0);
        assert_eq!(g.node_index_by_name("Depot"), Some(a));
        assert!(!g.has_node("Shop"));
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn edge_to_missing_node_panics() {
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        g.add_edge(edge!(a => node_index(4), 1.0));
    }
}
