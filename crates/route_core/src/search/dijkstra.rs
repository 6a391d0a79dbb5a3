use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::FxHashMap;

#[derive(Debug)]
pub(crate) struct Candidate<Idx = DefaultIdx> {
    pub(crate) node_idx: NodeIndex<Idx>,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Plain Dijkstra search. Edge weights must be non-negative.
pub struct Dijkstra<'a, Idx = DefaultIdx> {
    pub stats: SearchStats,
    g: &'a Graph<Idx>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPath> {
        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source], 0.0));
        }

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut queue = BinaryHeap::new();

        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // Skip stale queue entries, the node was settled with a lower weight
            if weight > node_data.get(&node_idx).map_or(Weight::INFINITY, |d| d.0) {
                continue;
            }

            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for (_, edge) in self.g.neighbors_outgoing(node_idx) {
                let new_distance = weight + edge.weight;
                if new_distance
                    < node_data
                        .get(&edge.target)
                        .unwrap_or(&(Weight::INFINITY, None))
                        .0
                {
                    node_data.insert(edge.target, (new_distance, Some(node_idx)));
                    queue.push(Candidate::new(edge.target, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(target, source, &node_data);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::edge;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{generate_complex_graph, generate_simple_graph};

    use super::*;

    #[test]
    fn simple_path() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        let mut g = Graph::new();

        for i in 0..10 {
            g.add_node(Node::new(i.to_string(), 0.0, 0.0));
        }

        g.add_edge(Edge::new(node_index(0), node_index(1), 1.0));
        g.add_edge(Edge::new(node_index(1), node_index(2), 1.0));
        g.add_edge(Edge::new(node_index(2), node_index(3), 1.0));
        g.add_edge(Edge::new(node_index(3), node_index(4), 20.0));
        g.add_edge(Edge::new(node_index(0), node_index(5), 5.0));
        g.add_edge(Edge::new(node_index(5), node_index(6), 1.0));
        g.add_edge(Edge::new(node_index(6), node_index(4), 20.0));
        g.add_edge(Edge::new(node_index(6), node_index(3), 20.0));
        g.add_edge(Edge::new(node_index(5), node_index(7), 5.0));
        g.add_edge(Edge::new(node_index(7), node_index(8), 1.0));
        g.add_edge(Edge::new(node_index(8), node_index(9), 1.0));
        g.add_edge(Edge::new(node_index(9), node_index(4), 1.0));

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(node_index(4), node_index(0))); // Cannot be reached
        assert_path(vec![0, 5, 7, 8, 9, 4], 13.0, d.search(0.into(), 4.into()));
        assert_path(vec![6, 3], 20.0, d.search(6.into(), 3.into()));
        assert_path(vec![4], 0.0, d.search(4.into(), 4.into()));
        assert_path(vec![1, 2, 3, 4], 22.0, d.search(1.into(), 4.into()));
    }

    #[test]
    fn disconnected_graph() {
        // 0 <=> 1 <=> 2
        // 3 <=> 4 <=> 5
        let mut g = Graph::new();
        for i in 0..6 {
            g.add_node(Node::new(i.to_string(), 0.0, 0.0));
        }

        g.add_edge(edge!(node_index(0), node_index(1), 1.0));
        g.add_edge(edge!(node_index(1), node_index(2), 1.0));
        g.add_edge(edge!(node_index(3), node_index(4), 3.0));
        g.add_edge(edge!(node_index(4), node_index(5), 1.0));

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(0.into(), 3.into()));
        assert_no_path(d.search(3.into(), 0.into()));
        assert_path(vec![0, 1, 2], 2.0, d.search(0.into(), 2.into()));
        assert_path(vec![5, 4, 3], 4.0, d.search(5.into(), 3.into()));
    }

    #[test]
    fn go_around() {
        // 0 - 1
        // |   |
        // 2 - 3
        let mut g = Graph::new();
        let a = g.add_node(Node::new("0", 0.0, 0.0));
        let b = g.add_node(Node::new("1", 0.0, 0.0));
        let c = g.add_node(Node::new("2", 0.0, 0.0));
        let d = g.add_node(Node::new("3", 0.0, 0.0));

        g.add_edge(edge!(a, b, 10.0));
        g.add_edge(edge!(a, c, 1.0));
        g.add_edge(edge!(c, d, 1.0));
        g.add_edge(edge!(d, b, 1.0));

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3.0, d.search(a, b));
        assert_path(vec![1, 3, 2, 0], 3.0, d.search(b, a));
    }

    #[test]
    fn one_way_streets() {
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        // E -> A -> C <=> B
        assert_path(vec![4, 0, 2, 1], 3.0, d.search(4.into(), 1.into()));
        // A cannot be reached from anywhere but E
        assert_no_path(d.search(1.into(), 0.into()));
    }

    #[test]
    fn complex_graph() {
        let g = generate_complex_graph();
        let mut d = Dijkstra::new(&g);

        // A -> K -> J -> H -> F
        assert_path(vec![0, 10, 9, 7, 5], 10.0, d.search(0.into(), 5.into()));
        // B -> C -> J -> H
        assert_path(vec![1, 2, 9, 7], 7.0, d.search(1.into(), 7.into()));
    }

    /// Weight of every shortest path from `source`, computed by Bellman-Ford
    fn bellman_ford(g: &Graph, source: NodeIndex) -> Vec<Weight> {
        let mut dist = vec![Weight::INFINITY; g.nodes.len()];
        dist[source.index()] = 0.0;
        for _ in 0..g.nodes.len() {
            for (node, _) in g.nodes.iter().enumerate() {
                for (_, edge) in g.neighbors_outgoing(node_index(node)) {
                    let candidate = dist[node] + edge.weight;
                    if candidate < dist[edge.target.index()] {
                        dist[edge.target.index()] = candidate;
                    }
                }
            }
        }
        dist
    }

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (2usize..12).prop_flat_map(|num_nodes| {
            let edges = prop::collection::vec(
                (0..num_nodes, 0..num_nodes, 0u32..50, any::<bool>()),
                0..num_nodes * 3,
            );
            edges.prop_map(move |edges| {
                let mut g = Graph::new();
                for i in 0..num_nodes {
                    g.add_node(Node::new(format!("N{i}"), 0.0, 0.0));
                }
                for (s, t, w, bidir) in edges.into_iter().filter(|(s, t, _, _)| s != t) {
                    let edge = if bidir {
                        Edge::new_bidir(node_index(s), node_index(t), w as Weight)
                    } else {
                        Edge::new(node_index(s), node_index(t), w as Weight)
                    };
                    g.add_edge(edge);
                }
                g
            })
        })
    }

    proptest! {
        #[test]
        fn paths_are_contiguous_and_minimal(g in arb_graph(), s in 0usize..12, t in 0usize..12) {
            let s = node_index(s % g.nodes.len());
            let t = node_index(t % g.nodes.len());
            let expected = bellman_ford(&g, s)[t.index()];

            let mut d = Dijkstra::new(&g);
            match d.search(s, t) {
                Some(sp) => {
                    prop_assert_eq!(sp.nodes.first(), Some(&s));
                    prop_assert_eq!(sp.nodes.last(), Some(&t));

                    let mut sum = 0.0;
                    for pair in sp.nodes.windows(2) {
                        let w = g.neighbors_outgoing(pair[0])
                            .filter(|(_, e)| e.target == pair[1])
                            .map(|(_, e)| e.weight)
                            .fold(Weight::INFINITY, Weight::min);
                        prop_assert!(w.is_finite(), "path uses a missing edge");
                        sum += w;
                    }
                    prop_assert_eq!(sum, sp.weight);
                    prop_assert_eq!(sp.weight, expected);
                }
                None => prop_assert!(expected.is_infinite()),
            }
        }
    }
}
