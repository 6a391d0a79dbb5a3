use crate::{
    edge,
    graph::{Graph, Node},
    network::{Location, Network, Road},
};

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::new();

    let a = graph.add_node(Node::new("A", 6.0, 2.0));
    let b = graph.add_node(Node::new("B", 3.0, 3.0));
    let c = graph.add_node(Node::new("C", 4.0, 6.0));
    let d = graph.add_node(Node::new("D", 2.0, 7.0));
    let e = graph.add_node(Node::new("E", 3.0, 10.0));
    let f = graph.add_node(Node::new("F", 2.0, 13.0));
    let g = graph.add_node(Node::new("G", 7.0, 15.0));
    let h = graph.add_node(Node::new("H", 5.0, 12.0));
    let i = graph.add_node(Node::new("I", 7.0, 11.0));
    let j = graph.add_node(Node::new("J", 5.0, 9.0));
    let k = graph.add_node(Node::new("K", 7.0, 7.0));

    graph.add_edge(edge!(a, b, 3.0)); // A <=> B
    graph.add_edge(edge!(a, c, 5.0)); // A <=> C
    graph.add_edge(edge!(a, k, 3.0)); // A <=> K

    graph.add_edge(edge!(b, d, 5.0)); // B <=> D
    graph.add_edge(edge!(b, c, 3.0)); // B <=> C

    graph.add_edge(edge!(c, d, 2.0)); // C <=> D
    graph.add_edge(edge!(c, j, 2.0)); // C <=> J

    graph.add_edge(edge!(d, j, 4.0)); // D <=> J
    graph.add_edge(edge!(d, e, 7.0)); // D <=> E

    graph.add_edge(edge!(e, j, 3.0)); // E <=> J
    graph.add_edge(edge!(e, f, 6.0)); // E <=> F

    graph.add_edge(edge!(f, h, 2.0)); // F <=> H
    graph.add_edge(edge!(f, g, 4.0)); // F <=> G

    graph.add_edge(edge!(g, h, 3.0)); // G <=> H
    graph.add_edge(edge!(g, i, 5.0)); // G <=> I

    graph.add_edge(edge!(h, i, 3.0)); // H <=> I
    graph.add_edge(edge!(h, j, 2.0)); // H <=> J

    graph.add_edge(edge!(i, j, 4.0)); // I <=> J
    graph.add_edge(edge!(i, k, 6.0)); // I <=> K

    graph.add_edge(edge!(j, k, 3.0)); // J <=> K

    graph
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let mut g = Graph::new();

    let a = g.add_node(Node::new("A", 0.0, 0.0));
    let b = g.add_node(Node::new("B", 0.0, 0.0));
    let c = g.add_node(Node::new("C", 0.0, 0.0));
    let d = g.add_node(Node::new("D", 0.0, 0.0));
    let e = g.add_node(Node::new("E", 0.0, 0.0));

    g.add_edge(edge!(a => c, 1.0));
    g.add_edge(edge!(a => d, 1.0));
    g.add_edge(edge!(e => a, 1.0));
    g.add_edge(edge!(c, b, 1.0));
    g.add_edge(edge!(c, d, 1.0));

    g
}

/// Small delivery network around a central warehouse.
///
/// ```text
///             Market
///            /  4   \ 2
/// Warehouse -        Harbour
///       1    \ 2    / 3
///        Depot - Station    Airport (no roads)
///            1.5
/// ```
pub fn sample_network() -> Network {
    let location = |name: &str, lat: f64, lon: f64| Location::new(name, lat, lon);
    let road = |from: &str, to: &str, distance: f64| Road::new(from, to, distance);

    Network {
        locations: vec![
            location("Warehouse", 19.0760, 72.8777),
            location("Depot", 19.0710, 72.8810),
            location("Market", 19.0820, 72.8850),
            location("Station", 19.0700, 72.8900),
            location("Harbour", 19.0790, 72.8950),
            location("Airport", 19.0900, 72.8650),
        ],
        roads: vec![
            road("Warehouse", "Depot", 1.0),
            road("Warehouse", "Market", 4.0),
            road("Depot", "Station", 1.5),
            road("Warehouse", "Station", 2.0),
            road("Market", "Harbour", 2.0),
            road("Station", "Harbour", 3.0),
        ],
    }
}
