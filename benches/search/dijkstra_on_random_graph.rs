use route_core::{
    graph::{node_index, Edge, Graph, Node},
    search::dijkstra::Dijkstra,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn gen_rand_graph(number_nodes: usize) -> Graph {
    let mut rng = rand::thread_rng();

    // 2.5 roads per location on average
    let number_edges: usize = (number_nodes as f32 * 2.5) as usize;

    let mut g = Graph::with_capacity(number_nodes, number_edges);

    for i in 0..number_nodes {
        g.add_node(Node::new(format!("Point{}", i + 1), 0.0, 0.0));
    }

    for _ in 0..number_edges {
        let source = rng.gen_range(0..number_nodes);
        let target = rng.gen_range(0..number_nodes);
        if source == target {
            continue;
        }
        let weight = rng.gen_range(1..100) as f64;
        g.add_edge(Edge::new_bidir(node_index(source), node_index(target), weight));
    }

    g
}

fn criterion_benchmark(c: &mut Criterion) {
    let graphs: Vec<Graph> = [20, 1000, 50_000]
        .iter()
        .map(|i| gen_rand_graph(*i))
        .collect();

    let mut group = c.benchmark_group("dijkstra_on_random_graph");
    let mut rng = rand::thread_rng();
    for graph in graphs {
        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.nodes.len()),
            &graph,
            |b, g| {
                let src = rng.gen_range(0..g.nodes.len());
                let dst = rng.gen_range(0..g.nodes.len());
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| {
                    dijkstra.search(node_index(src), node_index(dst));
                });
            },
        );
    }
    group.finish();
}
