use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::Graph;

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

/// Average number of roads leaving a location. Zero for an empty graph.
pub fn average_out_degree(g: &Graph) -> f64 {
    if g.nodes.is_empty() {
        return 0.0;
    }
    let sum: usize = g.edges_out.iter().map(Vec::len).sum();
    sum as f64 / g.nodes.len() as f64
}

/// Number of locations without any road
pub fn isolated_nodes(g: &Graph) -> usize {
    g.edges_out
        .iter()
        .zip(g.edges_in.iter())
        .filter(|(out, inc)| out.is_empty() && inc.is_empty())
        .count()
}
