use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rand::prelude::*;
use rayon::prelude::*;

use crate::{
    error::SearchError,
    graphs::{Distance, Graph},
    search::{dijkstra::DijkstraPathFinding, path::ShortestPathRequest, PathFinding},
};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {human_pos}/{human_len} {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Draws `number_of_requests` random source/target pairs.
pub fn gen_requests(graph: &dyn Graph, number_of_requests: u32) -> Vec<ShortestPathRequest> {
    let number_of_vertices = graph.number_of_vertices();
    if number_of_vertices == 0 {
        return Vec::new();
    }

    let mut rng = thread_rng();
    (0..number_of_requests)
        .map(|_| {
            ShortestPathRequest::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
            )
        })
        .collect()
}

/// Answers all requests in parallel. Each query owns its search state, the
/// graph is only read. A request naming an unknown vertex yields an error, not
/// a missing path.
pub fn par_shortest_path_distances(
    graph: &dyn Graph,
    requests: &[ShortestPathRequest],
) -> Vec<Result<Option<Distance>, SearchError>> {
    let pathfinder = DijkstraPathFinding { graph };
    requests
        .par_iter()
        .progress_with(get_progressbar("Answering queries", requests.len() as u64))
        .map(|request| pathfinder.shortest_path_distance(request.source, request.target))
        .collect()
}

/// Average wall time of a sequential query.
pub fn benchmark(graph: &dyn Graph, requests: &[ShortestPathRequest]) -> Duration {
    let pathfinder = DijkstraPathFinding { graph };
    let start = Instant::now();
    for request in requests
        .iter()
        .progress_with(get_progressbar("Timing queries", requests.len() as u64))
    {
        let _ = pathfinder.shortest_path(request.source, request.target);
    }
    start.elapsed() / requests.len().max(1) as u32
}
