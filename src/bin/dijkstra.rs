use graph_search::graph::generators::sample_city_graph;
use graph_search::report::format_distances;
use graph_search::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let graph = sample_city_graph()?;
    let origin = 0; // City A

    let result: ShortestPathResult<u64> = Dijkstra::new().compute_shortest_paths(&graph, origin)?;
    print!("{}", format_distances(&result));

    Ok(())
}
