use graph_search::graph::generators::sample_tree;
use graph_search::report::format_traversal;
use graph_search::{BreadthFirst, TreeTraversal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let tree = sample_tree()?;
    let order = BreadthFirst::new().traverse(&tree)?;
    println!("{}", format_traversal("BFS", &order));

    Ok(())
}
