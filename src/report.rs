//! Plain-text rendering of algorithm results for the demo programs.

use std::fmt::Display;

use crate::algorithm::ShortestPathResult;
use crate::graph::Weight;

/// Renders a distance table: a header naming the source, then one line per vertex
///
/// ```text
/// Minimum distances from node 0:
/// Node 0: 0
/// Node 1: unreachable
/// ```
pub fn format_distances<W>(result: &ShortestPathResult<W>) -> String
where
    W: Weight + Display,
{
    let mut out = format!("Minimum distances from node {}:\n", result.source);
    for (vertex, distance) in result.distances.iter().enumerate() {
        let line = match distance {
            Some(d) => format!("Node {}: {}\n", vertex, d),
            None => format!("Node {}: unreachable\n", vertex),
        };
        out.push_str(&line);
    }
    out
}

/// Renders a labeled traversal line such as `DFS traversal: 1 2 5`
pub fn format_traversal<T: Display>(label: &str, values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} traversal: {}", label, joined)
}
