use colored::*;
use graph_search::algorithm::astar::{AStar, Heuristic};
use graph_search::graph::{Cell, Grid};
use graph_search::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};

const MAP: &str = "
    ..........#.........
    ..####....#..####...
    .....#....#.....#...
    .....#..........#...
    .....######.....#...
    ..........#..####...
    ####......#.........
    ..........#######.##
    ..#.................
    ..#.......#.........
";

/// Prints the grid with colored obstacles, path, start and goal
fn visualize_grid(grid: &Grid, path: &[Cell], start: Cell, goal: Cell) {
    let rendered = grid.render(path);
    for (row, line) in rendered.lines().enumerate() {
        for (col, cell) in line.chars().enumerate() {
            let colored_cell = if (row, col) == start {
                "S".bright_green().bold()
            } else if (row, col) == goal {
                "G".bright_red().bold()
            } else {
                match cell {
                    '#' => "█".on_bright_black().white(),
                    '*' => "*".bright_yellow().bold(),
                    _ => "·".bright_black(),
                }
            };
            print!("{}", colored_cell);
        }
        println!();
    }

    println!("\n{}", "Legend:".bright_white().bold());
    println!(
        "{} = start   {} = goal   {} = obstacle   {} = path",
        "S".bright_green().bold(),
        "G".bright_red().bold(),
        "█".on_bright_black().white(),
        "*".bright_yellow().bold()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let grid = Grid::from_ascii(MAP)?;
    let start = (0, 0);
    let goal = (9, 19);

    println!("{}", "    A* GRID SEARCH DEMO    ".bright_cyan().bold().on_black());
    println!(
        "Grid: {} rows x {} columns, start {:?}, goal {:?}\n",
        grid.rows(),
        grid.cols(),
        start,
        goal
    );

    for heuristic in [Heuristic::Manhattan, Heuristic::Zero] {
        let search = AStar::new().with_heuristic(heuristic);
        match search.find_path(&grid, start, goal)? {
            Some(path) => println!(
                "{} {:?}: cost {}, {} cells expanded",
                "✅".bright_green(),
                heuristic,
                path.cost.to_string().bright_yellow(),
                path.expanded
            ),
            None => println!("{} {:?}: no path", "❌".bright_red(), heuristic),
        }
    }

    // Cross-check against Dijkstra on the same grid
    let result: ShortestPathResult<usize> =
        Dijkstra::new().compute_shortest_paths(&grid, grid.index(start)?)?;
    match result.distance(grid.index(goal)?) {
        Some(distance) => println!("Dijkstra distance: {}\n", distance),
        None => println!("Dijkstra: goal unreachable\n"),
    }

    let path = AStar::new()
        .find_path(&grid, start, goal)?
        .map(|path| path.cells)
        .unwrap_or_default();
    visualize_grid(&grid, &path, start, goal);

    Ok(())
}
