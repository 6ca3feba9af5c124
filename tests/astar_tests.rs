use graph_search::algorithm::astar::{AStar, Heuristic};
use graph_search::algorithm::dijkstra::Dijkstra;
use graph_search::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult};
use graph_search::graph::generators::generate_random_grid;
use graph_search::graph::{Cell, Grid};
use graph_search::Error;
use rand::prelude::*;
use rand::rngs::StdRng;

fn assert_valid_path(grid: &Grid, cells: &[Cell], start: Cell, goal: Cell) {
    assert_eq!(cells[0], start, "Path should start at start");
    assert_eq!(cells[cells.len() - 1], goal, "Path should end at goal");
    for step in cells.windows(2) {
        assert!(
            grid.neighbors(step[0]).contains(&step[1]),
            "Path should only step between adjacent open cells: {:?}",
            step
        );
    }
}

#[test]
fn test_open_grid_path_is_manhattan_distance() {
    let grid = Grid::new(10, 10);
    let path = AStar::new().find_path(&grid, (0, 0), (9, 9)).unwrap().unwrap();

    assert_eq!(path.cost, 18);
    assert_eq!(path.cells.len(), 19);
    assert_valid_path(&grid, &path.cells, (0, 0), (9, 9));
}

#[test]
fn test_path_around_wall() {
    let grid = Grid::from_ascii(
        "
        .....
        ####.
        .....
        .####
        .....
        ",
    )
    .unwrap();
    let path = AStar::new().find_path(&grid, (0, 0), (4, 4)).unwrap().unwrap();

    assert_eq!(path.cost, 16);
    assert_valid_path(&grid, &path.cells, (0, 0), (4, 4));
    assert!(path.cells.iter().all(|&cell| !grid.is_blocked(cell).unwrap()));
}

#[test]
fn test_walled_off_goal_has_no_path() {
    let grid = Grid::from_ascii(
        "
        ..#..
        ..#..
        ..#..
        ",
    )
    .unwrap();

    assert_eq!(AStar::new().find_path(&grid, (0, 0), (2, 4)).unwrap(), None);
}

#[test]
fn test_start_equals_goal() {
    let grid = Grid::new(3, 3);
    let path = AStar::new().find_path(&grid, (1, 1), (1, 1)).unwrap().unwrap();

    assert_eq!(path.cells, vec![(1, 1)]);
    assert_eq!(path.cost, 0);
}

#[test]
fn test_invalid_and_blocked_endpoints() {
    let grid = Grid::from_ascii(
        "
        .#
        ..
        ",
    )
    .unwrap();
    let search = AStar::new();

    assert!(matches!(
        search.find_path(&grid, (0, 0), (5, 0)),
        Err(Error::InvalidCell { row: 5, col: 0, rows: 2, cols: 2 })
    ));
    assert!(matches!(
        search.find_path(&grid, (0, 1), (1, 1)),
        Err(Error::BlockedCell { row: 0, col: 1 })
    ));
    assert!(matches!(
        search.find_path(&grid, (0, 0), (0, 1)),
        Err(Error::BlockedCell { row: 0, col: 1 })
    ));
}

#[test]
fn test_cost_matches_dijkstra_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dijkstra = Dijkstra::new();

    for _ in 0..40 {
        let grid = generate_random_grid(&mut rng, 15, 20, 0.3).unwrap();
        let open: Vec<Cell> = (0..grid.rows())
            .flat_map(|row| (0..grid.cols()).map(move |col| (row, col)))
            .filter(|&cell| !grid.is_blocked(cell).unwrap())
            .collect();
        if open.len() < 2 {
            continue;
        }

        let start = *open.choose(&mut rng).unwrap();
        let goal = *open.choose(&mut rng).unwrap();
        let result: ShortestPathResult<usize> = dijkstra
            .compute_shortest_paths(&grid, grid.index(start).unwrap())
            .unwrap();
        let expected = result.distance(grid.index(goal).unwrap());

        for heuristic in [Heuristic::Manhattan, Heuristic::Zero] {
            let found = AStar::new()
                .with_heuristic(heuristic)
                .find_path(&grid, start, goal)
                .unwrap();
            assert_eq!(found.as_ref().map(|path| path.cost), expected);
            if let Some(path) = found {
                assert_eq!(path.cells.len(), path.cost + 1);
                assert_valid_path(&grid, &path.cells, start, goal);
            }
        }
    }
}

#[test]
fn test_manhattan_expands_fewer_cells_than_zero_heuristic() {
    let grid = Grid::new(30, 30);
    let informed = AStar::new().find_path(&grid, (0, 0), (15, 15)).unwrap().unwrap();
    let blind = AStar::new()
        .with_heuristic(Heuristic::Zero)
        .find_path(&grid, (0, 0), (15, 15))
        .unwrap()
        .unwrap();

    assert_eq!(informed.cost, blind.cost);
    assert!(informed.expanded < blind.expanded);
}

#[test]
fn test_repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = generate_random_grid(&mut rng, 25, 25, 0.2).unwrap();
    let search = AStar::new();
    grid.unblock((0, 0)).unwrap();
    grid.unblock((24, 24)).unwrap();

    let first = search.find_path(&grid, (0, 0), (24, 24)).unwrap();
    let second = search.find_path(&grid, (0, 0), (24, 24)).unwrap();
    assert_eq!(first, second);
}
