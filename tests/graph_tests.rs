use graph_search::graph::{Graph, GraphDescription, Grid, MutableGraph, WeightedGraph};
use graph_search::graph::generators::{generate_random_graph, generate_random_grid};
use graph_search::Error;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_add_edge_validates_endpoints() {
    let mut graph: WeightedGraph<i64> = WeightedGraph::with_vertices(3);

    assert!(graph.add_edge(0, 2, 4).is_ok());
    assert!(matches!(
        graph.add_edge(3, 0, 1),
        Err(Error::InvalidNodeIndex {
            index: 3,
            node_count: 3
        })
    ));
    assert!(matches!(
        graph.add_edge(0, 7, 1),
        Err(Error::InvalidNodeIndex { index: 7, .. })
    ));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_negative_weights_are_rejected() {
    let mut graph: WeightedGraph<i64> = WeightedGraph::with_vertices(2);

    match graph.add_edge(0, 1, -3) {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!((from, to), (0, 1));
            assert_eq!(weight, "-3");
        }
        other => panic!("expected NegativeWeight, got {:?}", other),
    }
    assert_eq!(graph.edge_count(), 0);

    let mut floats: WeightedGraph<OrderedFloat<f64>> = WeightedGraph::with_vertices(2);
    assert!(matches!(
        floats.add_edge(1, 0, OrderedFloat(-0.5)),
        Err(Error::NegativeWeight { .. })
    ));
}

#[test]
fn test_adjacency_lists_keep_insertion_order() {
    let graph = WeightedGraph::from_edges(3, [(0, 2, 7u64), (0, 1, 3), (0, 2, 1)]).unwrap();

    let targets: Vec<(usize, u64)> = graph.outgoing_edges(0).collect();
    assert_eq!(targets, vec![(2, 7), (1, 3), (2, 1)]);
    assert!(graph.has_edge(0, 2));
    assert!(!graph.has_edge(2, 0));
    assert_eq!(graph.get_edge_weight(0, 2), Some(1));
    assert_eq!(graph.outgoing_edges(9).count(), 0);
    assert!(graph.edges(9).is_err());
}

#[test]
fn test_add_vertex_extends_index_range() {
    let mut graph: WeightedGraph<u32> = WeightedGraph::new();

    assert_eq!(graph.add_vertex(), 0);
    assert_eq!(graph.add_vertex(), 1);
    assert!(graph.has_vertex(1));
    assert!(!graph.has_vertex(2));
    assert!(graph.add_edge(1, 0, 2).is_ok());
}

#[test]
fn test_graph_from_json() {
    let json = r#"{ "vertex_count": 3, "edges": [[0, 1, 4], [1, 2, 1], [1, 2, 6]] }"#;
    let graph: WeightedGraph<u64> = WeightedGraph::from_json(json).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);

    let reparsed: WeightedGraph<u64> = WeightedGraph::from_json(&graph.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, graph);
}

#[test]
fn test_graph_json_is_validated() {
    let negative = r#"{ "vertex_count": 2, "edges": [[0, 1, -1]] }"#;
    let out_of_range = r#"{ "vertex_count": 2, "edges": [[0, 2, 1]] }"#;

    assert!(matches!(
        WeightedGraph::<i32>::from_json(negative),
        Err(Error::NegativeWeight { .. })
    ));
    assert!(matches!(
        WeightedGraph::<i32>::from_json(out_of_range),
        Err(Error::InvalidNodeIndex { index: 2, .. })
    ));
    assert!(matches!(
        WeightedGraph::<i32>::from_json("[1, 2"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_description_lists_edges_per_vertex() {
    let graph = WeightedGraph::from_edges(2, [(1, 0, 2u8), (0, 1, 5)]).unwrap();

    assert_eq!(
        graph.to_description(),
        GraphDescription {
            vertex_count: 2,
            edges: vec![(0, 1, 5), (1, 0, 2)],
        }
    );
}

#[test]
fn test_grid_parsing() {
    let grid = Grid::from_ascii("..#\n#..\n").unwrap();

    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert!(grid.is_blocked((0, 2)).unwrap());
    assert!(!grid.is_blocked((1, 1)).unwrap());
    assert_eq!(grid.render(&[(0, 0), (0, 1)]), "**#\n#..\n");
}

#[test]
fn test_grid_parsing_errors() {
    assert!(matches!(Grid::from_ascii(""), Err(Error::InvalidGrid(_))));
    assert!(matches!(Grid::from_ascii("...\n.."), Err(Error::InvalidGrid(_))));
    assert!(matches!(Grid::from_ascii("..x"), Err(Error::InvalidGrid(_))));
}

#[test]
fn test_grid_neighbors_order_and_edges() {
    let mut grid = Grid::new(3, 3);

    assert_eq!(grid.neighbors((1, 1)), vec![(2, 1), (0, 1), (1, 2), (1, 0)]);
    assert_eq!(grid.neighbors((0, 0)), vec![(1, 0), (0, 1)]);

    grid.block((2, 1)).unwrap();
    assert_eq!(grid.neighbors((1, 1)), vec![(0, 1), (1, 2), (1, 0)]);
    assert!(grid.neighbors((2, 1)).is_empty());

    let edges: Vec<(usize, usize)> = grid.outgoing_edges(4).collect();
    assert_eq!(edges, vec![(1, 1), (5, 1), (3, 1)]);
    assert!(grid.has_edge(4, 1));
    assert!(!grid.has_edge(4, 7));
}

#[test]
fn test_grid_cell_bounds() {
    let mut grid = Grid::new(2, 2);

    assert!(matches!(
        grid.block((2, 0)),
        Err(Error::InvalidCell { row: 2, col: 0, rows: 2, cols: 2 })
    ));
    assert_eq!(grid.index((1, 1)).unwrap(), 3);
    assert_eq!(grid.cell(3).unwrap(), (1, 1));
    assert!(grid.cell(4).is_err());
}

#[test]
fn test_random_generators_return_valid_inputs() {
    let mut rng = StdRng::seed_from_u64(11);

    let empty = generate_random_graph(&mut rng, 0, 3.0, 10).unwrap();
    assert_eq!(empty.vertex_count(), 0);

    let graph = generate_random_graph(&mut rng, 20, 2.5, 10).unwrap();
    assert_eq!(graph.vertex_count(), 20);
    assert_eq!(graph.edge_count(), 50);

    let grid = generate_random_grid(&mut rng, 4, 6, 1.0).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (4, 6));
    assert!(grid.is_blocked((3, 5)).unwrap());
    assert_eq!(grid.edge_count(), 0);
}
