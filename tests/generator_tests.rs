use dense_dijkstra::graph::generators::{
    generate_random_graph, max_edges, rng_for, MAX_GENERATED_VERTICES,
};
use dense_dijkstra::graph::Graph;
use dense_dijkstra::{AdjacencyMatrix, Error, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn config(vertices: usize, edges: usize) -> GeneratorConfig {
    GeneratorConfig {
        vertices,
        edges,
        ..Default::default()
    }
}

#[test]
fn test_max_edges() {
    assert_eq!(max_edges(0), Some(0));
    assert_eq!(max_edges(1), Some(0));
    assert_eq!(max_edges(3), Some(3));
    assert_eq!(max_edges(10), Some(45));
    assert_eq!(max_edges(usize::MAX), None);
}

#[test]
fn test_requested_edge_count_is_honored() {
    let mut rng = StdRng::seed_from_u64(1);
    let generated = generate_random_graph(&config(10, 20), &mut rng).unwrap();

    assert!(generated.clamp.is_none());
    assert_eq!(generated.graph.vertex_count(), 10);
    assert_eq!(generated.graph.edge_count(), 20);
}

#[test]
fn test_weights_are_positive_with_two_decimals() {
    let mut rng = StdRng::seed_from_u64(2);
    let generated = generate_random_graph(&config(20, 100), &mut rng).unwrap();

    for e in generated.graph.edges() {
        assert!(e.weight >= 0.01 && e.weight <= 10.0, "weight {}", e.weight);
        let cents = e.weight * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "weight {}", e.weight);
    }
}

#[test]
fn test_too_many_edges_are_clamped_with_two_warnings() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = generate_random_graph(&config(3, 10), &mut rng).unwrap();

        let clamp = generated.clamp.expect("edge count should be clamped");
        assert_eq!(clamp.requested, 10);
        assert_eq!(clamp.maximum, 3);
        assert!(clamp.chosen <= 3);
        assert_eq!(clamp.warnings().len(), 2);
        assert!(clamp.warnings()[0].contains("Maximum number of edges for 3 vertices is 3"));
        assert!(clamp.warnings()[1].contains(&clamp.chosen.to_string()));
        assert_eq!(generated.graph.edge_count(), clamp.chosen);

        // The saved matrix holds at most three nonzero off-diagonal pairs
        let matrix = AdjacencyMatrix::from_graph(&generated.graph);
        let pairs = (0..3)
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .filter(|&(i, j)| matrix.get(i, j) != 0.0)
            .count();
        assert!(pairs <= 3);
        assert_eq!(pairs, clamp.chosen);
    }
}

#[test]
fn test_zero_and_one_vertex_graphs() {
    let mut rng = StdRng::seed_from_u64(3);
    let generated = generate_random_graph(&config(1, 5), &mut rng).unwrap();
    assert_eq!(generated.clamp.map(|c| c.chosen), Some(0));
    assert_eq!(generated.graph.edge_count(), 0);

    let generated = generate_random_graph(&config(0, 0), &mut rng).unwrap();
    assert!(generated.clamp.is_none());
    assert_eq!(generated.graph.vertex_count(), 0);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let config = GeneratorConfig {
        vertices: 15,
        edges: 40,
        seed: Some(99),
        ..Default::default()
    };
    let first = generate_random_graph(&config, &mut rng_for(&config)).unwrap().graph;
    let second = generate_random_graph(&config, &mut rng_for(&config)).unwrap().graph;
    assert_eq!(first.sorted_edges(), second.sorted_edges());
}

#[test]
fn test_generated_matrix_is_symmetric_on_disk() {
    let mut rng = StdRng::seed_from_u64(4);
    let generated = generate_random_graph(&config(8, 12), &mut rng).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.dat");
    AdjacencyMatrix::from_graph(&generated.graph).save(&path).unwrap();
    let matrix = AdjacencyMatrix::load(&path).unwrap();

    for i in 0..8 {
        assert_eq!(matrix.get(i, i), 0.0);
        for j in 0..8 {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
    assert_eq!(matrix.to_graph().sorted_edges(), generated.graph.sorted_edges());
}

#[test]
fn test_complete_graph_uses_every_pair() {
    let mut rng = StdRng::seed_from_u64(5);
    let generated = generate_random_graph(&config(12, 66), &mut rng).unwrap();

    assert!(generated.clamp.is_none());
    assert_eq!(generated.graph.edge_count(), 66);
    for i in 0..12 {
        for j in 0..i {
            assert!(generated.graph.has_edge(i, j), "missing edge {} {}", i, j);
        }
    }
}

#[test]
fn test_oversized_vertex_count_is_rejected() {
    let mut rng = StdRng::seed_from_u64(6);

    let err = generate_random_graph(&config(usize::MAX, 10), &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));

    let err = generate_random_graph(&config(MAX_GENERATED_VERTICES + 1, 10), &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}
