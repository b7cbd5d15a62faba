//! Graph store behaviour through the public API.

use rstest::{fixture, rstest};
use wgraph::GraphError;
use wgraph::domain::{Direction, Edge};
use wgraph::store::GraphStore;

/// Vertices 0..3 with edges (0,1,4), (0,2,1), (1,2,1)
#[fixture]
fn triangle() -> GraphStore {
    let mut g = GraphStore::with_vertices(3);
    g.add_edge(0, 1, 4).unwrap();
    g.add_edge(0, 2, 1).unwrap();
    g.add_edge(1, 2, 1).unwrap();
    g
}

#[rstest]
fn add_edge_is_visible_from_both_ends(triangle: GraphStore) {
    assert_eq!(triangle.has_edge(0, 1), Ok(true));
    assert_eq!(triangle.has_edge(1, 0), Ok(false));
    assert_eq!(triangle.cost(0, 1), Ok(4));
    assert_eq!(triangle.neighbors(0, Direction::Outbound), Ok(&[1, 2][..]));
    assert_eq!(triangle.neighbors(2, Direction::Inbound), Ok(&[0, 1][..]));
    assert_eq!(triangle.degree(2, Direction::Inbound), Ok(2));
}

#[rstest]
fn remove_vertex_leaves_no_dangling_edges(mut triangle: GraphStore) {
    triangle.remove_vertex(1).unwrap();

    assert!(!triangle.has_vertex(1));
    assert_eq!(triangle.edge_count(), 1);
    assert_eq!(triangle.edges().collect::<Vec<_>>(), vec![Edge::new(0, 2, 1)]);
    assert_eq!(triangle.neighbors(2, Direction::Inbound), Ok(&[0][..]));
    assert_eq!(triangle.check_invariants(), Ok(()));
}

#[rstest]
fn removed_vertex_can_be_added_back_clean(mut triangle: GraphStore) {
    triangle.remove_vertex(0).unwrap();
    triangle.add_vertex(0).unwrap();

    assert_eq!(triangle.out_degree(0), Ok(0));
    assert_eq!(triangle.has_edge(0, 1), Ok(false));
    assert_eq!(triangle.isolated_vertices().collect::<Vec<_>>(), vec![0]);
}

#[rstest]
#[case::has_edge_unknown_source(|g: &GraphStore| g.has_edge(7, 0).map(|_| ()), GraphError::VertexNotFound(7))]
#[case::cost_of_missing_edge(|g: &GraphStore| g.cost(2, 0).map(|_| ()), GraphError::EdgeNotFound { from: 2, to: 0 })]
#[case::degree_unknown(|g: &GraphStore| g.in_degree(5).map(|_| ()), GraphError::VertexNotFound(5))]
fn queries_report_missing_elements(
    triangle: GraphStore,
    #[case] query: fn(&GraphStore) -> Result<(), GraphError>,
    #[case] expected: GraphError,
) {
    assert_eq!(query(&triangle), Err(expected));
}

#[rstest]
fn rejected_mutations_leave_graph_unchanged(mut triangle: GraphStore) {
    let before: Vec<_> = triangle.edges().collect();

    assert_eq!(
        triangle.add_edge(0, 1, 9),
        Err(GraphError::EdgeAlreadyExists { from: 0, to: 1 })
    );
    assert_eq!(triangle.add_vertex(2), Err(GraphError::VertexAlreadyExists(2)));
    assert_eq!(
        triangle.remove_edge(2, 1),
        Err(GraphError::EdgeNotFound { from: 2, to: 1 })
    );
    assert_eq!(
        triangle.update_cost(2, 0, 1),
        Err(GraphError::EdgeNotFound { from: 2, to: 0 })
    );
    assert_eq!(triangle.remove_vertex(3), Err(GraphError::VertexNotFound(3)));

    assert_eq!(triangle.edges().collect::<Vec<_>>(), before);
    assert_eq!(triangle.check_invariants(), Ok(()));
}

#[rstest]
fn update_cost_accepts_negative_values(mut triangle: GraphStore) {
    assert_eq!(triangle.update_cost(0, 1, -40), Ok(4));
    assert_eq!(triangle.cost(0, 1), Ok(-40));
    assert_eq!(triangle.edge_count(), 3);
}

#[test]
fn self_loop_counts_in_both_directions() {
    let mut g = GraphStore::with_vertices(1);
    g.add_edge(0, 0, 3).unwrap();
    assert_eq!(g.in_degree(0), Ok(1));
    assert_eq!(g.out_degree(0), Ok(1));

    g.remove_vertex(0).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
}
