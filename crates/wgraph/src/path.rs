//! Single-source shortest paths by queue-based relaxation.
//!
//! This is the FIFO-queue variant of Bellman-Ford (often called SPFA):
//!
//! 1. `dist[start] = 0`, every other vertex starts at [`INFINITY`].
//! 2. Pop `u` from the queue and relax each outbound edge `u -> v`:
//!    if `dist[u] + cost(u, v) < dist[v]`, lower `dist[v]`, record `u` as the
//!    predecessor of `v` and enqueue `v` unless it is already queued.
//! 3. Stop when the queue is empty.
//!
//! # Negative cycles
//!
//! A vertex can only be pending in the queue once at a time, so the queue
//! itself never holds more than `V` entries. The overflow check is therefore
//! made on how many times each vertex has been enqueued in total: without a
//! reachable negative cycle no vertex is enqueued more than `V` times, so the
//! first vertex to exceed that count proves a cycle and ends the search.
//!
//! # Unreachable targets
//!
//! The path is rebuilt by walking predecessors back from `end`. When `end`
//! was never reached its distance is still [`INFINITY`] and the path is empty.

use crate::domain::{Cost, VertexId};
use crate::error::GraphError;
use crate::store::{GraphResult, GraphStore};
use std::collections::{HashMap, HashSet, VecDeque};

/// Distance of a vertex that has not been reached.
///
/// Larger than any finite path sum; relaxation saturates below it.
pub const INFINITY: Cost = Cost::MAX;

/// Outcome of a shortest-path search from `start` towards `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Source vertex of the search.
    pub start: VertexId,

    /// Target vertex whose path was reconstructed.
    pub end: VertexId,

    /// Distance from `start` to every tracked vertex, [`INFINITY`] when
    /// unreachable. Empty when a negative cycle was found.
    pub distances: HashMap<VertexId, Cost>,

    /// Shortest-path tree: the vertex each reached vertex was last relaxed from.
    pub predecessors: HashMap<VertexId, VertexId>,

    /// Vertices from `start` to `end` inclusive. Empty when `end` is
    /// unreachable or a negative cycle was found.
    pub path: Vec<VertexId>,

    /// A negative-cost cycle is reachable from `start`.
    pub negative_cycle: bool,
}

impl ShortestPaths {
    fn negative_cycle(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            path: Vec::new(),
            negative_cycle: true,
        }
    }

    /// Finite distance from `start` to `v`, or `None` if `v` was not reached.
    #[must_use]
    pub fn distance(&self, v: VertexId) -> Option<Cost> {
        self.distances.get(&v).copied().filter(|&d| d != INFINITY)
    }

    /// Total cost of the reconstructed path, or `None` if there is none.
    #[must_use]
    pub fn total_cost(&self) -> Option<Cost> {
        self.distance(self.end)
    }

    /// Returns `true` if a path from `start` to `end` was found.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Run queue-based relaxation from `start` and rebuild the path to `end`.
///
/// Costs may be negative. If a negative cycle is reachable from `start` the
/// result has empty `distances` and `path` and `negative_cycle` set.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` or `end` is untracked.
///
/// # Examples
///
/// ```
/// use wgraph::path::shortest_path;
/// use wgraph::store::GraphStore;
///
/// let mut g = GraphStore::with_vertices(3);
/// g.add_edge(0, 1, 4).unwrap();
/// g.add_edge(0, 2, 1).unwrap();
/// g.add_edge(2, 1, 1).unwrap();
///
/// let result = shortest_path(&g, 0, 1).unwrap();
/// assert_eq!(result.total_cost(), Some(2));
/// assert_eq!(result.path, vec![0, 2, 1]);
/// ```
pub fn shortest_path(
    graph: &GraphStore,
    start: VertexId,
    end: VertexId,
) -> GraphResult<ShortestPaths> {
    for v in [start, end] {
        if !graph.has_vertex(v) {
            return Err(GraphError::VertexNotFound(v));
        }
    }

    let vertex_count = graph.vertex_count();
    let mut distances: HashMap<VertexId, Cost> =
        graph.vertices().map(|v| (v, INFINITY)).collect();
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::with_capacity(vertex_count);
    let mut queued: HashSet<VertexId> = HashSet::with_capacity(vertex_count);
    let mut times_enqueued: HashMap<VertexId, usize> = HashMap::new();

    distances.insert(start, 0);
    queue.push_back(start);
    queued.insert(start);
    times_enqueued.insert(start, 1);

    while let Some(u) = queue.pop_front() {
        queued.remove(&u);
        let dist_u = distances[&u];

        for v in graph.outbound(u)? {
            let candidate = dist_u.saturating_add(graph.cost(u, v)?);
            if candidate >= distances[&v] {
                continue;
            }

            tracing::trace!(from = u, to = v, distance = candidate, "Relaxed edge");
            distances.insert(v, candidate);
            predecessors.insert(v, u);

            if queued.insert(v) {
                queue.push_back(v);
                let count = times_enqueued.entry(v).or_insert(0);
                *count += 1;
                if *count > vertex_count {
                    tracing::warn!(start, vertex = v, "Negative cycle reachable from start");
                    return Ok(ShortestPaths::negative_cycle(start, end));
                }
            }
        }
    }

    let path = reconstruct_path(&distances, &predecessors, start, end, vertex_count);
    tracing::debug!(
        start,
        end,
        reachable = !path.is_empty(),
        hops = path.len().saturating_sub(1),
        "Shortest path search finished"
    );

    Ok(ShortestPaths {
        start,
        end,
        distances,
        predecessors,
        path,
        negative_cycle: false,
    })
}

/// Walk predecessors back from `end` to `start`.
///
/// Returns an empty path if `end` was never reached, or if the walk takes
/// more than `vertex_count` steps.
fn reconstruct_path(
    distances: &HashMap<VertexId, Cost>,
    predecessors: &HashMap<VertexId, VertexId>,
    start: VertexId,
    end: VertexId,
    vertex_count: usize,
) -> Vec<VertexId> {
    if distances.get(&end).is_none_or(|&d| d == INFINITY) {
        return Vec::new();
    }

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        let Some(&previous) = predecessors.get(&current) else {
            return Vec::new();
        };
        if path.len() > vertex_count {
            return Vec::new();
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn graph_from(vertex_count: VertexId, edges: &[(VertexId, VertexId, Cost)]) -> GraphStore {
        let mut g = GraphStore::with_vertices(vertex_count);
        for &(s, t, c) in edges {
            g.add_edge(s, t, c).unwrap();
        }
        g
    }

    const TRIANGLE: &[(VertexId, VertexId, Cost)] = &[(0, 1, 4), (0, 2, 1), (2, 1, 1)];

    #[rstest]
    #[case::direct_edge(0, 2, 1, vec![0, 2])]
    #[case::relaxed_through_detour(0, 1, 2, vec![0, 2, 1])]
    #[case::start_is_end(0, 0, 0, vec![0])]
    fn triangle_paths(
        #[case] start: VertexId,
        #[case] end: VertexId,
        #[case] cost: Cost,
        #[case] path: Vec<VertexId>,
    ) {
        let g = graph_from(3, TRIANGLE);
        let result = shortest_path(&g, start, end).unwrap();
        assert_eq!(result.total_cost(), Some(cost));
        assert_eq!(result.path, path);
        assert!(!result.negative_cycle);
    }

    #[test]
    fn distances_cover_every_vertex() {
        let g = graph_from(4, TRIANGLE);
        let result = shortest_path(&g, 0, 1).unwrap();
        assert_eq!(result.distances.len(), 4);
        assert_eq!(result.distances[&0], 0);
        assert_eq!(result.distances[&3], INFINITY);
        assert_eq!(result.distance(3), None);
    }

    #[test]
    fn negative_edge_without_cycle() {
        let g = graph_from(3, &[(0, 1, 5), (0, 2, 2), (1, 2, -4)]);
        let result = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(result.total_cost(), Some(1));
        assert_eq!(result.path, vec![0, 1, 2]);
    }

    #[test]
    fn negative_cycle_clears_result() {
        let g = graph_from(3, &[(0, 1, 1), (1, 2, -3), (2, 1, 1)]);
        let result = shortest_path(&g, 0, 2).unwrap();
        assert!(result.negative_cycle);
        assert!(result.distances.is_empty());
        assert!(result.path.is_empty());
        assert_eq!(result.total_cost(), None);
    }

    #[test]
    fn negative_self_loop_is_a_cycle() {
        let g = graph_from(2, &[(0, 1, 1), (1, 1, -1)]);
        assert!(shortest_path(&g, 0, 1).unwrap().negative_cycle);
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g = graph_from(4, &[(0, 1, 2), (2, 3, -5), (3, 2, 1)]);
        let result = shortest_path(&g, 0, 1).unwrap();
        assert!(!result.negative_cycle);
        assert_eq!(result.total_cost(), Some(2));
        assert_eq!(result.distance(2), None);
    }

    #[test]
    fn unreachable_target_gives_empty_path() {
        let g = graph_from(3, &[(0, 1, 1), (2, 0, 1)]);
        let result = shortest_path(&g, 0, 2).unwrap();
        assert!(result.path.is_empty());
        assert!(!result.is_reachable());
        assert_eq!(result.distances[&2], INFINITY);
        assert!(!result.negative_cycle);
    }

    #[rstest]
    #[case::missing_start(9, 0)]
    #[case::missing_end(0, 9)]
    fn untracked_endpoints_are_rejected(#[case] start: VertexId, #[case] end: VertexId) {
        let g = graph_from(3, TRIANGLE);
        assert_eq!(
            shortest_path(&g, start, end),
            Err(GraphError::VertexNotFound(9))
        );
    }

    #[test]
    fn sparse_vertex_ids_are_supported() {
        let mut g = GraphStore::new();
        for v in [100, 7, 42] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge(100, 42, 3).unwrap();
        g.add_edge(42, 7, 3).unwrap();
        g.add_edge(100, 7, 10).unwrap();

        let result = shortest_path(&g, 100, 7).unwrap();
        assert_eq!(result.path, vec![100, 42, 7]);
        assert_eq!(result.total_cost(), Some(6));
    }

    #[test]
    fn huge_costs_saturate_instead_of_wrapping() {
        let g = graph_from(3, &[(0, 1, Cost::MAX - 1), (1, 2, Cost::MAX - 1)]);
        let result = shortest_path(&g, 0, 2).unwrap();
        assert_eq!(result.distance(1), Some(Cost::MAX - 1));
        assert_eq!(result.distance(2), None);
        assert!(result.path.is_empty());
    }

    #[test]
    fn path_walk_gives_up_on_broken_predecessors() {
        let distances = HashMap::from([(0, 0), (1, 5), (2, 5)]);
        let predecessors = HashMap::from([(1, 2), (2, 1)]);
        assert!(reconstruct_path(&distances, &predecessors, 0, 1, 3).is_empty());
    }
}
