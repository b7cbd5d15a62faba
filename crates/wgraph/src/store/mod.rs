//! In-memory directed graph store.
//!
//! [`GraphStore`] keeps three maps in lock-step:
//!
//! - `inbound[v]`: every `u` with an edge `u -> v`
//! - `outbound[u]`: every `v` with an edge `u -> v`
//! - `costs[(u, v)]`: the cost of edge `u -> v`
//!
//! plus `edge_order`, the keys of `costs` in the order the edges were added.
//!
//! # Invariants
//!
//! After every public operation returns successfully:
//!
//! 1. Every tracked vertex has an inbound and an outbound list (possibly empty).
//! 2. Edge `(s, t)` exists iff `s ∈ inbound[t]`, `t ∈ outbound[s]` and
//!    `(s, t)` is a key of `costs`. All three agree, and `edge_order` lists
//!    exactly the keys of `costs`.
//! 3. The vertex count is the number of tracked vertices and the edge count
//!    is the number of cost entries.
//! 4. No neighbour appears twice in one adjacency list.
//!
//! Every operation validates its preconditions before touching any map, so a
//! failed call leaves the store exactly as it was.
//!
//! # Ordering
//!
//! Vertices are reported in the order they were first tracked. Neighbours and
//! [`GraphStore::edges`] are reported in the order the edges were added.
//! Updating a cost keeps an edge's position; removing and re-adding it moves
//! it to the end. Nothing is sorted.


use crate::domain::{Cost, Direction, Edge, VertexId};
use crate::error::GraphError;
use std::collections::HashMap;

/// Result type for graph store operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// A directed, weighted graph with at most one edge per ordered pair.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Predecessor lists, keyed by head vertex.
    inbound: HashMap<VertexId, Vec<VertexId>>,

    /// Successor lists, keyed by tail vertex.
    outbound: HashMap<VertexId, Vec<VertexId>>,

    /// Edge costs keyed by `(source, target)`.
    costs: HashMap<(VertexId, VertexId), Cost>,

    /// Keys of `costs` in insertion order.
    edge_order: Vec<(VertexId, VertexId)>,

    /// Tracked vertices in tracking order.
    order: Vec<VertexId>,
}

impl GraphStore {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with vertices `0..vertex_count` and no edges.
    #[must_use]
    pub fn with_vertices(vertex_count: VertexId) -> Self {
        let capacity = vertex_count as usize;
        let mut store = Self {
            inbound: HashMap::with_capacity(capacity),
            outbound: HashMap::with_capacity(capacity),
            costs: HashMap::new(),
            edge_order: Vec::new(),
            order: Vec::with_capacity(capacity),
        };
        for v in 0..vertex_count {
            store.track(v);
        }
        store
    }

    // ========== Counts ==========

    /// Number of tracked vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inbound.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if the graph tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ========== Queries ==========

    /// Returns `true` if `v` is tracked.
    #[must_use]
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.inbound.contains_key(&v) && self.outbound.contains_key(&v)
    }

    /// Returns `true` if the edge `source -> target` exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is untracked.
    pub fn has_edge(&self, source: VertexId, target: VertexId) -> GraphResult<bool> {
        self.require_vertex(source)?;
        self.require_vertex(target)?;
        let present = self.costs.contains_key(&(source, target));
        debug_assert_eq!(present, self.inbound[&target].contains(&source));
        debug_assert_eq!(present, self.outbound[&source].contains(&target));
        Ok(present)
    }

    /// Cost of the edge `source -> target`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if there is no such edge, or
    /// [`GraphError::VertexNotFound`] if either endpoint is untracked.
    pub fn cost(&self, source: VertexId, target: VertexId) -> GraphResult<Cost> {
        self.require_edge(source, target)?;
        Ok(self.costs[&(source, target)])
    }

    /// Number of edges entering `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked.
    pub fn in_degree(&self, v: VertexId) -> GraphResult<usize> {
        self.require_vertex(v)?;
        Ok(self.inbound[&v].len())
    }

    /// Number of edges leaving `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked.
    pub fn out_degree(&self, v: VertexId) -> GraphResult<usize> {
        self.require_vertex(v)?;
        Ok(self.outbound[&v].len())
    }

    /// Degree of `v` in the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked.
    pub fn degree(&self, v: VertexId, direction: Direction) -> GraphResult<usize> {
        match direction {
            Direction::Outbound => self.out_degree(v),
            Direction::Inbound => self.in_degree(v),
        }
    }

    // ========== Traversal ==========

    /// All tracked vertices in tracking order.
    ///
    /// Each call starts a fresh pass.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// Successors of `v`: every `t` with an edge `v -> t`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked. The check
    /// happens before any item is produced.
    pub fn outbound(&self, v: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        self.require_vertex(v)?;
        Ok(self.outbound[&v].iter().copied())
    }

    /// Predecessors of `v`: every `s` with an edge `s -> v`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked. The check
    /// happens before any item is produced.
    pub fn inbound(&self, v: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        self.require_vertex(v)?;
        Ok(self.inbound[&v].iter().copied())
    }

    /// Neighbours of `v` in the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked.
    pub fn neighbors(&self, v: VertexId, direction: Direction) -> GraphResult<&[VertexId]> {
        self.require_vertex(v)?;
        let lists = match direction {
            Direction::Outbound => &self.outbound,
            Direction::Inbound => &self.inbound,
        };
        Ok(lists[&v].as_slice())
    }

    /// Every edge, in the order the edges were added.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_order
            .iter()
            .map(move |&(source, target)| Edge::new(source, target, self.costs[&(source, target)]))
    }

    /// Tracked vertices with no inbound and no outbound edges.
    pub fn isolated_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|v| self.inbound[v].is_empty() && self.outbound[v].is_empty())
    }

    // ========== Mutation ==========

    /// Start tracking `v` with empty adjacency lists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if `v` is already tracked.
    pub fn add_vertex(&mut self, v: VertexId) -> GraphResult<()> {
        if self.has_vertex(v) {
            return Err(GraphError::VertexAlreadyExists(v));
        }
        self.track(v);
        tracing::debug!(vertex = v, "Added vertex");
        Ok(())
    }

    /// Add the edge `source -> target` with the given cost.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is untracked
    /// and [`GraphError::EdgeAlreadyExists`] if the edge is already present.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, cost: Cost) -> GraphResult<()> {
        if self.has_edge(source, target)? {
            return Err(GraphError::EdgeAlreadyExists {
                from: source,
                to: target,
            });
        }

        self.inbound.entry(target).or_default().push(source);
        self.outbound.entry(source).or_default().push(target);
        self.costs.insert((source, target), cost);
        self.edge_order.push((source, target));

        tracing::debug!(source, target, cost, "Added edge");
        Ok(())
    }

    /// Overwrite the cost of an existing edge. Any value is accepted,
    /// including negative costs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if there is no such edge.
    pub fn update_cost(
        &mut self,
        source: VertexId,
        target: VertexId,
        new_cost: Cost,
    ) -> GraphResult<Cost> {
        self.require_edge(source, target)?;
        let previous = self
            .costs
            .insert((source, target), new_cost)
            .unwrap_or(new_cost);
        tracing::debug!(source, target, previous, new_cost, "Updated edge cost");
        Ok(previous)
    }

    /// Remove the edge `source -> target`, returning its cost.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if there is no such edge.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<Cost> {
        self.require_edge(source, target)?;

        let cost = self.costs.remove(&(source, target)).unwrap_or_default();
        self.edge_order.retain(|&key| key != (source, target));
        if let Some(preds) = self.inbound.get_mut(&target) {
            remove_first(preds, source);
        }
        if let Some(succs) = self.outbound.get_mut(&source) {
            remove_first(succs, target);
        }

        tracing::debug!(source, target, "Removed edge");
        Ok(cost)
    }

    /// Remove `v` together with every edge incident to it.
    ///
    /// Inbound edges are removed first, then outbound edges, then the vertex
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `v` is untracked.
    pub fn remove_vertex(&mut self, v: VertexId) -> GraphResult<()> {
        self.require_vertex(v)?;

        // remove_edge mutates the lists, so iterate over copies
        let predecessors = self.inbound[&v].clone();
        for source in predecessors {
            self.remove_edge(source, v)?;
        }
        let successors = self.outbound[&v].clone();
        for target in successors {
            self.remove_edge(v, target)?;
        }

        self.inbound.remove(&v);
        self.outbound.remove(&v);
        self.order.retain(|&tracked| tracked != v);

        tracing::debug!(vertex = v, "Removed vertex");
        Ok(())
    }

    // ========== Consistency ==========

    /// Check invariants 1 to 4 from the module documentation.
    ///
    /// Returns a description of the first violation found.
    ///
    /// # Errors
    ///
    /// Returns `Err` describing the broken invariant.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.order.len() != self.inbound.len() || self.order.len() != self.outbound.len() {
            return Err(format!(
                "tracking order has {} vertices, inbound {}, outbound {}",
                self.order.len(),
                self.inbound.len(),
                self.outbound.len()
            ));
        }

        for &v in &self.order {
            let (Some(preds), Some(succs)) = (self.inbound.get(&v), self.outbound.get(&v)) else {
                return Err(format!("vertex {v} is missing an adjacency list"));
            };
            if has_duplicates(preds) {
                return Err(format!("inbound list of {v} has duplicates"));
            }
            if has_duplicates(succs) {
                return Err(format!("outbound list of {v} has duplicates"));
            }
            for &t in succs {
                if !self.costs.contains_key(&(v, t)) {
                    return Err(format!("edge {v} -> {t} has no cost"));
                }
                if !self.inbound.get(&t).is_some_and(|p| p.contains(&v)) {
                    return Err(format!("edge {v} -> {t} missing from inbound[{t}]"));
                }
            }
        }

        if self.edge_order.len() != self.costs.len() {
            return Err(format!(
                "{} costs but {} edges in insertion order",
                self.costs.len(),
                self.edge_order.len()
            ));
        }
        let mut seen = std::collections::HashSet::with_capacity(self.edge_order.len());
        for &(s, t) in &self.edge_order {
            if !self.costs.contains_key(&(s, t)) || !seen.insert((s, t)) {
                return Err(format!("edge {s} -> {t} is misplaced in insertion order"));
            }
        }

        let listed: usize = self.outbound.values().map(Vec::len).sum();
        let reverse: usize = self.inbound.values().map(Vec::len).sum();
        if listed != self.costs.len() || reverse != self.costs.len() {
            return Err(format!(
                "{} costs, {listed} outbound entries, {reverse} inbound entries",
                self.costs.len()
            ));
        }

        Ok(())
    }

    // ========== Internals ==========

    fn track(&mut self, v: VertexId) {
        self.inbound.insert(v, Vec::new());
        self.outbound.insert(v, Vec::new());
        self.order.push(v);
    }

    fn require_vertex(&self, v: VertexId) -> GraphResult<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(v))
        }
    }

    fn require_edge(&self, source: VertexId, target: VertexId) -> GraphResult<()> {
        if self.has_edge(source, target)? {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound {
                from: source,
                to: target,
            })
        }
    }
}

fn remove_first(list: &mut Vec<VertexId>, value: VertexId) {
    if let Some(pos) = list.iter().position(|&x| x == value) {
        list.remove(pos);
    }
}

fn has_duplicates(list: &[VertexId]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(list.len());
    !list.iter().all(|v| seen.insert(*v))
}
