use alloc::vec;
use alloc::vec::Vec;
use core::ops::Mul;


use crate::edge::{ArcIndex, Edge};
use crate::id::EdgeId;
use crate::quantity::Quantity;

/// A capacitated, weighted directed graph held in residual form.
///
/// Arcs live in an arena addressed by [`ArcIndex`]; each vertex keeps its
/// outgoing arc indices in insertion order. Insertion order is significant:
/// flow decomposition breaks ties between flow-carrying arcs by taking the
/// first match in the adjacency list.
///
/// `infinity` is the caller-chosen sentinel for unreachable distances and
/// must be strictly greater than the cost of any path in the network.
#[derive(Clone, Debug)]
pub struct FlowNetwork<Id, C, W> {
    edges: Vec<Edge<Id, C, W>>,
    adjacency: Vec<Vec<ArcIndex>>,
    infinity: W,
}

impl<Id: EdgeId, C: Quantity, W: Quantity> FlowNetwork<Id, C, W> {
    /// Creates an empty network over the dense vertex set `0..vertex_count`.
    pub fn new(vertex_count: usize, infinity: W) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            infinity,
        }
    }

    /// Inserts a logical edge `from -> to` as a forward/backward arc pair.
    ///
    /// The forward arc carries the given weight and capacity; the backward
    /// arc the negated weight and zero capacity. The two are recorded as
    /// mutual reverses. Forward arcs therefore sit at even arena indices.
    pub fn add_edge(&mut self, id: Id, from: usize, to: usize, weight: W, capacity: C) {
        debug_assert!(capacity >= C::zero());

        let forward = self.edges.len();
        self.edges.push(Edge::new(id, from, to, weight, capacity, forward + 1));
        self.adjacency[from].push(forward);

        self.edges
            .push(Edge::new(id, to, from, -weight, C::zero(), forward));
        self.adjacency[to].push(forward + 1);
    }

    /// Models an undirected edge as two opposing logical edges sharing one
    /// label, each with the full weight and capacity.
    pub fn add_undirected_edge(&mut self, id: Id, v: usize, u: usize, weight: W, capacity: C) {
        self.add_edge(id, v, u, weight, capacity);
        self.add_edge(id, u, v, weight, capacity);
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn arc_count(&self) -> usize {
        self.edges.len()
    }

    /// All arcs in the arena, forward and backward, in insertion order.
    pub fn edges(&self) -> &[Edge<Id, C, W>] {
        &self.edges
    }

    /// Resets every arc's flow to zero.
    pub fn clear_flow(&mut self) {
        for e in &mut self.edges {
            e.clear_flow();
        }
    }

    /// Total cost of the current flow assignment.
    ///
    /// Summed over forward arcs only; each logical edge contributes its cost
    /// exactly once, so no symmetric double count arises.
    pub fn flow_cost(&self) -> W
    where
        W: Mul<C, Output = W>,
    {
        self.edges
            .iter()
            .step_by(2)
            .map(|e| e.weight() * e.flow())
            .sum()
    }

    /// Asserts the structural flow invariants: capacity bounds and
    /// antisymmetry on every arc pair, and conservation at every vertex
    /// other than `source` and `sink`.
    pub fn check(&self, source: usize, sink: usize) {
        for (idx, e) in self.edges.iter().enumerate() {
            assert!(e.flow() <= e.capacity(), "capacity exceeded on arc {idx}");
            assert_eq!(
                e.flow(),
                -self.edges[e.reverse()].flow(),
                "arc {idx} out of sync with its reverse"
            );
            if idx % 2 == 0 {
                assert!(e.flow() >= C::zero(), "negative flow on forward arc {idx}");
            }
        }

        // Backward arcs carry the negated incoming flow, so the adjacency sum
        // at a vertex is its net outflow.
        for v in 0..self.vertex_count() {
            if v == source || v == sink {
                continue;
            }
            let net: C = self.adjacency[v].iter().map(|&idx| self.edges[idx].flow()).sum();
            assert!(net == C::zero(), "flow not conserved at vertex {v}");
        }

        let delivered: C = self
            .adjacency[source]
            .iter()
            .map(|&idx| self.edges[idx].flow())
            .sum();
        log::debug!("network consistent, {delivered} units leaving vertex {source}");
    }

    pub(crate) fn edge(&self, idx: ArcIndex) -> &Edge<Id, C, W> {
        &self.edges[idx]
    }

    pub(crate) fn outgoing(&self, v: usize) -> &[ArcIndex] {
        &self.adjacency[v]
    }

    pub(crate) fn infinity(&self) -> W {
        self.infinity
    }

    /// Adds `delta` to every arc on `arcs` and subtracts it from each paired
    /// reverse arc.
    pub(crate) fn push_flow(&mut self, arcs: &[ArcIndex], delta: C) {
        for &idx in arcs {
            let rev = self.edges[idx].reverse();
            self.edges[idx].change_flow(delta);
            self.edges[rev].change_flow(-delta);
        }
    }

    /// Minimum residual capacity along `arcs`.
    pub(crate) fn bottleneck(&self, arcs: &[ArcIndex]) -> C {
        arcs.iter()
            .map(|&idx| self.edges[idx].residual_capacity())
            .min()
            .unwrap_or_else(C::zero)
    }

    /// Minimum flow along `arcs`.
    pub(crate) fn path_flow(&self, arcs: &[ArcIndex]) -> C {
        arcs.iter()
            .map(|&idx| self.edges[idx].flow())
            .min()
            .unwrap_or_else(C::zero)
    }
}
