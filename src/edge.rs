
use crate::id::EdgeId;
use crate::quantity::Quantity;

/// Index of an arc within the arena of a [`FlowNetwork`](crate::FlowNetwork).
///
/// Indices are stable for the lifetime of the network and are the only form
/// of arc reference used anywhere in the crate.
pub type ArcIndex = usize;

/// A directed arc of the residual graph.
///
/// Every logical edge is stored as a pair of arcs: the forward arc carries
/// the remaining capacity, the backward arc the already-used, reclaimable
/// capacity. The two are linked through [`Edge::reverse`] and carry negated
/// weights.
#[derive(Clone, Debug)]
pub struct Edge<Id, C, W> {
    id: Id,
    source: usize,
    target: usize,
    capacity: C,
    flow: C,
    weight: W,
    reverse: ArcIndex,
}

impl<Id: EdgeId, C: Quantity, W: Quantity> Edge<Id, C, W> {
    pub(crate) fn new(
        id: Id,
        source: usize,
        target: usize,
        weight: W,
        capacity: C,
        reverse: ArcIndex,
    ) -> Self {
        Self {
            id,
            source,
            target,
            capacity,
            flow: C::zero(),
            weight,
            reverse,
        }
    }

    /// The external label of the logical edge this arc belongs to.
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }

    pub fn flow(&self) -> C {
        self.flow
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Index of the paired arc pointing the opposite way.
    pub fn reverse(&self) -> ArcIndex {
        self.reverse
    }

    /// Capacity still available on this arc.
    pub fn residual_capacity(&self) -> C {
        self.capacity - self.flow
    }

    /// Adds `delta` to the flow. Callers never push more than the residual
    /// capacity; the arc itself does not check.
    pub(crate) fn change_flow(&mut self, delta: C) {
        self.flow += delta;
    }

    pub(crate) fn clear_flow(&mut self) {
        self.flow = C::zero();
    }
}
