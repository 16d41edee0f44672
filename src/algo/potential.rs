use alloc::vec;
use alloc::vec::Vec;


use crate::edge::Edge;
use crate::graph::FlowNetwork;
use crate::id::EdgeId;
use crate::quantity::Quantity;

/// Vertex potentials keeping reduced arc costs non-negative (Johnson's
/// technique).
///
/// Seeded once by Bellman-Ford over the residual graph, which tolerates the
/// negative-weight backward arcs present before any potentials exist. After
/// every augmentation the freshly computed shortest-path distances are folded
/// in, which keeps reduced costs valid as reverse arcs flip sign and
/// capacity.
pub(crate) struct Potentials<W> {
    values: Vec<W>,
    infinity: W,
}

impl<W: Quantity> Potentials<W> {
    /// Runs `|V|` rounds of Bellman-Ford relaxation from `source` over arcs
    /// with positive residual capacity.
    pub(crate) fn init<Id: EdgeId, C: Quantity>(
        net: &FlowNetwork<Id, C, W>,
        source: usize,
    ) -> Self {
        let infinity = net.infinity();
        let mut values = vec![infinity; net.vertex_count()];
        values[source] = W::zero();

        for _ in 0..net.vertex_count() {
            for e in net.edges() {
                if e.residual_capacity() == C::zero() || values[e.source()] == infinity {
                    continue;
                }
                let relaxed = values[e.source()] + e.weight();
                if relaxed < values[e.target()] {
                    values[e.target()] = relaxed;
                }
            }
        }

        Self { values, infinity }
    }

    /// The arc's weight adjusted by its endpoint potentials; non-negative
    /// once the potentials are consistent.
    pub(crate) fn reduced_cost<Id: EdgeId, C: Quantity>(&self, e: &Edge<Id, C, W>) -> W {
        e.weight() - self.values[e.target()] + self.values[e.source()]
    }

    /// A vertex unreachable when the potentials were seeded can never become
    /// reachable: reverse arcs only materialize along augmented paths.
    pub(crate) fn is_reachable(&self, vertex: usize) -> bool {
        self.values[vertex] != self.infinity
    }

    /// Folds the latest shortest-path distances into the potentials, capped
    /// at infinity.
    pub(crate) fn absorb(&mut self, dist: &[W]) {
        for (value, &d) in self.values.iter_mut().zip(dist) {
            *value = if *value == self.infinity || d == self.infinity {
                self.infinity
            } else {
                (*value + d).min(self.infinity)
            };
        }
    }
}
