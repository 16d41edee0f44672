use alloc::vec;
use alloc::vec::Vec;


use crate::algo::potential::Potentials;
use crate::edge::ArcIndex;
use crate::graph::FlowNetwork;
use crate::id::EdgeId;
use crate::quantity::Quantity;

struct ShortestPathTree<W> {
    dist: Vec<W>,
    parent: Vec<Option<ArcIndex>>,
}

impl<Id: EdgeId, C: Quantity, W: Quantity> FlowNetwork<Id, C, W> {
    /// Dense `O(V^2)` Dijkstra from `source` over reduced arc costs.
    fn dijkstra(&self, source: usize, potentials: &Potentials<W>) -> ShortestPathTree<W> {
        let n = self.vertex_count();
        let infinity = self.infinity();
        let mut dist = vec![infinity; n];
        let mut parent = vec![None; n];
        let mut used = vec![false; n];
        dist[source] = W::zero();

        for _ in 0..n {
            let Some(v) = (0..n)
                .filter(|&u| !used[u] && dist[u] < infinity)
                .min_by_key(|&u| dist[u])
            else {
                break;
            };
            used[v] = true;

            for &idx in self.outgoing(v) {
                let e = self.edge(idx);
                let to = e.target();
                if e.residual_capacity() == C::zero() || !potentials.is_reachable(to) {
                    continue;
                }
                let relaxed = dist[v] + potentials.reduced_cost(e);
                if relaxed < dist[to] {
                    dist[to] = relaxed;
                    parent[to] = Some(idx);
                }
            }
        }

        ShortestPathTree { dist, parent }
    }

    /// The cheapest augmenting path from `source` to `sink` under the current
    /// potentials, as an arc sequence, together with the distance vector that
    /// found it. `None` when the sink is unreachable.
    fn shortest_augmenting_path(
        &self,
        source: usize,
        sink: usize,
        potentials: &Potentials<W>,
    ) -> Option<(Vec<ArcIndex>, Vec<W>)> {
        let tree = self.dijkstra(source, potentials);
        if tree.dist[sink] == self.infinity() {
            return None;
        }

        let mut arcs = Vec::new();
        let mut v = sink;
        while v != source {
            let idx = tree.parent[v]?;
            arcs.push(idx);
            v = self.edge(idx).source();
        }
        arcs.reverse();

        Some((arcs, tree.dist))
    }

    /// Sends `value` units from `source` to `sink` along successively
    /// cheapest augmenting paths.
    ///
    /// All flow is reset first, so repeated calls restart from scratch.
    /// Returns whether the full value could be delivered; `false` means the
    /// network cannot carry the requested value even after exhausting every
    /// augmenting path. The cost of the delivered flow is read back with
    /// [`FlowNetwork::flow_cost`].
    pub fn min_cost_flow(&mut self, source: usize, sink: usize, value: C) -> bool {
        self.clear_flow();
        if source == sink {
            // a zero-length path carries any value
            return true;
        }

        let mut potentials = Potentials::init(self, source);
        let mut delivered = C::zero();

        while delivered < value {
            let Some((path, dist)) = self.shortest_augmenting_path(source, sink, &potentials)
            else {
                break;
            };

            let delta = self.bottleneck(&path).min(value - delivered);
            self.push_flow(&path, delta);
            delivered += delta;
            potentials.absorb(&dist);
            log::trace!("augmented {delta} along {} arcs", path.len());
        }

        log::debug!("delivered {delivered} of {value} requested");
        delivered == value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: i64 = i64::MAX / 4;

    fn diamond(capacity: i64) -> FlowNetwork<usize, i64, i64> {
        let mut net = FlowNetwork::new(4, INF);
        net.add_edge(1, 0, 1, 1, capacity);
        net.add_edge(2, 1, 3, 1, capacity);
        net.add_edge(3, 0, 2, 5, 1);
        net.add_edge(4, 2, 3, 1, 1);
        net
    }

    #[test]
    fn routes_both_units_through_the_cheap_path() {
        let mut net = diamond(2);
        assert!(net.min_cost_flow(0, 3, 2));
        assert_eq!(net.flow_cost(), 4);
        net.check(0, 3);

        // nothing was forced onto the expensive detour
        assert_eq!(net.edge(4).flow(), 0);
        assert_eq!(net.edge(6).flow(), 0);
    }

    #[test]
    fn saturation_forces_the_pricier_path() {
        let mut net = diamond(1);
        assert!(net.min_cost_flow(0, 3, 2));
        assert_eq!(net.flow_cost(), 8);
        net.check(0, 3);

        assert!(net.edges().iter().step_by(2).all(|e| e.flow() == 1));
    }

    #[test]
    fn augmentation_reroutes_through_a_backward_arc() {
        let mut net: FlowNetwork<usize, i64, i64> = FlowNetwork::new(4, INF);
        net.add_edge(1, 0, 1, 1, 1);
        net.add_edge(2, 1, 2, 1, 1);
        net.add_edge(3, 2, 3, 1, 1);
        net.add_edge(4, 0, 2, 10, 1);
        net.add_edge(5, 1, 3, 10, 1);

        // the first unit takes 0->1->2->3; the second must cancel the middle
        // hop to reach 1->3 and 2->3 separately
        assert!(net.min_cost_flow(0, 3, 2));
        assert_eq!(net.flow_cost(), 22);
        net.check(0, 3);
        assert_eq!(net.edge(2).flow(), 0);
    }

    #[test]
    fn reports_infeasible_when_capacity_runs_out() {
        let mut net = diamond(1);
        assert!(!net.min_cost_flow(0, 3, 4));
    }

    #[test]
    fn reports_infeasible_when_sink_is_unreachable() {
        let mut net: FlowNetwork<usize, i64, i64> = FlowNetwork::new(3, INF);
        net.add_edge(1, 0, 1, 1, 1);
        assert!(!net.min_cost_flow(0, 2, 1));
    }

    #[test]
    fn zero_value_is_trivially_feasible() {
        let mut net = diamond(1);
        assert!(net.min_cost_flow(0, 3, 0));
        assert_eq!(net.flow_cost(), 0);
    }

    #[test]
    fn repeated_runs_restart_from_scratch() {
        let mut net = diamond(2);
        assert!(net.min_cost_flow(0, 3, 2));
        let first = net.flow_cost();

        assert!(net.min_cost_flow(0, 3, 2));
        assert_eq!(net.flow_cost(), first);
        net.check(0, 3);
    }
}
