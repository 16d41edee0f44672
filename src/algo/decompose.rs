use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::edge::ArcIndex;
use crate::error::Error;
use crate::graph::FlowNetwork;
use crate::id::EdgeId;
use crate::quantity::Quantity;

/// A source-to-sink path extracted from a flow assignment.
///
/// Carries the labels of the logical edges it traverses and the amount of
/// flow that was canceled along it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowPath<Id, C> {
    edges: Vec<Id>,
    flow: C,
}

impl<Id: EdgeId, C: Quantity> FlowPath<Id, C> {
    /// Labels of the logical edges, in travel order.
    pub fn edge_ids(&self) -> &[Id] {
        &self.edges
    }

    /// The flow this path carried, i.e. its bottleneck at extraction time.
    pub fn flow(&self) -> C {
        self.flow
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

enum Walk {
    Path(Vec<ArcIndex>),
    Cycle(Vec<ArcIndex>),
    Drained,
}

impl<Id: EdgeId, C: Quantity, W: Quantity> FlowNetwork<Id, C, W> {
    /// Follows positive flow forward from `source`, always taking the first
    /// flow-carrying arc in adjacency order, until the sink is reached, a
    /// vertex repeats (a loop, trimmed to start at the repeated vertex), or
    /// no step is possible.
    fn extract_walk(&self, source: usize, sink: usize) -> Result<Walk, Error> {
        let mut queue: VecDeque<ArcIndex> = VecDeque::new();
        let mut visited = vec![false; self.vertex_count()];
        let mut v = source;

        while !visited[v] && v != sink {
            let next = self
                .outgoing(v)
                .iter()
                .copied()
                .find(|&idx| self.edge(idx).flow() > C::zero());
            let Some(idx) = next else {
                if queue.is_empty() {
                    // nothing flows out of the start any more
                    return Ok(Walk::Drained);
                }
                // flow entered v but nothing leaves it
                return Err(Error::FlowNotConserved(v));
            };
            queue.push_back(idx);
            visited[v] = true;
            v = self.edge(idx).target();
        }

        if queue.is_empty() {
            return Ok(Walk::Drained);
        }

        if visited[v] {
            while let Some(&front) = queue.front() {
                if self.edge(front).source() == v {
                    break;
                }
                queue.pop_front();
            }
            return Ok(Walk::Cycle(queue.into_iter().collect()));
        }

        Ok(Walk::Path(queue.into_iter().collect()))
    }

    /// Drains the current flow assignment into source-to-sink paths.
    ///
    /// Each extracted walk has its minimum flow canceled along it, so the
    /// assignment is consumed as it is reported; a second call yields an
    /// empty list. Zero-net loops encountered on the way are canceled but not
    /// reported. Returns [`Error::FlowNotConserved`] if a walk dead-ends
    /// before the sink, which cannot happen on a flow produced by a
    /// successful [`FlowNetwork::min_cost_flow`].
    pub fn paths_decomposition(
        &mut self,
        source: usize,
        sink: usize,
    ) -> Result<Vec<FlowPath<Id, C>>, Error> {
        let mut paths = Vec::new();

        loop {
            match self.extract_walk(source, sink)? {
                Walk::Drained => break,
                Walk::Cycle(arcs) => {
                    let delta = self.path_flow(&arcs);
                    self.push_flow(&arcs, -delta);
                    log::trace!("canceled a loop of {} arcs carrying {delta}", arcs.len());
                }
                Walk::Path(arcs) => {
                    let delta = self.path_flow(&arcs);
                    self.push_flow(&arcs, -delta);
                    let edges = arcs.iter().map(|&idx| self.edge(idx).id()).collect();
                    paths.push(FlowPath {
                        edges,
                        flow: delta,
                    });
                }
            }
        }

        log::debug!("decomposed the flow into {} paths", paths.len());
        Ok(paths)
    }
}
