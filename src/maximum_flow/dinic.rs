use crate::error::{check_node, GraphError};
use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::graph::Graph;
use log::{debug, info, trace};
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;
use std::ops::Neg;

/// Dinic's blocking flow algorithm, O(n^2 m).
///
/// Every call to [`Dinic::solve`] rebuilds the residual network from the edges of the graph,
/// so solving the same graph twice gives the same answer.
#[derive(Default)]
pub struct Dinic<Flow> {
    csr: CSR<Flow>,
    current_edge: Vec<usize>,
    path: Vec<usize>,
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + CheckedAdd + Ord + Copy + Debug,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, GraphError> {
        check_node(source, graph.num_nodes())?;
        check_node(sink, graph.num_nodes())?;
        if source == sink {
            return Err(GraphError::SourceEqualsSink { node: source });
        }

        self.csr.build(graph);
        self.current_edge.clear();
        self.current_edge.resize(graph.num_nodes(), 0);

        // the flow can never exceed what leaves the source
        let upper = self
            .csr
            .neighbors(source)
            .try_fold(Flow::zero(), |sum, e| sum.checked_add(&e.upper))
            .ok_or(GraphError::CapacityOverflow)?;

        let mut flow = Flow::zero();
        let mut phase = 0;
        while flow < upper {
            // no s-t path
            if !self.csr.update_levels(source, sink) {
                break;
            }
            phase += 1;

            self.current_edge.iter_mut().enumerate().for_each(|(u, e)| *e = self.csr.start[u]);
            let mut blocking_flow = Flow::zero();
            while flow < upper {
                let delta = self.augment(source, sink, upper - flow);
                if delta == Flow::zero() {
                    break;
                }
                blocking_flow += delta;
                flow += delta;
            }
            debug!("phase {}: sink at level {}, blocking flow {:?}", phase, self.csr.levels[sink], blocking_flow);

            if blocking_flow == Flow::zero() {
                break;
            }
        }

        self.csr.set_flow(graph);
        info!("maximum flow from {} to {}: {:?} after {} phases", source, sink, flow, phase);
        Ok(flow)
    }

    // find one path in the level graph and push its bottleneck, at most upper
    // the path is kept on an explicit stack, current_edge[u] is the first arc of u not yet known to be useless
    fn augment(&mut self, source: usize, sink: usize, upper: Flow) -> Flow {
        self.path.clear();
        let mut u = source;

        loop {
            if u == sink {
                let delta = self.path.iter().fold(upper, |delta, &i| delta.min(self.csr.inside_edge_list[i].residual_capacity()));
                for &i in self.path.iter() {
                    self.csr.push_flow(i, delta);
                }
                trace!("augment {:?} along {} arcs", delta, self.path.len());
                return delta;
            }

            // advance
            let end = self.csr.start[u + 1];
            while self.current_edge[u] < end && !self.csr.is_admissible_edge(u, self.current_edge[u]) {
                self.current_edge[u] += 1;
            }
            if self.current_edge[u] < end {
                let i = self.current_edge[u];
                self.path.push(i);
                u = self.csr.inside_edge_list[i].to;
                continue;
            }

            // retreat, u cannot reach the sink in this phase
            self.csr.levels[u] = self.csr.num_nodes;
            match self.path.pop() {
                Some(i) => {
                    u = self.csr.tail(i);
                    self.current_edge[u] += 1;
                }
                None => return Flow::zero(),
            }
        }
    }
}
