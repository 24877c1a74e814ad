use crate::maximum_flow::graph::Graph;
use std::collections::VecDeque;
use std::ops::{Neg, Sub};

use num_traits::NumAssign;

#[derive(Default, PartialEq, Debug)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

// residual network: the arcs of node u are inside_edge_list[start[u]..start[u + 1]]
#[derive(Default)]
pub struct CSR<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub edge_index_to_inside_edge_index: Vec<usize>,

    pub start: Vec<usize>,
    pub inside_edge_list: Vec<InsideEdge<Flow>>,
    pub levels: Vec<usize>, // hop distance from source in residual network, num_nodes if unreachable
    que: VecDeque<usize>,
}

impl<Flow> CSR<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    // every edge u -> v becomes a forward arc (upper, flow 0) in u's range
    // and a reverse arc (upper 0, flow 0) in v's range
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();
        self.num_edges = graph.num_edges();

        // initialize
        self.edge_index_to_inside_edge_index.clear();
        self.edge_index_to_inside_edge_index.resize(self.num_edges, usize::MAX);
        self.start.clear();
        self.start.resize(self.num_nodes + 1, 0);
        self.inside_edge_list = (0..2 * self.num_edges).map(|_| InsideEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }).collect();
        self.levels.clear();
        self.levels.resize(self.num_nodes, self.num_nodes);

        let mut degree = vec![0; self.num_nodes];
        for edge in graph.edges.iter() {
            degree[edge.to] += 1;
            degree[edge.from] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] = self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; self.num_nodes];
        for (edge_index, e) in graph.edges.iter().enumerate() {
            let (u, v) = (e.from, e.to);
            let inside_edge_index_u = self.start[u] + counter[u];
            counter[u] += 1;
            let inside_edge_index_v = self.start[v] + counter[v];
            counter[v] += 1;
            self.edge_index_to_inside_edge_index[edge_index] = inside_edge_index_u;

            self.inside_edge_list[inside_edge_index_u] = InsideEdge { to: v, flow: Flow::zero(), upper: e.upper, rev: inside_edge_index_v };
            self.inside_edge_list[inside_edge_index_v] = InsideEdge { to: u, flow: Flow::zero(), upper: Flow::zero(), rev: inside_edge_index_u };
        }
    }

    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        for (edge_id, edge) in graph.edges.iter_mut().enumerate() {
            let i = self.edge_index_to_inside_edge_index[edge_id];
            edge.flow = self.inside_edge_list[i].flow;
        }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<InsideEdge<Flow>> {
        self.inside_edge_list[self.start[u]..self.start[u + 1]].iter()
    }

    // tail of an arc is the head of its sibling
    #[inline]
    pub fn tail(&self, inside_edge_index: usize) -> usize {
        self.inside_edge_list[self.inside_edge_list[inside_edge_index].rev].to
    }

    #[inline]
    pub fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        let rev = self.inside_edge_list[inside_edge_index].rev;

        // update flow
        self.inside_edge_list[inside_edge_index].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
    }

    // O(n + m)
    // returns true if sink is reachable from source in the residual network
    pub fn update_levels(&mut self, source: usize, sink: usize) -> bool {
        self.que.clear();
        self.que.push_back(source);
        self.levels.fill(self.num_nodes);
        self.levels[source] = 0;

        while let Some(u) = self.que.pop_front() {
            for e in self.inside_edge_list[self.start[u]..self.start[u + 1]].iter() {
                if e.residual_capacity() > Flow::zero() && self.levels[e.to] == self.num_nodes {
                    self.levels[e.to] = self.levels[u] + 1;
                    self.que.push_back(e.to);
                }
            }
        }

        self.levels[sink] < self.num_nodes
    }

    #[inline]
    pub fn is_admissible_edge(&self, from: usize, i: usize) -> bool {
        let edge = &self.inside_edge_list[i];
        edge.residual_capacity() > Flow::zero() && self.levels[from] < self.num_nodes && self.levels[edge.to] == self.levels[from] + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<i64> {
        let mut graph = Graph::new(4);
        graph.add_directed_edge(0, 1, 3).unwrap();
        graph.add_directed_edge(0, 2, 2).unwrap();
        graph.add_directed_edge(1, 3, 2).unwrap();
        graph.add_directed_edge(2, 3, 3).unwrap();
        graph
    }

    #[test]
    fn build_pairs_forward_and_reverse_arcs() {
        let mut csr = CSR::default();
        csr.build(&diamond());

        assert_eq!(csr.start, vec![0, 2, 4, 6, 8]);
        for i in 0..csr.inside_edge_list.len() {
            let edge = &csr.inside_edge_list[i];
            assert_eq!(csr.inside_edge_list[edge.rev].rev, i);
            assert_eq!(edge.flow, 0);
        }
        for edge_id in 0..4 {
            let i = csr.edge_index_to_inside_edge_index[edge_id];
            let rev = csr.inside_edge_list[i].rev;
            assert_eq!(csr.inside_edge_list[rev].upper, 0);
        }
        assert_eq!(csr.neighbors(0).map(|e| e.to).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(csr.tail(csr.edge_index_to_inside_edge_index[2]), 1);
    }

    #[test]
    fn push_flow_keeps_reverse_negated() {
        let mut csr = CSR::default();
        csr.build(&diamond());

        let i = csr.edge_index_to_inside_edge_index[0];
        csr.push_flow(i, 2);
        let rev = csr.inside_edge_list[i].rev;
        assert_eq!(csr.inside_edge_list[i].flow, 2);
        assert_eq!(csr.inside_edge_list[rev].flow, -2);
        assert_eq!(csr.inside_edge_list[i].residual_capacity(), 1);
        assert_eq!(csr.inside_edge_list[rev].residual_capacity(), 2);
    }

    #[test]
    fn update_levels_follows_residual_arcs() {
        let mut csr = CSR::default();
        csr.build(&diamond());

        assert!(csr.update_levels(0, 3));
        assert_eq!(csr.levels, vec![0, 1, 1, 2]);

        // saturate both arcs into the sink
        let i = csr.edge_index_to_inside_edge_index[2];
        csr.push_flow(i, 2);
        let i = csr.edge_index_to_inside_edge_index[3];
        csr.push_flow(i, 3);
        assert!(!csr.update_levels(0, 3));
        assert_eq!(csr.levels[3], csr.num_nodes);
    }
}
