use crate::error::{check_node, GraphError};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

#[derive(Default)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, num_edges: 0, edges: Vec::new() }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, GraphError> {
        check_node(from, self.num_nodes)?;
        check_node(to, self.num_nodes)?;
        if upper < Flow::zero() {
            return Err(GraphError::NegativeCapacity { from, to });
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), upper });

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<Flow>> {
        self.edges.iter()
    }

    // net flow leaving source
    pub fn maximum_flow(&self, source: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == source && edge.to != source {
                flow += edge.flow;
            } else if edge.to == source && edge.from != source {
                flow -= edge.flow;
            }
            flow
        })
    }

    // source side of a minimum s-t cut, read off the residual network of the stored flows
    // only meaningful after a maximum flow has been written back
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if source >= self.num_nodes {
            return Vec::new();
        }

        let mut incident = vec![Vec::new(); self.num_nodes];
        for (edge_id, edge) in self.edges.iter().enumerate() {
            incident[edge.from].push(edge_id);
            incident[edge.to].push(edge_id);
        }

        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            for &edge_id in incident[u].iter() {
                let edge = &self.edges[edge_id];
                // forward residual u -> to, or backward residual u -> from
                let next = if edge.from == u && edge.flow < edge.upper {
                    edge.to
                } else if edge.to == u && edge.flow > Flow::zero() {
                    edge.from
                } else {
                    continue;
                };
                if !visited[next] {
                    visited[next] = true;
                    que.push_back(next);
                }
            }
        }

        (0..self.num_nodes).filter(|&u| visited[u]).collect()
    }
}
