use crate::error::GraphError;
use crate::minimum_cut::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};

// working copy of the weight matrix, contracted in place by the solver
#[derive(Default)]
pub struct DenseMatrix<Weight> {
    pub num_nodes: usize,
    pub num_active: usize,
    pub weights: Vec<Vec<Option<Weight>>>,
    pub merged: Vec<bool>,
    pub members: Vec<Vec<usize>>, // original nodes represented by u
}

impl<Weight> DenseMatrix<Weight>
where
    Weight: NumAssign + CheckedAdd + Ord + Copy,
{
    pub fn build(&mut self, graph: &Graph<Weight>) {
        self.num_nodes = graph.num_nodes();
        self.num_active = graph.num_nodes();
        self.weights.clone_from(&graph.weights);
        self.merged.clear();
        self.merged.resize(self.num_nodes, false);
        self.members = (0..self.num_nodes).map(|u| vec![u]).collect();
    }

    #[inline]
    pub fn is_active(&self, u: usize) -> bool {
        !self.merged[u]
    }

    // fold t into s: s takes over every edge of t, t leaves the graph
    pub fn merge(&mut self, s: usize, t: usize) -> Result<(), GraphError> {
        debug_assert!(s != t && self.is_active(s) && self.is_active(t));

        for v in 0..self.num_nodes {
            if v == s || v == t || self.merged[v] {
                continue;
            }
            let weight = match (self.weights[s][v], self.weights[t][v]) {
                (None, None) => continue,
                (Some(a), None) | (None, Some(a)) => a,
                (Some(a), Some(b)) => a.checked_add(&b).ok_or(GraphError::WeightOverflow)?,
            };
            self.weights[s][v] = Some(weight);
            self.weights[v][s] = Some(weight);
        }

        self.merged[t] = true;
        self.num_active -= 1;
        let members = std::mem::take(&mut self.members[t]);
        self.members[s].extend(members);
        Ok(())
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.num_nodes).all(|u| (0..u).all(|v| self.merged[u] || self.merged[v] || self.weights[u][v] == self.weights[v][u]))
    }
}
