use crate::error::{check_node, GraphError};
use num_traits::NumAssign;

// undirected weighted simple graph, stored as a dense symmetric matrix
// None means there is no edge between the pair
#[derive(Default, Clone, Debug)]
pub struct Graph<Weight> {
    num_nodes: usize,
    pub(crate) weights: Vec<Vec<Option<Weight>>>,
}

impl<Weight> Graph<Weight>
where
    Weight: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, weights: vec![vec![None; num_nodes]; num_nodes] }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn add_node(&mut self) -> usize {
        self.weights.iter_mut().for_each(|row| row.push(None));
        self.num_nodes += 1;
        self.weights.push(vec![None; self.num_nodes]);
        self.num_nodes - 1
    }

    // a second edge between the same pair replaces the first one
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<(), GraphError> {
        check_node(u, self.num_nodes)?;
        check_node(v, self.num_nodes)?;
        if weight < Weight::zero() {
            return Err(GraphError::NegativeWeight { u, v });
        }

        self.weights[u][v] = Some(weight);
        self.weights[v][u] = Some(weight);
        Ok(())
    }

    pub fn get_weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.weights.get(u)?.get(v).copied().flatten()
    }

    // total weight of edges with exactly one end in side
    pub fn cut_weight(&self, side: &[usize]) -> Weight {
        let mut inside = vec![false; self.num_nodes];
        side.iter().filter(|&&u| u < self.num_nodes).for_each(|&u| inside[u] = true);

        let mut weight = Weight::zero();
        for u in (0..self.num_nodes).filter(|&u| inside[u]) {
            for v in (0..self.num_nodes).filter(|&v| !inside[v]) {
                if let Some(w) = self.weights[u][v] {
                    weight += w;
                }
            }
        }
        weight
    }
}
