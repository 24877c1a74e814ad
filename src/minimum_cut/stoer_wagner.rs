use crate::error::GraphError;
use crate::minimum_cut::dense::DenseMatrix;
use crate::minimum_cut::graph::Graph;
use log::{debug, info, trace};
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Membership {
    NotConnected,
    Connected,
    InA,
}

/// Stoer-Wagner global minimum cut, O(n^3).
///
/// Each phase grows a set A by maximum adjacency ordering; the weight attaching the last node
/// added is the cut of the phase, and the last node is then merged into the one added before it.
/// The answer is the smallest cut of the phase over all n - 1 phases.
#[derive(Default)]
pub struct StoerWagner<Weight> {
    dense: DenseMatrix<Weight>,
    membership: Vec<Membership>,
    weight_to_a: Vec<Weight>,
    cut_side: Vec<usize>,
}

impl<Weight> StoerWagner<Weight>
where
    Weight: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn solve(&mut self, graph: &Graph<Weight>) -> Result<Weight, GraphError> {
        let num_nodes = graph.num_nodes();
        if num_nodes < 2 {
            return Err(GraphError::TooFewNodes { num_nodes });
        }

        self.dense.build(graph);
        self.cut_side.clear();

        let mut minimum_cut = None;
        for phase in 0..num_nodes - 1 {
            let (s, t, cut) = self.minimum_cut_phase()?;
            debug!("phase {}: s = {}, t = {}, cut of the phase {:?}", phase, s, t, cut);

            if minimum_cut.map_or(true, |best| cut < best) {
                minimum_cut = Some(cut);
                self.cut_side.clone_from(&self.dense.members[t]);
            }

            self.dense.merge(s, t)?;
            debug_assert!(self.dense.is_symmetric());
            trace!("merged {} into {}, {} nodes left", t, s, self.dense.num_active);
        }
        self.cut_side.sort_unstable();

        let minimum_cut = minimum_cut.ok_or(GraphError::TooFewNodes { num_nodes })?;
        info!("global minimum cut: {:?}", minimum_cut);
        Ok(minimum_cut)
    }

    // nodes on one side of the best cut found by the last solve
    pub fn cut_side(&self) -> &[usize] {
        &self.cut_side
    }

    // returns (s, t, cut of the phase), t is the last node added to A and s the one before it
    fn minimum_cut_phase(&mut self) -> Result<(usize, usize, Weight), GraphError> {
        let num_nodes = self.dense.num_nodes;
        self.membership.clear();
        self.membership.resize(num_nodes, Membership::NotConnected);
        self.weight_to_a.clear();
        self.weight_to_a.resize(num_nodes, Weight::zero());

        let (mut s, mut t) = (usize::MAX, usize::MAX);
        let mut cut = Weight::zero();
        for _ in 0..self.dense.num_active {
            let u = match self.most_tightly_connected() {
                Some(u) => u,
                None => break,
            };
            self.membership[u] = Membership::InA;
            s = t;
            t = u;
            cut = self.weight_to_a[u];

            for v in 0..num_nodes {
                if !self.dense.is_active(v) || self.membership[v] == Membership::InA {
                    continue;
                }
                if let Some(w) = self.dense.weights[u][v] {
                    self.weight_to_a[v] = self.weight_to_a[v].checked_add(&w).ok_or(GraphError::WeightOverflow)?;
                    self.membership[v] = Membership::Connected;
                }
            }
        }

        debug_assert!(s < num_nodes && t < num_nodes);
        Ok((s, t, cut))
    }

    // ties go to connected nodes, then to the lowest index
    fn most_tightly_connected(&self) -> Option<usize> {
        let key = |v: usize| (self.weight_to_a[v], self.membership[v] == Membership::Connected);

        let mut best: Option<usize> = None;
        for v in 0..self.dense.num_nodes {
            if !self.dense.is_active(v) || self.membership[v] == Membership::InA {
                continue;
            }
            if best.map_or(true, |b| key(v) > key(b)) {
                best = Some(v);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(num_nodes: usize, edges: &[(usize, usize, i64)]) -> Graph<i64> {
        let mut graph = Graph::new(num_nodes);
        for &(u, v, w) in edges {
            graph.add_undirected_edge(u, v, w).unwrap();
        }
        graph
    }

    const PAPER_EXAMPLE: [(usize, usize, i64); 12] = [
        (0, 1, 2),
        (0, 4, 3),
        (1, 2, 3),
        (1, 4, 2),
        (1, 5, 2),
        (2, 3, 4),
        (2, 6, 2),
        (3, 6, 2),
        (3, 7, 2),
        (4, 5, 3),
        (5, 6, 1),
        (6, 7, 3),
    ];

    #[rstest]
    #[case(2, vec![(0, 1, 7)], 7)]
    #[case(3, vec![(0, 1, 3), (1, 2, 1), (0, 2, 2)], 3)]
    #[case(4, vec![(0, 1, 5), (2, 3, 5)], 0)]
    #[case(3, vec![], 0)]
    #[case(4, vec![(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)], 2)]
    #[case(8, PAPER_EXAMPLE.to_vec(), 4)]
    fn solve_small(#[case] num_nodes: usize, #[case] edges: Vec<(usize, usize, i64)>, #[case] expected: i64) {
        let graph = build(num_nodes, &edges);
        let mut stoer_wagner = StoerWagner::default();
        assert_eq!(stoer_wagner.solve(&graph), Ok(expected));

        let side = stoer_wagner.cut_side();
        assert!(!side.is_empty() && side.len() < num_nodes);
        assert_eq!(graph.cut_weight(side), expected);
    }

    #[test]
    fn solve_rejects_tiny_graphs() {
        let mut stoer_wagner = StoerWagner::default();
        assert_eq!(stoer_wagner.solve(&Graph::<i64>::new(0)), Err(GraphError::TooFewNodes { num_nodes: 0 }));
        assert_eq!(stoer_wagner.solve(&Graph::<i64>::new(1)), Err(GraphError::TooFewNodes { num_nodes: 1 }));
    }

    #[test]
    fn solve_twice_gives_same_cut() {
        let graph = build(8, &PAPER_EXAMPLE);
        let mut stoer_wagner = StoerWagner::default();
        assert_eq!(stoer_wagner.solve(&graph), Ok(4));
        assert_eq!(stoer_wagner.solve(&graph), Ok(4));
    }

    #[test]
    fn first_phase_follows_max_adjacency_order() {
        let graph = build(3, &[(0, 1, 3), (1, 2, 1), (0, 2, 2)]);
        let mut stoer_wagner = StoerWagner::default();
        stoer_wagner.dense.build(&graph);

        // 0 first, then 1 (3 > 2), then 2 attached by 2 + 1
        assert_eq!(stoer_wagner.minimum_cut_phase(), Ok((1, 2, 3)));
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let graph = build(4, &[(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
        let mut stoer_wagner = StoerWagner::default();
        stoer_wagner.dense.build(&graph);
        assert_eq!(stoer_wagner.minimum_cut_phase(), Ok((2, 3, 1)));
    }

    #[test]
    fn merges_keep_matrix_symmetric() {
        let graph = build(8, &PAPER_EXAMPLE);
        let mut stoer_wagner = StoerWagner::default();
        stoer_wagner.dense.build(&graph);

        while stoer_wagner.dense.num_active > 1 {
            let (s, t, _) = stoer_wagner.minimum_cut_phase().unwrap();
            stoer_wagner.dense.merge(s, t).unwrap();
            assert!(stoer_wagner.dense.is_symmetric());
        }
        let survivors: Vec<usize> = (0..8).filter(|&u| stoer_wagner.dense.is_active(u)).collect();
        assert_eq!(survivors.len(), 1);
        assert_eq!(stoer_wagner.dense.members[survivors[0]].len(), 8);
    }

    #[test]
    fn solve_detects_overflow() {
        let mut graph: Graph<u8> = Graph::new(3);
        graph.add_undirected_edge(0, 1, 200).unwrap();
        graph.add_undirected_edge(0, 2, 100).unwrap();
        assert_eq!(StoerWagner::default().solve(&graph), Err(GraphError::WeightOverflow));
    }
}
