//! Text format of the two solvers.
//!
//! Maximum flow: `V E s t` followed by `E` triples `u v capacity`.
//! Global minimum cut: `V E` followed by `E` triples `u v weight`.
//!
//! Tokens are separated by any whitespace.

use crate::error::GraphError;
use crate::maximum_flow::graph::Graph as FlowGraph;
use crate::minimum_cut::graph::Graph as CutGraph;
use num_traits::NumAssign;
use std::io::Read;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {0}")]
    MissingToken(&'static str),

    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a str) -> Self {
        Self { iter: data.split_whitespace() }
    }

    fn parse_next<T: FromStr>(&mut self, what: &'static str) -> Result<T, InstanceError> {
        let token = self.iter.next().ok_or(InstanceError::MissingToken(what))?;
        token.parse().map_err(|_| InstanceError::InvalidToken { what, token: token.to_string() })
    }

    fn triples<T: FromStr>(&mut self, count: usize, what: &'static str) -> Result<Vec<(usize, usize, T)>, InstanceError> {
        (0..count)
            .map(|_| -> Result<(usize, usize, T), InstanceError> { Ok((self.parse_next("edge endpoint")?, self.parse_next("edge endpoint")?, self.parse_next(what)?)) })
            .collect()
    }
}

fn read_all<R: Read>(mut reader: R) -> Result<String, InstanceError> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(data)
}

#[derive(Debug, PartialEq)]
pub struct FlowInstance<Flow> {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize, Flow)>,
    pub source: usize,
    pub sink: usize,
}

impl<Flow> FlowInstance<Flow>
where
    Flow: FromStr + NumAssign + Ord + Copy,
{
    pub fn parse(data: &str) -> Result<Self, InstanceError> {
        let mut tokens = Tokens::new(data);
        let num_nodes = tokens.parse_next("number of nodes")?;
        let num_edges = tokens.parse_next("number of edges")?;
        let source = tokens.parse_next("source")?;
        let sink = tokens.parse_next("sink")?;
        let edges = tokens.triples(num_edges, "capacity")?;

        Ok(Self { num_nodes, edges, source, sink })
    }

    pub fn read<R: Read>(reader: R) -> Result<Self, InstanceError> {
        Self::parse(&read_all(reader)?)
    }

    pub fn to_graph(&self) -> Result<FlowGraph<Flow>, InstanceError> {
        let mut graph = FlowGraph::new(self.num_nodes);
        for &(from, to, upper) in self.edges.iter() {
            graph.add_directed_edge(from, to, upper)?;
        }
        Ok(graph)
    }
}

#[derive(Debug, PartialEq)]
pub struct CutInstance<Weight> {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize, Weight)>,
}

impl<Weight> CutInstance<Weight>
where
    Weight: FromStr + NumAssign + Ord + Copy,
{
    pub fn parse(data: &str) -> Result<Self, InstanceError> {
        let mut tokens = Tokens::new(data);
        let num_nodes = tokens.parse_next("number of nodes")?;
        let num_edges = tokens.parse_next("number of edges")?;
        let edges = tokens.triples(num_edges, "weight")?;

        Ok(Self { num_nodes, edges })
    }

    pub fn read<R: Read>(reader: R) -> Result<Self, InstanceError> {
        Self::parse(&read_all(reader)?)
    }

    pub fn to_graph(&self) -> Result<CutGraph<Weight>, InstanceError> {
        let mut graph = CutGraph::new(self.num_nodes);
        for &(u, v, weight) in self.edges.iter() {
            graph.add_undirected_edge(u, v, weight)?;
        }
        Ok(graph)
    }
}
