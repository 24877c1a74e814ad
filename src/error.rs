use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("edge {u} - {v} has a negative weight")]
    NegativeWeight { u: usize, v: usize },

    #[error("source and sink are the same node ({node})")]
    SourceEqualsSink { node: usize },

    #[error("total capacity out of the source overflows the flow type")]
    CapacityOverflow,

    #[error("accumulated edge weight overflows the weight type")]
    WeightOverflow,

    #[error("a cut needs at least two nodes, graph has {num_nodes}")]
    TooFewNodes { num_nodes: usize },
}

pub(crate) fn check_node(node: usize, num_nodes: usize) -> Result<(), GraphError> {
    if node >= num_nodes {
        return Err(GraphError::NodeOutOfRange { node, num_nodes });
    }
    Ok(())
}
