mod dense;
pub mod graph;
pub mod stoer_wagner;
