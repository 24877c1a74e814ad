mod csr;
pub mod dinic;
pub mod graph;
