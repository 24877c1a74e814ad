pub mod error;
pub mod instance;
pub mod maximum_flow;
pub mod minimum_cut;

pub use error::GraphError;
