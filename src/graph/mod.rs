//! Graph module - Deduplicated state/event graph built from uniform edges

use crate::Result;
use crate::adapter::Adapter;

pub mod node;
pub mod transition_graph;

// Re-export key types
pub use node::{Connection, GraphNode, NodeKind};
pub use transition_graph::{GraphStats, TransitionGraph};

/// Adapt a table and build its transition graph
pub fn build_transition_graph<A: Adapter>(adapter: &A) -> Result<TransitionGraph> {
    let edges = adapter.adapt()?;
    Ok(TransitionGraph::build_from_edges(&edges))
}
