//! Node representation

use serde::{Deserialize, Serialize};

/// Which declaration group a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    State,
    Event,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::State => "State",
            NodeKind::Event => "Event",
        }
    }
}

/// A node in the transition graph: a state or an event token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphNode {
    pub kind: NodeKind,
    pub name: String,
}

impl GraphNode {
    pub fn is_state(&self) -> bool {
        self.kind == NodeKind::State
    }
}

/// A directed connection in the graph.
///
/// Each uniform edge contributes two of these: `from -> event` and
/// `event -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Position of the originating uniform edge in the adapted sequence
    pub transition: usize,
}
