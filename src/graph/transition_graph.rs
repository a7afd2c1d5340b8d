use crate::adapter::UniformEdge;
use crate::graph::{Connection, GraphNode, NodeKind};
use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use serde::Serialize;
use std::collections::HashMap;

/// A directed graph of states and events built from a transition table.
///
/// States and events are both nodes; every transition becomes the pair of
/// connections `from -> event` and `event -> to`. Nodes are never removed, so
/// node and edge indices follow insertion order and iterating them yields
/// first-seen order.
pub struct TransitionGraph {
    /// The underlying graph structure.
    pub graph: StableGraph<GraphNode, Connection>,

    /// Lookup from a node's kind and token to its graph index.
    ///
    /// Guarantees each distinct token is represented by exactly one node per
    /// kind, no matter how many transitions mention it. A token used both as
    /// a state and as an event yields two nodes here, but the rendered
    /// document declares it under one id, so dot draws them as one node.
    pub node_index: HashMap<(NodeKind, String), NodeIndex>,

    transition_count: usize,
}

impl Default for TransitionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            transition_count: 0,
        }
    }

    /// Returns the index of the node for `(kind, name)`, adding it on first sight.
    pub fn ensure_node(&mut self, kind: NodeKind, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&(kind, name.to_string())) {
            return idx;
        }

        let idx = self.graph.add_node(GraphNode {
            kind,
            name: name.to_string(),
        });
        self.node_index.insert((kind, name.to_string()), idx);
        idx
    }

    /// Adds a transition as its two connections, returning their edge indices.
    pub fn add_transition(&mut self, edge: &UniformEdge) -> (EdgeIndex, EdgeIndex) {
        let from_idx = self.ensure_node(NodeKind::State, &edge.from);
        let event_idx = self.ensure_node(NodeKind::Event, &edge.event);
        let to_idx = self.ensure_node(NodeKind::State, &edge.to);

        let connection = Connection {
            transition: self.transition_count,
        };
        self.transition_count += 1;

        (
            self.graph.add_edge(from_idx, event_idx, connection),
            self.graph.add_edge(event_idx, to_idx, connection),
        )
    }

    pub fn build_from_edges(edges: &[UniformEdge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_transition(edge);
        }
        tracing::debug!(
            "Built transition graph: {} nodes, {} connections",
            graph.graph.node_count(),
            graph.graph.edge_count()
        );
        graph
    }

    fn names_of(&self, kind: NodeKind) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .filter(|node| node.kind == kind)
            .map(|node| node.name.as_str())
            .collect()
    }

    /// Distinct state tokens in first-seen order
    pub fn state_names(&self) -> Vec<&str> {
        self.names_of(NodeKind::State)
    }

    /// Distinct event tokens in first-seen order
    pub fn event_names(&self) -> Vec<&str> {
        self.names_of(NodeKind::Event)
    }

    /// All connections as `(source, target)` names, in transition order
    pub fn connections(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_endpoints(idx))
            .filter_map(|(from, to)| {
                Some((
                    self.graph.node_weight(from)?.name.as_str(),
                    self.graph.node_weight(to)?.name.as_str(),
                ))
            })
            .collect()
    }

    /// Number of transitions added to the graph
    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// State nodes no transition leads into
    pub fn find_initial_states(&self) -> Vec<&str> {
        self.states_without(Direction::Incoming)
    }

    /// State nodes no transition leaves from
    pub fn find_terminal_states(&self) -> Vec<&str> {
        self.states_without(Direction::Outgoing)
    }

    fn states_without(&self, direction: Direction) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.edges_directed(idx, direction).count() == 0)
            .filter_map(|idx| self.graph.node_weight(idx))
            .filter(|node| node.is_state())
            .map(|node| node.name.as_str())
            .collect()
    }

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_states: self.state_names().len(),
            total_events: self.event_names().len(),
            total_transitions: self.transition_count,
            self_loops: self.self_loop_count(),
            initial_states: self
                .find_initial_states()
                .into_iter()
                .map(String::from)
                .collect(),
            terminal_states: self
                .find_terminal_states()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Transitions whose event leads back to the state it left from
    fn self_loop_count(&self) -> usize {
        let mut by_transition: HashMap<usize, (Option<NodeIndex>, Option<NodeIndex>)> =
            HashMap::new();
        for idx in self.graph.edge_indices() {
            if let (Some((source, target)), Some(connection)) =
                (self.graph.edge_endpoints(idx), self.graph.edge_weight(idx))
            {
                let entry = by_transition.entry(connection.transition).or_default();
                match self.graph.node_weight(source) {
                    Some(node) if node.is_state() => entry.0 = Some(source),
                    _ => entry.1 = Some(target),
                }
            }
        }
        by_transition
            .values()
            .filter(|(from, to)| from.is_some() && from == to)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_events: usize,
    pub total_transitions: usize,
    pub self_loops: usize,
    pub initial_states: Vec<String>,
    pub terminal_states: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges() -> Vec<UniformEdge> {
        vec![
            UniformEdge::new("INITIALIZE", "INIT", "INITIALIZING"),
            UniformEdge::new("INITIALIZE_RESOLVED", "INITIALIZING", "IDLE"),
            UniformEdge::new("TICK", "IDLE", "IDLE"),
            UniformEdge::new("SHUTDOWN", "IDLE", "STOPPED"),
            UniformEdge::new("TICK", "STOPPED", "STOPPED"),
        ]
    }

    #[test]
    fn test_empty_graph() {
        let graph = TransitionGraph::new();
        assert_eq!(graph.graph.node_count(), 0);
        assert_eq!(graph.graph.edge_count(), 0);
        assert!(graph.state_names().is_empty());
        assert!(graph.event_names().is_empty());
    }

    #[test]
    fn test_first_seen_order_and_dedup() {
        let graph = TransitionGraph::build_from_edges(&edges());
        assert_eq!(
            graph.state_names(),
            vec!["INIT", "INITIALIZING", "IDLE", "STOPPED"]
        );
        assert_eq!(
            graph.event_names(),
            vec!["INITIALIZE", "INITIALIZE_RESOLVED", "TICK", "SHUTDOWN"]
        );
    }

    #[test]
    fn test_two_connections_per_transition() {
        let graph = TransitionGraph::build_from_edges(&edges());
        assert_eq!(graph.graph.edge_count(), 10);
        assert_eq!(graph.transition_count(), 5);

        let connections = graph.connections();
        assert_eq!(connections[0], ("INIT", "INITIALIZE"));
        assert_eq!(connections[1], ("INITIALIZE", "INITIALIZING"));
        // Self loop goes through its event node
        assert_eq!(connections[4], ("IDLE", "TICK"));
        assert_eq!(connections[5], ("TICK", "IDLE"));
    }

    #[test]
    fn test_same_token_as_state_and_event() {
        let edges = [UniformEdge::new("DONE", "WORKING", "DONE")];
        let graph = TransitionGraph::build_from_edges(&edges);
        assert_eq!(graph.state_names(), vec!["WORKING", "DONE"]);
        assert_eq!(graph.event_names(), vec!["DONE"]);
        assert_eq!(graph.graph.node_count(), 3);
        assert_eq!(graph.stats().self_loops, 0);

        // Both connections name the shared id, which dot reads as a single node
        let doc = crate::render::render(&graph, &crate::render::GraphOptions::named("M"));
        assert!(doc.contains("WORKING -- DONE;"));
        assert!(doc.contains("DONE -- DONE;"));
    }

    #[test]
    fn test_graph_stats() {
        let graph = TransitionGraph::build_from_edges(&edges());
        let stats = graph.stats();
        assert_eq!(stats.total_states, 4);
        assert_eq!(stats.total_events, 4);
        assert_eq!(stats.total_transitions, 5);
        assert_eq!(stats.self_loops, 2);
        assert_eq!(stats.initial_states, vec!["INIT".to_string()]);
        assert!(stats.terminal_states.is_empty());
    }
}
