//! Adapter for `{ event, from_state, expected_transition_state }` tables

use super::{Adapter, UniformEdge, require_token};
use crate::Result;
use serde::{Deserialize, Serialize};

/// One row of a state machine transition table.
///
/// Fields are optional so a table with a missing column still deserializes;
/// the gap is reported when the table is adapted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMachineEntry {
    pub event: Option<String>,
    pub from_state: Option<String>,
    pub expected_transition_state: Option<String>,
}

impl StateMachineEntry {
    pub fn new(event: &str, from_state: &str, expected_transition_state: &str) -> Self {
        Self {
            event: Some(event.to_string()),
            from_state: Some(from_state.to_string()),
            expected_transition_state: Some(expected_transition_state.to_string()),
        }
    }
}

/// Adapter over state machine transition tables
#[derive(Debug, Clone, Default)]
pub struct StateMachineAdapter {
    entries: Vec<StateMachineEntry>,
}

impl StateMachineAdapter {
    pub fn new(entries: impl Into<Vec<StateMachineEntry>>) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

impl Adapter for StateMachineAdapter {
    type Record = StateMachineEntry;

    fn records(&self) -> &[StateMachineEntry] {
        &self.entries
    }

    fn to_edge(&self, index: usize, record: &StateMachineEntry) -> Result<UniformEdge> {
        Ok(UniformEdge {
            event: require_token(index, "event", record.event.as_deref())?,
            from: require_token(index, "from_state", record.from_state.as_deref())?,
            to: require_token(
                index,
                "expected_transition_state",
                record.expected_transition_state.as_deref(),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_adapt_preserves_order() {
        let adapter = StateMachineAdapter::new(vec![
            StateMachineEntry::new("INITIALIZE", "INIT", "INITIALIZING"),
            StateMachineEntry::new("INITIALIZE_RESOLVED", "INITIALIZING", "IDLE"),
            StateMachineEntry::new("INITIALIZE", "INIT", "INITIALIZING"),
        ]);

        let edges = adapter.adapt().unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], UniformEdge::new("INITIALIZE", "INIT", "INITIALIZING"));
        assert_eq!(
            edges[1],
            UniformEdge::new("INITIALIZE_RESOLVED", "INITIALIZING", "IDLE")
        );
        // No deduplication at this stage
        assert_eq!(edges[2], edges[0]);
    }

    #[test]
    fn test_adapt_does_not_mutate_input() {
        let entries = vec![StateMachineEntry::new("GO", "A", "B")];
        let adapter = StateMachineAdapter::new(entries.clone());
        adapter.adapt().unwrap();
        adapter.adapt().unwrap();
        assert_eq!(adapter.records(), entries.as_slice());
    }

    #[test]
    fn test_missing_field_fails_fast() {
        let adapter = StateMachineAdapter::new(vec![
            StateMachineEntry::new("GO", "A", "B"),
            StateMachineEntry {
                event: Some("STOP".to_string()),
                from_state: Some("B".to_string()),
                expected_transition_state: None,
            },
        ]);

        match adapter.adapt() {
            Err(Error::Normalization { index, message }) => {
                assert_eq!(index, 1);
                assert!(message.contains("expected_transition_state"));
            }
            other => panic!("expected normalization error, got {:?}", other),
        }
    }

    #[test]
    fn test_entry_from_toml_with_missing_column() {
        let entry: StateMachineEntry =
            toml::from_str("event = \"GO\"\nfrom_state = \"A\"").unwrap();
        let adapter = StateMachineAdapter::new(vec![entry]);
        assert!(adapter.adapt().is_err());
    }

    #[test]
    fn test_empty_table() {
        let adapter = StateMachineAdapter::default();
        assert!(adapter.adapt().unwrap().is_empty());
    }
}
