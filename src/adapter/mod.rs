//! Adapter module - Normalize domain transition records into uniform edges
//!
//! Every transition table, whatever its record shape, is turned into a
//! sequence of [`UniformEdge`]s before it reaches the graph emitter.
//! Implementations supply the per-record mapping; [`Adapter::adapt`] applies
//! it across the whole table in order.

use crate::Result;
use serde::{Deserialize, Serialize};

pub mod state_machine;
pub mod triple;

pub use state_machine::{StateMachineAdapter, StateMachineEntry};
pub use triple::TripleAdapter;

/// A transition in the only shape the emitter understands
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniformEdge {
    pub event: String,
    pub from: String,
    pub to: String,
}

impl UniformEdge {
    pub fn new(event: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Adapter trait for normalizing transition records
///
/// Implementations exist per record shape:
/// - `StateMachineAdapter`: `{ event, from_state, expected_transition_state }` entries
/// - `TripleAdapter`: `(from, event, to)` tuples
pub trait Adapter {
    /// Domain-specific record shape
    type Record;

    /// The records this adapter was built from, in table order
    fn records(&self) -> &[Self::Record];

    /// Map a single record to a uniform edge.
    ///
    /// `index` is the record's position in the table and is only used for
    /// error reporting. Must not have side effects.
    fn to_edge(&self, index: usize, record: &Self::Record) -> Result<UniformEdge>;

    /// Map every record, preserving order.
    ///
    /// Fails on the first record that cannot be mapped.
    fn adapt(&self) -> Result<Vec<UniformEdge>> {
        self.records()
            .iter()
            .enumerate()
            .map(|(index, record)| self.to_edge(index, record))
            .collect()
    }
}

/// Require a non-empty token, naming the field in the error otherwise
pub(crate) fn require_token(index: usize, field: &str, value: Option<&str>) -> Result<String> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        Some(_) => Err(crate::Error::normalization(
            index,
            format!("field `{}` is empty", field),
        )),
        None => Err(crate::Error::normalization(
            index,
            format!("missing field `{}`", field),
        )),
    }
}
