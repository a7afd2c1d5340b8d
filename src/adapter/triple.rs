//! Adapter for plain `(from, event, to)` tuples

use super::{Adapter, UniformEdge, require_token};
use crate::Result;

/// Adapter over `(from, event, to)` string triples, the order a transition
/// reads in prose.
#[derive(Debug, Clone, Default)]
pub struct TripleAdapter {
    triples: Vec<(String, String, String)>,
}

impl TripleAdapter {
    pub fn new<S: Into<String>>(triples: impl IntoIterator<Item = (S, S, S)>) -> Self {
        Self {
            triples: triples
                .into_iter()
                .map(|(from, event, to)| (from.into(), event.into(), to.into()))
                .collect(),
        }
    }
}

impl Adapter for TripleAdapter {
    type Record = (String, String, String);

    fn records(&self) -> &[(String, String, String)] {
        &self.triples
    }

    fn to_edge(&self, index: usize, (from, event, to): &Self::Record) -> Result<UniformEdge> {
        Ok(UniformEdge {
            event: require_token(index, "event", Some(event.as_str()))?,
            from: require_token(index, "from", Some(from.as_str()))?,
            to: require_token(index, "to", Some(to.as_str()))?,
        })
    }
}
