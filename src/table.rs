//! Transition table catalog
//!
//! Named state machine tables, each with optional render options, loaded from
//! a TOML or JSON file:
//!
//! ```toml
//! [[machine]]
//! name = "Outputs"
//! directed = true
//! transitions = [
//!   { event = "INITIALIZE", from_state = "INIT", expected_transition_state = "INITIALIZING" },
//! ]
//! ```

use crate::adapter::{StateMachineAdapter, StateMachineEntry};
use crate::config::{Config, OptionOverrides};
use crate::render::GraphOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A collection of named transition tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "machine")]
    pub machines: Vec<MachineTable>,
}

/// One state machine: its name, render options and transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineTable {
    pub name: String,

    #[serde(flatten)]
    pub options: OptionOverrides,

    #[serde(default)]
    pub transitions: Vec<StateMachineEntry>,
}

impl MachineTable {
    /// Adapter over this machine's transitions
    pub fn adapter(&self) -> StateMachineAdapter {
        StateMachineAdapter::new(self.transitions.clone())
    }

    /// Render options: configuration defaults with this machine's own settings on top
    pub fn graph_options(&self, config: &Config) -> GraphOptions {
        let mut options = config.base_options(&self.name);
        self.options.apply_to(&mut options);
        options
    }
}

impl Catalog {
    /// Load a catalog; `.json` files are read as JSON, everything else as TOML
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)?;

        let parsed: Result<Catalog> = if is_json(&path) {
            serde_json::from_str(&contents).map_err(Error::from)
        } else {
            toml::from_str(&contents).map_err(Error::from)
        };

        let catalog = parsed.map_err(|e| match e {
            Error::TableParse { message, .. } => Error::TableParse {
                file: path.clone(),
                message,
            },
            other => other,
        })?;

        tracing::debug!(
            "Loaded {} machine(s) from {:?}",
            catalog.machines.len(),
            path
        );
        Ok(catalog)
    }

    /// Look up a machine by name; the last definition wins over earlier ones
    pub fn machine(&self, name: &str) -> Result<&MachineTable> {
        self.machines
            .iter()
            .rev()
            .find(|m| m.name == name)
            .ok_or_else(|| Error::UnknownMachine(name.to_string()))
    }

    /// Machine names that appear more than once, in first-repeat order
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for machine in &self.machines {
            if !seen.insert(machine.name.as_str()) && !duplicates.contains(&machine.name.as_str()) {
                duplicates.push(machine.name.as_str());
            }
        }
        duplicates
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
