//! State Table Visualizer
//!
//! Render state machine transition tables as Graphviz dot documents.
//!
//! This library provides functionality for:
//! - Normalizing domain-specific transition records into uniform edges
//! - Building deduplicated state/event graphs from those edges
//! - Rendering styled or compact dot documents
//! - Persisting rendered documents to files, memory or stdout
//! - Loading named transition tables from TOML or JSON catalogs
//!
//! ```no_run
//! use state_table_viz::adapter::{StateMachineAdapter, StateMachineEntry};
//! use state_table_viz::emitter::GraphEmitter;
//! use state_table_viz::render::GraphOptions;
//! use state_table_viz::sink::FileSink;
//!
//! # async fn run() -> state_table_viz::Result<()> {
//! let adapter = StateMachineAdapter::new(vec![
//!     StateMachineEntry::new("GO", "A", "B"),
//!     StateMachineEntry::new("STOP", "B", "A"),
//! ]);
//! let options = GraphOptions::named("Lights").directed(true);
//! let mut emitter = GraphEmitter::new(adapter, options, FileSink::new("graphs"));
//! emitter.create_graph().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod graph;
pub mod render;
pub mod sink;
pub mod table;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
