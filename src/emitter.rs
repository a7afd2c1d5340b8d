//! Graph emitter
//!
//! Drives one table through the whole pipeline: adapt the records, build the
//! deduplicated transition graph, render the dot document and hand it to the
//! sink under the document's name.

use crate::adapter::Adapter;
use crate::graph::{GraphStats, TransitionGraph};
use crate::render::{self, GraphOptions};
use crate::sink::DocumentSink;
use crate::{Error, Result};

pub struct GraphEmitter<A, S> {
    adapter: A,
    options: GraphOptions,
    sink: S,
    document: Option<String>,
    stats: Option<GraphStats>,
}

impl<A: Adapter, S: DocumentSink> GraphEmitter<A, S> {
    pub fn new(adapter: A, options: GraphOptions, sink: S) -> Self {
        Self {
            adapter,
            options,
            sink,
            document: None,
            stats: None,
        }
    }

    /// The rendered document, available once rendering has succeeded
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Statistics of the last rendered graph
    pub fn stats(&self) -> Option<&GraphStats> {
        self.stats.as_ref()
    }

    /// Adapt and render without persisting.
    ///
    /// The result is also kept for [`GraphEmitter::document`].
    pub fn render(&mut self) -> Result<&str> {
        let edges = self.adapter.adapt()?;
        let graph = TransitionGraph::build_from_edges(&edges);
        let document = render::render(&graph, &self.options);

        tracing::debug!(
            "Rendered {:?}: {} transitions, {} lines",
            self.options.name,
            edges.len(),
            document.lines().count()
        );

        self.stats = Some(graph.stats());
        Ok(self.document.insert(document).as_str())
    }

    /// Render the document and persist it through the sink.
    ///
    /// Completes once the sink has stored the document. A sink failure is
    /// logged with its cause and reported as [`Error::Persist`]; the rendered
    /// text stays available either way.
    pub async fn create_graph(&mut self) -> Result<()> {
        tracing::info!("Rendering graph {:?}", self.options.name);
        self.render()?;

        let document = self.document.as_deref().unwrap_or_default();
        if let Err(e) = self.sink.persist(&self.options.name, document).await {
            tracing::error!("Failed to persist graph {:?}: {:#}", self.options.name, e);
            return Err(Error::Persist);
        }
        Ok(())
    }
}
