//! Render module - Turn a transition graph into a dot document
//!
//! Two output grammars are supported:
//! - `Styled`: font declarations, orthogonal splines and filled state nodes
//! - `Compact`: one attribute statement per node group, no colors

use crate::graph::TransitionGraph;
use serde::{Deserialize, Serialize};

pub mod compact;
pub mod id;
pub mod styled;

pub use id::format_id;

/// Output grammar for a rendered document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Fonts, layout hints and filled state nodes
    #[default]
    Styled,
    /// Single-line node groups, no color styling
    Compact,
}

/// Options controlling how a graph document is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Document title, also the name the document is persisted under
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_fontname")]
    pub fontname: String,

    /// `digraph` with `->` connectors when set, `graph` with `--` otherwise
    #[serde(default)]
    pub directed: bool,

    #[serde(default = "default_shape")]
    pub event_shape: String,

    #[serde(default = "default_shape")]
    pub state_shape: String,

    #[serde(default)]
    pub style: RenderStyle,
}

fn default_fontname() -> String {
    "SF Pro Text".to_string()
}

fn default_shape() -> String {
    "Mrecord".to_string()
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            fontname: default_fontname(),
            directed: false,
            event_shape: default_shape(),
            state_shape: default_shape(),
            style: RenderStyle::default(),
        }
    }
}

impl GraphOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_fontname(mut self, fontname: impl Into<String>) -> Self {
        self.fontname = fontname.into();
        self
    }

    pub fn with_shapes(
        mut self,
        state_shape: impl Into<String>,
        event_shape: impl Into<String>,
    ) -> Self {
        self.state_shape = state_shape.into();
        self.event_shape = event_shape.into();
        self
    }

    fn keyword(&self) -> &'static str {
        if self.directed { "digraph" } else { "graph" }
    }

    fn connector(&self) -> &'static str {
        if self.directed { "->" } else { "--" }
    }

    /// Opening line of the document; an empty name is left out
    fn opening_line(&self) -> String {
        if self.name.is_empty() {
            format!("{} {{", self.keyword())
        } else {
            format!("{} {} {{", self.keyword(), format_id(&self.name))
        }
    }
}

/// Render a graph document in the style selected by `options`
pub fn render(graph: &TransitionGraph, options: &GraphOptions) -> String {
    let lines = match options.style {
        RenderStyle::Styled => styled::render_lines(graph, options),
        RenderStyle::Compact => compact::render_lines(graph, options),
    };
    lines.join("\n")
}

/// Connection statements, two per transition, in transition order
pub(crate) fn connection_lines(graph: &TransitionGraph, options: &GraphOptions) -> Vec<String> {
    let connector = options.connector();
    graph
        .connections()
        .into_iter()
        .map(|(from, to)| format!("   {} {} {};", format_id(from), connector, format_id(to)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::UniformEdge;

    fn go_stop() -> TransitionGraph {
        TransitionGraph::build_from_edges(&[
            UniformEdge::new("GO", "A", "B"),
            UniformEdge::new("STOP", "B", "A"),
        ])
    }

    fn connections(doc: &str) -> Vec<&str> {
        doc.lines()
            .map(str::trim)
            .filter(|line| line.contains(" -> ") || line.contains(" -- "))
            .collect()
    }

    #[test]
    fn test_round_trip_scenario_both_styles() {
        for style in [RenderStyle::Styled, RenderStyle::Compact] {
            let options = GraphOptions::named("Lights").directed(true).with_style(style);
            let doc = render(&go_stop(), &options);

            assert!(doc.starts_with("digraph Lights {"));
            assert!(doc.ends_with('}'));
            assert_eq!(
                connections(&doc),
                vec!["A -> GO;", "GO -> B;", "B -> STOP;", "STOP -> A;"]
            );
        }
    }

    #[test]
    fn test_undirected_connector() {
        let doc = render(&go_stop(), &GraphOptions::named("Lights"));
        assert!(doc.starts_with("graph Lights {"));
        assert_eq!(connections(&doc)[0], "A -- GO;");
        assert!(!doc.contains("->"));
    }

    #[test]
    fn test_empty_name_is_omitted() {
        let doc = render(&TransitionGraph::new(), &GraphOptions::default());
        assert!(doc.starts_with("graph {"));
    }

    #[test]
    fn test_options_from_toml_defaults() {
        let options: GraphOptions = toml::from_str("name = \"Outputs\"\ndirected = true").unwrap();
        assert_eq!(options.name, "Outputs");
        assert!(options.directed);
        assert_eq!(options.fontname, "SF Pro Text");
        assert_eq!(options.state_shape, "Mrecord");
        assert_eq!(options.style, RenderStyle::Styled);

        let options: GraphOptions = toml::from_str("style = \"compact\"").unwrap();
        assert_eq!(options.style, RenderStyle::Compact);
    }
}
