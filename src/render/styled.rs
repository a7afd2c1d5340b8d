//! Styled dot output
//!
//! Declares fonts, left-to-right layout and orthogonal splines, then two
//! scoped node groups: filled state nodes and plain event nodes.

use super::{GraphOptions, connection_lines, format_id, id::quote};
use crate::graph::TransitionGraph;

/// Color scheme and fill applied to every state node
const STATE_COLORSCHEME: &str = "spectral11";
const STATE_FILL: &str = "[fillcolor=2 fontcolor=white]";

pub fn render_lines(graph: &TransitionGraph, options: &GraphOptions) -> Vec<String> {
    let font = quote(&options.fontname);
    let state_shape = format_id(&options.state_shape);
    let event_shape = format_id(&options.event_shape);

    let mut lines = vec![
        options.opening_line(),
        format!("   fontname={}", font),
        "   beautify=true".to_string(),
        format!("   node [fontname={}]", font),
        format!("   edge [fontname={}]", font),
        "   graph [rankdir=LR]".to_string(),
        "   splines=\"ortho\"".to_string(),
    ];

    lines.extend([
        "   {".to_string(),
        "     node [".to_string(),
        format!("       shape={}", state_shape),
        format!("       colorscheme={}", STATE_COLORSCHEME),
        "       style=\"filled\"".to_string(),
        "       width=0".to_string(),
        "       height=0.1".to_string(),
        "     ]".to_string(),
    ]);
    lines.extend(
        graph
            .state_names()
            .into_iter()
            .map(|state| format!("     {} {}", format_id(state), STATE_FILL)),
    );
    lines.push("   }".to_string());

    lines.extend([
        "   {".to_string(),
        "     node [".to_string(),
        format!("       shape={}", event_shape),
        "       width=0".to_string(),
        "       height=0.1".to_string(),
        "     ]".to_string(),
    ]);
    lines.extend(
        graph
            .event_names()
            .into_iter()
            .map(|event| format!("     {}", format_id(event))),
    );
    lines.push("   }".to_string());

    lines.extend(connection_lines(graph, options));
    lines.push("}".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::UniformEdge;

    #[test]
    fn test_styled_document() {
        let graph = TransitionGraph::build_from_edges(&[
            UniformEdge::new("GO", "A", "B"),
            UniformEdge::new("STOP", "B", "A"),
        ]);
        let options = GraphOptions::named("Lights")
            .directed(true)
            .with_fontname("Helvetica");

        let expected = r#"digraph Lights {
   fontname="Helvetica"
   beautify=true
   node [fontname="Helvetica"]
   edge [fontname="Helvetica"]
   graph [rankdir=LR]
   splines="ortho"
   {
     node [
       shape=Mrecord
       colorscheme=spectral11
       style="filled"
       width=0
       height=0.1
     ]
     A [fillcolor=2 fontcolor=white]
     B [fillcolor=2 fontcolor=white]
   }
   {
     node [
       shape=Mrecord
       width=0
       height=0.1
     ]
     GO
     STOP
   }
   A -> GO;
   GO -> B;
   B -> STOP;
   STOP -> A;
}"#;
        assert_eq!(render_lines(&graph, &options).join("\n"), expected);
    }

    #[test]
    fn test_styled_empty_graph() {
        let lines = render_lines(&TransitionGraph::new(), &GraphOptions::named("Empty"));
        assert_eq!(lines.first().map(String::as_str), Some("graph Empty {"));
        assert_eq!(lines.last().map(String::as_str), Some("}"));
        assert!(!lines.iter().any(|l| l.contains("fillcolor")));
        assert!(!lines.iter().any(|l| l.contains("--")));
    }

    #[test]
    fn test_custom_shapes() {
        let graph = TransitionGraph::build_from_edges(&[UniformEdge::new("GO", "A", "B")]);
        let options = GraphOptions::named("Shapes").with_shapes("ellipse", "box");
        let doc = render_lines(&graph, &options).join("\n");
        assert!(doc.contains("shape=ellipse"));
        assert!(doc.contains("shape=box"));
    }
}
