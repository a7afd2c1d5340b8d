//! Compact dot output: a layout hint and one line per node group

use super::{GraphOptions, connection_lines, format_id};
use crate::graph::TransitionGraph;

fn group_line(shape: &str, names: Vec<&str>) -> String {
    let mut line = format!("   node [shape={}];", format_id(shape));
    if !names.is_empty() {
        let ids: Vec<_> = names.into_iter().map(format_id).collect();
        line.push(' ');
        line.push_str(&ids.join(" "));
        line.push(';');
    }
    line
}

pub fn render_lines(graph: &TransitionGraph, options: &GraphOptions) -> Vec<String> {
    let mut lines = vec![
        options.opening_line(),
        "   rankdir=LR;".to_string(),
        group_line(&options.state_shape, graph.state_names()),
        group_line(&options.event_shape, graph.event_names()),
    ];
    lines.extend(connection_lines(graph, options));
    lines.push("}".to_string());
    lines
}
