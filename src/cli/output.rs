//! Output formatting module
//!
//! This module handles formatting per-machine graph statistics for different output formats.

use crate::{Result, graph::GraphStats};
use serde_json::json;

/// Output machine statistics as JSON
pub fn output_json(w: &mut impl std::io::Write, report: &[(String, GraphStats)]) -> Result<()> {
    let output = json!({
        "summary": {
            "total_machines": report.len(),
            "total_transitions": report.iter().map(|(_, s)| s.total_transitions).sum::<usize>(),
        },
        "machines": report.iter().map(|(name, stats)| {
            json!({
                "name": name,
                "stats": stats,
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output).map_err(anyhow::Error::from)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output machine statistics as text table
pub fn output_table(w: &mut impl std::io::Write, report: &[(String, GraphStats)]) -> Result<()> {
    writeln!(w, "State Table Statistics")?;
    writeln!(w, "{}", "=".repeat(80))?;
    writeln!(w)?;

    if report.is_empty() {
        writeln!(w, "No machines defined.")?;
        return Ok(());
    }

    writeln!(
        w,
        "{:<32} {:>8} {:>8} {:>12} {:>10}",
        "Machine", "States", "Events", "Transitions", "Self-loops"
    )?;
    writeln!(w, "{:-<80}", "")?;

    for (name, stats) in report {
        let name_short = if name.chars().count() > 30 {
            format!("{}...", name.chars().take(27).collect::<String>())
        } else {
            name.clone()
        };

        writeln!(
            w,
            "{:<32} {:>8} {:>8} {:>12} {:>10}",
            name_short,
            stats.total_states,
            stats.total_events,
            stats.total_transitions,
            stats.self_loops
        )?;
    }
    writeln!(w)?;

    for (name, stats) in report {
        if !stats.initial_states.is_empty() {
            writeln!(w, "{} initial: {}", name, stats.initial_states.join(", "))?;
        }
        if !stats.terminal_states.is_empty() {
            writeln!(w, "{} terminal: {}", name, stats.terminal_states.join(", "))?;
        }
    }

    Ok(())
}
