//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::Result;
use crate::table::{Catalog, MachineTable};

/// Machines selected by name, or the whole catalog when no name is given
fn select_machines<'a>(
    catalog: &'a Catalog,
    name: Option<&str>,
) -> Result<Vec<&'a MachineTable>> {
    match name {
        Some(name) => Ok(vec![catalog.machine(name)?]),
        None => Ok(catalog.machines.iter().collect()),
    }
}

/// Render command implementation
pub mod render {
    use super::*;
    use crate::Config;
    use crate::emitter::GraphEmitter;
    use crate::render::RenderStyle;
    use crate::sink::{DocumentSink, FileSink, StdoutSink};
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Arguments of the render command
    #[derive(Debug, Clone)]
    pub struct RenderParams {
        pub tables: PathBuf,
        pub machine: Option<String>,
        pub out_dir: Option<PathBuf>,
        pub style: Option<RenderStyle>,
        pub stdout: bool,
    }

    /// Execute the render command
    pub async fn execute(params: RenderParams, config: Config) -> Result<()> {
        tracing::info!("Loading tables from {:?}", params.tables);
        let catalog = Catalog::from_file(&params.tables)?;
        let machines = select_machines(&catalog, params.machine.as_deref())?;

        for name in catalog.duplicate_names() {
            tracing::warn!("Machine {:?} is defined more than once; the last one wins", name);
        }

        let sink: Arc<dyn DocumentSink> = if params.stdout {
            Arc::new(StdoutSink)
        } else {
            let directory = params
                .out_dir
                .clone()
                .unwrap_or_else(|| config.output.directory.clone());
            Arc::new(FileSink::new(directory).with_extension(config.output.extension.clone()))
        };

        for machine in &machines {
            let mut options = machine.graph_options(&config);
            if let Some(style) = params.style {
                options.style = style;
            }

            let mut emitter = GraphEmitter::new(machine.adapter(), options, sink.clone());
            emitter.create_graph().await?;
        }

        tracing::info!("Rendered {} machine(s)", machines.len());
        Ok(())
    }
}

/// Validate command implementation
pub mod validate {
    use super::*;
    use crate::adapter::Adapter;
    use crate::graph::{GraphStats, TransitionGraph};
    use std::path::PathBuf;

    /// Report lines for one valid machine
    pub(crate) fn machine_summary(name: &str, stats: &GraphStats) -> Vec<String> {
        let mut lines = vec![format!(
            "  {} - {} transitions, {} states, {} events",
            name, stats.total_transitions, stats.total_states, stats.total_events
        )];
        if !stats.initial_states.is_empty() {
            lines.push(format!("    initial: {}", stats.initial_states.join(", ")));
        }
        if !stats.terminal_states.is_empty() {
            lines.push(format!("    terminal: {}", stats.terminal_states.join(", ")));
        }
        lines
    }

    /// Execute the validate command
    pub fn execute(tables: PathBuf) -> Result<()> {
        tracing::info!("Validating tables: {:?}", tables);

        let catalog = match Catalog::from_file(&tables) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load tables: {}", e);
                return Err(e);
            }
        };

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for name in catalog.duplicate_names() {
            errors.push(format!("Machine {:?} is defined more than once", name));
        }

        println!("📋 Transition Table Report");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("File: {:?}", tables);
        println!("Machines: {}", catalog.machines.len());
        println!();

        for machine in &catalog.machines {
            if machine.name.is_empty() {
                errors.push("Machine name cannot be empty".to_string());
            }

            match machine.adapter().adapt() {
                Ok(edges) => {
                    let stats = TransitionGraph::build_from_edges(&edges).stats();
                    for line in machine_summary(&machine.name, &stats) {
                        println!("{}", line);
                    }
                    if edges.is_empty() {
                        warnings.push(format!("Machine {:?} has no transitions", machine.name));
                    }
                }
                Err(e) => {
                    println!("  {} - invalid", machine.name);
                    errors.push(format!("{}: {}", machine.name, e));
                }
            }
        }
        println!();

        // Print errors
        if !errors.is_empty() {
            println!("❌ Errors:");
            for error in &errors {
                println!("   {}", error);
            }
            println!();
        }

        // Print warnings
        if !warnings.is_empty() {
            println!("⚠️  Warnings:");
            for warning in &warnings {
                println!("   {}", warning);
            }
            println!();
        }

        // Final verdict
        if errors.is_empty() {
            println!("✅ Tables are valid!");
            Ok(())
        } else {
            println!("❌ Validation failed with {} error(s)", errors.len());
            Err(crate::Error::custom("Table validation failed"))
        }
    }
}

/// Stats command implementation
pub mod stats {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::graph::build_transition_graph;
    use std::path::PathBuf;

    /// Execute the stats command
    pub fn execute(tables: PathBuf, format: OutputFormat) -> Result<()> {
        let catalog = Catalog::from_file(&tables)?;

        let mut report = Vec::with_capacity(catalog.machines.len());
        for machine in &catalog.machines {
            let graph = build_transition_graph(&machine.adapter())?;
            report.push((machine.name.clone(), graph.stats()));
        }

        match format {
            OutputFormat::Json => crate::cli::output::output_json(&mut std::io::stdout(), &report),
            OutputFormat::Table => {
                crate::cli::output::output_table(&mut std::io::stdout(), &report)
            }
        }
    }
}
