//! hue CLI entry point.
//!
//! Loads or builds a graph, colors it greedily and reports the result.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::{HueConfig, OutputFormat};
use hue_core::{
    check_coloring, dimacs, samples, ColoredGraph, ColoringCheck, ColoringReport, Graph,
    GraphDescription, GraphStats, GreedyColoring, VertexOrder,
};
use serde::Serialize;
use std::path::Path;

/// hue version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "hue")]
#[command(version = VERSION)]
#[command(about = "Greedy graph vertex coloring", long_about = None)]
struct Args {
    /// Input graph: DIMACS (.col) or JSON description (.json)
    ///
    /// Example: --input benchmarks/myciel3.col
    #[arg(short, long)]
    input: Option<String>,

    /// Built-in graph to color when no input file is given
    #[arg(long, value_enum, default_value = "lecture")]
    sample: SampleKind,

    /// Number of vertices for the complete, cycle and path samples
    #[arg(long, default_value = "5")]
    vertices: usize,

    /// Outer vertex order: insertion, largest-degree-first
    ///
    /// Overrides [coloring].order from the config file.
    #[arg(long)]
    order: Option<VertexOrder>,

    /// Path to TOML configuration file
    ///
    /// Example: --config configs/hue.toml
    #[arg(long)]
    config: Option<String>,

    /// Output format (overrides [output].format)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the result to a file instead of stdout (overrides [output].path)
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SampleKind {
    /// Five-vertex lecture graph
    Lecture,
    /// Complete graph K_n
    Complete,
    /// Cycle C_n
    Cycle,
    /// Path P_n
    Path,
}

/// JSON output document
#[derive(Debug, Serialize)]
struct JsonOutput {
    graph: ColoredGraph,
    stats: GraphStats,
    report: ColoringReport,
    check: ColoringCheck,
}

fn check_vertex_limit(num_vertices: usize, max_vertices: usize) -> Result<()> {
    if num_vertices > max_vertices {
        anyhow::bail!(
            "Graph has {} vertices, above limits.max_vertices = {}",
            num_vertices,
            max_vertices
        );
    }
    Ok(())
}

/// Loads the input graph or builds the chosen sample, refusing anything above
/// `max_vertices` before its storage is allocated.
fn load_graph(args: &Args, max_vertices: usize) -> Result<Graph> {
    let Some(path) = args.input.as_deref() else {
        log::info!("No input given, using {:?} sample", args.sample);
        if args.sample != SampleKind::Lecture {
            check_vertex_limit(args.vertices, max_vertices)?;
        }
        return Ok(match args.sample {
            SampleKind::Lecture => samples::lecture_graph(),
            SampleKind::Complete => samples::complete(args.vertices),
            SampleKind::Cycle => samples::cycle(args.vertices),
            SampleKind::Path => samples::path(args.vertices),
        });
    };

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    log::info!("Loading graph from: {}", path);

    match extension {
        "col" => dimacs::parse_dimacs_file_with_limit(path, max_vertices)
            .with_context(|| format!("Failed to load DIMACS graph '{}'", path)),
        "json" => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path))?;
            let description = GraphDescription::from_json_str(&content)
                .with_context(|| format!("Failed to parse graph description '{}'", path))?;
            check_vertex_limit(description.vertices.len(), max_vertices)?;
            description
                .build()
                .with_context(|| format!("Failed to load graph description '{}'", path))
        }
        other => anyhow::bail!(
            "Unsupported input extension '{}' for '{}'. Valid extensions: col, json",
            other,
            path
        ),
    }
}

fn render_text(graph: &Graph, report: &ColoringReport, check: &ColoringCheck) -> String {
    format!(
        "{}\ncolors used: {}, assignments: {}, conflicts: {}, uncolored: {}\n",
        graph,
        report.colors_used,
        report.assignments.len(),
        check.conflicts,
        check.uncolored
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("hue {} - Starting", VERSION);

    let config = match args.config.as_deref() {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            HueConfig::from_file(path)?
        }
        None => HueConfig::default(),
    };
    config.validate()?;

    let order = args.order.unwrap_or(config.coloring.order);
    let format = args.format.unwrap_or(config.output.format);
    let output_path = args.output.clone().or_else(|| config.output.path.clone());

    let mut graph = load_graph(&args, config.limits.max_vertices)?;

    let stats = graph.stats();
    log::info!(
        "Graph: {} vertices, {} edges, max degree {}, density {:.4}",
        stats.num_vertices,
        stats.num_edges,
        stats.max_degree,
        stats.density
    );

    let report = GreedyColoring::new(order).run(&mut graph);
    let check = check_coloring(&graph);

    let rendered = match format {
        OutputFormat::Text => render_text(&graph, &report, &check),
        OutputFormat::Json => {
            let output = JsonOutput {
                graph: ColoredGraph::from_graph(&graph),
                stats,
                report,
                check,
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            json
        }
    };

    match output_path {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output to '{}'", path))?;
            log::info!("Result written to: {}", path);
        }
        None => print!("{}", rendered),
    }

    if !check.is_valid() {
        anyhow::bail!(
            "Invalid coloring: {} conflicts, {} uncolored vertices",
            check.conflicts,
            check.uncolored
        );
    }

    Ok(())
}
