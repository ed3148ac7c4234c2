use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use isoprune::export::{self, ExportData, ExportFormat};
use isoprune::parser::load_graph;

#[derive(Parser)]
#[command(name = "isoprune")]
#[command(version = "0.1.0")]
#[command(about = "Degree-based vertex equivalence classes for graph isomorphism pruning", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the degree equivalence classes of a graph
    Classes {
        /// Path to a JSON graph file
        path: PathBuf,

        /// Output format: json, csv or markdown
        #[arg(short, long, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check whether two graphs can still be isomorphic by degree classes
    Compare {
        /// Path to the first JSON graph file
        left: PathBuf,

        /// Path to the second JSON graph file
        right: PathBuf,
    },
    /// Show version information
    Version,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_classes(path: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let (file, graph) =
        load_graph(path).with_context(|| format!("loading graph from {}", path.display()))?;
    let data = ExportData::from_graph(file.display_name(), &graph)?;
    log::info!(
        "{}: {} vertices in {} classes",
        data.graph_name,
        data.vertex_count,
        data.classes.len()
    );

    match output {
        Some(out) => {
            let mut writer = File::create(out)
                .with_context(|| format!("creating output file {}", out.display()))?;
            export::export(format, &data, &mut writer)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(format, &data, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn run_compare(left: &Path, right: &Path) -> Result<bool> {
    let (left_file, left_graph) =
        load_graph(left).with_context(|| format!("loading graph from {}", left.display()))?;
    let (right_file, right_graph) =
        load_graph(right).with_context(|| format!("loading graph from {}", right.display()))?;

    if left_graph.vertex_count() != right_graph.vertex_count()
        || left_graph.edge_count() != right_graph.edge_count()
    {
        println!(
            "{} and {} differ in size: not isomorphic",
            left_file.display_name(),
            right_file.display_name()
        );
        return Ok(false);
    }

    let pairing = left_graph.compare_classes(&right_graph)?;
    let compatible = pairing.is_compatible();

    println!(
        "{} vs {}: {} matched classes, {} unmatched, {} size mismatches",
        left_file.display_name(),
        right_file.display_name(),
        pairing.pairs.len(),
        pairing.unmatched_left.len() + pairing.unmatched_right.len(),
        pairing.size_mismatches().len()
    );
    if compatible {
        println!("degree classes are compatible: isomorphism not ruled out");
    } else {
        println!("degree classes differ: not isomorphic");
    }
    Ok(compatible)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Classes {
            path,
            format,
            output,
        }) => {
            run_classes(path, *format, output.as_deref())?;
        }
        Some(Commands::Compare { left, right }) => {
            if !run_compare(left, right)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Version) => {
            println!("isoprune v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("isoprune - degree equivalence classes for isomorphism pruning");
            println!("Run 'isoprune classes <FILE>' to classify a graph's vertices");
            println!("Run 'isoprune --help' for more information");
        }
    }

    Ok(ExitCode::SUCCESS)
}
