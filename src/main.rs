//! Nanofactory Reaction Calculator
//!
//! A reaction chain calculator for nanofactory reaction lists.

mod calculator;
mod errors;
mod graph;
mod models;
mod parser;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::graph::RecipeGraph;

#[derive(Parser)]
#[command(name = "nanofactory-calculator")]
#[command(about = "Reaction chain calculator for nanofactory reaction lists")]
struct Cli {
    /// Path to the reaction list file
    #[arg(short, long, default_value = "reactions.txt")]
    reactions: PathBuf,

    /// Name of the raw base resource
    #[arg(short, long, default_value = "ORE")]
    base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum base resource needed to produce a target resource
    Cost {
        /// Target resource to produce (e.g., "FUEL")
        target: String,

        /// Units of the target resource to produce
        #[arg(short, long, default_value = "1")]
        amount: i64,
    },

    /// Maximum target resource producible from a fixed base resource supply
    Yield {
        /// Target resource to produce (e.g., "FUEL")
        target: String,

        /// Units of the base resource available
        #[arg(short = 'g', long)]
        budget: i64,
    },

    /// List all resources in the reaction list
    ListResources,

    /// Show the reaction producing a specific resource, and what consumes it
    Resource {
        /// Resource name
        name: String,
    },

    /// Write a sample reaction list for testing
    Sample,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Sample = cli.command {
        fs::write(&cli.reactions, SAMPLE_REACTIONS)
            .with_context(|| format!("Failed to write {}", cli.reactions.display()))?;
        println!("Sample reaction list written to {}", cli.reactions.display());
        return Ok(());
    }

    let input = fs::read_to_string(&cli.reactions)
        .with_context(|| format!("Failed to read {}", cli.reactions.display()))?;
    let records = parser::parse_reactions(&input)?;
    let graph = RecipeGraph::build(&cli.base, &records)?;

    match cli.command {
        Commands::Cost { target, amount } => {
            let required = calculator::total_required(&graph, &cli.base, &target, amount)?;
            println!("{} {} required for {} {}", required, cli.base, amount, target);
        }

        Commands::Yield { target, budget } => {
            let produced = calculator::max_yield(&graph, &cli.base, &target, budget)?;
            println!("{} {} producible from {} {}", produced, target, budget, cli.base);
        }

        Commands::ListResources => {
            let mut names: Vec<&str> = graph.nodes().map(|n| n.name.as_str()).collect();
            names.sort_unstable();

            println!("{:<20} {:>10}", "Resource", "Batch size");
            println!("{}", "-".repeat(32));
            for name in names {
                let node = graph.node(graph.lookup(name)?);
                if node.uses.is_empty() {
                    println!("{:<20} {:>10} (raw input)", node.name, node.batch_size);
                } else {
                    println!("{:<20} {:>10}", node.name, node.batch_size);
                }
            }
        }

        Commands::Resource { name } => {
            let node = graph.node(graph.lookup(&name)?);
            println!("Resource: {}", node.name);
            println!("  Batch size: {}", node.batch_size);

            if node.uses.is_empty() {
                println!("  Raw input (no reaction produces it)");
            } else {
                println!("  Made from:");
                for &(ingredient, amount) in &node.uses {
                    println!("    {} {}", amount, graph.node(ingredient).name);
                }
            }

            if !node.used_in.is_empty() {
                println!("  Consumed by:");
                for &(consumer, amount) in &node.used_in {
                    println!("    {} ({} per batch)", graph.node(consumer).name, amount);
                }
            }
        }

        Commands::Sample => unreachable!("handled before the reaction list is loaded"),
    }

    Ok(())
}

/// Reference reaction list: one FUEL costs 13312 ORE.
const SAMPLE_REACTIONS: &str = "\
157 ORE => 5 NZVS
165 ORE => 6 DCFZ
44 XJWVT, 5 KHKGT, 1 QDVJ, 29 NZVS, 9 GPVTF, 48 HKGWZ => 1 FUEL
12 HKGWZ, 1 GPVTF, 8 PSHF => 9 QDVJ
179 ORE => 7 PSHF
177 ORE => 5 HKGWZ
7 DCFZ, 7 PSHF => 2 XJWVT
165 ORE => 2 GPVTF
3 DCFZ, 7 NZVS, 5 HKGWZ, 10 PSHF => 8 KHKGT
";
