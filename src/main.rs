use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedtree::{seeding, BinaryTree, Team};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seedtree", about = "Lay ranked fields out in bracket order")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a ranked field in bracket order with its first-round pairings.
    Seed {
        /// Entrants file, one name per line, best team first.
        field: PathBuf,
    },
    /// Build the bracket tree for a ranked field and print it level by level.
    Tree {
        /// Entrants file, one name per line, best team first.
        field: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { field } => run_seed(field)?,
        Commands::Tree { field } => run_tree(field)?,
    }

    Ok(())
}

fn run_seed(field_path: PathBuf) -> Result<()> {
    let field = read_field(&field_path)?;
    let order = seeding::sort(field)?;

    println!("Bracket order:");
    for team in &order {
        println!("  {team}");
    }

    println!("First-round pairings:");
    for pairing in order.chunks(2) {
        match pairing {
            [top, bottom] => println!("  {top} vs {bottom}"),
            [lone] => println!("  {lone} (walkover)"),
            _ => unreachable!("chunks of two"),
        }
    }

    Ok(())
}

fn run_tree(field_path: PathBuf) -> Result<()> {
    let field = read_field(&field_path)?;
    let order = seeding::sort(field)?;
    let height = seeding::height(&order)?;

    let mut tree = BinaryTree::new(height)?;
    let levels = tree.levels(tree.root());
    if let Some(leaves) = levels.get(&height) {
        for (id, team) in leaves.iter().zip(order) {
            tree[*id].set_data(team);
        }
    }

    for (depth, ids) in tree.levels(tree.root()) {
        let row: Vec<String> = ids.iter().map(|id| tree[*id].to_string()).collect();
        println!("level {depth}: {}", row.join(" | "));
    }

    Ok(())
}

fn read_field(path: &PathBuf) -> Result<Vec<Team>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read field from {}", path.display()))?;

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(rank, name)| {
            let seed = u16::try_from(rank + 1)
                .with_context(|| format!("field too large at entrant '{name}'"))?;
            Ok(Team::new(seed, name))
        })
        .collect()
}
