// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands off to the
// application layer. Only this layer prints to stdout.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, SplitArgs};

use crate::application::generate_use_case::GenerateUseCase;

#[derive(Parser, Debug)]
#[command(
    name = "countries-splits",
    version,
    about = "Generate consistent train/valid/test benchmark splits for the countries knowledge graph."
)]
pub struct Cli {
    /// The subcommand to run (generate or split)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => run_generate(args),
            Commands::Split(args)    => run_split(args),
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    tracing::info!("Generating benchmark splits from: {}", args.input);

    let use_case = GenerateUseCase::new(args.into());
    let manifest = use_case.execute()?;

    println!("\n=== Benchmark Generation Complete ===");
    println!("Seed:        {} ({} attempts)", manifest.seed, manifest.attempts);
    println!(
        "Countries:   {} train / {} valid / {} test",
        manifest.partition.train, manifest.partition.valid, manifest.partition.test
    );
    for tier in &manifest.tiers {
        println!(
            "{}:          {} train / {} valid / {} test",
            tier.tier, tier.train, tier.valid, tier.test
        );
    }
    println!("Output:      {}", use_case.config().output_dir);
    Ok(())
}

fn run_split(mut args: SplitArgs) -> Result<()> {
    let against  = args.against.take();
    let use_case = GenerateUseCase::new(args.into());
    let graph    = use_case.load_graph()?;
    let accepted = use_case.find_partition(&graph)?;

    println!("Seed:     {} ({} attempts)", accepted.seed, accepted.attempts);
    println!("Train:    {}", accepted.partition.train().len());
    println!("Valid:    {}", accepted.partition.valid().len());
    println!("Test:     {}", accepted.partition.test().len());

    if let Some(dir) = against {
        let stored = use_case.stored_manifest(&dir)?;
        if stored.seed == accepted.seed {
            println!("Manifest: '{}' recorded the same seed", dir);
        } else {
            println!("Manifest: '{}' recorded seed {} instead", dir, stored.seed);
        }
    }
    Ok(())
}
