// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   generate → full pipeline, writes every output file
//   split    → partition search only, prints the accepted seed

use clap::{Args, Subcommand};

use crate::application::generate_use_case::GenerateConfig;
use crate::data::classifier::TieBreak;
use crate::data::splitter::{ConsistencyScope, SplitConfig};
use crate::domain::entity::EntityCounts;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate entity lists, the partition and the S1/S2/S3 triple files
    Generate(GenerateArgs),

    /// Search a consistent partition and report it without writing files
    Split(SplitArgs),
}

/// Flags shared by every command that searches a partition.
#[derive(Args, Debug, Clone)]
pub struct PartitionArgs {
    /// Fraction of countries kept for training; the rest is split
    /// evenly into valid and test
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,

    /// Maximum number of seeds tried before giving up. The full
    /// 248-country file has many borderless countries, so it usually
    /// needs --scope test-only and a much larger cap
    #[arg(long, default_value_t = 5000)]
    pub max_attempts: usize,

    /// First seed of the search
    #[arg(long, default_value_t = 0)]
    pub start_seed: u64,

    /// Held-out buckets that must border a training country
    /// (held-out or test-only)
    #[arg(long, default_value = "held-out")]
    pub scope: ConsistencyScope,

    /// Skip the 248 countries / 5 regions / 23 subregions check
    #[arg(long)]
    pub no_count_check: bool,
}

impl From<&PartitionArgs> for SplitConfig {
    fn from(a: &PartitionArgs) -> Self {
        SplitConfig {
            train_fraction: a.train_fraction,
            max_attempts:   a.max_attempts,
            start_seed:     a.start_seed,
            scope:          a.scope,
        }
    }
}

impl PartitionArgs {
    fn expected_counts(&self) -> Option<EntityCounts> {
        (!self.no_count_check).then_some(EntityCounts::CANONICAL)
    }
}

/// All arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Countries JSON file
    #[arg(long, default_value = "countries.json")]
    pub input: String,

    /// Directory that receives the .lst/.tsv files
    #[arg(long, default_value = "data")]
    pub output_dir: String,

    #[command(flatten)]
    pub partition: PartitionArgs,

    /// Bucket for S3 triples that qualify for both valid and test
    /// (valid, test or membership)
    #[arg(long, default_value = "valid")]
    pub tie_break: TieBreak,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            input:           a.input,
            output_dir:      a.output_dir,
            split:           SplitConfig::from(&a.partition),
            tie_break:       a.tie_break,
            expected_counts: a.partition.expected_counts(),
        }
    }
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Countries JSON file
    #[arg(long, default_value = "countries.json")]
    pub input: String,

    #[command(flatten)]
    pub partition: PartitionArgs,

    /// Output directory of an earlier `generate` run; reports whether
    /// its manifest.json recorded the same seed
    #[arg(long)]
    pub against: Option<String>,
}

impl From<SplitArgs> for GenerateConfig {
    fn from(a: SplitArgs) -> Self {
        GenerateConfig {
            input:           a.input,
            split:           SplitConfig::from(&a.partition),
            expected_counts: a.partition.expected_counts(),
            ..GenerateConfig::default()
        }
    }
}
