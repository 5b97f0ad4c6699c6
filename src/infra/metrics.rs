// ============================================================
// Layer 6 — Tier Statistics
// ============================================================
// Records the bucket sizes of every tier to a CSV file.
//
// Output file: <output_dir>/tier_stats.csv
//
// Example CSV output:
//   tier,train,valid,test
//   s1,1152,25,25
//   s2,1102,25,25
//   s3,1061,45,46
//
// train shrinks from s1 to s3 because each tier withholds more.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::data::tiers::{Tier, TierOutput};

/// One row of the statistics table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStats {
    pub tier:  Tier,
    pub train: usize,
    pub valid: usize,
    pub test:  usize,
}

impl TierStats {
    pub fn new(tier: Tier, train: usize, valid: usize, test: usize) -> Self {
        Self { tier, train, valid, test }
    }

    pub fn total(&self) -> usize {
        self.train + self.valid + self.test
    }
}

impl From<&TierOutput> for TierStats {
    fn from(out: &TierOutput) -> Self {
        Self::new(
            out.tier,
            out.buckets.train.len(),
            out.buckets.valid.len(),
            out.buckets.test.len(),
        )
    }
}

/// Writes tier statistics as CSV rows.
pub struct TierStatsLogger {
    csv_path: PathBuf,
}

impl TierStatsLogger {
    /// Create (or truncate) the CSV file and write the header row.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let csv_path = dir.join("tier_stats.csv");
        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "tier,train,valid,test")?;

        Ok(Self { csv_path })
    }

    /// Append one tier's row.
    pub fn log(&self, s: &TierStats) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(f, "{},{},{},{}", s.tier, s.train, s.valid, s.test)?;

        tracing::info!(
            "{}: {} triples, {} train, {} valid, {} test",
            s.tier,
            s.total(),
            s.train,
            s.valid,
            s.test,
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
