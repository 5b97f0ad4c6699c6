// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// Saves what is needed to reproduce a run next to its output:
//
//   <output_dir>/manifest.json
//     - the full GenerateConfig
//     - the accepted seed and how many seeds were tried
//     - entity counts and partition sizes
//     - per-tier bucket sizes
//
// Re-running with `--start-seed <seed>` and the same input and
// ratios accepts that seed on the first attempt and rewrites the
// same files byte for byte.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::application::generate_use_case::GenerateConfig;
use crate::domain::entity::EntityCounts;
use crate::domain::partition::Partition;
use crate::infra::metrics::TierStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSizes {
    pub train: usize,
    pub valid: usize,
    pub test:  usize,
}

impl From<&Partition> for PartitionSizes {
    fn from(p: &Partition) -> Self {
        Self {
            train: p.train().len(),
            valid: p.valid().len(),
            test:  p.test().len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub config:    GenerateConfig,
    pub seed:      u64,
    pub attempts:  usize,
    pub entities:  EntityCounts,
    pub partition: PartitionSizes,
    pub tiers:     Vec<TierStats>,
}

/// Reads and writes `manifest.json` in one directory.
pub struct ManifestStore {
    dir: PathBuf,
}

impl ManifestStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join("manifest.json")
    }

    pub fn save(&self, manifest: &RunManifest) -> Result<()> {
        let path = self.path();
        let json = serde_json::to_string_pretty(manifest)?;

        fs::write(&path, json + "\n")
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved run manifest to '{}'", path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<RunManifest> {
        let path = self.path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read manifest from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed manifest '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tiers::Tier;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let tmp   = TempDir::new().unwrap();
        let store = ManifestStore::new(tmp.path());

        let manifest = RunManifest {
            config:    GenerateConfig::default(),
            seed:      17,
            attempts:  18,
            entities:  EntityCounts { countries: 4, regions: 2, subregions: 0 },
            partition: PartitionSizes { train: 2, valid: 1, test: 1 },
            tiers:     vec![TierStats::new(Tier::S1, 6, 1, 1)],
        };
        store.save(&manifest).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.seed, 17);
        assert_eq!(loaded.attempts, 18);
        assert_eq!(loaded.partition, manifest.partition);
        assert_eq!(loaded.tiers, manifest.tiers);
        assert_eq!(loaded.config.split.train_fraction, 0.8);
    }

    #[test]
    fn test_missing_manifest() {
        let tmp = TempDir::new().unwrap();
        assert!(ManifestStore::new(tmp.path()).load().is_err());
    }
}
