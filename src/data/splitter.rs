// ============================================================
// Layer 4 — Consistent Train/Valid/Test Splitter
// ============================================================
// Splits the country set into train/valid/test so that every
// held-out country still borders at least one training country.
//
// Search, one seed at a time (seed = start, start + 1, ...):
//   1. shuffle the sorted country list with a ChaCha8 generator
//      seeded from `seed`, cut off the first
//      floor(train_fraction * n) countries as train
//   2. shuffle the remainder with a fresh generator from the
//      same seed, first half → valid, rest → test
//   3. accept the first seed whose valid and test sets both
//      satisfy the neighbour invariant
//
// The search stops after `max_attempts` seeds with
// BenchmarkError::NoConsistentPartition.
//
// Each attempt owns its generator; nothing here touches a
// process-wide RNG, so a seed always reproduces its partition.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::entity::Adjacency;
use crate::domain::error::{BenchmarkError, Result};
use crate::domain::partition::Partition;

/// Which held-out buckets must satisfy the neighbour invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyScope {
    /// Both valid and test (default)
    #[default]
    HeldOut,
    /// Only test
    TestOnly,
}

impl FromStr for ConsistencyScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "held-out"  => Ok(ConsistencyScope::HeldOut),
            "test-only" => Ok(ConsistencyScope::TestOnly),
            other       => Err(format!("unknown consistency scope '{other}' (expected held-out or test-only)")),
        }
    }
}

impl fmt::Display for ConsistencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyScope::HeldOut  => f.write_str("held-out"),
            ConsistencyScope::TestOnly => f.write_str("test-only"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of countries kept for training; the rest is halved
    pub train_fraction: f64,
    /// Upper bound on the number of seeds tried
    pub max_attempts:   usize,
    /// First seed of the search
    pub start_seed:     u64,
    pub scope:          ConsistencyScope,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
            max_attempts:   5000,
            start_seed:     0,
            scope:          ConsistencyScope::HeldOut,
        }
    }
}

/// The partition accepted by the search, with the seed that produced it.
#[derive(Debug, Clone)]
pub struct AcceptedSplit {
    pub partition: Partition,
    pub seed:      u64,
    /// Number of seeds tried, including the accepted one
    pub attempts:  usize,
}

/// Shuffle `samples` with a generator seeded from `seed` and split
/// into (train, rest).
///
/// The train side gets floor(len * train_fraction) items.
pub fn split_train_val<T>(mut samples: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total    = samples.len();
    let split_at = train_size(total, train_fraction);
    let rest     = samples.split_off(split_at);

    tracing::trace!(
        "Split with seed {}: {} / {}",
        seed,
        samples.len(),
        rest.len(),
    );

    (samples, rest)
}

fn train_size(total: usize, train_fraction: f64) -> usize {
    // the epsilon keeps 0.57 * 100 from flooring to 56
    let raw = (total as f64) * train_fraction + 1e-9;
    (raw.floor() as usize).min(total)
}

pub struct ConsistentSplitter<'a> {
    adjacency: &'a Adjacency,
    config:    SplitConfig,
}

impl<'a> ConsistentSplitter<'a> {
    pub fn new(adjacency: &'a Adjacency, config: SplitConfig) -> Self {
        Self { adjacency, config }
    }

    /// The partition a single seed produces, consistent or not.
    pub fn partition_for_seed(&self, countries: &[String], seed: u64) -> Partition {
        let (train, rest)  = split_train_val(countries.to_vec(), self.config.train_fraction, seed);
        let (valid, test)  = split_train_val(rest, 0.5, seed);
        Partition::new(train, valid, test)
    }

    /// Check the neighbour invariant for the configured scope.
    pub fn is_consistent(&self, partition: &Partition) -> bool {
        let test_ok = self.all_reach_train(partition.test(), partition);
        match self.config.scope {
            ConsistencyScope::HeldOut  => test_ok && self.all_reach_train(partition.valid(), partition),
            ConsistencyScope::TestOnly => test_ok,
        }
    }

    fn all_reach_train(&self, held_out: &BTreeSet<String>, partition: &Partition) -> bool {
        held_out.iter().all(|country| {
            self.adjacency
                .get(country)
                .is_some_and(|neighbors| neighbors.iter().any(|n| partition.train().contains(n)))
        })
    }

    /// Search seeds until a consistent partition of `countries` is found.
    pub fn search(&self, countries: &BTreeSet<String>) -> Result<AcceptedSplit> {
        let fraction = self.config.train_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(BenchmarkError::InvalidRatio(fraction));
        }
        if countries.is_empty() {
            return Err(BenchmarkError::EmptyCountrySet);
        }

        // BTreeSet iteration is sorted, so the shuffle input is fixed
        let sorted: Vec<String> = countries.iter().cloned().collect();

        for attempt in 0..self.config.max_attempts {
            let seed      = self.config.start_seed.wrapping_add(attempt as u64);
            let partition = self.partition_for_seed(&sorted, seed);

            if self.is_consistent(&partition) {
                debug_assert!(partition.covers_exactly(countries));
                tracing::info!(
                    "Accepted seed {} after {} attempt(s): {} train, {} valid, {} test",
                    seed,
                    attempt + 1,
                    partition.train().len(),
                    partition.valid().len(),
                    partition.test().len(),
                );
                return Ok(AcceptedSplit {
                    partition,
                    seed,
                    attempts: attempt + 1,
                });
            }

            tracing::debug!("Seed {} rejected", seed);
        }

        Err(BenchmarkError::NoConsistentPartition {
            attempts:       self.config.max_attempts,
            train_fraction: fraction,
        })
    }
}
