// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Typed failures of graph loading and partition search. The
// application layer wraps these in anyhow with context; tests
// downcast back to match on the variant.

use thiserror::Error;

use crate::domain::entity::EntityKind;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Upstream data does not normalise to the expected entity counts
    #[error("validation failed: expected {expected} {kind} entities, found {actual}")]
    EntityCountMismatch {
        kind:     EntityKind,
        expected: usize,
        actual:   usize,
    },

    /// A border code does not resolve to any loaded country
    #[error("unknown country code '{code}' in the borders of '{country}'")]
    UnknownCountryCode { country: String, code: String },

    /// The bounded partition search ran out of attempts
    #[error(
        "no consistent partition found for given ratios \
         (train fraction {train_fraction}) after {attempts} attempts"
    )]
    NoConsistentPartition { attempts: usize, train_fraction: f64 },

    #[error("train fraction must lie strictly between 0 and 1, got {0}")]
    InvalidRatio(f64),

    #[error("cannot partition an empty country set")]
    EmptyCountrySet,
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;
