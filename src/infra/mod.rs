// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the output directory:
//
//   writer.rs   — Flat entity, partition and triple files
//                 (.lst / .tsv), one item per line, sorted.
//
//   manifest.rs — manifest.json with the run configuration,
//                 the accepted seed and bucket sizes.
//
//   metrics.rs  — tier_stats.csv with one row per tier.

/// Entity, partition and triple file writer
pub mod writer;

/// Run manifest saving and loading
pub mod manifest;

/// Per-tier bucket statistics CSV
pub mod metrics;
