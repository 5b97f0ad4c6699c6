// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw countries JSON to the per-tier triple
// buckets. The pipeline flows in this order:
//
//   countries.json
//       │
//       ▼
//   JsonCountryLoader   → reads records, normalises names
//       │
//       ▼
//   KnowledgeGraph      → entity sets, triples, border adjacency
//       │
//       ▼
//   ConsistentSplitter  → seeded search for a consistent partition
//       │
//       ▼
//   TierGenerator       → S1/S2/S3 rules over the fixed partition
//       │
//       ▼
//   TripleClassifier    → train/valid/test buckets per tier
//
// Each module is responsible for exactly one step.

/// Reads the countries JSON and produces normalised records
pub mod loader;

/// Entity-name normalisation shared by all entity kinds
pub mod normalizer;

/// Entity sets, triple set and adjacency built from records
pub mod graph;

/// Bounded seeded search for a consistent partition
pub mod splitter;

/// Places triples into train/valid/test under a withholding rule
pub mod classifier;

/// The three cascading benchmark tiers
pub mod tiers;

#[cfg(test)]
pub mod fixtures;
