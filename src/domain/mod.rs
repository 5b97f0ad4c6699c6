// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits describing the countries
// knowledge graph and its benchmark splits.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust types, typed errors and traits
//
// Everything here is immutable once built: a run loads the
// graph once, fixes one partition, and every tier reads it.

// Entity kinds, normalised country records, adjacency
pub mod entity;

// Predicates and (subject, predicate, object) triples
pub mod triple;

// Train/valid/test partition of the country set
pub mod partition;

// Typed failures of loading and splitting
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
