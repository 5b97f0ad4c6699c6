// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to produce a benchmark.
//
// Rules for this layer:
//   - No splitting or classification logic here (Layer 4)
//   - No printing here (Layer 1)
//   - No direct file formats here (Layers 4 and 6)
//   - Only workflow coordination

// The benchmark generation workflow
pub mod generate_use_case;
