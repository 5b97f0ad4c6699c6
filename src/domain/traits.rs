// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams:
//   - CountrySource   → where normalised country records come from
//   - WithholdingRule → which triples a benchmark tier hides
//
// Implementations:
//   - JsonCountryLoader implements CountrySource (data::loader)
//   - Tier implements WithholdingRule (data::tiers)

use anyhow::Result;

use crate::domain::entity::Country;
use crate::domain::partition::TripleFacts;
use crate::domain::triple::Triple;

// ─── CountrySource ────────────────────────────────────────────────────────────
/// Any component that can produce normalised country records.
pub trait CountrySource {
    /// Load every country record from this source.
    fn load_all(&self) -> Result<Vec<Country>>;
}

// ─── WithholdingRule ──────────────────────────────────────────────────────────
/// Decides whether a triple's evidence must leave the training set.
pub trait WithholdingRule {
    /// Short name used in logs and output paths
    fn name(&self) -> &str;

    /// True if `triple` must be withheld from train.
    fn withholds(&self, triple: &Triple, facts: &TripleFacts) -> bool;

    /// True if a withheld triple may be routed to valid/test because
    /// of a neighbour's bucket rather than the subject's own.
    fn routes_through_neighbors(&self) -> bool {
        false
    }
}
