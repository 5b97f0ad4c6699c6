// ============================================================
// Layer 3 — Triple Domain Type
// ============================================================
// A relational fact (subject, predicate, object). Only two
// predicates exist in the countries graph:
//
//   (france, locatedIn, europe)
//   (france, locatedIn, western_europe)
//   (europe, locatedIn, western_europe)
//   (france, neighborOf, spain)
//
// Triples are kept in BTreeSets. The derived ordering compares
// subject, then predicate, then object; Predicate variants are
// declared in the lexical order of their labels, so the derived
// order is the lexicographic order of the TSV lines.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Predicate {
    #[serde(rename = "locatedIn")]
    LocatedIn,
    #[serde(rename = "neighborOf")]
    NeighborOf,
}

impl Predicate {
    pub fn label(&self) -> &'static str {
        match self {
            Predicate::LocatedIn  => "locatedIn",
            Predicate::NeighborOf => "neighborOf",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub subject:   String,
    pub predicate: Predicate,
    pub object:    String,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: Predicate, object: impl Into<String>) -> Self {
        Self {
            subject:   subject.into(),
            predicate,
            object:    object.into(),
        }
    }

    pub fn located_in(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self::new(subject, Predicate::LocatedIn, object)
    }

    pub fn neighbor_of(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self::new(subject, Predicate::NeighborOf, object)
    }
}

/// Tab-separated form: `subject\tpredicate\tobject`
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}
