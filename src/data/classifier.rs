// ============================================================
// Layer 4 — Triple Classifier
// ============================================================
// Assigns every triple of the graph to exactly one bucket for a
// given withholding rule:
//
//   rule does not withhold the triple  → train
//   withheld, subject routed to valid  → valid
//   withheld, subject routed to test   → test
//
// A subject is routed to valid when it is itself in valid, or
// (for rules that route through neighbours) when it borders a
// valid country; test is symmetric. When both apply the TieBreak
// decides.
//
// Per-subject neighbour facts are computed once when the
// classifier is built, so classifying a triple is a map lookup.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::data::graph::KnowledgeGraph;
use crate::domain::partition::{Partition, Split, SubjectFacts, TripleFacts};
use crate::domain::traits::WithholdingRule;
use crate::domain::triple::Triple;

/// Resolution order when a withheld triple qualifies for both valid and test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// valid wins
    #[default]
    Valid,
    /// test wins
    Test,
    /// the subject's own bucket wins, then a valid neighbour, then a test neighbour
    Membership,
}

impl TieBreak {
    /// Bucket for a withheld triple whose subject has `facts`.
    ///
    /// `None` means the subject is not tied to any held-out country.
    pub fn resolve(&self, facts: &SubjectFacts, through_neighbors: bool) -> Option<Split> {
        let to_valid = facts.in_valid() || (through_neighbors && facts.neighbor_in_valid);
        let to_test  = facts.in_test() || (through_neighbors && facts.neighbor_in_test);

        let first_of = |a: (bool, Split), b: (bool, Split)| {
            if a.0 {
                Some(a.1)
            } else if b.0 {
                Some(b.1)
            } else {
                None
            }
        };

        match self {
            TieBreak::Valid => first_of((to_valid, Split::Valid), (to_test, Split::Test)),
            TieBreak::Test  => first_of((to_test, Split::Test), (to_valid, Split::Valid)),
            TieBreak::Membership => facts
                .split
                .filter(|s| *s != Split::Train)
                .or_else(|| first_of((to_valid, Split::Valid), (to_test, Split::Test))),
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid"      => Ok(TieBreak::Valid),
            "test"       => Ok(TieBreak::Test),
            "membership" => Ok(TieBreak::Membership),
            other        => Err(format!("unknown tie-break '{other}' (expected valid, test or membership)")),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Valid      => f.write_str("valid"),
            TieBreak::Test       => f.write_str("test"),
            TieBreak::Membership => f.write_str("membership"),
        }
    }
}

/// The three triple buckets of one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleBuckets {
    pub train: BTreeSet<Triple>,
    pub valid: BTreeSet<Triple>,
    pub test:  BTreeSet<Triple>,
}

impl TripleBuckets {
    pub fn get(&self, split: Split) -> &BTreeSet<Triple> {
        match split {
            Split::Train => &self.train,
            Split::Valid => &self.valid,
            Split::Test  => &self.test,
        }
    }

    fn get_mut(&mut self, split: Split) -> &mut BTreeSet<Triple> {
        match split {
            Split::Train => &mut self.train,
            Split::Valid => &mut self.valid,
            Split::Test  => &mut self.test,
        }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len() + self.test.len()
    }
}

pub struct TripleClassifier<'a> {
    graph:     &'a KnowledgeGraph,
    subjects:  BTreeMap<&'a str, SubjectFacts>,
    tie_break: TieBreak,
}

impl<'a> TripleClassifier<'a> {
    pub fn new(graph: &'a KnowledgeGraph, partition: &Partition, tie_break: TieBreak) -> Self {
        let subjects = graph
            .countries()
            .iter()
            .map(|country| {
                let facts = SubjectFacts {
                    split:             partition.split_of(country),
                    neighbor_in_valid: graph.neighbors(country).any(|n| partition.valid().contains(n)),
                    neighbor_in_test:  graph.neighbors(country).any(|n| partition.test().contains(n)),
                };
                (country.as_str(), facts)
            })
            .collect();

        Self { graph, subjects, tie_break }
    }

    /// Partition facts for `subject`; regions and subregions get the default.
    pub fn subject_facts(&self, subject: &str) -> SubjectFacts {
        self.subjects.get(subject).copied().unwrap_or_default()
    }

    pub fn triple_facts(&self, triple: &Triple) -> TripleFacts {
        TripleFacts {
            subject:             self.subject_facts(&triple.subject),
            object_is_region:    self.graph.is_region(&triple.object),
            object_is_subregion: self.graph.is_subregion(&triple.object),
        }
    }

    /// The bucket `triple` lands in under `rule`.
    pub fn place(&self, triple: &Triple, rule: &dyn WithholdingRule) -> Split {
        let facts = self.triple_facts(triple);
        if !rule.withholds(triple, &facts) {
            return Split::Train;
        }
        self.tie_break
            .resolve(&facts.subject, rule.routes_through_neighbors())
            .unwrap_or(Split::Train)
    }

    /// Classify every triple of the graph under `rule`.
    pub fn classify(&self, rule: &dyn WithholdingRule) -> TripleBuckets {
        let mut buckets = TripleBuckets::default();
        for triple in self.graph.triples() {
            let split = self.place(triple, rule);
            buckets.get_mut(split).insert(triple.clone());
        }

        tracing::debug!(
            "{}: {} triples, {} train, {} valid, {} test",
            rule.name(),
            buckets.len(),
            buckets.train.len(),
            buckets.valid.len(),
            buckets.test.len(),
        );

        buckets
    }
}
