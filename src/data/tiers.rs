// ============================================================
// Layer 4 — Benchmark Tiers
// ============================================================
// Three cascading difficulty tiers over one fixed partition.
// Each tier withholds everything the previous one does, plus:
//
//   S1 → (held-out country, locatedIn, region)
//   S2 → (held-out country, locatedIn, subregion)
//   S3 → (country bordering a held-out country, locatedIn, region)
//
// so train(S3) ⊆ train(S2) ⊆ train(S1). Only S3 routes withheld
// triples through the border graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::classifier::{TieBreak, TripleBuckets, TripleClassifier};
use crate::data::graph::KnowledgeGraph;
use crate::domain::partition::{Partition, TripleFacts};
use crate::domain::traits::WithholdingRule;
use crate::domain::triple::{Predicate, Triple};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    S1,
    S2,
    S3,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::S1, Tier::S2, Tier::S3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::S1 => "s1",
            Tier::S2 => "s2",
            Tier::S3 => "s3",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WithholdingRule for Tier {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn withholds(&self, triple: &Triple, facts: &TripleFacts) -> bool {
        if triple.predicate != Predicate::LocatedIn {
            return false;
        }

        let held_out = facts.subject.is_held_out();
        match self {
            Tier::S1 => held_out && facts.object_is_region,
            Tier::S2 => Tier::S1.withholds(triple, facts) || (held_out && facts.object_is_subregion),
            Tier::S3 => {
                Tier::S2.withholds(triple, facts)
                    || (facts.subject.has_held_out_neighbor() && facts.object_is_region)
            }
        }
    }

    fn routes_through_neighbors(&self) -> bool {
        matches!(self, Tier::S3)
    }
}

/// Buckets produced for one tier.
#[derive(Debug, Clone)]
pub struct TierOutput {
    pub tier:    Tier,
    pub buckets: TripleBuckets,
}

pub struct TierGenerator<'a> {
    classifier: TripleClassifier<'a>,
}

impl<'a> TierGenerator<'a> {
    pub fn new(graph: &'a KnowledgeGraph, partition: &Partition, tie_break: TieBreak) -> Self {
        Self {
            classifier: TripleClassifier::new(graph, partition, tie_break),
        }
    }

    pub fn generate(&self, tier: Tier) -> TierOutput {
        TierOutput {
            tier,
            buckets: self.classifier.classify(&tier),
        }
    }

    /// All tiers, in S1, S2, S3 order.
    pub fn generate_all(&self) -> Vec<TierOutput> {
        Tier::ALL.into_iter().map(|tier| self.generate(tier)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::splitter::{ConsistentSplitter, SplitConfig};
    use crate::domain::partition::Split;

    fn four_country() -> (KnowledgeGraph, Partition) {
        (
            KnowledgeGraph::from_countries(&fixtures::four_country_records()).unwrap(),
            fixtures::four_country_partition(),
        )
    }

    #[test]
    fn test_s1_four_country_scenario() {
        let (graph, partition) = four_country();
        let out = TierGenerator::new(&graph, &partition, TieBreak::Valid).generate(Tier::S1);
        let b = &out.buckets;

        assert!(b.valid.contains(&Triple::located_in("b", "r1")));
        assert!(b.test.contains(&Triple::located_in("d", "r2")));
        assert!(b.train.contains(&Triple::located_in("a", "r1")));
        assert!(b.train.contains(&Triple::located_in("c", "r2")));
        assert!(b.train.contains(&Triple::neighbor_of("a", "b")));
        assert!(!b.train.contains(&Triple::located_in("b", "r1")));
        assert_eq!(b.valid.len(), 1);
        assert_eq!(b.test.len(), 1);
    }

    #[test]
    fn test_neighbor_triples_never_withheld_by_s1_s2() {
        let (graph, partition) = four_country();
        let generator = TierGenerator::new(&graph, &partition, TieBreak::Valid);
        for tier in [Tier::S1, Tier::S2] {
            let out = generator.generate(tier);
            for t in graph.triples().iter().filter(|t| t.predicate == Predicate::NeighborOf) {
                assert!(out.buckets.train.contains(t), "{tier}: {t}");
            }
        }
    }

    #[test]
    fn test_s2_withholds_subregions() {
        let graph     = KnowledgeGraph::from_countries(&fixtures::chain_records()).unwrap();
        let partition = fixtures::chain_partition();
        let generator = TierGenerator::new(&graph, &partition, TieBreak::Valid);

        let s1 = generator.generate(Tier::S1);
        let s2 = generator.generate(Tier::S2);

        assert!(s1.buckets.train.contains(&Triple::located_in("b", "s")));
        assert!(s2.buckets.valid.contains(&Triple::located_in("b", "s")));
        assert!(s2.buckets.test.contains(&Triple::located_in("c", "s")));
        // region → subregion facts have no held-out subject
        assert!(s2.buckets.train.contains(&Triple::located_in("r", "s")));
    }

    #[test]
    fn test_s3_propagates_through_borders() {
        let (graph, partition) = four_country();
        let out = TierGenerator::new(&graph, &partition, TieBreak::Valid).generate(Tier::S3);
        let b = &out.buckets;

        // a borders b (valid), c borders d (test)
        assert!(b.valid.contains(&Triple::located_in("a", "r1")));
        assert!(b.test.contains(&Triple::located_in("c", "r2")));
        assert!(b.train.contains(&Triple::neighbor_of("a", "b")));
        assert!(b.train.contains(&Triple::neighbor_of("c", "d")));
    }

    #[test]
    fn test_s3_tie_break() {
        // c is in test and borders b in valid
        let graph     = KnowledgeGraph::from_countries(&fixtures::chain_records()).unwrap();
        let partition = fixtures::chain_partition();
        let c_region  = Triple::located_in("c", "r");
        let b_region  = Triple::located_in("b", "r");

        let valid_first = TierGenerator::new(&graph, &partition, TieBreak::Valid).generate(Tier::S3);
        assert!(valid_first.buckets.valid.contains(&c_region));
        assert!(valid_first.buckets.valid.contains(&b_region));

        let test_first = TierGenerator::new(&graph, &partition, TieBreak::Test).generate(Tier::S3);
        assert!(test_first.buckets.test.contains(&c_region));
        assert!(test_first.buckets.test.contains(&b_region));

        let membership = TierGenerator::new(&graph, &partition, TieBreak::Membership).generate(Tier::S3);
        assert!(membership.buckets.test.contains(&c_region));
        assert!(membership.buckets.valid.contains(&b_region));
    }

    #[test]
    fn test_buckets_partition_triples_and_tighten_monotonically() {
        let graph    = KnowledgeGraph::from_countries(&fixtures::ring_records(30)).unwrap();
        let accepted = ConsistentSplitter::new(graph.adjacency(), SplitConfig::default())
            .search(graph.countries())
            .unwrap();

        for tie_break in [TieBreak::Valid, TieBreak::Test, TieBreak::Membership] {
            let outputs = TierGenerator::new(&graph, &accepted.partition, tie_break).generate_all();
            assert_eq!(outputs.len(), 3);

            for out in &outputs {
                let b = &out.buckets;
                assert!(b.train.is_disjoint(&b.valid));
                assert!(b.train.is_disjoint(&b.test));
                assert!(b.valid.is_disjoint(&b.test));

                let union: std::collections::BTreeSet<Triple> = Split::ALL
                    .into_iter()
                    .flat_map(|s| b.get(s).iter().cloned())
                    .collect();
                assert_eq!(&union, graph.triples());
            }

            assert!(outputs[1].buckets.train.is_subset(&outputs[0].buckets.train));
            assert!(outputs[2].buckets.train.is_subset(&outputs[1].buckets.train));
        }
    }
}
