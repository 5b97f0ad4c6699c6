// ============================================================
// Layer 4 — Countries Knowledge Graph
// ============================================================
// Builds the entity sets, the deduplicated triple set and the
// border adjacency from normalised country records.
//
// Triples produced per record:
//   (country, locatedIn,  region)     if region is non-empty
//   (country, locatedIn,  subregion)  if subregion is non-empty
//   (region,  locatedIn,  subregion)  if both are non-empty
//   (country, neighborOf, neighbour)  for every border code
//
// Border codes are resolved through a lookup built from the
// cca2/ccn3/cca3 codes of every record, so the whole record list
// must be known before any border is resolved.

use std::collections::{BTreeSet, HashMap};

use crate::domain::entity::{Adjacency, Country, EntityCounts, EntityKind};
use crate::domain::error::{BenchmarkError, Result};
use crate::domain::triple::Triple;

#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    countries:  BTreeSet<String>,
    regions:    BTreeSet<String>,
    subregions: BTreeSet<String>,
    triples:    BTreeSet<Triple>,
    adjacency:  Adjacency,
}

impl KnowledgeGraph {
    /// Build the graph from normalised records.
    ///
    /// Fails with `UnknownCountryCode` if a border code does not
    /// belong to any record.
    pub fn from_countries(records: &[Country]) -> Result<Self> {
        let code_to_name: HashMap<&str, &str> = records
            .iter()
            .flat_map(|c| c.codes.iter().map(move |code| (code.as_str(), c.name.as_str())))
            .collect();

        let mut graph = KnowledgeGraph::default();

        for record in records {
            let name = record.name.as_str();
            graph.countries.insert(name.to_string());

            let has_region    = !record.region.is_empty();
            let has_subregion = !record.subregion.is_empty();

            if has_region {
                graph.regions.insert(record.region.clone());
                graph.triples.insert(Triple::located_in(name, &record.region));
            }

            if has_subregion {
                graph.subregions.insert(record.subregion.clone());
                graph.triples.insert(Triple::located_in(name, &record.subregion));
                if has_region {
                    graph
                        .triples
                        .insert(Triple::located_in(&record.region, &record.subregion));
                }
            }

            let neighbors = graph.adjacency.entry(name.to_string()).or_default();
            for code in &record.borders {
                let neighbor = code_to_name.get(code.as_str()).ok_or_else(|| {
                    BenchmarkError::UnknownCountryCode {
                        country: name.to_string(),
                        code:    code.clone(),
                    }
                })?;
                neighbors.insert(neighbor.to_string());
                graph.triples.insert(Triple::neighbor_of(name, *neighbor));
            }
        }

        tracing::info!(
            "Built graph: {} countries, {} regions, {} subregions, {} triples",
            graph.countries.len(),
            graph.regions.len(),
            graph.subregions.len(),
            graph.triples.len(),
        );

        Ok(graph)
    }

    /// Fail fast if the entity counts differ from `expected`.
    pub fn validate_counts(&self, expected: &EntityCounts) -> Result<()> {
        let actual = self.counts();
        for kind in EntityKind::ALL {
            if actual.get(kind) != expected.get(kind) {
                return Err(BenchmarkError::EntityCountMismatch {
                    kind,
                    expected: expected.get(kind),
                    actual:   actual.get(kind),
                });
            }
        }
        Ok(())
    }

    pub fn counts(&self) -> EntityCounts {
        EntityCounts {
            countries:  self.countries.len(),
            regions:    self.regions.len(),
            subregions: self.subregions.len(),
        }
    }

    pub fn names(&self, kind: EntityKind) -> &BTreeSet<String> {
        match kind {
            EntityKind::Country   => &self.countries,
            EntityKind::Region    => &self.regions,
            EntityKind::Subregion => &self.subregions,
        }
    }

    pub fn countries(&self) -> &BTreeSet<String> {
        &self.countries
    }

    pub fn is_region(&self, name: &str) -> bool {
        self.regions.contains(name)
    }

    pub fn is_subregion(&self, name: &str) -> bool {
        self.subregions.contains(name)
    }

    pub fn triples(&self) -> &BTreeSet<Triple> {
        &self.triples
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Neighbours listed in `country`'s own borders.
    pub fn neighbors(&self, country: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(country)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn test_triples_per_record() {
        let graph = KnowledgeGraph::from_countries(&fixtures::europe_records()).unwrap();

        assert!(graph.triples().contains(&Triple::located_in("france", "europe")));
        assert!(graph.triples().contains(&Triple::located_in("france", "western_europe")));
        assert!(graph.triples().contains(&Triple::located_in("europe", "western_europe")));
        assert!(graph.triples().contains(&Triple::neighbor_of("france", "spain")));
        assert!(graph.triples().contains(&Triple::neighbor_of("spain", "portugal")));
    }

    #[test]
    fn test_region_subregion_triple_deduplicated() {
        let graph = KnowledgeGraph::from_countries(&fixtures::europe_records()).unwrap();
        let count = graph
            .triples()
            .iter()
            .filter(|t| t.subject == "europe" && t.object == "southern_europe")
            .count();
        // spain and portugal both produce it, the set keeps one
        assert_eq!(count, 1);
    }

    #[test]
    fn test_entity_sets() {
        let graph = KnowledgeGraph::from_countries(&fixtures::europe_records()).unwrap();
        let counts = graph.counts();
        assert_eq!(counts.countries, 4);
        assert_eq!(counts.regions, 1);
        assert_eq!(counts.subregions, 2);
        assert!(graph.is_region("europe"));
        assert!(graph.is_subregion("southern_europe"));
        assert!(!graph.is_region("southern_europe"));
    }

    #[test]
    fn test_island_has_no_subregion_or_neighbours() {
        let graph = KnowledgeGraph::from_countries(&fixtures::europe_records()).unwrap();
        assert_eq!(graph.neighbors("iceland").count(), 0);
        assert!(graph.adjacency().contains_key("iceland"));
    }

    #[test]
    fn test_adjacency_not_symmetrised() {
        // portugal does not list spain back
        let graph = KnowledgeGraph::from_countries(&fixtures::europe_records()).unwrap();
        assert!(graph.neighbors("spain").any(|n| n == "portugal"));
        assert!(!graph.neighbors("portugal").any(|n| n == "spain"));
    }

    #[test]
    fn test_unknown_border_code() {
        let records = vec![Country::new(
            "atlantis",
            vec!["AT".into()],
            "ocean",
            "",
            vec!["XYZ".into()],
        )];
        let err = KnowledgeGraph::from_countries(&records).unwrap_err();
        match err {
            BenchmarkError::UnknownCountryCode { country, code } => {
                assert_eq!(country, "atlantis");
                assert_eq!(code, "XYZ");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_count_validation() {
        let graph = KnowledgeGraph::from_countries(&fixtures::europe_records()).unwrap();
        assert!(graph.validate_counts(&graph.counts()).is_ok());

        let err = graph.validate_counts(&EntityCounts::CANONICAL).unwrap_err();
        match err {
            BenchmarkError::EntityCountMismatch { kind, expected, actual } => {
                assert_eq!(kind, EntityKind::Country);
                assert_eq!(expected, 248);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
