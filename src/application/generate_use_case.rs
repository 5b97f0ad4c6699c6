// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates the full benchmark generation in order:
//
//   Step 1: Load country records         (Layer 4 - data)
//   Step 2: Build the knowledge graph    (Layer 4 - data)
//   Step 3: Check canonical counts       (Layer 4 - data)
//   Step 4: Search a consistent split    (Layer 4 - data)
//   Step 5: Write entity lists           (Layer 6 - infra)
//   Step 6: Write partition lists        (Layer 6 - infra)
//   Step 7: Classify triples per tier    (Layer 4 - data)
//   Step 8: Write tier files and stats   (Layer 6 - infra)
//   Step 9: Save the run manifest        (Layer 6 - infra)
//
// Both fatal checks (counts, search) run before the output
// directory is created.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{
    classifier::TieBreak,
    graph::KnowledgeGraph,
    loader::JsonCountryLoader,
    splitter::{AcceptedSplit, ConsistentSplitter, SplitConfig},
    tiers::TierGenerator,
};
use crate::domain::entity::{EntityCounts, EntityKind};
use crate::domain::traits::CountrySource;
use crate::infra::{
    manifest::{ManifestStore, PartitionSizes, RunManifest},
    metrics::{TierStats, TierStatsLogger},
    writer::OutputWriter,
};

// ─── Generation Configuration ────────────────────────────────────────────────
// Everything that determines the output of a run. Saved inside
// manifest.json so a run can be reproduced from its output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub input:      String,
    pub output_dir: String,
    pub split:      SplitConfig,
    pub tie_break:  TieBreak,
    /// `None` skips the entity-count check
    pub expected_counts: Option<EntityCounts>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input:           "countries.json".to_string(),
            output_dir:      "data".to_string(),
            split:           SplitConfig::default(),
            tie_break:       TieBreak::default(),
            expected_counts: Some(EntityCounts::CANONICAL),
        }
    }
}

// ─── GenerateUseCase ─────────────────────────────────────────────────────────
pub struct GenerateUseCase {
    config: GenerateConfig,
}

impl GenerateUseCase {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Steps 1–3: load records, build the graph, check counts.
    pub fn load_graph(&self) -> Result<KnowledgeGraph> {
        let cfg = &self.config;

        let records = JsonCountryLoader::new(&cfg.input).load_all()?;
        let graph   = KnowledgeGraph::from_countries(&records)
            .with_context(|| format!("Cannot build graph from '{}'", cfg.input))?;

        match &cfg.expected_counts {
            Some(expected) => graph
                .validate_counts(expected)
                .with_context(|| format!("Unexpected entity counts in '{}'", cfg.input))?,
            None => tracing::warn!("Entity-count check disabled"),
        }

        Ok(graph)
    }

    /// Step 4: bounded search for a consistent partition.
    pub fn find_partition(&self, graph: &KnowledgeGraph) -> Result<AcceptedSplit> {
        let splitter = ConsistentSplitter::new(graph.adjacency(), self.config.split.clone());
        let accepted = splitter.search(graph.countries())?;
        Ok(accepted)
    }

    /// Manifest saved by an earlier run into `dir`.
    pub fn stored_manifest(&self, dir: impl AsRef<Path>) -> Result<RunManifest> {
        ManifestStore::new(dir.as_ref()).load()
    }

    /// Run the whole pipeline and return the manifest that was saved.
    pub fn execute(&self) -> Result<RunManifest> {
        let cfg = &self.config;

        // ── Steps 1–4: graph and partition ───────────────────────────────────
        let graph    = self.load_graph()?;
        let accepted = self.find_partition(&graph)?;
        let writer   = OutputWriter::new(&cfg.output_dir)?;

        // ── Steps 5–6: entity and partition lists ────────────────────────────
        for kind in EntityKind::ALL {
            writer.write_entities(kind, graph.names(kind))?;
        }
        writer.write_partition(&accepted.partition)?;

        // ── Steps 7–8: tiers ──────────────────────────────────────────────────
        let generator = TierGenerator::new(&graph, &accepted.partition, cfg.tie_break);
        let logger    = TierStatsLogger::create(writer.dir())?;
        let mut tiers = Vec::new();

        for output in generator.generate_all() {
            writer.write_tier(output.tier, graph.triples(), &output.buckets)?;
            let stats = TierStats::from(&output);
            logger.log(&stats)?;
            tiers.push(stats);
        }
        tracing::debug!("Tier statistics in '{}'", logger.csv_path().display());

        // ── Step 9: manifest ──────────────────────────────────────────────────
        let manifest = RunManifest {
            config:    cfg.clone(),
            seed:      accepted.seed,
            attempts:  accepted.attempts,
            entities:  graph.counts(),
            partition: PartitionSizes::from(&accepted.partition),
            tiers,
        };
        ManifestStore::new(writer.dir()).save(&manifest)?;

        tracing::info!(
            "Wrote benchmark splits to '{}' (seed {})",
            writer.dir().display(),
            accepted.seed
        );
        Ok(manifest)
    }
}
