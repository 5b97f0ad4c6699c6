// ============================================================
// Layer 6 — Output Writer
// ============================================================
// Writes flat, newline-terminated UTF-8 files under one output
// directory:
//
//   countries.lst, regions.lst, subregions.lst
//   countries_train.lst, countries_valid.lst, countries_test.lst
//   s1/triples.tsv, s1/s1_train.tsv, s1/s1_valid.tsv, s1/s1_test.tsv
//   s2/...,  s3/...
//
// All inputs are BTreeSets, so every file comes out sorted and
// two runs with the same seed write identical bytes.

use anyhow::{Context, Result};
use std::{
    collections::BTreeSet,
    fmt::Display,
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::classifier::TripleBuckets;
use crate::data::tiers::Tier;
use crate::domain::entity::EntityKind;
use crate::domain::partition::{Partition, Split};
use crate::domain::triple::Triple;

pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    /// Create the writer, creating the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one item per line to `relative` (relative to the output dir).
    pub fn write_lines<I, D>(&self, relative: impl AsRef<Path>, lines: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = D>,
        D: Display,
    {
        let path = self.dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out   = BufWriter::new(file);
        let mut count = 0usize;
        for line in lines {
            writeln!(out, "{line}")?;
            count += 1;
        }
        out.flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} lines to '{}'", count, path.display());
        Ok(path)
    }

    pub fn write_entities(&self, kind: EntityKind, names: &BTreeSet<String>) -> Result<PathBuf> {
        self.write_lines(kind.list_file_name(), names)
    }

    /// countries_train.lst, countries_valid.lst, countries_test.lst
    pub fn write_partition(&self, partition: &Partition) -> Result<()> {
        for split in Split::ALL {
            self.write_lines(format!("countries_{split}.lst"), partition.get(split))?;
        }
        Ok(())
    }

    /// `<tier>/triples.tsv` plus `<tier>/<tier>_<split>.tsv` per bucket.
    pub fn write_tier(&self, tier: Tier, all: &BTreeSet<Triple>, buckets: &TripleBuckets) -> Result<()> {
        let tier_dir = PathBuf::from(tier.as_str());
        self.write_lines(tier_dir.join("triples.tsv"), all)?;
        for split in Split::ALL {
            self.write_lines(tier_dir.join(format!("{tier}_{split}.tsv")), buckets.get(split))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entity_list_sorted_one_per_line() {
        let tmp    = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path()).unwrap();
        let names: BTreeSet<String> = ["spain", "france", "andorra"].iter().map(|s| s.to_string()).collect();

        let path = writer.write_entities(EntityKind::Country, &names).unwrap();
        assert_eq!(path, tmp.path().join("countries.lst"));
        assert_eq!(fs::read_to_string(path).unwrap(), "andorra\nfrance\nspain\n");
    }

    #[test]
    fn test_partition_files() {
        let tmp    = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path()).unwrap();
        writer
            .write_partition(&Partition::new(vec!["c", "a"], vec!["b"], vec!["d"]))
            .unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join("countries_train.lst")).unwrap(), "a\nc\n");
        assert_eq!(fs::read_to_string(tmp.path().join("countries_valid.lst")).unwrap(), "b\n");
        assert_eq!(fs::read_to_string(tmp.path().join("countries_test.lst")).unwrap(), "d\n");
    }

    #[test]
    fn test_tier_files() {
        let tmp    = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path().join("nested")).unwrap();

        let mut buckets = TripleBuckets::default();
        buckets.train.insert(Triple::neighbor_of("a", "b"));
        buckets.train.insert(Triple::located_in("a", "r1"));
        buckets.valid.insert(Triple::located_in("b", "r1"));
        let all: BTreeSet<Triple> = buckets
            .train
            .iter()
            .chain(buckets.valid.iter())
            .cloned()
            .collect();

        writer.write_tier(Tier::S1, &all, &buckets).unwrap();

        let dir = tmp.path().join("nested").join("s1");
        assert_eq!(
            fs::read_to_string(dir.join("triples.tsv")).unwrap(),
            "a\tlocatedIn\tr1\na\tneighborOf\tb\nb\tlocatedIn\tr1\n"
        );
        assert_eq!(
            fs::read_to_string(dir.join("s1_train.tsv")).unwrap(),
            "a\tlocatedIn\tr1\na\tneighborOf\tb\n"
        );
        assert_eq!(fs::read_to_string(dir.join("s1_valid.tsv")).unwrap(), "b\tlocatedIn\tr1\n");
        assert_eq!(fs::read_to_string(dir.join("s1_test.tsv")).unwrap(), "");
    }
}
