// ============================================================
// Layer 3 — Partition Domain Type
// ============================================================
// Three disjoint sets of country names whose union is the whole
// country set:
//
//   train  → entities whose facts stay observable
//   valid  → held-out entities used for model selection
//   test   → held-out entities used for final evaluation
//
// A partition is produced once per run by the splitter and then
// only read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the three buckets every country and every triple ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Valid,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Valid, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Valid => "valid",
            Split::Test  => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    train: BTreeSet<String>,
    valid: BTreeSet<String>,
    test:  BTreeSet<String>,
}

impl Partition {
    pub fn new<I, S>(train: I, valid: I, test: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            train: train.into_iter().map(Into::into).collect(),
            valid: valid.into_iter().map(Into::into).collect(),
            test:  test.into_iter().map(Into::into).collect(),
        }
    }

    pub fn train(&self) -> &BTreeSet<String> {
        &self.train
    }

    pub fn valid(&self) -> &BTreeSet<String> {
        &self.valid
    }

    pub fn test(&self) -> &BTreeSet<String> {
        &self.test
    }

    pub fn get(&self, split: Split) -> &BTreeSet<String> {
        match split {
            Split::Train => &self.train,
            Split::Valid => &self.valid,
            Split::Test  => &self.test,
        }
    }

    /// Which bucket `name` belongs to, if any.
    pub fn split_of(&self, name: &str) -> Option<Split> {
        Split::ALL.into_iter().find(|s| self.get(*s).contains(name))
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len() + self.test.len()
    }

    /// True when no name appears in two buckets.
    pub fn is_disjoint(&self) -> bool {
        self.train.is_disjoint(&self.valid)
            && self.train.is_disjoint(&self.test)
            && self.valid.is_disjoint(&self.test)
    }

    /// True when the buckets are disjoint and together cover exactly `all`.
    pub fn covers_exactly(&self, all: &BTreeSet<String>) -> bool {
        if !self.is_disjoint() || self.len() != all.len() {
            return false;
        }
        Split::ALL
            .into_iter()
            .all(|s| self.get(s).iter().all(|name| all.contains(name)))
    }
}

/// Partition facts about one triple subject, computed once per partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubjectFacts {
    /// The subject's own bucket; `None` for regions and subregions
    pub split:             Option<Split>,
    pub neighbor_in_valid: bool,
    pub neighbor_in_test:  bool,
}

impl SubjectFacts {
    pub fn in_valid(&self) -> bool {
        self.split == Some(Split::Valid)
    }

    pub fn in_test(&self) -> bool {
        self.split == Some(Split::Test)
    }

    pub fn is_held_out(&self) -> bool {
        self.in_valid() || self.in_test()
    }

    pub fn has_held_out_neighbor(&self) -> bool {
        self.neighbor_in_valid || self.neighbor_in_test
    }
}

/// Everything a withholding rule may look at for a single triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripleFacts {
    pub subject:             SubjectFacts,
    pub object_is_region:    bool,
    pub object_is_subregion: bool,
}
