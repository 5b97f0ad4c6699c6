// ============================================================
// Layer 3 — Entity Domain Types
// ============================================================
// Three kinds of entity live in the countries graph:
//   country   → "france", "united_states_of_america", ...
//   region    → "europe", "americas", ...
//   subregion → "western_europe", "northern_america", ...
//
// Names are already normalised by the time they reach this
// layer (see data::normalizer).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Country → neighbouring countries, as listed in the country's
/// own `borders` field. Not symmetrised.
pub type Adjacency = BTreeMap<String, BTreeSet<String>>;

/// The kind tag carried by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Country,
    Region,
    Subregion,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Country, EntityKind::Region, EntityKind::Subregion];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Country   => "country",
            EntityKind::Region    => "region",
            EntityKind::Subregion => "subregion",
        }
    }

    /// File name of the sorted entity list for this kind
    pub fn list_file_name(&self) -> &'static str {
        match self {
            EntityKind::Country   => "countries.lst",
            EntityKind::Region    => "regions.lst",
            EntityKind::Subregion => "subregions.lst",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One country record after normalisation.
///
/// `codes` holds every ISO code (cca2, ccn3, cca3) that refers
/// to this country; `borders` holds raw neighbour codes which are
/// resolved against the codes of all loaded countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name:      String,
    pub codes:     Vec<String>,
    pub region:    String,
    pub subregion: String,
    pub borders:   Vec<String>,
}

impl Country {
    pub fn new(
        name:      impl Into<String>,
        codes:     Vec<String>,
        region:    impl Into<String>,
        subregion: impl Into<String>,
        borders:   Vec<String>,
    ) -> Self {
        Self {
            name:      name.into(),
            codes,
            region:    region.into(),
            subregion: subregion.into(),
            borders,
        }
    }
}

/// Number of distinct entities per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub countries:  usize,
    pub regions:    usize,
    pub subregions: usize,
}

impl EntityCounts {
    /// The counts the canonical countries dataset must produce.
    pub const CANONICAL: EntityCounts = EntityCounts {
        countries:  248,
        regions:    5,
        subregions: 23,
    };

    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Country   => self.countries,
            EntityKind::Region    => self.regions,
            EntityKind::Subregion => self.subregions,
        }
    }
}

impl Default for EntityCounts {
    fn default() -> Self {
        Self::CANONICAL
    }
}
