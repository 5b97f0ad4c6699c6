// ============================================================
// Layer 4 — Country Loader
// ============================================================
// Loads the countries dataset: a single JSON array where each
// record looks like
//
//   {
//     "name":      { "official": "French Republic", ... },
//     "cca2":      "FR",
//     "ccn3":      "250",
//     "cca3":      "FRA",
//     "region":    "Europe",
//     "subregion": "Western Europe",
//     "borders":   ["AND", "BEL", "DEU", ...]
//   }
//
// Only the fields above are read; every other field is ignored.
// Missing codes, regions or borders default to empty values so
// that territories without a subregion still load.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::data::normalizer::normalize;
use crate::domain::entity::Country;
use crate::domain::traits::CountrySource;

#[derive(Debug, Deserialize)]
struct RawName {
    official: String,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    #[serde(default)]
    cca2: String,
    #[serde(default)]
    ccn3: String,
    #[serde(default)]
    cca3: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    subregion: String,
    #[serde(default)]
    borders: Vec<String>,
}

impl RawCountry {
    fn into_country(self) -> Country {
        let codes = [self.cca2, self.ccn3, self.cca3]
            .into_iter()
            .filter(|code| !code.is_empty())
            .collect();

        Country::new(
            normalize(&self.name.official),
            codes,
            normalize(&self.region),
            normalize(&self.subregion),
            self.borders,
        )
    }
}

/// Loads country records from a JSON file on disk.
pub struct JsonCountryLoader {
    path: PathBuf,
}

impl JsonCountryLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CountrySource for JsonCountryLoader {
    fn load_all(&self) -> Result<Vec<Country>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let countries = parse_countries(&json)
            .with_context(|| format!("Cannot parse '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded {} country records from '{}'",
            countries.len(),
            self.path.display()
        );
        Ok(countries)
    }
}

/// Parse a JSON array of raw country records and normalise names.
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    let raw: Vec<RawCountry> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawCountry::into_country).collect())
}
