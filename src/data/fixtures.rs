// ============================================================
// Layer 4 — Test Fixtures
// ============================================================
// Small hand-built graphs shared by the unit tests:
//
//   europe    → four real countries, one island, one one-sided border
//   four      → a, b, c, d across two regions
//   chain     → a - b - c - d in one region and subregion
//   ring(n)   → n countries, each bordering the next
//   islands   → n countries with no borders at all

use serde_json::json;

use crate::domain::entity::Country;
use crate::domain::partition::Partition;

fn codes(code: &str) -> Vec<String> {
    vec![code.to_string()]
}

fn borders(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// france–spain–portugal plus an island, all in one region.
pub fn europe_records() -> Vec<Country> {
    vec![
        Country::new("france", vec!["FR".into(), "FRA".into()], "europe", "western_europe", borders(&["ESP"])),
        Country::new("spain", vec!["ES".into(), "ESP".into()], "europe", "southern_europe", borders(&["FRA", "PRT"])),
        Country::new("portugal", vec!["PT".into(), "PRT".into()], "europe", "southern_europe", Vec::new()),
        Country::new("iceland", vec!["IS".into(), "ISL".into()], "europe", "", Vec::new()),
    ]
}

/// a–b in r1, c–d in r2, no subregions.
pub fn four_country_records() -> Vec<Country> {
    vec![
        Country::new("a", codes("A"), "r1", "", borders(&["B"])),
        Country::new("b", codes("B"), "r1", "", borders(&["A"])),
        Country::new("c", codes("C"), "r2", "", borders(&["D"])),
        Country::new("d", codes("D"), "r2", "", borders(&["C"])),
    ]
}

/// train={a,c}, valid={b}, test={d}
pub fn four_country_partition() -> Partition {
    Partition::new(vec!["a", "c"], vec!["b"], vec!["d"])
}

/// a–b–c–d chain in one region and subregion.
pub fn chain_records() -> Vec<Country> {
    vec![
        Country::new("a", codes("A"), "r", "s", borders(&["B"])),
        Country::new("b", codes("B"), "r", "s", borders(&["A", "C"])),
        Country::new("c", codes("C"), "r", "s", borders(&["B", "D"])),
        Country::new("d", codes("D"), "r", "s", borders(&["C"])),
    ]
}

/// train={a,d}, valid={b}, test={c}: b and c border each other.
pub fn chain_partition() -> Partition {
    Partition::new(vec!["a", "d"], vec!["b"], vec!["c"])
}

fn ring_name(i: usize) -> String {
    format!("country_{i:02}")
}

fn ring_code(i: usize) -> String {
    format!("C{i:02}")
}

/// `n` countries on a ring, each bordering both ring neighbours.
/// Two regions and four subregions alternate around the ring.
pub fn ring_records(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            Country::new(
                ring_name(i),
                codes(&ring_code(i)),
                format!("region_{}", i % 2),
                format!("subregion_{}", i % 4),
                vec![ring_code((i + n - 1) % n), ring_code((i + 1) % n)],
            )
        })
        .collect()
}

/// The same ring as raw JSON records, in the on-disk input format.
pub fn ring_json(n: usize) -> String {
    let records: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "name":      { "official": format!("Country {i:02}") },
                "cca2":      ring_code(i),
                "ccn3":      format!("{i:03}"),
                "cca3":      format!("{}X", ring_code(i)),
                "region":    format!("Region {}", i % 2),
                "subregion": format!("Subregion {}", i % 4),
                "borders":   [ring_code((i + n - 1) % n), ring_code((i + 1) % n)],
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}

/// `n` countries without any borders: no partition with held-out
/// countries can ever be consistent.
pub fn island_records(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| Country::new(format!("island_{i}"), codes(&format!("I{i}")), "ocean", "", Vec::new()))
        .collect()
}
