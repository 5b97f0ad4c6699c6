// ============================================================
// Layer 4 — Name Normaliser
// ============================================================
// Turns official names from the raw records into entity names:
//
//   "Republic of Côte d'Ivoire" → "republic_of_côte_divoire"
//   "Western Europe"            → "western_europe"
//
// Steps (applied per character, in one pass):
//   1. Space       → underscore
//   2. Apostrophe  → removed
//   3. Everything  → lowercase
//
// The same function is applied to country, region and subregion
// names so that triples and entity lists always agree.

/// Normalise a raw display name into an entity name.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == ' ' { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}
