//! Text normalization for kit and vehicle item names.
//!
//! Catalog names come from operator-typed Portuguese labels, so the same
//! accessory shows up as "Relé de Bloqueio", "rele bloqueio", "RELE  DE
//! BLOQUEIO" and so on. Matching runs on the normalized form only.

use deunicode::deunicode;

/// Normalize an item name for matching.
///
/// Pipeline:
/// 1. Strip diacritics (Relé → Rele) via deunicode
/// 2. Lowercase
/// 3. Collapse and trim whitespace
///
/// Total over all inputs; empty in, empty out.
pub fn normalize(text: &str) -> String {
    let latin = deunicode(text);
    let lower = latin.to_lowercase();
    lower.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
