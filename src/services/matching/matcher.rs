//! Kit-to-vehicle accessory matching.

use serde::{Deserialize, Serialize};

use super::normalizer::normalize;
use super::similarity::is_similar;
use crate::database::models::{Kit, VehicleModule};

/// Consumables that never count toward a match. Substrings checked
/// against the normalized accessory name.
const SUPPLY_DENYLIST: &[&str] = &["fita", "abracadeira", "parafuso", "porca", "terminal"];

/// Result of matching one kit against one vehicle's module list.
/// Computed fresh per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitMatch {
    pub kit: Kit,
    pub matched_items: Vec<String>,
    pub unmatched_items: Vec<String>,
}

/// Match a kit's accessories against the modules reported on a vehicle.
///
/// Consumables are dropped up front; every remaining accessory scans the
/// vehicle modules in order and counts as matched on the first similar
/// module. Matching is greedy and non-injective: one vehicle module may
/// satisfy several kit accessories. Pure function; empty inputs produce
/// an empty matched list.
pub fn match_kit(vehicle_modules: &[VehicleModule], kit: &Kit) -> KitMatch {
    let relevant_items = kit
        .accessories
        .iter()
        .filter(|item| !is_supply(&item.name));

    let mut matched_items = Vec::new();
    let mut unmatched_items = Vec::new();

    for item in relevant_items {
        let hit = vehicle_modules
            .iter()
            .any(|module| is_similar(&item.name, &module.name));
        if hit {
            matched_items.push(item.name.clone());
        } else {
            unmatched_items.push(item.name.clone());
        }
    }

    KitMatch {
        kit: kit.clone(),
        matched_items,
        unmatched_items,
    }
}

/// Whether an accessory name denotes a generic consumable (tape, cable
/// ties, fasteners) rather than a functional accessory.
fn is_supply(name: &str) -> bool {
    let normalized = normalize(name);
    SUPPLY_DENYLIST
        .iter()
        .any(|entry| normalized.contains(entry))
}
