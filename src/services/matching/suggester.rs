//! Kit suggestion ranking.
//!
//! The one I/O touchpoint of the matching core: load the catalog, score
//! every compatible kit against the vehicle, return the ranked matches
//! for the scheduling form to pre-fill from.

use sqlx::SqlitePool;

use super::classifier::is_compatible;
use super::matcher::{match_kit, KitMatch};
use crate::database::kit_repo;
use crate::database::models::{Kit, UsageType, VehicleModule};
use crate::types::errors::AppResult;

/// Rank kits against a vehicle's module list.
///
/// Incompatible kits are filtered first, then each survivor is matched;
/// kits with nothing in common with the vehicle are dropped. The sort is
/// stable and descending by match count, so equal scores keep catalog
/// order.
pub fn rank_kits(
    kits: &[Kit],
    vehicle_modules: &[VehicleModule],
    usage: Option<&UsageType>,
) -> Vec<KitMatch> {
    let mut matches: Vec<KitMatch> = kits
        .iter()
        .filter(|kit| is_compatible(kit, usage))
        .map(|kit| match_kit(vehicle_modules, kit))
        .filter(|m| !m.matched_items.is_empty())
        .collect();

    matches.sort_by(|a, b| b.matched_items.len().cmp(&a.matched_items.len()));
    matches
}

/// Load the kit catalog and rank it for a vehicle.
///
/// A catalog load failure propagates to the caller untouched; the form
/// simply shows no suggestions.
pub async fn suggest_kits(
    pool: &SqlitePool,
    vehicle_modules: &[VehicleModule],
    usage: Option<&UsageType>,
) -> AppResult<Vec<KitMatch>> {
    let kits = kit_repo::get_all_kits(pool).await?;
    let matches = rank_kits(&kits, vehicle_modules, usage);
    log::debug!(
        "Suggested {} of {} kits for {} vehicle module(s)",
        matches.len(),
        kits.len(),
        vehicle_modules.len()
    );
    Ok(matches)
}
