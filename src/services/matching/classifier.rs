//! Kit category classification and usage-type compatibility.

use serde::{Deserialize, Serialize};

use crate::database::models::{Kit, UsageType};

/// Substring identifying the CAN/telemetry tracker model in equipment names.
const TELEMETRY_MODEL: &str = "fmc150";
/// Substring identifying the plain tracking model in equipment names.
const TRACKING_MODEL: &str = "fmb920";

/// Hardware category a kit is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KitCategory {
    Telemetry,
    Tracking,
}

impl std::fmt::Display for KitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KitCategory::Telemetry => write!(f, "telemetry"),
            KitCategory::Tracking => write!(f, "tracking"),
        }
    }
}

/// Classify a kit by the tracker model found in its equipment list.
///
/// `None` means the kit declares no category and is treated as universal.
/// The telemetry model is checked first; a kit listing both models
/// classifies as telemetry.
pub fn classify_kit(kit: &Kit) -> Option<KitCategory> {
    let has_model = |model: &str| {
        kit.equipment
            .iter()
            .any(|item| item.name.to_lowercase().contains(model))
    };

    if has_model(TELEMETRY_MODEL) {
        Some(KitCategory::Telemetry)
    } else if has_model(TRACKING_MODEL) {
        Some(KitCategory::Tracking)
    } else {
        None
    }
}

/// Category a usage type demands, if it demands one at all.
fn required_category(usage: &UsageType) -> Option<KitCategory> {
    match usage {
        UsageType::TelemetriaGps | UsageType::TelemetriaCan => Some(KitCategory::Telemetry),
        UsageType::Particular
        | UsageType::Comercial
        | UsageType::Frota
        | UsageType::Copiloto2Cameras
        | UsageType::Copiloto4Cameras => Some(KitCategory::Tracking),
        UsageType::Unknown => None,
    }
}

/// Whether a kit may be suggested for a vehicle with the given usage type.
///
/// Permissive on every missing piece of information: no usage type,
/// an uncategorized kit, or an unrecognized usage type all pass.
pub fn is_compatible(kit: &Kit, usage: Option<&UsageType>) -> bool {
    let Some(usage) = usage else {
        return true;
    };
    let Some(category) = classify_kit(kit) else {
        return true;
    };
    match required_category(usage) {
        Some(required) => category == required,
        None => true,
    }
}
