use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of item an installation kit carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKind {
    Equipment,
    Accessory,
    Module,
    Supply,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Equipment => write!(f, "equipment"),
            ItemKind::Accessory => write!(f, "accessory"),
            ItemKind::Module => write!(f, "module"),
            ItemKind::Supply => write!(f, "supply"),
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equipment" => Ok(ItemKind::Equipment),
            "accessory" => Ok(ItemKind::Accessory),
            "module" => Ok(ItemKind::Module),
            "supply" => Ok(ItemKind::Supply),
            _ => Err(format!("Unknown item kind: {s}")),
        }
    }
}

/// A single named item inside a kit (immutable descriptive record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitItem {
    pub name: String,
    pub kind: ItemKind,
}

/// An installation kit: a named bundle of equipment, accessories,
/// modules and supplies assembled for a vehicle installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kit {
    pub id: String,
    pub name: String,
    pub equipment: Vec<KitItem>,
    pub accessories: Vec<KitItem>,
    pub modules: Vec<KitItem>,
    pub supplies: Vec<KitItem>,
}

impl Kit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            equipment: Vec::new(),
            accessories: Vec::new(),
            modules: Vec::new(),
            supplies: Vec::new(),
        }
    }

    /// Bucket an item into the list matching its kind.
    pub fn push_item(&mut self, item: KitItem) {
        match item.kind {
            ItemKind::Equipment => self.equipment.push(item),
            ItemKind::Accessory => self.accessories.push(item),
            ItemKind::Module => self.modules.push(item),
            ItemKind::Supply => self.supplies.push(item),
        }
    }
}

/// An accessory/module label reported on an incoming vehicle by the
/// intake collaborator. No schema beyond "a named string".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleModule {
    pub name: String,
}

impl VehicleModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A vehicle's declared operating profile.
///
/// Parsing never fails: values outside the known set collapse to
/// `Unknown`, which the compatibility filter treats permissively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum UsageType {
    Particular,
    Comercial,
    Frota,
    TelemetriaGps,
    TelemetriaCan,
    Copiloto2Cameras,
    Copiloto4Cameras,
    Unknown,
}

impl fmt::Display for UsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageType::Particular => write!(f, "particular"),
            UsageType::Comercial => write!(f, "comercial"),
            UsageType::Frota => write!(f, "frota"),
            UsageType::TelemetriaGps => write!(f, "telemetria_gps"),
            UsageType::TelemetriaCan => write!(f, "telemetria_can"),
            UsageType::Copiloto2Cameras => write!(f, "copiloto_2_cameras"),
            UsageType::Copiloto4Cameras => write!(f, "copiloto_4_cameras"),
            UsageType::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for UsageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "particular" => UsageType::Particular,
            "comercial" => UsageType::Comercial,
            "frota" => UsageType::Frota,
            "telemetria_gps" => UsageType::TelemetriaGps,
            "telemetria_can" => UsageType::TelemetriaCan,
            "copiloto_2_cameras" => UsageType::Copiloto2Cameras,
            "copiloto_4_cameras" => UsageType::Copiloto4Cameras,
            _ => UsageType::Unknown,
        })
    }
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
