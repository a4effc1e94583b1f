//! Catalog schema types for TOML deserialization.
//!
//! A catalog file lists part templates and body templates. Bodies refer to
//! parts by name, so a part may be shared by any number of bodies.
//!
//! ```toml
//! [[part]]
//! name = "Left eye"
//! hit_points = 5.0
//! size = 0.03
//! importance = { sight = 1.0, charisma = 0.3 }
//!
//! [[body]]
//! name = "humanoid"
//! width = 1.0
//! height = 1.75
//! property_base = { consciousness = 1.0, hearing = 1.0 }
//! parts = ["Left eye"]
//! ```

use serde::{Deserialize, Serialize};

use super::property::PropertyTable;

/// Complete catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "part")]
    pub parts: Vec<PartDef>,
    #[serde(default, rename = "body")]
    pub bodies: Vec<BodyDef>,
}

/// Part template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartDef {
    pub name: String,
    /// Maximum hit points
    pub hit_points: f64,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub importance: PropertyTable,
}

/// Body template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyDef {
    pub name: String,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub property_base: PropertyTable,
    /// Part template names, in instance order
    #[serde(default)]
    pub parts: Vec<String>,
}
