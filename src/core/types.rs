//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Radius of the world sphere in meters
pub const WORLD_RADIUS: f64 = 65e5;

/// Unique identifier for entities (bodies)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an item owned by an external item registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Location on the world sphere
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Meters above the reference surface
    pub altitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(altitude: f64, longitude: f64) -> Self {
        Self { altitude, longitude }
    }

    /// Distance from the world center
    pub fn radius(&self) -> f64 {
        WORLD_RADIUS + self.altitude
    }
}
