//! Anatomy - wound-driven body property simulation
//!
//! Bodies are built from shared part templates. Wounds lower a part's hit
//! points, and each property is recomputed from every part's remaining
//! efficiency raised to that part's importance for the property.

pub mod catalog;
pub mod core;
pub mod entity;
pub mod simulation;
