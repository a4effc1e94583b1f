//! Body template catalog
//!
//! Immutable part and body templates, validated once when they are built and
//! shared by reference afterwards.

pub mod body_type;
pub mod humanoid;
pub mod part_type;
pub mod property;
pub mod registry;
pub mod schema;

pub use body_type::BodyType;
pub use part_type::BodyPartType;
pub use property::{DamageType, Property, PropertyTable, Skill};
pub use registry::CatalogRegistry;
