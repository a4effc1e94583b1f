//! Body templates
//!
//! A `BodyType` fixes the base property values of a kind of creature and the
//! ordered list of part templates its bodies are built from. The order is
//! load-bearing: part instance `i` of every body corresponds to `parts()[i]`.

use std::sync::Arc;

use super::part_type::BodyPartType;
use super::property::{Property, PropertyTable};
use crate::core::error::{AnatomyError, Result};

/// Immutable template shared by every body of one kind
#[derive(Debug, Clone, PartialEq)]
pub struct BodyType {
    name: String,
    /// Capsule footprint, unitless
    width: f64,
    height: f64,
    property_base: PropertyTable,
    parts: Vec<Arc<BodyPartType>>,
}

impl BodyType {
    pub fn new(
        name: impl Into<String>,
        width: f64,
        height: f64,
        property_base: PropertyTable,
        parts: Vec<Arc<BodyPartType>>,
    ) -> Result<Self> {
        let name = name.into();

        for (label, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnatomyError::invalid_entry(
                    &name,
                    format!("{} must be finite and >= 0, got {}", label, value),
                ));
            }
        }
        if let Some(property) = property_base.first_non_finite() {
            return Err(AnatomyError::invalid_entry(
                &name,
                format!("property_base for {} is not finite", property.display_name()),
            ));
        }

        tracing::debug!(body_type = %name, parts = parts.len(), "Built body type");

        Ok(Self {
            name,
            width,
            height,
            property_base,
            parts,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn property_base(&self, property: Property) -> f64 {
        self.property_base[property]
    }

    pub fn property_base_table(&self) -> &PropertyTable {
        &self.property_base
    }

    pub fn parts(&self) -> &[Arc<BodyPartType>] {
        &self.parts
    }

    /// Index of the first part template with this name
    pub fn part_index(&self, name: &str) -> Option<usize> {
        self.parts.iter().position(|p| p.name() == name)
    }

    /// Sum of the importance of every part for `property`
    pub fn total_importance(&self, property: Property) -> f64 {
        self.parts.iter().map(|p| p.importance(property)).sum()
    }
}
