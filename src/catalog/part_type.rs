//! Body part templates
//!
//! A `BodyPartType` describes a kind of part (an eye, a hand) independent of
//! any particular character. Templates are validated once at construction
//! and shared read-only from then on.

use serde::Serialize;

use super::property::{Property, PropertyTable};
use crate::core::error::{AnatomyError, Result};

/// Immutable template for a kind of body part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPartType {
    name: String,
    hit_points_max: f64,
    size: f64,
    importance: PropertyTable,
}

impl BodyPartType {
    /// Build a validated part template
    ///
    /// `hit_points_max` must be finite and positive (it is a divisor in the
    /// aggregation engine), `size` finite and non-negative, and every
    /// importance weight finite and non-negative. A negative weight would
    /// raise a destroyed part's factor to infinity.
    pub fn new(
        name: impl Into<String>,
        hit_points_max: f64,
        size: f64,
        importance: PropertyTable,
    ) -> Result<Self> {
        let name = name.into();

        if !hit_points_max.is_finite() || hit_points_max <= 0.0 {
            return Err(AnatomyError::invalid_entry(
                &name,
                format!("hit_points_max must be finite and > 0, got {}", hit_points_max),
            ));
        }
        if !size.is_finite() || size < 0.0 {
            return Err(AnatomyError::invalid_entry(
                &name,
                format!("size must be finite and >= 0, got {}", size),
            ));
        }
        if let Some(property) = importance.first_non_finite() {
            return Err(AnatomyError::invalid_entry(
                &name,
                format!("importance for {} is not finite", property.display_name()),
            ));
        }
        if let Some((property, weight)) = importance.iter().find(|(_, w)| *w < 0.0) {
            return Err(AnatomyError::invalid_entry(
                &name,
                format!(
                    "importance for {} must be >= 0, got {}",
                    property.display_name(),
                    weight
                ),
            ));
        }

        Ok(Self {
            name,
            hit_points_max,
            size,
            importance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hit_points_max(&self) -> f64 {
        self.hit_points_max
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn importance(&self, property: Property) -> f64 {
        self.importance[property]
    }

    pub fn importance_table(&self) -> &PropertyTable {
        &self.importance
    }
}
