//! Property aggregation
//!
//! A property starts at the body type's base value and is multiplied by one
//! factor per part:
//!
//! ```text
//! efficiency = efficiency_base * hit_points_left / hit_points_max
//! factor     = efficiency ^ importance[property]
//! ```
//!
//! Importance works as an exponent, so a part with importance 0 never
//! affects the property, importance 1 scales it linearly, and fractional
//! importance dampens the effect of damage.
//!
//! Nothing is cached. Every call walks every part once, so a wound recorded
//! between two calls is visible in the second.

use serde::Serialize;

use crate::catalog::part_type::BodyPartType;
use crate::catalog::property::{Property, PropertyTable};
use crate::core::config::{config, AnatomyConfig, OverDamagePolicy};
use crate::entity::body::{Body, BodyPart};

/// One part's share of a property value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartContribution {
    pub part: String,
    pub hit_points_max: f64,
    /// After the over-damage policy has been applied
    pub hit_points_left: f64,
    pub efficiency: f64,
    pub importance: f64,
    /// `efficiency ^ importance`
    pub factor: f64,
}

/// A property's value together with the per-part factors that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyBreakdown {
    pub property: Property,
    pub base: f64,
    pub parts: Vec<PartContribution>,
    pub value: f64,
}

fn hit_points_left(template: &BodyPartType, part: &BodyPart, policy: OverDamagePolicy) -> f64 {
    let left = part.hit_points_left(template);
    match policy {
        OverDamagePolicy::Clamp => left.max(0.0),
        OverDamagePolicy::Propagate => left,
    }
}

fn efficiency(template: &BodyPartType, part: &BodyPart, policy: OverDamagePolicy) -> f64 {
    part.efficiency_base() * (hit_points_left(template, part, policy) / template.hit_points_max())
}

/// `f64::powf` already returns 1 for a zero exponent, even for a zero or
/// NaN base, which is what keeps unimportant parts out of the product.
fn factor(efficiency: f64, importance: f64) -> f64 {
    efficiency.powf(importance)
}

/// Current value of `property` under an explicit config
pub fn property_with(body: &Body, property: Property, config: &AnatomyConfig) -> f64 {
    let policy = config.over_damage;
    let value = body
        .parts_with_types()
        .fold(body.body_type().property_base(property), |value, (template, part)| {
            value * factor(efficiency(template, part, policy), template.importance(property))
        });

    tracing::trace!(id = ?body.id, property = property.display_name(), value, "Aggregated property");
    if !value.is_finite() {
        tracing::warn!(
            id = ?body.id,
            property = property.display_name(),
            ?policy,
            "Property aggregated to a non-finite value"
        );
    }
    value
}

/// Current value of `property` under the global config
pub fn property(body: &Body, property: Property) -> f64 {
    property_with(body, property, config())
}

/// Every property at once
pub fn properties(body: &Body) -> PropertyTable {
    properties_with(body, config())
}

pub fn properties_with(body: &Body, config: &AnatomyConfig) -> PropertyTable {
    let mut table = PropertyTable::default();
    for p in Property::all() {
        table[p] = property_with(body, p, config);
    }
    table
}

/// Efficiency of the part at `index` under the global config
pub fn part_efficiency(body: &Body, index: usize) -> Option<f64> {
    let template = body.body_type().parts().get(index)?;
    let part = body.part(index)?;
    Some(efficiency(template, part, config().over_damage))
}

/// The per-part factors behind `property_with`
///
/// `base` times the product of every `factor` equals `value`.
pub fn breakdown(body: &Body, property: Property, config: &AnatomyConfig) -> PropertyBreakdown {
    let policy = config.over_damage;
    let base = body.body_type().property_base(property);

    let parts: Vec<PartContribution> = body
        .parts_with_types()
        .map(|(template, part)| {
            let efficiency = efficiency(template, part, policy);
            let importance = template.importance(property);
            PartContribution {
                part: template.name().to_string(),
                hit_points_max: template.hit_points_max(),
                hit_points_left: hit_points_left(template, part, policy),
                efficiency,
                importance,
                factor: factor(efficiency, importance),
            }
        })
        .collect();

    let value = parts.iter().fold(base, |v, c| v * c.factor);

    PropertyBreakdown {
        property,
        base,
        parts,
        value,
    }
}
