//! Human and JSON readable snapshot of a body's condition

use serde::Serialize;

use super::aggregation::{breakdown, PropertyBreakdown};
use crate::catalog::property::Property;
use crate::core::config::AnatomyConfig;
use crate::core::error::Result;
use crate::entity::body::Body;

#[derive(Debug, Clone, Serialize)]
pub struct PartStatus {
    pub name: String,
    pub efficiency_base: f64,
    pub wounds: usize,
    pub damage: f64,
    pub hit_points_max: f64,
}

/// Snapshot of one body
#[derive(Debug, Clone, Serialize)]
pub struct BodyReport {
    pub name: String,
    pub body_type: String,
    pub parts: Vec<PartStatus>,
    pub properties: Vec<PropertyBreakdown>,
}

impl BodyReport {
    pub fn new(body: &Body, config: &AnatomyConfig) -> Self {
        let parts = body
            .parts_with_types()
            .map(|(template, part)| PartStatus {
                name: template.name().to_string(),
                efficiency_base: part.efficiency_base(),
                wounds: part.wounds().len(),
                damage: part.wounds().total_damage(),
                hit_points_max: template.hit_points_max(),
            })
            .collect();

        let properties = Property::all()
            .into_iter()
            .map(|p| breakdown(body, p, config))
            .collect();

        Self {
            name: body.display_name().to_string(),
            body_type: body.body_type().name().to_string(),
            parts,
            properties,
        }
    }

    pub fn value(&self, property: Property) -> Option<f64> {
        self.properties
            .iter()
            .find(|b| b.property == property)
            .map(|b| b.value)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let mut out = format!("{} ({})\n", self.name, self.body_type);
        out.push_str("Parts:\n");
        for part in &self.parts {
            out.push_str(&format!(
                "  {:<16} {:>6.2}/{:<6.2} hp  {} wound(s)  base {:.2}\n",
                part.name,
                part.hit_points_max - part.damage,
                part.hit_points_max,
                part.wounds,
                part.efficiency_base,
            ));
        }
        out.push_str("Properties:\n");
        for b in &self.properties {
            out.push_str(&format!(
                "  {:<14} {:.3} (base {:.3})\n",
                b.property.display_name(),
                b.value,
                b.base
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::humanoid;
    use crate::entity::body::Identity;
    use crate::entity::wounds::Wound;
    use std::sync::Arc;

    fn wounded() -> Body {
        let mut body = Body::new(
            Arc::new(humanoid::body_type().unwrap()),
            Identity::named("Ada"),
        );
        body.record_wound(0, Wound::new(2.0)).unwrap();
        body
    }

    #[test]
    fn test_report_contents() {
        let report = BodyReport::new(&wounded(), &AnatomyConfig::default());
        assert_eq!(report.name, "Ada");
        assert_eq!(report.body_type, "humanoid");
        assert_eq!(report.parts.len(), 1);
        assert_eq!(report.parts[0].damage, 2.0);
        assert_eq!(report.properties.len(), Property::COUNT);
        assert_eq!(report.value(Property::Hearing), Some(1.0));
    }

    #[test]
    fn test_summary_lists_everything() {
        let summary = BodyReport::new(&wounded(), &AnatomyConfig::default()).summary();
        assert!(summary.starts_with("Ada (humanoid)"));
        assert!(summary.contains("Left eye"));
        assert!(summary.contains("mobility"));
    }

    #[test]
    fn test_json_output() {
        let json = BodyReport::new(&wounded(), &AnatomyConfig::default())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["body_type"], "humanoid");
        assert_eq!(value["properties"][2]["property"], "sight");
    }
}
