//! Per-character body state
//!
//! A `Body` pairs a shared `BodyType` with one `BodyPart` instance per part
//! template. Instances are index-aligned with the template: `parts[i]` is the
//! live state of `body_type.parts()[i]`.

use std::sync::Arc;

use super::wounds::{Wound, WoundLedger};
use crate::catalog::body_type::BodyType;
use crate::catalog::part_type::BodyPartType;
use crate::catalog::property::{Property, PropertyTable};
use crate::core::calendar::Time;
use crate::core::config::config;
use crate::core::error::{AnatomyError, Result};
use crate::core::types::{EntityId, Position};
use crate::simulation::aggregation;

fn check_efficiency_base(efficiency_base: f64) -> Result<f64> {
    if efficiency_base.is_finite() && efficiency_base >= 0.0 {
        Ok(efficiency_base)
    } else {
        Err(AnatomyError::InvalidEfficiencyBase(efficiency_base))
    }
}

/// Live state of one part
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
    /// Innate capacity independent of wounds, roughly 0.0-1.0
    efficiency_base: f64,
    wounds: WoundLedger,
}

impl BodyPart {
    /// Fails unless `efficiency_base` is finite and non-negative
    pub fn new(efficiency_base: f64) -> Result<Self> {
        Ok(Self {
            efficiency_base: check_efficiency_base(efficiency_base)?,
            wounds: WoundLedger::new(),
        })
    }

    pub fn efficiency_base(&self) -> f64 {
        self.efficiency_base
    }

    pub fn wounds(&self) -> &WoundLedger {
        &self.wounds
    }

    pub fn record_wound(&mut self, wound: Wound) {
        self.wounds.add(wound);
    }

    /// Hit points left given this part's template, without clamping
    pub fn hit_points_left(&self, template: &BodyPartType) -> f64 {
        template.hit_points_max() - self.wounds.total_damage()
    }
}

impl Default for BodyPart {
    fn default() -> Self {
        Self {
            efficiency_base: 1.0,
            wounds: WoundLedger::new(),
        }
    }
}

/// Who a body belongs to and where it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub names: Vec<String>,
    pub nickname: String,
    pub birth: Time,
    pub position: Position,
}

impl Identity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn born_at(mut self, birth: Time) -> Self {
        self.birth = birth;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// A simulated character's body
#[derive(Debug, Clone)]
pub struct Body {
    pub id: EntityId,
    body_type: Arc<BodyType>,
    parts: Vec<BodyPart>,
    pub identity: Identity,
}

impl Body {
    /// Fresh, unwounded body of the given type
    pub fn new(body_type: Arc<BodyType>, identity: Identity) -> Self {
        // The global config is validated on the way in
        let efficiency_base = config().default_efficiency_base;
        let parts = body_type
            .parts()
            .iter()
            .map(|_| BodyPart {
                efficiency_base,
                wounds: WoundLedger::new(),
            })
            .collect();
        Self::assemble(body_type, parts, identity)
    }

    /// Body with caller-supplied part states (e.g. from character
    /// generation). Fails if the count does not match the template.
    pub fn with_parts(
        body_type: Arc<BodyType>,
        parts: Vec<BodyPart>,
        identity: Identity,
    ) -> Result<Self> {
        let expected = body_type.parts().len();
        if parts.len() != expected {
            return Err(AnatomyError::BodyTypeMismatch {
                expected,
                actual: parts.len(),
            });
        }
        Ok(Self::assemble(body_type, parts, identity))
    }

    fn assemble(body_type: Arc<BodyType>, parts: Vec<BodyPart>, identity: Identity) -> Self {
        let body = Self {
            id: EntityId::new(),
            body_type,
            parts,
            identity,
        };
        tracing::debug!(
            id = ?body.id,
            body_type = body.body_type.name(),
            parts = body.parts.len(),
            "Created body"
        );
        body
    }

    pub fn body_type(&self) -> &Arc<BodyType> {
        &self.body_type
    }

    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&BodyPart> {
        self.parts.get(index)
    }

    /// Template and live state side by side, in template order
    pub fn parts_with_types(&self) -> impl Iterator<Item = (&BodyPartType, &BodyPart)> + '_ {
        self.body_type
            .parts()
            .iter()
            .map(|t| &**t)
            .zip(self.parts.iter())
    }

    /// Set a part's innate capacity (age, old permanent injuries)
    ///
    /// The value must be finite and non-negative.
    pub fn set_efficiency_base(&mut self, index: usize, efficiency_base: f64) -> Result<()> {
        let len = self.parts.len();
        let part = self
            .parts
            .get_mut(index)
            .ok_or(AnatomyError::PartIndexOutOfRange { index, len })?;
        part.efficiency_base = check_efficiency_base(efficiency_base)?;
        Ok(())
    }

    /// Append a wound to the part at `part_index`
    pub fn record_wound(&mut self, part_index: usize, wound: Wound) -> Result<()> {
        let len = self.parts.len();
        let part = self
            .parts
            .get_mut(part_index)
            .ok_or(AnatomyError::PartIndexOutOfRange {
                index: part_index,
                len,
            })?;
        tracing::trace!(
            id = ?self.id,
            part = part_index,
            hit_points = wound.hit_points,
            "Recorded wound"
        );
        part.record_wound(wound);
        Ok(())
    }

    /// Append a wound to the first part whose template has this name
    pub fn record_wound_by_name(&mut self, part_name: &str, wound: Wound) -> Result<usize> {
        let index = self
            .body_type
            .part_index(part_name)
            .ok_or_else(|| AnatomyError::UnknownPart(part_name.to_string()))?;
        self.record_wound(index, wound)?;
        Ok(index)
    }

    /// Total number of wounds across every part
    pub fn wound_count(&self) -> usize {
        self.parts.iter().map(|p| p.wounds().len()).sum()
    }

    /// Current value of one property
    pub fn property(&self, property: Property) -> f64 {
        aggregation::property(self, property)
    }

    /// Current value of every property
    pub fn properties(&self) -> PropertyTable {
        aggregation::properties(self)
    }

    /// Age at `now`
    pub fn age(&self, now: Time) -> Time {
        now.elapsed_since(self.identity.birth)
    }

    /// Display name: nickname if set, else the first name
    pub fn display_name(&self) -> &str {
        let identity = &self.identity;
        if !identity.nickname.is_empty() {
            identity.nickname.as_str()
        } else {
            identity.names.first().map(String::as_str).unwrap_or("")
        }
    }
}
