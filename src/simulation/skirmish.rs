//! Seeded random wounding, for demos and soak tests
//!
//! Stands in for the combat resolver: it picks a part weighted by size and
//! deals a fraction of that part's hit points.

use rand::Rng;

use crate::catalog::property::DamageType;
use crate::core::calendar::Time;
use crate::core::error::Result;
use crate::core::types::EntityId;
use crate::entity::body::Body;
use crate::entity::wounds::Wound;

/// Largest single hit as a fraction of the struck part's hit points
pub const MAX_HIT_FRACTION: f64 = 0.6;

const DAMAGE_TYPES: [DamageType; 3] = [DamageType::Burn, DamageType::Blunt, DamageType::Piercing];

/// Pick a part index, weighted by template size. Parts of size 0 are only
/// hit when every part has size 0.
fn pick_part<R: Rng>(body: &Body, rng: &mut R) -> Option<usize> {
    let templates = body.body_type().parts();
    if templates.is_empty() {
        return None;
    }
    let total: f64 = templates.iter().map(|t| t.size()).sum();
    if total <= 0.0 {
        return Some(rng.gen_range(0..templates.len()));
    }
    let mut roll = rng.gen_range(0.0..total);
    for (i, t) in templates.iter().enumerate() {
        if roll < t.size() {
            return Some(i);
        }
        roll -= t.size();
    }
    Some(templates.len() - 1)
}

/// Inflict `count` random wounds, one minute apart starting at `start`.
/// Returns the struck part indices in order.
pub fn inflict_random_wounds<R: Rng>(
    body: &mut Body,
    count: usize,
    attacker: Option<EntityId>,
    start: Time,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let mut struck = Vec::with_capacity(count);
    for n in 0..count {
        let Some(index) = pick_part(body, rng) else {
            break;
        };
        let hit_points_max = body.body_type().parts()[index].hit_points_max();
        let mut wound = Wound::new(rng.gen_range(0.0..hit_points_max * MAX_HIT_FRACTION))
            .with_damage_type(DAMAGE_TYPES[rng.gen_range(0..DAMAGE_TYPES.len())])
            .at(start.advance(n as f64));
        if let Some(attacker) = attacker {
            wound = wound.with_attacker(attacker);
        }
        body.record_wound(index, wound)?;
        struck.push(index);
    }
    tracing::debug!(id = ?body.id, wounds = struck.len(), "Inflicted random wounds");
    Ok(struck)
}
