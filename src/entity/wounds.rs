//! Wound records and the per-part ledger that accumulates them

use serde::{Deserialize, Serialize};

use crate::catalog::property::DamageType;
use crate::core::calendar::Time;
use crate::core::types::{EntityId, ItemId};

/// Damage applied to one body part
///
/// `attacker` and `weapon` are handles into registries this crate does not
/// own. They may outlive the entities they name, so resolve them with care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wound {
    pub attacker: Option<EntityId>,
    pub weapon: Option<ItemId>,
    /// Hit points subtracted from the part's pool. Not validated: a
    /// negative value adds hit points back.
    pub hit_points: f64,
    pub damage_type: Option<DamageType>,
    pub inflicted_at: Time,
}

impl Wound {
    /// Wound with no known source
    pub fn new(hit_points: f64) -> Self {
        Self {
            attacker: None,
            weapon: None,
            hit_points,
            damage_type: None,
            inflicted_at: Time::zero(),
        }
    }

    pub fn with_attacker(mut self, attacker: EntityId) -> Self {
        self.attacker = Some(attacker);
        self
    }

    pub fn with_weapon(mut self, weapon: ItemId) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = Some(damage_type);
        self
    }

    pub fn at(mut self, time: Time) -> Self {
        self.inflicted_at = time;
        self
    }
}

/// Append-only collection of wounds on one part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WoundLedger {
    wounds: Vec<Wound>,
}

impl WoundLedger {
    pub fn new() -> Self {
        Self { wounds: Vec::new() }
    }

    pub fn add(&mut self, wound: Wound) {
        self.wounds.push(wound);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Wound> {
        self.wounds.iter()
    }

    pub fn len(&self) -> usize {
        self.wounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wounds.is_empty()
    }

    pub fn last(&self) -> Option<&Wound> {
        self.wounds.last()
    }

    /// Sum of every recorded wound's hit points
    pub fn total_damage(&self) -> f64 {
        self.wounds.iter().map(|w| w.hit_points).sum()
    }

    /// Wounds dealt by one attacker
    pub fn by_attacker(&self, attacker: EntityId) -> impl Iterator<Item = &Wound> + '_ {
        self.wounds
            .iter()
            .filter(move |w| w.attacker == Some(attacker))
    }
}

impl<'a> IntoIterator for &'a WoundLedger {
    type Item = &'a Wound;
    type IntoIter = std::slice::Iter<'a, Wound>;

    fn into_iter(self) -> Self::IntoIter {
        self.wounds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = WoundLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_damage(), 0.0);
        assert!(ledger.last().is_none());
    }

    #[test]
    fn test_ledger_keeps_order() {
        let mut ledger = WoundLedger::new();
        ledger.add(Wound::new(1.0));
        ledger.add(Wound::new(2.5).with_damage_type(DamageType::Burn));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_damage(), 3.5);
        assert_eq!(ledger.last().unwrap().damage_type, Some(DamageType::Burn));
        let amounts: Vec<f64> = ledger.iter().map(|w| w.hit_points).collect();
        assert_eq!(amounts, vec![1.0, 2.5]);
    }

    #[test]
    fn test_negative_wound_is_recorded_as_is() {
        let mut ledger = WoundLedger::new();
        ledger.add(Wound::new(3.0));
        ledger.add(Wound::new(-1.0));
        assert_eq!(ledger.total_damage(), 2.0);
    }

    #[test]
    fn test_by_attacker() {
        let orc = EntityId::new();
        let mut ledger = WoundLedger::new();
        ledger.add(Wound::new(1.0).with_attacker(orc));
        ledger.add(Wound::new(2.0));
        ledger.add(Wound::new(4.0).with_attacker(orc).with_weapon(ItemId::new()));
        let total: f64 = ledger.by_attacker(orc).map(|w| w.hit_points).sum();
        assert_eq!(total, 5.0);
    }

    #[test]
    fn test_wound_serializes() {
        let wound = Wound::new(2.0)
            .with_damage_type(DamageType::Piercing)
            .at(Time::from_minutes(90.0));
        let json = serde_json::to_string(&wound).unwrap();
        let back: Wound = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wound);
    }
}
