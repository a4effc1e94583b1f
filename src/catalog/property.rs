//! Closed enumerations consumed by gameplay systems, and the fixed-size
//! table keyed by `Property` ordinal.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Abstract character capability computed from body condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Consciousness,
    Hearing,
    Sight,
    Charisma,
    Manipulation,
    Mobility,
}

impl Property {
    pub const COUNT: usize = 6;

    pub fn all() -> [Property; Self::COUNT] {
        [
            Property::Consciousness,
            Property::Hearing,
            Property::Sight,
            Property::Charisma,
            Property::Manipulation,
            Property::Mobility,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Consciousness => "consciousness",
            Self::Hearing => "hearing",
            Self::Sight => "sight",
            Self::Charisma => "charisma",
            Self::Manipulation => "manipulation",
            Self::Mobility => "mobility",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.display_name() == name)
    }
}

/// Skills rolled by downstream systems against body properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Shooting,
    Melee,
    Sculpting,
    Electronics,
    Survival,
}

impl Skill {
    pub const COUNT: usize = 5;

    pub fn all() -> [Skill; Self::COUNT] {
        [
            Skill::Shooting,
            Skill::Melee,
            Skill::Sculpting,
            Skill::Electronics,
            Skill::Survival,
        ]
    }
}

/// Kind of damage carried on a wound. Mapping it to a hit point magnitude is
/// the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Burn,
    Blunt,
    Piercing,
}

impl DamageType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Burn => "burn",
            Self::Blunt => "blunt",
            Self::Piercing => "piercing",
        }
    }
}

/// One `f64` per `Property`, zero unless set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PropertyTableDef", into = "PropertyTableDef")]
pub struct PropertyTable([f64; Property::COUNT]);

impl PropertyTable {
    pub fn new(values: [f64; Property::COUNT]) -> Self {
        Self(values)
    }

    /// Table with every property set to `value`
    pub fn splat(value: f64) -> Self {
        Self([value; Property::COUNT])
    }

    pub fn with(mut self, property: Property, value: f64) -> Self {
        self[property] = value;
        self
    }

    pub fn get(&self, property: Property) -> f64 {
        self.0[property.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f64)> + '_ {
        Property::all().into_iter().map(move |p| (p, self.get(p)))
    }

    /// First property whose value is NaN or infinite
    pub fn first_non_finite(&self) -> Option<Property> {
        self.iter().find(|(_, v)| !v.is_finite()).map(|(p, _)| p)
    }

    pub fn values(&self) -> &[f64; Property::COUNT] {
        &self.0
    }
}

impl Index<Property> for PropertyTable {
    type Output = f64;

    fn index(&self, property: Property) -> &f64 {
        &self.0[property.index()]
    }
}

impl IndexMut<Property> for PropertyTable {
    fn index_mut(&mut self, property: Property) -> &mut f64 {
        &mut self.0[property.index()]
    }
}

/// Named-field form used in catalog files; absent entries are zero
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PropertyTableDef {
    consciousness: f64,
    hearing: f64,
    sight: f64,
    charisma: f64,
    manipulation: f64,
    mobility: f64,
}

impl From<PropertyTableDef> for PropertyTable {
    fn from(def: PropertyTableDef) -> Self {
        Self([
            def.consciousness,
            def.hearing,
            def.sight,
            def.charisma,
            def.manipulation,
            def.mobility,
        ])
    }
}

impl From<PropertyTable> for PropertyTableDef {
    fn from(table: PropertyTable) -> Self {
        let [consciousness, hearing, sight, charisma, manipulation, mobility] = table.0;
        Self {
            consciousness,
            hearing,
            sight,
            charisma,
            manipulation,
            mobility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_ordinals() {
        for (i, p) in Property::all().iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        assert_eq!(Property::Sight.index(), 2);
    }

    #[test]
    fn test_skills_are_closed() {
        assert_eq!(Skill::all().len(), Skill::COUNT);
        assert_eq!(Skill::all()[4], Skill::Survival);
    }

    #[test]
    fn test_property_from_name() {
        assert_eq!(Property::from_name("mobility"), Some(Property::Mobility));
        assert_eq!(Property::from_name("luck"), None);
    }

    #[test]
    fn test_table_defaults_to_zero() {
        let table = PropertyTable::default();
        assert!(table.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_table_index() {
        let mut table = PropertyTable::default().with(Property::Sight, 1.0);
        table[Property::Hearing] = 0.5;
        assert_eq!(table[Property::Sight], 1.0);
        assert_eq!(table.get(Property::Hearing), 0.5);
        assert_eq!(table[Property::Mobility], 0.0);
    }

    #[test]
    fn test_table_missing_entries_deserialize_as_zero() {
        let table: PropertyTable = toml::from_str("sight = 1.0\ncharisma = 0.3").unwrap();
        assert_eq!(table[Property::Sight], 1.0);
        assert_eq!(table[Property::Charisma], 0.3);
        assert_eq!(table[Property::Consciousness], 0.0);
    }

    #[test]
    fn test_table_rejects_unknown_property() {
        let result: Result<PropertyTable, _> = toml::from_str("luck = 1.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_first_non_finite() {
        let table = PropertyTable::default().with(Property::Charisma, f64::NAN);
        assert_eq!(table.first_non_finite(), Some(Property::Charisma));
        assert_eq!(PropertyTable::splat(1.0).first_non_finite(), None);
    }
}
