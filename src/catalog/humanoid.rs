//! Built-in humanoid template

use std::sync::Arc;

use super::body_type::BodyType;
use super::part_type::BodyPartType;
use super::property::{Property, PropertyTable};
use crate::core::error::Result;

pub const BODY_TYPE_NAME: &str = "humanoid";
pub const LEFT_EYE: &str = "Left eye";

pub fn left_eye() -> Result<BodyPartType> {
    BodyPartType::new(
        LEFT_EYE,
        5.0,
        0.03,
        PropertyTable::new([0.0, 0.0, 1.0, 0.3, 0.5, 0.5]),
    )
}

/// The humanoid body: full consciousness and hearing at rest, one eye
pub fn body_type() -> Result<BodyType> {
    BodyType::new(
        BODY_TYPE_NAME,
        1.0,
        1.75,
        PropertyTable::default()
            .with(Property::Consciousness, 1.0)
            .with(Property::Hearing, 1.0),
        vec![Arc::new(left_eye()?)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanoid_template() {
        let humanoid = body_type().unwrap();
        assert_eq!(humanoid.name(), "humanoid");
        assert_eq!(humanoid.width(), 1.0);
        assert_eq!(humanoid.height(), 1.75);
        assert_eq!(humanoid.property_base(Property::Consciousness), 1.0);
        assert_eq!(humanoid.property_base(Property::Hearing), 1.0);
        assert_eq!(humanoid.property_base(Property::Sight), 0.0);
        assert_eq!(humanoid.parts().len(), 1);

        let eye = &humanoid.parts()[0];
        assert_eq!(eye.name(), LEFT_EYE);
        assert_eq!(eye.hit_points_max(), 5.0);
        assert_eq!(eye.size(), 0.03);
        assert_eq!(eye.importance(Property::Sight), 1.0);
        assert_eq!(eye.importance(Property::Charisma), 0.3);
        assert_eq!(eye.importance(Property::Mobility), 0.5);
    }
}
