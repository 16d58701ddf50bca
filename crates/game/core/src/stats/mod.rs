//! Derived attributes computed from a warrior's stored fields.
//!
//! Everything here is a pure read. Thresholds are fixed constants and all
//! comparisons accept whatever values the record holds.

mod info;

pub use info::WarriorInfo;

use crate::state::Warrior;

/// Health strictly below this value counts as low.
pub const LOW_HEALTH_THRESHOLD: i64 = 30;

/// Strength must exceed this for the special ability.
pub const SPECIAL_ABILITY_MIN_STRENGTH: i64 = 7;

/// Agility must exceed this for the special ability.
pub const SPECIAL_ABILITY_MIN_AGILITY: i64 = 5;

/// Intellect must exceed this for the special ability.
pub const SPECIAL_ABILITY_MIN_INTELLECT: i64 = 3;

impl Warrior {
    /// `health < 30`
    #[inline]
    pub fn is_low_on_health(&self) -> bool {
        self.health < LOW_HEALTH_THRESHOLD
    }

    /// `money >= cost`. Negative costs are accepted; a NaN cost never passes.
    #[inline]
    pub fn can_afford_purchase(&self, cost: f64) -> bool {
        self.money >= cost
    }

    /// All three build stats strictly above their thresholds.
    pub fn is_special_ability_eligible(&self) -> bool {
        self.strength > SPECIAL_ABILITY_MIN_STRENGTH
            && self.agility > SPECIAL_ABILITY_MIN_AGILITY
            && self.intellect > SPECIAL_ABILITY_MIN_INTELLECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WarriorId;

    fn eligible_build() -> Warrior {
        Warrior::new(WarriorId(1), "Build").with_attributes(8, 6, 4, 0)
    }

    #[test]
    fn low_health_boundary() {
        let warrior = Warrior::new(WarriorId(1), "A");

        assert!(warrior.clone().with_health(29).is_low_on_health());
        assert!(!warrior.clone().with_health(30).is_low_on_health());
        assert!(warrior.clone().with_health(-5).is_low_on_health());
        assert!(!warrior.with_health(100).is_low_on_health());
    }

    #[test]
    fn affordability_boundary() {
        let warrior = Warrior::new(WarriorId(1), "A").with_money(50.0);

        assert!(warrior.can_afford_purchase(50.0));
        assert!(warrior.can_afford_purchase(49.99));
        assert!(!warrior.can_afford_purchase(51.0));
        assert!(warrior.can_afford_purchase(-10.0));
        assert!(!warrior.can_afford_purchase(f64::NAN));
    }

    #[test]
    fn special_ability_requires_all_thresholds() {
        assert!(eligible_build().is_special_ability_eligible());

        let mut weak = eligible_build();
        weak.strength = 7;
        assert!(!weak.is_special_ability_eligible());

        let mut clumsy = eligible_build();
        clumsy.agility = 5;
        assert!(!clumsy.is_special_ability_eligible());

        let mut dull = eligible_build();
        dull.intellect = 3;
        assert!(!dull.is_special_ability_eligible());
    }

    #[test]
    fn special_ability_strength_boundary() {
        let mut warrior = eligible_build();
        warrior.strength = 8;
        assert!(warrior.is_special_ability_eligible());
        warrior.strength = 7;
        assert!(!warrior.is_special_ability_eligible());
    }
}
