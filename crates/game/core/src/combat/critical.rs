//! Critical-hit checks and total damage.
//!
//! Every check draws exactly one value from the supplied [`RngOracle`].
//! Two calls on an unchanged warrior may therefore disagree.

use crate::env::RngOracle;
use crate::state::Warrior;

/// Outcome of a single damage roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRoll {
    pub critical: bool,
    pub total_damage: f64,
}

impl Warrior {
    /// Roll once: critical when the draw is strictly below `critical_chance`.
    pub fn is_critical_hit(&self, rng: &dyn RngOracle) -> bool {
        rng.next_unit() < self.critical_chance
    }

    /// Damage for an already decided critical outcome.
    #[inline]
    pub fn damage_for(&self, critical: bool) -> f64 {
        if critical {
            self.attack * self.critical_factor
        } else {
            self.attack
        }
    }

    /// `attack`, or `attack * critical_factor` when this call rolls a critical.
    pub fn calculate_total_damage(&self, rng: &dyn RngOracle) -> f64 {
        self.roll_damage(rng).total_damage
    }

    /// Roll once and report both the critical flag and the resulting damage.
    pub fn roll_damage(&self, rng: &dyn RngOracle) -> DamageRoll {
        let critical = self.is_critical_hit(rng);
        DamageRoll {
            critical,
            total_damage: self.damage_for(critical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRoll, PcgRng};
    use crate::state::WarriorId;

    fn striker(chance: f64) -> Warrior {
        Warrior::new(WarriorId(1), "Striker").with_combat(10.0, 1.5, chance, 2.5)
    }

    #[test]
    fn critical_when_draw_below_chance() {
        let warrior = striker(0.3);

        assert!(warrior.is_critical_hit(&FixedRoll(0.29)));
        assert!(!warrior.is_critical_hit(&FixedRoll(0.3)));
        assert!(!warrior.is_critical_hit(&FixedRoll(0.9)));
    }

    #[test]
    fn zero_chance_never_crits() {
        let warrior = striker(0.0);
        assert!(!warrior.is_critical_hit(&FixedRoll::ALWAYS));
    }

    #[test]
    fn damage_without_critical_is_attack() {
        let warrior = striker(0.5);
        assert_eq!(warrior.calculate_total_damage(&FixedRoll::NEVER), 10.0);
    }

    #[test]
    fn damage_with_critical_is_multiplied() {
        let warrior = striker(0.5);
        assert_eq!(warrior.calculate_total_damage(&FixedRoll::ALWAYS), 25.0);
    }

    #[test]
    fn chance_above_one_always_crits() {
        let warrior = striker(1.5);
        let rng = PcgRng::seeded(9);
        for _ in 0..100 {
            assert_eq!(warrior.calculate_total_damage(&rng), 25.0);
        }
    }

    #[test]
    fn repeated_rolls_only_produce_the_two_outcomes() {
        let warrior = striker(0.5);
        let rng = PcgRng::seeded(1234);

        let mut saw_critical = false;
        let mut saw_normal = false;
        for _ in 0..200 {
            let roll = warrior.roll_damage(&rng);
            assert_eq!(roll.total_damage, warrior.damage_for(roll.critical));
            if roll.critical {
                saw_critical = true;
            } else {
                saw_normal = true;
            }
        }

        assert!(saw_critical && saw_normal);
    }
}
