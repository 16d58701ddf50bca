use crate::combat::DamageRoll;
use crate::env::RngOracle;
use crate::state::{Warrior, WarriorId};

/// Read-only composite of a warrior's identity and derived attributes.
///
/// The critical flag and total damage come from the same roll, so
/// `total_damage` always agrees with `is_critical_hit`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WarriorInfo {
    pub id: WarriorId,
    pub name: String,
    pub is_low_on_health: bool,
    pub can_afford_purchase: bool,
    /// The cost `can_afford_purchase` was evaluated against.
    pub purchase_cost: f64,
    pub is_special_ability_eligible: bool,
    pub is_critical_hit: bool,
    pub total_damage: f64,
}

impl WarriorInfo {
    pub fn collect(warrior: &Warrior, purchase_cost: f64, rng: &dyn RngOracle) -> Self {
        let DamageRoll {
            critical,
            total_damage,
        } = warrior.roll_damage(rng);

        Self {
            id: warrior.id,
            name: warrior.name.clone(),
            is_low_on_health: warrior.is_low_on_health(),
            can_afford_purchase: warrior.can_afford_purchase(purchase_cost),
            purchase_cost,
            is_special_ability_eligible: warrior.is_special_ability_eligible(),
            is_critical_hit: critical,
            total_damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedRoll;

    #[test]
    fn bundles_identity_and_derived_values() {
        let warrior = Warrior::new(WarriorId(5), "A")
            .with_attributes(8, 6, 4, 0)
            .with_health(100)
            .with_combat(10.0, 1.0, 0.0, 2.0)
            .with_money(50.0);

        let info = WarriorInfo::collect(&warrior, 50.0, &FixedRoll::ALWAYS);

        assert_eq!(info.id, WarriorId(5));
        assert_eq!(info.name, "A");
        assert!(!info.is_low_on_health);
        assert!(info.can_afford_purchase);
        assert!(info.is_special_ability_eligible);
        // zero chance never crits, even on the lowest draw
        assert!(!info.is_critical_hit);
        assert_eq!(info.total_damage, 10.0);
    }

    #[test]
    fn critical_flag_matches_damage() {
        let warrior = Warrior::new(WarriorId(1), "Crit").with_combat(10.0, 1.0, 0.5, 3.0);

        let info = WarriorInfo::collect(&warrior, 0.0, &FixedRoll(0.1));

        assert!(info.is_critical_hit);
        assert_eq!(info.total_damage, 30.0);
    }
}
