//! Inbound payloads for creating and updating warriors.
//!
//! Both payloads make every field optional. A create payload fills gaps with
//! zero values; an update payload only touches the fields it names.

use super::warrior::{Warrior, WarriorId};

/// Field set submitted when creating a warrior.
///
/// Whether `id` is honored is up to the store's id policy.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct WarriorDraft {
    pub id: Option<WarriorId>,
    pub name: Option<String>,
    pub strength: Option<i64>,
    pub agility: Option<i64>,
    pub intellect: Option<i64>,
    pub luck: Option<i64>,
    pub health: Option<i64>,
    pub attack: Option<f64>,
    pub attack_speed: Option<f64>,
    pub critical_chance: Option<f64>,
    pub critical_factor: Option<f64>,
    pub money: Option<f64>,
}

impl WarriorDraft {
    /// Materialize the draft under `id`, zero-filling absent fields.
    pub fn into_warrior(self, id: WarriorId) -> Warrior {
        Warrior {
            id,
            name: self.name.unwrap_or_default(),
            strength: self.strength.unwrap_or_default(),
            agility: self.agility.unwrap_or_default(),
            intellect: self.intellect.unwrap_or_default(),
            luck: self.luck.unwrap_or_default(),
            health: self.health.unwrap_or_default(),
            attack: self.attack.unwrap_or_default(),
            attack_speed: self.attack_speed.unwrap_or_default(),
            critical_chance: self.critical_chance.unwrap_or_default(),
            critical_factor: self.critical_factor.unwrap_or_default(),
            money: self.money.unwrap_or_default(),
        }
    }
}

/// Partial field set merged onto an existing warrior.
///
/// Has no `id` field: identifiers are immutable, and an `id` key in an
/// incoming payload is dropped during deserialization.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct WarriorPatch {
    pub name: Option<String>,
    pub strength: Option<i64>,
    pub agility: Option<i64>,
    pub intellect: Option<i64>,
    pub luck: Option<i64>,
    pub health: Option<i64>,
    pub attack: Option<f64>,
    pub attack_speed: Option<f64>,
    pub critical_chance: Option<f64>,
    pub critical_factor: Option<f64>,
    pub money: Option<f64>,
}

impl Warrior {
    /// Shallow-merge `patch` onto this warrior.
    pub fn apply(&mut self, patch: WarriorPatch) {
        let WarriorPatch {
            name,
            strength,
            agility,
            intellect,
            luck,
            health,
            attack,
            attack_speed,
            critical_chance,
            critical_factor,
            money,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(strength) = strength {
            self.strength = strength;
        }
        if let Some(agility) = agility {
            self.agility = agility;
        }
        if let Some(intellect) = intellect {
            self.intellect = intellect;
        }
        if let Some(luck) = luck {
            self.luck = luck;
        }
        if let Some(health) = health {
            self.health = health;
        }
        if let Some(attack) = attack {
            self.attack = attack;
        }
        if let Some(attack_speed) = attack_speed {
            self.attack_speed = attack_speed;
        }
        if let Some(critical_chance) = critical_chance {
            self.critical_chance = critical_chance;
        }
        if let Some(critical_factor) = critical_factor {
            self.critical_factor = critical_factor;
        }
        if let Some(money) = money {
            self.money = money;
        }
    }
}
