use std::fmt;

/// Identifier of a warrior record within a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WarriorId(pub i64);

impl WarriorId {
    /// Identifier handed out when a store assigns ids and is still empty.
    pub const FIRST: Self = Self(1);

    /// The identifier following this one, or `None` on overflow.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for WarriorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One game character: build stats, combat numbers and purse.
///
/// No field carries a range check. Negative health, a critical chance above
/// one or a zero critical factor are all stored as given.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Warrior {
    pub id: WarriorId,
    pub name: String,
    pub strength: i64,
    pub agility: i64,
    pub intellect: i64,
    pub luck: i64,
    pub health: i64,
    pub attack: f64,
    /// Carried data only; nothing derives from it.
    pub attack_speed: f64,
    /// Probability of a critical hit, conceptually in `[0, 1]`.
    pub critical_chance: f64,
    /// Damage multiplier applied on a critical hit.
    pub critical_factor: f64,
    pub money: f64,
}

impl Warrior {
    /// Create a warrior with the given identity and zeroed stats.
    pub fn new(id: WarriorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attributes(
        mut self,
        strength: i64,
        agility: i64,
        intellect: i64,
        luck: i64,
    ) -> Self {
        self.strength = strength;
        self.agility = agility;
        self.intellect = intellect;
        self.luck = luck;
        self
    }

    pub fn with_health(mut self, health: i64) -> Self {
        self.health = health;
        self
    }

    pub fn with_combat(
        mut self,
        attack: f64,
        attack_speed: f64,
        critical_chance: f64,
        critical_factor: f64,
    ) -> Self {
        self.attack = attack;
        self.attack_speed = attack_speed;
        self.critical_chance = critical_chance;
        self.critical_factor = critical_factor;
        self
    }

    pub fn with_money(mut self, money: f64) -> Self {
        self.money = money;
        self
    }
}
