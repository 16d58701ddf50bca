//! Warrior service and its builder.
//!
//! [`WarriorService`] is the operation surface the HTTP layer calls. It is
//! built once at startup with its store and random source injected, then
//! shared behind an `Arc`.

use std::env;
use std::sync::Arc;

use game_core::{RngOracle, Warrior, WarriorDraft, WarriorId, WarriorInfo, WarriorPatch};

use crate::api::{Result, RuntimeError};
use crate::oracle::rng_from_seed;
use crate::repository::{IdPolicy, InMemoryWarriorRepo, WarriorRepository};

/// Runtime configuration
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    /// How new warriors get their ids.
    pub id_policy: IdPolicy,
    /// Seed for reproducible critical rolls; `None` uses the thread-local generator.
    pub rng_seed: Option<u64>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARRIOR_ID_POLICY` - `client` or `sequential` (default: client)
    /// - `WARRIOR_RNG_SEED` - Seed for critical rolls (default: unseeded)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(policy) = read_env::<IdPolicy>("WARRIOR_ID_POLICY") {
            config.id_policy = policy;
        } else if let Ok(raw) = env::var("WARRIOR_ID_POLICY") {
            tracing::warn!(value = %raw, "Unknown WARRIOR_ID_POLICY, using {}", config.id_policy);
        }

        config.rng_seed = parse_seed(env::var("WARRIOR_RNG_SEED").ok());

        config
    }
}

/// Parse a `WARRIOR_RNG_SEED` value; an invalid seed warns and leaves rolls unseeded.
fn parse_seed(raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            tracing::warn!(value = %raw, "Invalid WARRIOR_RNG_SEED, using unseeded rolls");
            None
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Operations over the warrior store, with derived-attribute queries.
pub struct WarriorService {
    repository: Arc<dyn WarriorRepository>,
    rng: Arc<dyn RngOracle>,
}

impl WarriorService {
    /// Create a new service builder
    pub fn builder() -> WarriorServiceBuilder {
        WarriorServiceBuilder::new()
    }

    /// Names of all warriors, in insertion order.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.repository.names()?)
    }

    /// All warriors, in insertion order.
    pub fn list(&self) -> Result<Vec<Warrior>> {
        Ok(self.repository.list()?)
    }

    pub fn create(&self, draft: WarriorDraft) -> Result<Warrior> {
        let warrior = self.repository.create(draft)?;
        tracing::info!(id = %warrior.id, name = %warrior.name, "Created warrior");
        Ok(warrior)
    }

    pub fn get(&self, id: WarriorId) -> Result<Warrior> {
        self.repository.get(id)?.ok_or_else(|| not_found(id))
    }

    /// Shallow-merge `patch` onto the warrior; the id never changes.
    pub fn update(&self, id: WarriorId, patch: WarriorPatch) -> Result<Warrior> {
        let warrior = self.repository.update(id, patch)?.ok_or_else(|| not_found(id))?;
        tracing::info!(id = %warrior.id, "Updated warrior");
        Ok(warrior)
    }

    pub fn delete(&self, id: WarriorId) -> Result<Warrior> {
        let warrior = self.repository.delete(id)?.ok_or_else(|| not_found(id))?;
        tracing::info!(id = %warrior.id, name = %warrior.name, "Deleted warrior");
        Ok(warrior)
    }

    pub fn is_low_on_health(&self, id: WarriorId) -> Result<bool> {
        Ok(self.get(id)?.is_low_on_health())
    }

    pub fn can_afford_purchase(&self, id: WarriorId, cost: f64) -> Result<bool> {
        Ok(self.get(id)?.can_afford_purchase(cost))
    }

    pub fn is_special_ability_eligible(&self, id: WarriorId) -> Result<bool> {
        Ok(self.get(id)?.is_special_ability_eligible())
    }

    /// Rolls for a critical hit on every call.
    pub fn total_damage(&self, id: WarriorId) -> Result<f64> {
        Ok(self.get(id)?.calculate_total_damage(self.rng.as_ref()))
    }

    /// Identity plus every derived attribute, evaluated against `purchase_cost`.
    pub fn info(&self, id: WarriorId, purchase_cost: f64) -> Result<WarriorInfo> {
        let warrior = self.get(id)?;
        Ok(WarriorInfo::collect(&warrior, purchase_cost, self.rng.as_ref()))
    }
}

fn not_found(id: WarriorId) -> RuntimeError {
    tracing::debug!(%id, "Warrior not found");
    RuntimeError::WarriorNotFound(id)
}

/// Builder for [`WarriorService`].
///
/// Unset parts fall back to an in-memory store using the configured id
/// policy and a random source derived from the configured seed.
pub struct WarriorServiceBuilder {
    config: RuntimeConfig,
    repository: Option<Arc<dyn WarriorRepository>>,
    rng: Option<Arc<dyn RngOracle>>,
}

impl WarriorServiceBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific store instead of a fresh in-memory one.
    pub fn repository(mut self, repository: impl WarriorRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Use a specific random source for critical rolls.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Arc::new(rng));
        self
    }

    pub fn build(self) -> WarriorService {
        let Self {
            config,
            repository,
            rng,
        } = self;

        let repository = repository.unwrap_or_else(|| {
            tracing::debug!(policy = %config.id_policy, "Using in-memory warrior store");
            Arc::new(InMemoryWarriorRepo::new(config.id_policy))
        });
        let rng = rng.unwrap_or_else(|| rng_from_seed(config.rng_seed));

        WarriorService { repository, rng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::FixedRoll;

    fn service(roll: FixedRoll) -> WarriorService {
        WarriorService::builder().rng(roll).build()
    }

    fn scenario_draft() -> WarriorDraft {
        WarriorDraft {
            name: Some("A".into()),
            strength: Some(8),
            agility: Some(6),
            intellect: Some(4),
            health: Some(100),
            attack: Some(10.0),
            critical_chance: Some(0.0),
            critical_factor: Some(2.0),
            money: Some(50.0),
            ..WarriorDraft::default()
        }
    }

    #[test]
    fn unknown_id_is_not_found_everywhere() {
        let service = service(FixedRoll::NEVER);
        let id = WarriorId(404);

        let results = [
            service.get(id).map(|_| ()),
            service.update(id, WarriorPatch::default()).map(|_| ()),
            service.delete(id).map(|_| ()),
            service.is_low_on_health(id).map(|_| ()),
            service.can_afford_purchase(id, 1.0).map(|_| ()),
            service.is_special_ability_eligible(id).map(|_| ()),
            service.total_damage(id).map(|_| ()),
            service.info(id, 0.0).map(|_| ()),
        ];

        for result in results {
            assert!(matches!(result, Err(RuntimeError::WarriorNotFound(WarriorId(404)))));
        }
    }

    #[test]
    fn derived_queries_follow_the_record() {
        let service = service(FixedRoll::NEVER);
        let warrior = service.create(scenario_draft()).unwrap();

        assert!(!service.is_low_on_health(warrior.id).unwrap());
        assert!(service.can_afford_purchase(warrior.id, 50.0).unwrap());
        assert!(!service.can_afford_purchase(warrior.id, 51.0).unwrap());
        assert!(service.is_special_ability_eligible(warrior.id).unwrap());
        assert_eq!(service.total_damage(warrior.id).unwrap(), 10.0);
    }

    #[test]
    fn injected_rng_forces_critical_damage() {
        let service = service(FixedRoll::ALWAYS);
        let draft = WarriorDraft {
            critical_chance: Some(0.5),
            ..scenario_draft()
        };
        let warrior = service.create(draft).unwrap();

        assert_eq!(service.total_damage(warrior.id).unwrap(), 20.0);
        let info = service.info(warrior.id, 10.0).unwrap();
        assert!(info.is_critical_hit);
        assert_eq!(info.total_damage, 20.0);
    }

    #[test]
    fn builder_uses_configured_policy() {
        let config = RuntimeConfig {
            id_policy: IdPolicy::Sequential,
            rng_seed: Some(1),
        };
        let service = WarriorService::builder().config(config).build();

        let draft = WarriorDraft {
            id: Some(WarriorId(99)),
            ..scenario_draft()
        };
        assert_eq!(service.create(draft).unwrap().id, WarriorId(1));
    }

    #[test]
    fn invalid_seed_falls_back_to_unseeded() {
        assert_eq!(parse_seed(Some("42".to_string())), Some(42));
        assert_eq!(parse_seed(Some(" 7 ".to_string())), Some(7));
        assert_eq!(parse_seed(Some("not-a-seed".to_string())), None);
        assert_eq!(parse_seed(Some("-1".to_string())), None);
        assert_eq!(parse_seed(None), None);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let service = service(FixedRoll::NEVER);
        let warrior = service.create(scenario_draft()).unwrap();

        assert_eq!(service.delete(warrior.id).unwrap(), warrior);
        assert!(matches!(
            service.get(warrior.id),
            Err(RuntimeError::WarriorNotFound(_))
        ));
    }
}
