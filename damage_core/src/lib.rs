//! damage_core - Champion damage calculation library
//!
//! This library provides:
//! - StatSnapshot: Combat stats for one unit at one instant
//! - DamageRegistry: Per-champion, per-slot, per-stage damage formulas
//! - Mitigation pipeline: Raw damage to effective damage through
//!   resistances, penetration, and mastery passives
//! - Combat facade: ability, basic-attack, item, and summoner spell
//!   damage queries

pub mod combat;
pub mod config;
pub mod error;
pub mod mitigation;
pub mod prelude;
pub mod registry;
pub mod snapshot;
pub mod types;

// Re-export core types for convenience
pub use combat::{auto_attack_damage, item_damage, mitigated_spell_damage, spell_damage, summoner_spell_damage};
pub use config::{CombatConstants, ConfigError};
pub use error::DamageError;
pub use mitigation::{calculate_damage, calculate_damage_with_constants};
pub use registry::{AbilityFormula, DamageRegistry, PassiveDamageRule};
pub use snapshot::StatSnapshot;
pub use types::{
    CombatType, DamageType, ItemId, Mastery, MasteryPage, SpellSlot, SummonerSpell, Team,
    UnitCategory,
};
