//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::snapshot::StatSnapshot;
pub use crate::types::{
    CombatType, DamageType, ItemId, Mastery, MasteryPage, SpellSlot, SummonerSpell, Team,
    UnitCategory,
};

// Registry
pub use crate::registry::{AbilityFormula, DamageRegistry, PassiveDamageRule};

// Mitigation pipeline
pub use crate::mitigation::{calculate_damage, calculate_damage_with_constants};

// Combat facade
pub use crate::combat::{
    auto_attack_damage, item_damage, mitigated_spell_damage, spell_damage, summoner_spell_damage,
};

// Errors and config
pub use crate::config::CombatConstants;
pub use crate::error::DamageError;
