//! Formula registry - per-champion ability damage table
//!
//! The registry is built once, eagerly, and is immutable afterwards.
//! Formulas are stored as plain function pointers over stat snapshots,
//! so a built registry is `Send + Sync` and can be shared across any
//! number of readers without locking.

mod champions;
mod passives;

use crate::error::DamageError;
use crate::snapshot::StatSnapshot;
use crate::types::{DamageType, SpellSlot};
use std::collections::HashMap;

/// Raw-damage formula: (source stats, target stats, 0-based rank)
pub type FormulaFn = fn(&StatSnapshot, &StatSnapshot, usize) -> Result<f64, DamageError>;

/// Activation predicate for an on-hit passive rule
pub type PassivePredicateFn = fn(&StatSnapshot, &StatSnapshot) -> bool;

/// Damage getter for an on-hit passive rule
pub type PassiveDamageFn = fn(&StatSnapshot, &StatSnapshot) -> f64;

/// Bounds-checked per-rank table lookup
///
/// Per-rank arrays are 0-indexed; callers holding a 1-based ability
/// level pass `level - 1`. An out-of-range rank is a reported error,
/// never an unchecked index.
pub fn rank_value(table: &[f64], rank: usize) -> Result<f64, DamageError> {
    table.get(rank).copied().ok_or(DamageError::RankOutOfRange {
        rank,
        max: table.len(),
    })
}

/// One damage instance of one ability
///
/// `stage` disambiguates multi-part effects (initial hit vs detonation
/// vs per-tick); stage 0 is the primary damage instance.
#[derive(Debug)]
pub struct AbilityFormula {
    pub slot: SpellSlot,
    pub stage: u32,
    pub damage_type: DamageType,
    damage: FormulaFn,
}

impl AbilityFormula {
    /// Evaluate the raw (pre-mitigation) damage at the given 0-based rank
    pub fn damage(
        &self,
        source: &StatSnapshot,
        target: &StatSnapshot,
        rank: usize,
    ) -> Result<f64, DamageError> {
        (self.damage)(source, target, rank)
    }
}

/// On-hit passive damage rule, keyed off buff presence on the source
pub struct PassiveDamageRule {
    pub name: &'static str,
    pub damage_type: DamageType,
    active: PassivePredicateFn,
    damage: PassiveDamageFn,
}

impl PassiveDamageRule {
    pub fn is_active(&self, source: &StatSnapshot, target: &StatSnapshot) -> bool {
        (self.active)(source, target)
    }

    pub fn damage(&self, source: &StatSnapshot, target: &StatSnapshot) -> f64 {
        (self.damage)(source, target)
    }
}

/// Immutable champion damage registry
///
/// Built once via [`DamageRegistry::build`]; lookups never mutate.
pub struct DamageRegistry {
    spells: HashMap<String, Vec<AbilityFormula>>,
    passives: HashMap<String, Vec<PassiveDamageRule>>,
}

impl DamageRegistry {
    /// Build the full registry for every known champion
    pub fn build() -> Self {
        let mut table = ChampionTable::new();
        champions::register_all(&mut table);
        passives::register_all(&mut table);
        table.finish()
    }

    /// Look up the first formula matching (slot, stage) for a champion
    pub fn spell(
        &self,
        champion: &str,
        slot: SpellSlot,
        stage: u32,
    ) -> Result<&AbilityFormula, DamageError> {
        let entries = self
            .spells
            .get(champion)
            .ok_or_else(|| DamageError::ChampionNotFound {
                champion: champion.to_string(),
            })?;

        entries
            .iter()
            .find(|f| f.slot == slot && f.stage == stage)
            .ok_or_else(|| DamageError::SpellNotFound {
                champion: champion.to_string(),
                slot,
                stage,
            })
    }

    /// On-hit passive rules for a champion (empty slice if none)
    pub fn passives(&self, champion: &str) -> &[PassiveDamageRule] {
        self.passives.get(champion).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of every champion with at least one formula
    pub fn champions(&self) -> impl Iterator<Item = &str> {
        self.spells.keys().map(String::as_str)
    }

    /// All formulas registered for a champion
    pub fn spells_for(&self, champion: &str) -> Result<&[AbilityFormula], DamageError> {
        self.spells
            .get(champion)
            .map(Vec::as_slice)
            .ok_or_else(|| DamageError::ChampionNotFound {
                champion: champion.to_string(),
            })
    }
}

/// Mutable builder the registration tables write into
pub(crate) struct ChampionTable {
    spells: HashMap<String, Vec<AbilityFormula>>,
    passives: HashMap<String, Vec<PassiveDamageRule>>,
}

impl ChampionTable {
    fn new() -> Self {
        ChampionTable {
            spells: HashMap::new(),
            passives: HashMap::new(),
        }
    }

    /// Start (or continue) a champion's registration block
    pub fn champion(&mut self, name: &str) -> ChampionEntry<'_> {
        ChampionEntry {
            entries: self.spells.entry(name.to_string()).or_default(),
        }
    }

    /// Register an on-hit passive rule for a champion
    pub fn passive(
        &mut self,
        champion: &str,
        name: &'static str,
        damage_type: DamageType,
        active: PassivePredicateFn,
        damage: PassiveDamageFn,
    ) {
        self.passives
            .entry(champion.to_string())
            .or_default()
            .push(PassiveDamageRule {
                name,
                damage_type,
                active,
                damage,
            });
    }

    fn finish(self) -> DamageRegistry {
        DamageRegistry {
            spells: self.spells,
            passives: self.passives,
        }
    }
}

/// Registration handle for one champion's formula list
pub(crate) struct ChampionEntry<'a> {
    entries: &'a mut Vec<AbilityFormula>,
}

impl ChampionEntry<'_> {
    /// Register one damage instance; (slot, stage) must be unique per
    /// champion, enforced in debug builds and by the table sweep test
    pub fn spell(
        self,
        slot: SpellSlot,
        stage: u32,
        damage_type: DamageType,
        damage: FormulaFn,
    ) -> Self {
        debug_assert!(
            !self.entries.iter().any(|f| f.slot == slot && f.stage == stage),
            "duplicate (slot, stage) registration: {:?} stage {}",
            slot,
            stage
        );
        self.entries.push(AbilityFormula {
            slot,
            stage,
            damage_type,
            damage,
        });
        self
    }
}
