//! Error taxonomy for registry lookups and formula evaluation

use crate::types::{ItemId, SpellSlot};
use thiserror::Error;

/// Caller-visible failure from a damage query
///
/// Lookup misses are surfaced as errors rather than coerced to zero:
/// "no damage" and "lookup failed" are different answers and the
/// caller must be able to tell them apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DamageError {
    #[error("champion '{champion}' is not in the damage registry")]
    ChampionNotFound { champion: String },

    #[error("no formula for {champion} {slot:?} stage {stage}")]
    SpellNotFound {
        champion: String,
        slot: SpellSlot,
        stage: u32,
    },

    #[error("{slot:?} has no points (ability level 0)")]
    SpellNotLearned { slot: SpellSlot },

    #[error("rank {rank} out of range (formula has {max} ranks)")]
    RankOutOfRange { rank: usize, max: usize },

    #[error("item {item:?} is not in the item damage table")]
    ItemNotFound { item: ItemId },
}
