//! Mitigation pipeline - Raw damage to effective damage
//!
//! Converts a nominal damage amount plus a damage type into the amount
//! actually removed from the target's health, accounting for
//! resistances, penetration, and passive modifiers. Every step is a
//! pure function of the two stat snapshots.

mod magical;
mod passives;
mod physical;

pub use magical::calculate_magic_damage;
pub use passives::{passive_flat_modifier, passive_percent_modifier};
pub use physical::calculate_physical_damage;

use crate::config::CombatConstants;
use crate::snapshot::StatSnapshot;
use crate::types::DamageType;

/// Mitigation constants
pub mod constants {
    /// Percent armor penetration forced on turret sources
    /// (models "Penetrating Bullets")
    pub const TURRET_PERCENT_PEN: f64 = 0.7;

    /// Turret damage multiplier vs siege minions
    pub const TURRET_VS_SIEGE_MINION: f64 = 0.7;

    /// Turret damage multiplier vs normal lane minions
    pub const TURRET_VS_MINION: f64 = 1.0 / 0.875;

    /// Turret bonus vs champions (applied on every hit, see below)
    pub const TURRET_VS_HERO: f64 = 1.05;

    /// Double Edged Sword damage dealt multiplier (melee / ranged)
    pub const DOUBLE_EDGED_SWORD_MELEE: f64 = 1.02;
    pub const DOUBLE_EDGED_SWORD_RANGED: f64 = 1.015;

    /// Double Edged Sword damage taken multiplier (melee / ranged)
    pub const DOUBLE_EDGED_SWORD_TAKEN_MELEE: f64 = 1.01;
    pub const DOUBLE_EDGED_SWORD_TAKEN_RANGED: f64 = 1.015;

    /// Havoc damage multiplier
    pub const HAVOC: f64 = 1.03;

    /// Executioner damage multiplier vs low-health champions
    pub const EXECUTIONER: f64 = 1.05;

    /// Executioner health threshold: (base + per_point * points) percent
    pub const EXECUTIONER_THRESHOLD_BASE: f64 = 5.0;
    pub const EXECUTIONER_THRESHOLD_PER_POINT: f64 = 15.0;

    /// Butcher flat bonus vs minions
    pub const BUTCHER_BONUS: f64 = 2.0;

    /// Block flat reduction per mastery point
    pub const BLOCK_PER_POINT: f64 = 1.0;

    /// Tough Skin flat reduction per mastery point vs neutral monsters
    pub const TOUGH_SKIN_PER_POINT: f64 = 1.0;

    /// Unyielding flat reduction (melee source / ranged source)
    pub const UNYIELDING_MELEE: f64 = 2.0;
    pub const UNYIELDING_RANGED: f64 = 1.0;
}

/// Calculate effective damage with the default combat constants
///
/// The public single entry point into the pipeline; dispatches on the
/// damage type. True damage passes through unchanged.
pub fn calculate_damage(
    source: &StatSnapshot,
    target: &StatSnapshot,
    damage_type: DamageType,
    amount: f64,
) -> f64 {
    calculate_damage_with_constants(source, target, damage_type, amount, &CombatConstants::default())
}

/// Calculate effective damage with explicit combat constants
/// (for tuned/TOML-loaded constant sets)
pub fn calculate_damage_with_constants(
    source: &StatSnapshot,
    target: &StatSnapshot,
    damage_type: DamageType,
    amount: f64,
    constants: &CombatConstants,
) -> f64 {
    match damage_type {
        DamageType::Physical => calculate_physical_damage(source, target, amount, constants),
        DamageType::Magical => calculate_magic_damage(source, target, amount, constants),
        DamageType::True => amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StatSnapshot;
    use crate::types::UnitCategory;

    #[test]
    fn test_true_damage_bypasses_mitigation() {
        let source = StatSnapshot::hero("Olaf");
        let target = StatSnapshot::hero("Rammus").with_resists(400.0, 250.0);

        let dealt = calculate_damage(&source, &target, DamageType::True, 340.0);
        assert!((dealt - 340.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dispatch_physical_vs_magical() {
        let source = StatSnapshot::hero("Corki");
        let target = StatSnapshot::unit(UnitCategory::Minion).with_resists(100.0, 0.0);

        let physical = calculate_damage(&source, &target, DamageType::Physical, 100.0);
        let magical = calculate_damage(&source, &target, DamageType::Magical, 100.0);

        // 100 armor halves physical; zero spell block leaves magical whole
        assert!((physical - 50.0).abs() < 1e-9);
        assert!((magical - 100.0).abs() < 1e-9);
    }
}
