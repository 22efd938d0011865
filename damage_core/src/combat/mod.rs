//! Combat facade - high-level damage queries
//!
//! Thin entry points that tie the registry and the mitigation pipeline
//! together. Callers hand in two snapshots and get a number (or a
//! lookup error) back; nothing in here holds state.

mod items;
mod summoner;

pub use items::item_damage;
pub use summoner::summoner_spell_damage;

use crate::error::DamageError;
use crate::mitigation::calculate_damage;
use crate::registry::DamageRegistry;
use crate::snapshot::StatSnapshot;
use crate::types::{DamageType, SpellSlot};

/// Raw ability damage at the source's current ability level
///
/// The rank is read off the source snapshot; an unlearned ability is an
/// error, not zero. The result is pre-mitigation - feed it through
/// [`calculate_damage`] with the formula's damage type to get the
/// effective amount.
pub fn spell_damage(
    registry: &DamageRegistry,
    source: &StatSnapshot,
    target: &StatSnapshot,
    slot: SpellSlot,
    stage: u32,
) -> Result<f64, DamageError> {
    let level = source.spell_level(slot);
    if level == 0 {
        return Err(DamageError::SpellNotLearned { slot });
    }

    let formula = registry.spell(&source.champion, slot, stage)?;
    formula.damage(source, target, (level - 1) as usize)
}

/// Effective ability damage: formula evaluation plus mitigation
pub fn mitigated_spell_damage(
    registry: &DamageRegistry,
    source: &StatSnapshot,
    target: &StatSnapshot,
    slot: SpellSlot,
    stage: u32,
) -> Result<f64, DamageError> {
    let formula = registry.spell(&source.champion, slot, stage)?;
    let raw = spell_damage(registry, source, target, slot, stage)?;
    Ok(calculate_damage(source, target, formula.damage_type, raw))
}

/// Effective basic-attack damage
///
/// Total attack damage through physical mitigation; the flat base
/// adjustment on basic attacks (Butcher, Block, Tough Skin,
/// Unyielding) is the flat-addend stage of that pipeline. With
/// `include_passive` set, every active on-hit passive rule for the
/// source's champion is mitigated by its own damage type and added.
pub fn auto_attack_damage(
    registry: &DamageRegistry,
    source: &StatSnapshot,
    target: &StatSnapshot,
    include_passive: bool,
) -> f64 {
    let mut total = calculate_damage(
        source,
        target,
        DamageType::Physical,
        source.total_attack_damage(),
    );

    if include_passive {
        for rule in registry.passives(&source.champion) {
            if rule.is_active(source, target) {
                let raw = rule.damage(source, target);
                total += calculate_damage(source, target, rule.damage_type, raw);
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{mastery_id, MasteryPage, UnitCategory};

    #[test]
    fn test_spell_damage_requires_learned_ability() {
        let registry = DamageRegistry::build();
        let source = StatSnapshot::hero("Ashe").with_attack_damage(61.0, 0.0);
        let target = StatSnapshot::hero("Garen");

        let err = spell_damage(&registry, &source, &target, SpellSlot::W, 0).unwrap_err();
        assert_eq!(err, DamageError::SpellNotLearned { slot: SpellSlot::W });
    }

    #[test]
    fn test_spell_damage_reads_rank_off_snapshot() {
        let registry = DamageRegistry::build();
        let source = StatSnapshot::hero("Ashe")
            .with_attack_damage(61.0, 0.0)
            .with_spell_level(SpellSlot::W, 1);
        let target = StatSnapshot::hero("Garen");

        // Rank 1: 40 base plus total attack damage
        let raw = spell_damage(&registry, &source, &target, SpellSlot::W, 0).unwrap();
        assert!((raw - 101.0).abs() < 1e-9);
    }

    #[test]
    fn test_mitigated_spell_damage_applies_armor() {
        let registry = DamageRegistry::build();
        let source = StatSnapshot::hero("Ashe")
            .with_attack_damage(61.0, 0.0)
            .with_spell_level(SpellSlot::W, 1);
        let target = StatSnapshot::hero("Garen").with_resists(100.0, 0.0);

        let dealt =
            mitigated_spell_damage(&registry, &source, &target, SpellSlot::W, 0).unwrap();
        assert!((dealt - 50.5).abs() < 1e-9);
    }

    #[test]
    fn test_auto_attack_without_passives() {
        let registry = DamageRegistry::build();
        let source = StatSnapshot::hero("Ashe").with_attack_damage(80.0, 20.0);
        let target = StatSnapshot::hero("Garen").with_resists(100.0, 0.0);

        let dealt = auto_attack_damage(&registry, &source, &target, false);
        assert!((dealt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_auto_attack_carries_flat_base_adjustment() {
        let registry = DamageRegistry::build();

        // Butcher: +2 on basic attacks against minions, after scaling
        let farmer = StatSnapshot::hero("Nasus")
            .with_attack_damage(60.0, 0.0)
            .with_mastery(MasteryPage::Offense, mastery_id::BUTCHER, 1);
        let minion = StatSnapshot::unit(UnitCategory::Minion);
        let dealt = auto_attack_damage(&registry, &farmer, &minion, false);
        assert!((dealt - 62.0).abs() < 1e-9);

        // Block: -1 per point on attacks from an enemy hero
        let attacker = StatSnapshot::hero("Zed").with_attack_damage(60.0, 0.0);
        let blocker = StatSnapshot::hero("Malphite")
            .with_mastery(MasteryPage::Defense, mastery_id::BLOCK, 1);
        let dealt = auto_attack_damage(&registry, &attacker, &blocker, false);
        assert!((dealt - 59.0).abs() < 1e-9);
    }

    #[test]
    fn test_auto_attack_folds_in_active_passives() {
        let registry = DamageRegistry::build();
        // Teemo with E learned: attack plus mitigated on-hit poison
        let source = StatSnapshot::hero("Teemo")
            .with_attack_damage(50.0, 0.0)
            .with_ability_power(0.0)
            .with_spell_level(SpellSlot::E, 1);
        let target = StatSnapshot::hero("Garen");

        let plain = auto_attack_damage(&registry, &source, &target, false);
        let with_passive = auto_attack_damage(&registry, &source, &target, true);

        assert!((plain - 50.0).abs() < 1e-9);
        // Toxic Shot rank 1 adds 10 magic vs zero spell block
        assert!((with_passive - 60.0).abs() < 1e-9);
    }
}
