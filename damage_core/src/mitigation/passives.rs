//! Passive damage modifiers - mastery and unit-matchup adjustments
//!
//! Percent modifiers compose multiplicatively and the order below is
//! part of the contract. Flat modifiers apply to physical damage only,
//! after scaling.

use crate::config::CombatConstants;
use crate::snapshot::StatSnapshot;
use crate::types::{mastery_id, MasteryPage, UnitCategory};

/// Multiplicative percent modifier from passives and unit matchups
///
/// Branch order (locked by regression tests):
/// 1. Turret vs siege minion
/// 2. Turret vs normal minion
/// 3. Turret vs hero (applied on every hit, not only the first -
///    the pipeline is stateless and carries no first-hit tracking)
/// 4. Source hero Double Edged Sword
/// 5. Source hero Havoc
/// 6. Source hero Executioner vs low-health hero
/// 7. Target hero Double Edged Sword (damage taken increase)
pub fn passive_percent_modifier(
    source: &StatSnapshot,
    target: &StatSnapshot,
    constants: &CombatConstants,
) -> f64 {
    let m = &constants.masteries;
    let t = &constants.turret;
    let mut value = 1.0;

    if source.category == UnitCategory::Turret {
        match target.category {
            UnitCategory::SiegeMinion => value *= t.vs_siege_minion,
            UnitCategory::Minion => value *= t.vs_minion,
            UnitCategory::Hero => value *= t.vs_hero,
            _ => {}
        }
    }

    if source.is_hero() {
        if source
            .mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD)
            .is_some()
        {
            value *= if source.is_melee() {
                m.double_edged_sword_melee
            } else {
                m.double_edged_sword_ranged
            };
        }

        if source.mastery(MasteryPage::Offense, mastery_id::HAVOC).is_some() {
            value *= m.havoc;
        }

        if let Some(executioner) = source.mastery(MasteryPage::Offense, mastery_id::EXECUTIONER) {
            if target.is_hero() {
                let threshold = (m.executioner_threshold_base
                    + m.executioner_threshold_per_point * executioner.points as f64)
                    / 100.0;
                if target.health_percent() <= threshold {
                    value *= m.executioner;
                }
            }
        }
    }

    if target.is_hero()
        && target
            .mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD)
            .is_some()
    {
        value *= if target.is_melee() {
            m.double_edged_sword_taken_melee
        } else {
            m.double_edged_sword_taken_ranged
        };
    }

    value
}

/// Flat physical damage addend from passives
///
/// Branches are additive and independent except Unyielding, which is
/// evaluated last and returns immediately once applied - the original
/// behavior, kept as-is.
pub fn passive_flat_modifier(
    source: &StatSnapshot,
    target: &StatSnapshot,
    constants: &CombatConstants,
) -> f64 {
    let m = &constants.masteries;
    let mut value = 0.0;

    if source.is_hero() && target.category.is_minion() {
        if let Some(butcher) = source.mastery(MasteryPage::Offense, mastery_id::BUTCHER) {
            // Single-point mastery; other point counts are foreign data
            if butcher.points == 1 {
                value += m.butcher_bonus;
            }
        }
    }

    if source.is_hero() && target.is_hero() {
        if let Some(block) = target.mastery(MasteryPage::Defense, mastery_id::BLOCK) {
            value -= m.block_per_point * block.points as f64;
        }
    }

    if source.category == UnitCategory::NeutralMinion && target.is_hero() {
        if let Some(tough_skin) = target.mastery(MasteryPage::Defense, mastery_id::TOUGH_SKIN) {
            value -= m.tough_skin_per_point * tough_skin.points as f64;
        }
    }

    if source.is_hero() && target.is_hero() {
        if let Some(unyielding) = target.mastery(MasteryPage::Defense, mastery_id::UNYIELDING) {
            if unyielding.points == 1 {
                let reduction = if source.is_melee() {
                    m.unyielding_melee
                } else {
                    m.unyielding_ranged
                };
                return value - reduction;
            }
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StatSnapshot;
    use crate::types::{CombatType, UnitCategory};

    fn constants() -> CombatConstants {
        CombatConstants::default()
    }

    #[test]
    fn test_turret_vs_siege_minion() {
        let turret = StatSnapshot::unit(UnitCategory::Turret);
        let siege = StatSnapshot::unit(UnitCategory::SiegeMinion);

        let value = passive_percent_modifier(&turret, &siege, &constants());
        assert!((value - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_turret_vs_normal_minion() {
        let turret = StatSnapshot::unit(UnitCategory::Turret);
        let minion = StatSnapshot::unit(UnitCategory::Minion);

        let value = passive_percent_modifier(&turret, &minion, &constants());
        assert!((value - 1.0 / 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_turret_vs_hero_applied_every_hit() {
        let turret = StatSnapshot::unit(UnitCategory::Turret);
        let hero = StatSnapshot::hero("Ashe");

        // No first-hit state exists, so the bonus shows up unconditionally
        for _ in 0..3 {
            let value = passive_percent_modifier(&turret, &hero, &constants());
            assert!((value - 1.05).abs() < 1e-9);
        }
    }

    #[test]
    fn test_turret_vs_neutral_unmodified() {
        let turret = StatSnapshot::unit(UnitCategory::Turret);
        let monster = StatSnapshot::unit(UnitCategory::NeutralMinion);

        let value = passive_percent_modifier(&turret, &monster, &constants());
        assert!((value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_double_edged_sword_melee_vs_ranged_source() {
        let target = StatSnapshot::hero("Sona");

        let melee = StatSnapshot::hero("Riven")
            .with_combat_type(CombatType::Melee)
            .with_mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD, 1);
        let ranged = StatSnapshot::hero("Ashe")
            .with_combat_type(CombatType::Ranged)
            .with_mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD, 1);

        assert!((passive_percent_modifier(&melee, &target, &constants()) - 1.02).abs() < 1e-9);
        assert!((passive_percent_modifier(&ranged, &target, &constants()) - 1.015).abs() < 1e-9);
    }

    #[test]
    fn test_havoc() {
        let source =
            StatSnapshot::hero("Zed").with_mastery(MasteryPage::Offense, mastery_id::HAVOC, 1);
        let target = StatSnapshot::hero("Sona");

        let value = passive_percent_modifier(&source, &target, &constants());
        assert!((value - 1.03).abs() < 1e-9);
    }

    #[test]
    fn test_executioner_threshold() {
        let source = StatSnapshot::hero("Zed").with_mastery(
            MasteryPage::Offense,
            mastery_id::EXECUTIONER,
            3,
        );

        // Threshold with 3 points: (5 + 15*3)% = 50%
        let low = StatSnapshot::hero("Sona").with_health(49.0, 100.0);
        let high = StatSnapshot::hero("Sona").with_health(51.0, 100.0);

        assert!((passive_percent_modifier(&source, &low, &constants()) - 1.05).abs() < 1e-9);
        assert!((passive_percent_modifier(&source, &high, &constants()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_executioner_ignores_minions() {
        let source = StatSnapshot::hero("Zed").with_mastery(
            MasteryPage::Offense,
            mastery_id::EXECUTIONER,
            3,
        );
        let minion = StatSnapshot::unit(UnitCategory::Minion).with_health(1.0, 100.0);

        let value = passive_percent_modifier(&source, &minion, &constants());
        assert!((value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_double_edged_sword_increases_damage_taken() {
        let source = StatSnapshot::hero("Zed");
        let melee_target = StatSnapshot::hero("Riven")
            .with_combat_type(CombatType::Melee)
            .with_mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD, 1);
        let ranged_target = StatSnapshot::hero("Ashe")
            .with_combat_type(CombatType::Ranged)
            .with_mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD, 1);

        assert!(
            (passive_percent_modifier(&source, &melee_target, &constants()) - 1.01).abs() < 1e-9
        );
        assert!(
            (passive_percent_modifier(&source, &ranged_target, &constants()) - 1.015).abs() < 1e-9
        );
    }

    #[test]
    fn test_modifiers_compose_multiplicatively() {
        let source = StatSnapshot::hero("Zed")
            .with_combat_type(CombatType::Melee)
            .with_mastery(MasteryPage::Offense, mastery_id::DOUBLE_EDGED_SWORD, 1)
            .with_mastery(MasteryPage::Offense, mastery_id::HAVOC, 1);
        let target = StatSnapshot::hero("Sona");

        let value = passive_percent_modifier(&source, &target, &constants());
        assert!((value - 1.02 * 1.03).abs() < 1e-9);
    }

    #[test]
    fn test_butcher_vs_minion() {
        let source =
            StatSnapshot::hero("Nasus").with_mastery(MasteryPage::Offense, mastery_id::BUTCHER, 1);
        let minion = StatSnapshot::unit(UnitCategory::Minion);
        let hero = StatSnapshot::hero("Sona");

        assert!((passive_flat_modifier(&source, &minion, &constants()) - 2.0).abs() < 1e-9);
        assert!((passive_flat_modifier(&source, &hero, &constants()) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_butcher_requires_exactly_one_point() {
        let source =
            StatSnapshot::hero("Nasus").with_mastery(MasteryPage::Offense, mastery_id::BUTCHER, 2);
        let minion = StatSnapshot::unit(UnitCategory::Minion);

        let value = passive_flat_modifier(&source, &minion, &constants());
        assert!((value - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_block_reduces_per_point() {
        let source = StatSnapshot::hero("Zed");
        let target =
            StatSnapshot::hero("Malphite").with_mastery(MasteryPage::Defense, mastery_id::BLOCK, 2);

        let value = passive_flat_modifier(&source, &target, &constants());
        assert!((value - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_tough_skin_vs_neutral_only() {
        let monster = StatSnapshot::unit(UnitCategory::NeutralMinion);
        let hero_source = StatSnapshot::hero("Zed");
        let target = StatSnapshot::hero("Lee Sin").with_mastery(
            MasteryPage::Defense,
            mastery_id::TOUGH_SKIN,
            2,
        );

        assert!((passive_flat_modifier(&monster, &target, &constants()) - (-2.0)).abs() < 1e-9);
        assert!((passive_flat_modifier(&hero_source, &target, &constants()) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_unyielding_short_circuits_after_block() {
        let melee_source = StatSnapshot::hero("Riven").with_combat_type(CombatType::Melee);
        let ranged_source = StatSnapshot::hero("Ashe").with_combat_type(CombatType::Ranged);
        let target = StatSnapshot::hero("Malphite")
            .with_mastery(MasteryPage::Defense, mastery_id::BLOCK, 1)
            .with_mastery(MasteryPage::Defense, mastery_id::UNYIELDING, 1);

        // Block (-1) accumulates first, then Unyielding returns
        assert!((passive_flat_modifier(&melee_source, &target, &constants()) - (-3.0)).abs() < 1e-9);
        assert!(
            (passive_flat_modifier(&ranged_source, &target, &constants()) - (-2.0)).abs() < 1e-9
        );
    }

    #[test]
    fn test_unyielding_requires_exactly_one_point() {
        let source = StatSnapshot::hero("Riven").with_combat_type(CombatType::Melee);
        let target = StatSnapshot::hero("Malphite").with_mastery(
            MasteryPage::Defense,
            mastery_id::UNYIELDING,
            2,
        );

        let value = passive_flat_modifier(&source, &target, &constants());
        assert!((value - 0.0).abs() < 1e-9);
    }
}
