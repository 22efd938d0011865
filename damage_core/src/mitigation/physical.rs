//! Physical damage mitigation - armor, penetration, passive modifiers

use super::passives::{passive_flat_modifier, passive_percent_modifier};
use crate::config::CombatConstants;
use crate::snapshot::StatSnapshot;
use crate::types::UnitCategory;

/// Calculate effective physical damage
///
/// Pipeline order:
/// 1. Resolve penetration, with per-category overrides (minions get no
///    penetration at all, turrets get the Penetrating Bullets value)
/// 2. Armor scaling with the negative-armor amplification branch and
///    the over-penetration clamp
/// 3. Passive percent modifiers multiplied into the factor
/// 4. Passive flat addend applied after scaling
pub fn calculate_physical_damage(
    source: &StatSnapshot,
    target: &StatSnapshot,
    amount: f64,
    constants: &CombatConstants,
) -> f64 {
    // Step 1: Penetration, with source-category overrides
    let (percent_pen, flat_pen) = match source.category {
        UnitCategory::Minion | UnitCategory::SiegeMinion | UnitCategory::NeutralMinion => {
            (1.0, 0.0)
        }
        UnitCategory::Turret => (constants.turret.percent_penetration, 0.0),
        _ => (
            source.percent_armor_penetration,
            source.flat_armor_penetration,
        ),
    };

    // Step 2: Armor scaling
    let armor = target.armor;
    let mut factor = if armor < 0.0 {
        // Negative armor amplifies damage, asymptotically bounded by 2x
        2.0 - 100.0 / (100.0 - armor)
    } else if (armor * percent_pen) - flat_pen < 0.0 {
        // Penetration cannot push effective armor below zero
        1.0
    } else {
        100.0 / (100.0 + (armor * percent_pen) - flat_pen)
    };

    // Step 3: Passive percent modifiers
    factor *= passive_percent_modifier(source, target, constants);

    // Step 4: Scale and add the flat passive term
    factor * amount + passive_flat_modifier(source, target, constants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StatSnapshot;
    use crate::types::UnitCategory;

    fn constants() -> CombatConstants {
        CombatConstants::default()
    }

    #[test]
    fn test_zero_armor_full_damage() {
        let source = StatSnapshot::hero("Graves");
        let target = StatSnapshot::hero("Sona");

        let dealt = calculate_physical_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hundred_armor_halves_damage() {
        let source = StatSnapshot::hero("Graves");
        let target = StatSnapshot::hero("Malphite").with_resists(100.0, 0.0);

        let dealt = calculate_physical_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_armor_amplifies() {
        let source = StatSnapshot::hero("Darius");
        let target = StatSnapshot::hero("Teemo").with_resists(-50.0, 0.0);

        // k = 2 - 100/150 = 1.3333...
        let dealt = calculate_physical_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 133.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn test_over_penetration_clamps_at_full_damage() {
        let mut source = StatSnapshot::hero("Talon");
        source.flat_armor_penetration = 50.0;
        let target = StatSnapshot::hero("Sona").with_resists(20.0, 0.0);

        // 20 armor - 50 flat pen would go negative; clamp at k = 1
        let dealt = calculate_physical_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_then_flat_penetration() {
        let mut source = StatSnapshot::hero("Talon");
        source.percent_armor_penetration = 0.65;
        source.flat_armor_penetration = 10.0;
        let target = StatSnapshot::hero("Malphite").with_resists(200.0, 0.0);

        // effective armor = 200 * 0.65 - 10 = 120 -> k = 100/220
        let dealt = calculate_physical_damage(&source, &target, 220.0, &constants());
        assert!((dealt - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_minion_source_ignores_own_penetration_stats() {
        let mut source = StatSnapshot::unit(UnitCategory::Minion);
        source.flat_armor_penetration = 100.0;
        source.percent_armor_penetration = 0.5;
        let target = StatSnapshot::hero("Garen").with_resists(100.0, 0.0);

        // Minion override: percent pen 1.0, flat pen 0 -> k = 0.5
        let dealt = calculate_physical_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_turret_penetrating_bullets() {
        let source = StatSnapshot::unit(UnitCategory::Turret);
        let target = StatSnapshot::unit(UnitCategory::Other).with_resists(100.0, 0.0);

        // Turret override: 0.7 percent pen -> effective armor 70 -> k = 100/170
        let dealt = calculate_physical_damage(&source, &target, 170.0, &constants());
        assert!((dealt - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_factor_decreasing_in_armor() {
        let source = StatSnapshot::hero("Graves");
        let mut last = f64::INFINITY;
        for armor in [0.0, 25.0, 50.0, 100.0, 200.0, 400.0] {
            let target = StatSnapshot::hero("Sona").with_resists(armor, 0.0);
            let dealt = calculate_physical_damage(&source, &target, 100.0, &constants());
            assert!(dealt < last, "damage must fall as armor rises");
            last = dealt;
        }
    }
}
