//! Magic damage mitigation - spell block, penetration, reduction and
//! amplification percentages

use super::passives::passive_percent_modifier;
use crate::config::CombatConstants;
use crate::snapshot::StatSnapshot;

/// Calculate effective magic damage
///
/// Same scaling structure as physical with spell block in place of
/// armor and no source-category overrides. After the passive percent
/// modifiers the factor is further scaled by the target's magic
/// reduction and magic amplification percentages. Magic damage has no
/// flat passive addend.
pub fn calculate_magic_damage(
    source: &StatSnapshot,
    target: &StatSnapshot,
    amount: f64,
    constants: &CombatConstants,
) -> f64 {
    let percent_pen = source.percent_magic_penetration;
    let flat_pen = source.flat_magic_penetration;

    let spell_block = target.spell_block;
    let mut factor = if spell_block < 0.0 {
        2.0 - 100.0 / (100.0 - spell_block)
    } else if (spell_block * percent_pen) - flat_pen < 0.0 {
        1.0
    } else {
        100.0 / (100.0 + (spell_block * percent_pen) - flat_pen)
    };

    factor *= passive_percent_modifier(source, target, constants);
    factor *= (1.0 - target.percent_magic_reduction) * (1.0 + target.percent_magic_damage_mod);

    factor * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StatSnapshot;

    fn constants() -> CombatConstants {
        CombatConstants::default()
    }

    #[test]
    fn test_zero_spell_block_full_damage() {
        let source = StatSnapshot::hero("Annie");
        let target = StatSnapshot::hero("Ashe");

        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_spell_block_scaling() {
        let source = StatSnapshot::hero("Annie");
        let target = StatSnapshot::hero("Galio").with_resists(0.0, 100.0);

        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_spell_block_amplifies() {
        let source = StatSnapshot::hero("Annie");
        let target = StatSnapshot::hero("Ashe").with_resists(0.0, -100.0);

        // k = 2 - 100/200 = 1.5
        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_magic_penetration_clamp() {
        let mut source = StatSnapshot::hero("Leblanc");
        source.flat_magic_penetration = 40.0;
        let target = StatSnapshot::hero("Ashe").with_resists(0.0, 30.0);

        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_magic_reduction() {
        let source = StatSnapshot::hero("Annie");
        let mut target = StatSnapshot::hero("Garen");
        target.percent_magic_reduction = 0.5;

        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_magic_damage_mod_amplifies() {
        let source = StatSnapshot::hero("Annie");
        let mut target = StatSnapshot::hero("Garen");
        target.percent_magic_damage_mod = 0.1;

        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_reduction_and_amplification_stack() {
        let source = StatSnapshot::hero("Annie");
        let mut target = StatSnapshot::hero("Garen").with_resists(0.0, 100.0);
        target.percent_magic_reduction = 0.2;
        target.percent_magic_damage_mod = 0.1;

        // 0.5 (spell block) * 0.8 * 1.1 = 0.44
        let dealt = calculate_magic_damage(&source, &target, 100.0, &constants());
        assert!((dealt - 44.0).abs() < 1e-9);
    }
}
