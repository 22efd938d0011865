//! Summoner spell damage

use crate::snapshot::StatSnapshot;
use crate::types::{SummonerSpell, UnitCategory};

/// Ignite burn duration in seconds
const IGNITE_DURATION: f64 = 5.0;

/// Smite damage vs monsters, indexed by source level (1-18)
const SMITE_BY_LEVEL: [f64; 18] = [
    390.0, 410.0, 430.0, 450.0, 480.0, 510.0, 540.0, 570.0, 600.0, 640.0, 680.0, 720.0, 760.0,
    800.0, 850.0, 900.0, 950.0, 1000.0,
];

/// Total damage of a summoner spell cast
///
/// Summoner spell damage ignores resistances, so nothing here goes
/// through the mitigation pipeline.
pub fn summoner_spell_damage(
    source: &StatSnapshot,
    target: &StatSnapshot,
    spell: SummonerSpell,
) -> f64 {
    match spell {
        // Ignite halves the target's regeneration while it burns; the
        // remaining half still ticks against the total.
        SummonerSpell::Ignite => {
            let burn = 50.0 + 20.0 * source.level as f64;
            let regained = 0.5 * target.health_regen * IGNITE_DURATION;
            (burn - regained).max(0.0)
        }
        SummonerSpell::Smite => smite_damage(source, target),
    }
}

fn smite_damage(source: &StatSnapshot, target: &StatSnapshot) -> f64 {
    let level = source.level.clamp(1, 18) as usize;

    if target.category == UnitCategory::NeutralMinion {
        return SMITE_BY_LEVEL[level - 1];
    }

    // Hero damage only exists on the upgraded smites, carried as buffs
    if target.is_hero() {
        if source.has_buff("smite_speed") {
            // Chilling Smite bolt
            return 20.0 + 8.0 * level as f64;
        }
        if source.has_buff("smite_duel") {
            // Challenging Smite burn total
            return 54.0 + 6.0 * level as f64;
        }
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignite_scales_with_level_and_regen() {
        let source = StatSnapshot::hero("Annie").with_level(6);
        let mut target = StatSnapshot::hero("Garen");

        assert!((summoner_spell_damage(&source, &target, SummonerSpell::Ignite) - 170.0).abs()
            < 1e-9);

        // 10 hp/s regen: half of it ticks through 5 seconds of burn
        target.health_regen = 10.0;
        assert!((summoner_spell_damage(&source, &target, SummonerSpell::Ignite) - 145.0).abs()
            < 1e-9);
    }

    #[test]
    fn test_ignite_never_negative() {
        let source = StatSnapshot::hero("Annie").with_level(1);
        let mut target = StatSnapshot::hero("DrMundo");
        target.health_regen = 100.0;

        assert_eq!(summoner_spell_damage(&source, &target, SummonerSpell::Ignite), 0.0);
    }

    #[test]
    fn test_smite_vs_monster_uses_level_table() {
        let source = StatSnapshot::hero("LeeSin").with_level(9);
        let monster = StatSnapshot::unit(UnitCategory::NeutralMinion);

        assert_eq!(summoner_spell_damage(&source, &monster, SummonerSpell::Smite), 600.0);
    }

    #[test]
    fn test_smite_vs_hero_requires_upgrade() {
        let plain = StatSnapshot::hero("LeeSin").with_level(10);
        let chilling = StatSnapshot::hero("LeeSin")
            .with_level(10)
            .with_buff("smite_speed", 1);
        let target = StatSnapshot::hero("Riven");

        assert_eq!(summoner_spell_damage(&plain, &target, SummonerSpell::Smite), 0.0);
        assert_eq!(
            summoner_spell_damage(&chilling, &target, SummonerSpell::Smite),
            100.0
        );
    }
}
