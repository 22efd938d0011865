//! On-hit passive damage rules
//!
//! These are the champion passives that add damage to a basic attack.
//! Each rule carries an activation predicate over the two snapshots
//! (buff stacks, learned spells) and a damage getter. Rank-dependent
//! passives read the owning spell's learned level off the source
//! snapshot rather than taking a rank argument.

use super::ChampionTable;
use crate::types::DamageType::{Magical, True};
use crate::types::SpellSlot;

pub(super) fn register_all(table: &mut ChampionTable) {
    // Hemorrhage: bleed tick per stack already on the target
    table.passive(
        "Darius",
        "Hemorrhage",
        Magical,
        |_s, t| t.buff_stacks("dariushemo") > 0,
        |s, t| (9.0 + 0.3 * s.bonus_attack_damage()) * t.buff_stacks("dariushemo") as f64,
    );

    // Concussive Blows: detonates on the fourth hit
    table.passive(
        "Braum",
        "Concussive Blows",
        Magical,
        |_s, t| t.buff_stacks("braumconcussive") >= 3,
        |s, _t| 32.0 + 8.0 * (s.level.saturating_sub(1)) as f64,
    );

    // Deadly Venom: true damage per second per stack, tier grows with level
    table.passive(
        "Twitch",
        "Deadly Venom",
        True,
        |_s, t| t.buff_stacks("twitchdeadlyvenom") > 0,
        |s, t| {
            let per_stack = ((s.level.saturating_sub(1)) / 4 + 1) as f64;
            per_stack * t.buff_stacks("twitchdeadlyvenom") as f64
        },
    );

    // Toxic Shot: on-hit poison tied to the learned E rank
    table.passive(
        "Teemo",
        "Toxic Shot",
        Magical,
        |s, _t| s.spell_level(SpellSlot::E) > 0,
        |s, _t| 10.0 * s.spell_level(SpellSlot::E) as f64 + 0.3 * s.ability_power(),
    );

    // Ki Strike: every few seconds the next attack hits harder
    table.passive(
        "Shen",
        "Ki Strike",
        Magical,
        |s, _t| s.has_buff("shenkistrike"),
        |s, _t| 4.0 + 4.0 * s.level as f64 + 0.04 * s.max_health,
    );

    // Short Fuse: periodic bonus magic damage on the next attack
    table.passive(
        "Ziggs",
        "Short Fuse",
        Magical,
        |s, _t| s.has_buff("ziggsshortfuse"),
        |s, _t| 16.0 + 4.0 * s.level as f64 + 0.35 * s.ability_power(),
    );
}

#[cfg(test)]
mod tests {
    use crate::registry::DamageRegistry;
    use crate::snapshot::StatSnapshot;
    use crate::types::{DamageType, SpellSlot};

    #[test]
    fn test_hemorrhage_scales_with_stacks() {
        let registry = DamageRegistry::build();
        let source = StatSnapshot::hero("Darius").with_attack_damage(100.0, 50.0);
        let clean = StatSnapshot::hero("Ashe");
        let bleeding = StatSnapshot::hero("Ashe").with_buff("dariushemo", 4);

        let rules = registry.passives("Darius");
        let rule = rules.iter().find(|r| r.name == "Hemorrhage").unwrap();

        assert!(!rule.is_active(&source, &clean));
        assert!(rule.is_active(&source, &bleeding));
        // 4 stacks of (9 + 0.3 * 50)
        assert_eq!(rule.damage(&source, &bleeding), 96.0);
    }

    #[test]
    fn test_toxic_shot_requires_learned_spell() {
        let registry = DamageRegistry::build();
        let unskilled = StatSnapshot::hero("Teemo");
        let skilled = StatSnapshot::hero("Teemo")
            .with_ability_power(100.0)
            .with_spell_level(SpellSlot::E, 3);
        let target = StatSnapshot::hero("Garen");

        let rule = registry
            .passives("Teemo")
            .iter()
            .find(|r| r.name == "Toxic Shot")
            .unwrap();

        assert!(!rule.is_active(&unskilled, &target));
        assert!(rule.is_active(&skilled, &target));
        assert_eq!(rule.damage(&skilled, &target), 60.0);
    }

    #[test]
    fn test_deadly_venom_is_true_damage() {
        let registry = DamageRegistry::build();
        let rule = registry
            .passives("Twitch")
            .iter()
            .find(|r| r.name == "Deadly Venom")
            .unwrap();
        assert_eq!(rule.damage_type, DamageType::True);

        let source = StatSnapshot::hero("Twitch").with_level(9);
        let target = StatSnapshot::hero("Ashe").with_buff("twitchdeadlyvenom", 6);
        // Level 9 is the third tier: 3 per stack
        assert_eq!(rule.damage(&source, &target), 18.0);
    }
}
