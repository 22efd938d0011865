//! Champion formulas: Olaf through Ryze

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical, True};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Olaf")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 1.0 * s.bonus_attack_damage())
        })
        // Reckless swing costs health, deals true damage
        .spell(E, 0, True, |_s, _t, r| {
            rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)
        });

    table
        .champion("Orianna")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.5 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.7 * s.ability_power())
        })
        // Ball transit damage
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.3 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 225.0, 300.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Pantheon")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[75.0, 115.0, 155.0, 195.0, 235.0], r)? + 1.4 * s.bonus_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)? + 1.0 * s.ability_power())
        })
        // Per sweep
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[13.0, 23.0, 33.0, 43.0, 53.0], r)? + 0.6 * s.bonus_attack_damage())
        })
        // Epicenter of the drop
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[400.0, 700.0, 1000.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Poppy")
        // Includes a chunk of the target's max health
        .spell(Q, 0, Magical, |s, t, r| {
            Ok(rank_value(&[40.0, 60.0, 80.0, 100.0, 120.0], r)?
                + 0.08 * t.max_health
                + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)? + 0.4 * s.ability_power())
        });

    table
        .champion("Quinn")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.7 * s.bonus_attack_damage())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[40.0, 70.0, 100.0, 130.0, 160.0], r)? + 0.2 * s.bonus_attack_damage())
        })
        // Skystrike execute sweep
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[100.0, 150.0, 200.0], r)? + 0.5 * s.bonus_attack_damage())
        });

    table
        .champion("Rammus")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 150.0, 200.0, 250.0, 300.0], r)? + 1.0 * s.ability_power())
        })
        // Tremors, per second
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[65.0, 130.0, 195.0], r)? + 0.3 * s.ability_power())
        });

    table
        .champion("RekSai")
        // Unburrowed: bonus on the empowered attacks
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[15.0, 25.0, 35.0, 45.0, 55.0], r)? + 0.2 * s.bonus_attack_damage())
        })
        // Burrowed prey seeker
        .spell(Q, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.7 * s.ability_power())
        })
        // Furious bite doubles at full fury
        .spell(E, 0, Physical, |s, _t, r| {
            let base =
                rank_value(&[80.0, 100.0, 120.0, 140.0, 160.0], r)? + 0.85 * s.bonus_attack_damage();
            Ok(if s.buff_stacks("reksaifury") >= 100 {
                base * 2.0
            } else {
                base
            })
        });

    table
        .champion("Renekton")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.8 * s.bonus_attack_damage())
        })
        // Empowered cull
        .spell(Q, 1, Physical, |s, _t, r| {
            Ok(1.5
                * (rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)?
                    + 0.8 * s.bonus_attack_damage()))
        })
        // Both strikes of ruthless predator
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[10.0, 30.0, 50.0, 70.0, 90.0], r)? + 1.5 * s.total_attack_damage())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 60.0, 90.0, 120.0, 150.0], r)? + 0.9 * s.bonus_attack_damage())
        })
        // Dominus, per second
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 70.0, 100.0], r)? + 0.1 * s.ability_power())
        });

    table
        .champion("Rengar")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 60.0, 90.0, 120.0, 150.0], r)? + 1.0 * s.total_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 80.0, 110.0, 140.0, 170.0], r)? + 0.8 * s.ability_power())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[50.0, 100.0, 150.0, 200.0, 250.0], r)? + 0.7 * s.bonus_attack_damage())
        });

    table
        .champion("Riven")
        // Per slash
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[10.0, 30.0, 50.0, 70.0, 90.0], r)? + 0.5 * s.total_attack_damage())
        })
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[50.0, 80.0, 110.0, 140.0, 170.0], r)? + 1.0 * s.bonus_attack_damage())
        })
        // Wind slash ramps with target missing health, capped at triple
        .spell(R, 0, Physical, |s, t, r| {
            let base = rank_value(&[80.0, 120.0, 160.0], r)? + 0.6 * s.bonus_attack_damage();
            let amp = (1.0 + 2.67 * (1.0 - t.health_percent())).min(3.0);
            Ok(base * amp)
        });

    table
        .champion("Rumble")
        // Flamespitter, full duration
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 135.0, 195.0, 255.0, 315.0], r)? + 1.0 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[45.0, 70.0, 95.0, 120.0, 145.0], r)? + 0.4 * s.ability_power())
        })
        // Burning trail, per second
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[130.0, 185.0, 240.0], r)? + 0.3 * s.ability_power())
        });

    table
        .champion("Ryze")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)?
                + 0.45 * s.ability_power()
                + 0.065 * s.max_mana)
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 100.0, 120.0, 140.0, 160.0], r)?
                + 0.4 * s.ability_power()
                + 0.045 * s.max_mana)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[36.0, 52.0, 68.0, 84.0, 100.0], r)?
                + 0.35 * s.ability_power()
                + 0.01 * s.max_mana)
        });
}
