//! Champion formulas: Darius through Graves

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical, True};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Darius")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 105.0, 140.0, 175.0, 210.0], r)?
                + rank_value(&[0.7, 0.8, 0.9, 1.0, 1.1], r)? * s.total_attack_damage())
        })
        // Empowered attack
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[1.2, 1.4, 1.6, 1.8, 2.0], r)? * s.total_attack_damage())
        })
        // Execute scales with Hemorrhage stacks on the target
        .spell(R, 0, True, |s, t, r| {
            let base = rank_value(&[100.0, 200.0, 300.0], r)? + 0.75 * s.bonus_attack_damage();
            let stacks = t.buff_stacks("dariushemo") as f64;
            Ok(base * (1.0 + 0.2 * stacks))
        });

    table
        .champion("Diana")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 0.7 * s.ability_power())
        })
        // Per orb
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[20.0, 35.0, 50.0, 65.0, 80.0], r)? + 0.2 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 160.0, 220.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("DrMundo")
        // Percent of target current health with a floor
        .spell(Q, 0, Magical, |_s, t, r| {
            let percent = rank_value(&[0.15, 0.175, 0.2, 0.225, 0.25], r)?;
            let floor = rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)?;
            Ok((percent * t.health).max(floor))
        })
        // Burning agony, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[35.0, 50.0, 65.0, 80.0, 95.0], r)? + 0.2 * s.ability_power())
        });

    table
        .champion("Draven")
        // Spinning axe bonus on-attack
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 35.0, 40.0, 45.0, 50.0], r)?
                + rank_value(&[0.65, 0.75, 0.85, 0.95, 1.05], r)? * s.bonus_attack_damage())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[75.0, 110.0, 145.0, 180.0, 215.0], r)? + 0.5 * s.bonus_attack_damage())
        })
        // Per pass
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[175.0, 275.0, 375.0], r)? + 1.1 * s.bonus_attack_damage())
        });

    table
        .champion("Ekko")
        // Outgoing grenade
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 75.0, 90.0, 105.0, 120.0], r)? + 0.3 * s.ability_power())
        })
        // Returning wave
        .spell(Q, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)? + 0.2 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 300.0, 450.0], r)? + 1.5 * s.ability_power())
        });

    table
        .champion("Elise")
        // Human form: percent of current health, AP raises the percent
        .spell(Q, 0, Magical, |s, t, r| {
            let base = rank_value(&[40.0, 75.0, 110.0, 145.0, 180.0], r)?;
            let percent = 0.08 + 0.03 * (s.ability_power() / 100.0);
            Ok(base + percent * t.health)
        })
        // Spider form: percent of missing health instead
        .spell(Q, 1, Magical, |s, t, r| {
            let base = rank_value(&[60.0, 100.0, 140.0, 180.0, 220.0], r)?;
            let percent = 0.08 + 0.03 * (s.ability_power() / 100.0);
            Ok(base + percent * t.missing_health())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 95.0, 135.0, 175.0, 215.0], r)? + 0.8 * s.ability_power())
        });

    table
        .champion("Evelynn")
        // Per spike
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[30.0, 45.0, 60.0, 75.0, 90.0], r)? + 0.4 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 1.0 * s.ability_power())
        })
        // Percent of current health, AP raises the percent
        .spell(R, 0, Magical, |s, t, r| {
            let percent = rank_value(&[0.15, 0.20, 0.25], r)? + 0.01 * (s.ability_power() / 100.0);
            Ok(percent * t.health)
        });

    table
        .champion("Ezreal")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[35.0, 55.0, 75.0, 95.0, 115.0], r)?
                + 1.1 * s.total_attack_damage()
                + 0.4 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.8 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 125.0, 175.0, 225.0, 275.0], r)? + 0.75 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[350.0, 500.0, 650.0], r)?
                + 0.9 * s.ability_power()
                + 1.0 * s.bonus_attack_damage())
        });

    table
        .champion("FiddleSticks")
        // Drain, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.45 * s.ability_power())
        })
        // Per bounce
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[65.0, 85.0, 105.0, 125.0, 145.0], r)? + 0.45 * s.ability_power())
        })
        // Crowstorm, per second
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[125.0, 225.0, 325.0], r)? + 0.45 * s.ability_power())
        });

    table
        .champion("Fiora")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.6 * s.bonus_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 100.0, 150.0, 200.0, 250.0], r)? + 1.0 * s.ability_power())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[125.0, 255.0, 385.0], r)? + 1.2 * s.bonus_attack_damage())
        });

    table
        .champion("Fizz")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[10.0, 40.0, 70.0, 100.0, 130.0], r)? + 0.3 * s.ability_power())
        })
        // Seastone trident on-hit
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[20.0, 30.0, 40.0, 50.0, 60.0], r)? + 0.35 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 120.0, 170.0, 220.0, 270.0], r)? + 0.75 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[200.0, 325.0, 450.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Galio")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 135.0, 190.0, 245.0, 300.0], r)? + 0.9 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[220.0, 330.0, 440.0], r)? + 0.6 * s.ability_power())
        });

    table
        .champion("Gangplank")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 45.0, 70.0, 95.0, 120.0], r)? + 1.0 * s.total_attack_damage())
        })
        // Per cannonball wave
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 120.0, 165.0], r)? + 0.1 * s.ability_power())
        });

    table
        .champion("Garen")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 55.0, 80.0, 105.0, 130.0], r)? + 1.4 * s.total_attack_damage())
        })
        // Judgment, per second
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 45.0, 70.0, 95.0, 120.0], r)?
                + rank_value(&[0.7, 0.8, 0.9, 1.0, 1.1], r)? * s.total_attack_damage())
        })
        // Execute scaling off missing health
        .spell(R, 0, Magical, |_s, t, r| {
            Ok(rank_value(&[175.0, 350.0, 525.0], r)?
                + rank_value(&[0.286, 0.333, 0.4], r)? * t.missing_health())
        });

    table
        .champion("Gnar")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[5.0, 45.0, 85.0, 125.0, 165.0], r)? + 1.15 * s.total_attack_damage())
        })
        // Boomerang return hits for half
        .spell(Q, 1, Physical, |s, _t, r| {
            Ok(0.5
                * (rank_value(&[5.0, 45.0, 85.0, 125.0, 165.0], r)?
                    + 1.15 * s.total_attack_damage()))
        })
        // Hyper: percent of target max health
        .spell(W, 0, Magical, |s, t, r| {
            Ok(rank_value(&[10.0, 20.0, 30.0, 40.0, 50.0], r)?
                + 0.06 * t.max_health
                + 1.0 * s.ability_power())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 60.0, 100.0, 140.0, 180.0], r)? + 0.06 * s.max_health)
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[200.0, 300.0, 400.0], r)?
                + 0.2 * s.ability_power()
                + 0.5 * s.bonus_attack_damage())
        });

    table
        .champion("Gragas")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.6 * s.ability_power())
        })
        // Includes a chunk of the target's max health
        .spell(W, 0, Magical, |s, t, r| {
            Ok(rank_value(&[20.0, 50.0, 80.0, 110.0, 140.0], r)?
                + 0.3 * s.ability_power()
                + 0.08 * t.max_health)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.6 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[200.0, 300.0, 400.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Graves")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 0.8 * s.bonus_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.6 * s.ability_power())
        })
        // Initial shell
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[250.0, 400.0, 550.0], r)? + 1.5 * s.bonus_attack_damage())
        })
        // Cone explosion behind the first target hit
        .spell(R, 1, Physical, |s, _t, r| {
            Ok(rank_value(&[140.0, 250.0, 360.0], r)? + 1.2 * s.bonus_attack_damage())
        });
}
