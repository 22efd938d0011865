//! Champion formulas: Aatrox through Corki

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical, True};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Aatrox")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.6 * s.bonus_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 1.0 * s.bonus_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 110.0, 145.0, 180.0, 215.0], r)? + 0.6 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[200.0, 300.0, 400.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Ahri")
        // Orb outbound hit
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.35 * s.ability_power())
        })
        // Orb return hit deals true damage
        .spell(Q, 1, True, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.35 * s.ability_power())
        })
        // Single fox-fire
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.4 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 0.35 * s.ability_power())
        })
        // Per dash
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0], r)? + 0.3 * s.ability_power())
        });

    table
        .champion("Akali")
        // Mark application hit
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[35.0, 55.0, 75.0, 95.0, 115.0], r)? + 0.4 * s.ability_power())
        })
        // Mark detonation on basic attack
        .spell(Q, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[45.0, 70.0, 95.0, 120.0, 145.0], r)? + 0.5 * s.ability_power())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 55.0, 80.0, 105.0, 130.0], r)?
                + 0.6 * s.bonus_attack_damage()
                + 0.3 * s.ability_power())
        })
        // Per dash
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 175.0, 250.0], r)? + 0.35 * s.ability_power())
        });

    table
        .champion("Alistar")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.5 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 110.0, 165.0, 220.0, 275.0], r)? + 0.7 * s.ability_power())
        })
        // Trample, per second
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[12.0, 17.0, 22.0, 27.0, 32.0], r)? + 0.2 * s.ability_power())
        });

    table
        .champion("Amumu")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.7 * s.ability_power())
        })
        // Despair, per second: flat plus percent of target max health
        .spell(W, 0, Magical, |_s, t, r| {
            let percent = rank_value(&[0.015, 0.0175, 0.02, 0.0225, 0.025], r)?;
            Ok(rank_value(&[8.0, 12.0, 16.0, 20.0, 24.0], r)? + percent * t.max_health)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 100.0, 125.0, 150.0, 175.0], r)? + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.8 * s.ability_power())
        });

    table
        .champion("Anivia")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 85.0, 110.0, 135.0, 160.0], r)? + 0.4 * s.ability_power())
        })
        // Frostbite doubles against chilled targets
        .spell(E, 0, Magical, |s, t, r| {
            let base = rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)? + 0.5 * s.ability_power();
            Ok(if t.has_buff("chilled") { base * 2.0 } else { base })
        })
        // Glacial storm, per second
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0], r)? + 0.25 * s.ability_power())
        });

    table
        .champion("Annie")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 115.0, 150.0, 185.0, 220.0], r)? + 0.8 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.85 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[175.0, 300.0, 425.0], r)? + 0.8 * s.ability_power())
        });

    table
        .champion("Ashe")
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[40.0, 50.0, 60.0, 70.0, 80.0], r)? + 1.0 * s.total_attack_damage())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 425.0, 600.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Azir")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[65.0, 85.0, 105.0, 125.0, 145.0], r)? + 0.5 * s.ability_power())
        })
        // Soldier attack
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 70.0, 85.0, 100.0, 115.0], r)? + 0.7 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.4 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 225.0, 300.0], r)? + 0.6 * s.ability_power())
        });

    table.champion("Bard").spell(Q, 0, Magical, |s, _t, r| {
        Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.65 * s.ability_power())
    });

    table
        .champion("Blitzcrank")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 135.0, 190.0, 245.0, 300.0], r)? + 1.0 * s.ability_power())
        })
        // Power fist deals the attack again
        .spell(E, 0, Physical, |s, _t, _r| Ok(s.total_attack_damage()))
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 375.0, 500.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Brand")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 110.0, 140.0, 170.0, 200.0], r)? + 0.65 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 120.0, 165.0, 210.0, 255.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 105.0, 140.0, 175.0, 210.0], r)? + 0.55 * s.ability_power())
        })
        // Per bounce
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 200.0, 300.0], r)? + 0.25 * s.ability_power())
        });

    table
        .champion("Braum")
        // Scales with Braum's own max health
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.025 * s.max_health)
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.6 * s.ability_power())
        });

    table
        .champion("Caitlyn")
        // Rank-scaled total AD ratio
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 60.0, 100.0, 140.0, 180.0], r)?
                + rank_value(&[1.3, 1.4, 1.5, 1.6, 1.7], r)? * s.total_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.8 * s.ability_power())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[250.0, 475.0, 700.0], r)? + 2.0 * s.bonus_attack_damage())
        });

    table
        .champion("Cassiopeia")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 110.0, 145.0, 180.0, 215.0], r)? + 0.5 * s.ability_power())
        })
        // Miasma, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[25.0, 35.0, 45.0, 55.0, 65.0], r)? + 0.15 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 85.0, 120.0, 155.0, 190.0], r)? + 0.55 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("Chogath")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 135.0, 190.0, 245.0, 300.0], r)? + 1.0 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 125.0, 175.0, 225.0, 275.0], r)? + 0.7 * s.ability_power())
        })
        // Vorpal spikes on-attack
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[20.0, 35.0, 50.0, 65.0, 80.0], r)? + 0.3 * s.ability_power())
        })
        .spell(R, 0, True, |_s, _t, r| Ok(rank_value(&[300.0, 475.0, 650.0], r)?));

    table
        .champion("Corki")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.5 * s.ability_power())
        })
        // Valkyrie trail, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.4 * s.ability_power())
        })
        // Gatling gun, per second
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 32.0, 44.0, 56.0, 68.0], r)? + 0.4 * s.bonus_attack_damage())
        })
        // Standard rocket
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 130.0, 160.0], r)?
                + 0.3 * s.ability_power()
                + 0.2 * s.bonus_attack_damage())
        })
        // Big One: half again as much
        .spell(R, 1, Magical, |s, _t, r| {
            Ok(1.5
                * (rank_value(&[100.0, 130.0, 160.0], r)?
                    + 0.3 * s.ability_power()
                    + 0.2 * s.bonus_attack_damage()))
        });
}
