//! Champion formulas: Hecarim through KogMaw

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical, True};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Hecarim")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 0.6 * s.bonus_attack_damage())
        })
        // Spirit of dread, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[20.0, 30.0, 40.0, 50.0, 60.0], r)? + 0.2 * s.ability_power())
        })
        // Devastating charge minimum hit
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[40.0, 75.0, 110.0, 145.0, 180.0], r)? + 0.5 * s.bonus_attack_damage())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Heimerdinger")
        // Turret shot
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[12.0, 18.0, 24.0, 30.0, 36.0], r)? + 0.3 * s.ability_power())
        })
        // Turret beam
        .spell(Q, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 60.0, 80.0, 100.0, 120.0], r)? + 0.55 * s.ability_power())
        })
        // Per rocket
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 90.0, 120.0, 150.0, 180.0], r)? + 0.45 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 100.0, 140.0, 180.0, 220.0], r)? + 0.6 * s.ability_power())
        });

    table
        .champion("Irelia")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 50.0, 80.0, 110.0, 140.0], r)? + 1.2 * s.total_attack_damage())
        })
        // On-hit true damage
        .spell(W, 0, True, |_s, _t, r| {
            rank_value(&[15.0, 30.0, 45.0, 60.0, 75.0], r)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.5 * s.ability_power())
        })
        // Per blade
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0], r)?
                + 0.5 * s.ability_power()
                + 0.6 * s.bonus_attack_damage())
        });

    table.champion("Janna").spell(W, 0, Magical, |s, _t, r| {
        Ok(rank_value(&[60.0, 115.0, 170.0, 225.0, 280.0], r)? + 0.65 * s.ability_power())
    });

    table
        .champion("JarvanIV")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 1.2 * s.bonus_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.8 * s.ability_power())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[200.0, 325.0, 450.0], r)? + 1.5 * s.bonus_attack_damage())
        });

    table
        .champion("Jax")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)?
                + 1.0 * s.bonus_attack_damage()
                + 0.6 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 75.0, 110.0, 145.0, 180.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)? + 0.5 * s.ability_power())
        })
        // Third-hit passive proc while ranked
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 160.0, 220.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Jayce")
        // Hammer form
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 70.0, 110.0, 150.0, 190.0], r)? + 1.2 * s.bonus_attack_damage())
        })
        // Cannon form shock blast
        .spell(Q, 1, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 120.0, 170.0, 220.0, 270.0], r)? + 1.2 * s.bonus_attack_damage())
        })
        // Hammer form: percent of target max health
        .spell(E, 0, Physical, |_s, t, r| {
            Ok(rank_value(&[0.08, 0.104, 0.128, 0.152, 0.176], r)? * t.max_health)
        });

    table
        .champion("Jinx")
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[10.0, 60.0, 110.0, 160.0, 210.0], r)? + 1.4 * s.total_attack_damage())
        })
        // Per chomper
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 135.0, 190.0, 245.0, 300.0], r)? + 1.0 * s.ability_power())
        })
        // Scales with target missing health
        .spell(R, 0, Physical, |s, t, r| {
            Ok(rank_value(&[250.0, 350.0, 450.0], r)?
                + 1.0 * s.bonus_attack_damage()
                + rank_value(&[0.25, 0.3, 0.35], r)? * t.missing_health())
        });

    table
        .champion("Kalista")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[10.0, 70.0, 130.0, 190.0, 250.0], r)? + 1.0 * s.total_attack_damage())
        })
        // Rend: first spear plus a rank-scaled amount per extra spear
        .spell(E, 0, Physical, |s, t, r| {
            let first = rank_value(&[20.0, 30.0, 40.0, 50.0, 60.0], r)? + 0.6 * s.total_attack_damage();
            let per_extra = rank_value(&[10.0, 16.0, 22.0, 28.0, 34.0], r)?
                + rank_value(&[0.2, 0.225, 0.25, 0.275, 0.3], r)? * s.total_attack_damage();
            let stacks = t.buff_stacks("kalistaexpungewounds") as f64;
            Ok(first + per_extra * (stacks - 1.0).max(0.0))
        });

    table
        .champion("Karma")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.6 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.6 * s.ability_power())
        });

    table
        .champion("Karthus")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 60.0, 80.0, 100.0, 120.0], r)? + 0.3 * s.ability_power())
        })
        // Defile, per second
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[30.0, 50.0, 70.0, 90.0, 110.0], r)? + 0.2 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 400.0, 550.0], r)? + 0.6 * s.ability_power())
        });

    table
        .champion("Kassadin")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 105.0, 130.0, 155.0, 180.0], r)? + 0.7 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 105.0, 130.0, 155.0, 180.0], r)? + 0.8 * s.ability_power())
        })
        // Base cast; stacking surcharge is the caller's concern
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 100.0, 120.0], r)?
                + 0.3 * s.ability_power()
                + 0.02 * s.max_mana)
        });

    table
        .champion("Katarina")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 110.0, 145.0, 180.0, 215.0], r)? + 0.45 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 80.0, 120.0, 160.0, 200.0], r)?
                + 0.25 * s.ability_power()
                + 0.6 * s.bonus_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 85.0, 110.0, 135.0, 160.0], r)? + 0.4 * s.ability_power())
        })
        // Full channel total
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[400.0, 575.0, 750.0], r)?
                + 2.5 * s.ability_power()
                + 3.0 * s.bonus_attack_damage())
        });

    table
        .champion("Kayle")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)?
                + 1.0 * s.bonus_attack_damage()
                + 0.6 * s.ability_power())
        })
        // Righteous fury on-hit splash
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[20.0, 30.0, 40.0, 50.0, 60.0], r)? + 0.3 * s.ability_power())
        });

    table
        .champion("Kennen")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 115.0, 155.0, 195.0, 235.0], r)? + 0.75 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[65.0, 95.0, 125.0, 155.0, 185.0], r)? + 0.55 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.8 * s.ability_power())
        })
        // Per bolt
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 145.0, 210.0], r)? + 0.4 * s.ability_power())
        });

    table
        .champion("Khazix")
        // Bonus damage against isolated targets
        .spell(Q, 0, Physical, |s, t, r| {
            let base =
                rank_value(&[70.0, 95.0, 120.0, 145.0, 170.0], r)? + 1.2 * s.bonus_attack_damage();
            Ok(if t.has_buff("isolated") { base * 1.3 } else { base })
        })
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.9 * s.bonus_attack_damage())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[65.0, 100.0, 135.0, 170.0, 205.0], r)? + 0.2 * s.bonus_attack_damage())
        });

    table
        .champion("KogMaw")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.5 * s.ability_power())
        })
        // On-hit percent of target max health; AP raises the percent
        .spell(W, 0, Magical, |s, t, r| {
            let percent = rank_value(&[0.02, 0.03, 0.04, 0.05, 0.06], r)?
                + 0.01 * (s.ability_power() / 100.0);
            Ok(percent * t.max_health)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.7 * s.ability_power())
        })
        // Artillery gains steps against wounded targets
        .spell(R, 0, Magical, |s, t, r| {
            let base = rank_value(&[100.0, 140.0, 180.0], r)? + 0.65 * s.ability_power();
            let health = t.health_percent();
            Ok(if health < 0.25 {
                base * 3.0
            } else if health < 0.5 {
                base * 2.0
            } else {
                base
            })
        });
}
