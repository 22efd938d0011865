//! Champion formulas: Udyr through Zyra

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical, True};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Udyr")
        // Tiger stance, proc damage over the maul
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[0.8, 1.0, 1.2, 1.4, 1.6], r)? * s.total_attack_damage())
        })
        // Phoenix stance wave, per second
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[15.0, 25.0, 35.0, 45.0, 55.0], r)? + 0.25 * s.ability_power())
        });

    table
        .champion("Urgot")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[10.0, 40.0, 70.0, 100.0, 130.0], r)?
                + 0.85 * s.total_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 130.0, 185.0, 240.0, 295.0], r)? + 0.6 * s.ability_power())
        });

    table
        .champion("Varus")
        // Uncharged arrow
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[10.0, 47.0, 83.0, 120.0, 157.0], r)?
                + 1.0 * s.bonus_attack_damage())
        })
        // Fully charged arrow
        .spell(Q, 1, Physical, |s, _t, r| {
            Ok(rank_value(&[15.0, 70.0, 125.0, 180.0, 235.0], r)?
                + 1.5 * s.bonus_attack_damage())
        })
        // Blighted quiver on-hit
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[10.0, 14.0, 18.0, 22.0, 26.0], r)? + 0.25 * s.ability_power())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[65.0, 100.0, 135.0, 170.0, 205.0], r)?
                + 0.6 * s.bonus_attack_damage())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 175.0, 250.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Vayne")
        // Silver bolts third hit, floored at 40
        .spell(W, 0, True, |_s, t, r| {
            Ok((rank_value(&[0.04, 0.05, 0.06, 0.07, 0.08], r)? * t.max_health).max(40.0))
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[45.0, 80.0, 115.0, 150.0, 185.0], r)?
                + 0.5 * s.bonus_attack_damage())
        })
        // Condemn with a wall collision
        .spell(E, 1, Physical, |s, _t, r| {
            Ok(2.0
                * (rank_value(&[45.0, 80.0, 115.0, 150.0, 185.0], r)?
                    + 0.5 * s.bonus_attack_damage()))
        });

    table
        .champion("Veigar")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.6 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[120.0, 170.0, 220.0, 270.0, 320.0], r)? + 1.0 * s.ability_power())
        })
        // Primordial burst scales with the target's own ability power
        .spell(R, 0, Magical, |s, t, r| {
            Ok(rank_value(&[250.0, 375.0, 500.0], r)?
                + 1.2 * s.ability_power()
                + 0.8 * t.ability_power())
        });

    table
        .champion("Velkoz")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.6 * s.ability_power())
        })
        // Void seeker initial burst
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[30.0, 50.0, 70.0, 90.0, 110.0], r)? + 0.25 * s.ability_power())
        })
        // Void seeker delayed eruption
        .spell(W, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[45.0, 75.0, 105.0, 135.0, 165.0], r)? + 0.375 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 100.0, 130.0, 160.0, 190.0], r)? + 0.5 * s.ability_power())
        })
        // Full channel total
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[500.0, 725.0, 950.0], r)? + 1.5 * s.ability_power())
        });

    table
        .champion("Vi")
        // Uncharged dash
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)?
                + 0.8 * s.bonus_attack_damage())
        })
        // Fully charged dash
        .spell(Q, 1, Physical, |s, _t, r| {
            Ok(2.0
                * (rank_value(&[50.0, 75.0, 100.0, 125.0, 150.0], r)?
                    + 0.8 * s.bonus_attack_damage()))
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[5.0, 20.0, 35.0, 50.0, 65.0], r)?
                + 1.15 * s.total_attack_damage()
                + 0.7 * s.ability_power())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[200.0, 325.0, 450.0], r)? + 1.4 * s.bonus_attack_damage())
        });

    table
        .champion("Viktor")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 60.0, 80.0, 100.0, 120.0], r)? + 0.2 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.7 * s.ability_power())
        })
        // Augmented aftershock
        .spell(E, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[20.0, 50.0, 80.0, 110.0, 140.0], r)? + 0.55 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.55 * s.ability_power())
        });

    table
        .champion("Vladimir")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[90.0, 125.0, 160.0, 195.0, 230.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.45 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[300.0, 450.0, 600.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Volibear")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 60.0, 90.0, 120.0, 150.0], r)?
                + 1.0 * s.total_attack_damage())
        })
        // Frenzy bite, up to doubled against wounded targets
        .spell(W, 0, Physical, |_s, t, r| {
            let amp = 1.0 + (1.0 - t.health_percent());
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? * amp)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.6 * s.ability_power())
        })
        // Per lightning bounce
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 115.0, 155.0], r)? + 0.3 * s.ability_power())
        });

    table
        .champion("Warwick")
        // Hungering strike: the greater of the flat hit or percent max health
        .spell(Q, 0, Magical, |s, t, r| {
            let flat = rank_value(&[75.0, 125.0, 175.0, 225.0, 275.0], r)?;
            let percent = rank_value(&[0.08, 0.10, 0.12, 0.14, 0.16], r)? * t.max_health;
            Ok(flat.max(percent) + 1.0 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 335.0, 420.0], r)? + 2.0 * s.bonus_attack_damage())
        });

    table
        .champion("Xerath")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.75 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[90.0, 120.0, 150.0, 180.0, 210.0], r)? + 0.6 * s.ability_power())
        })
        // Dead center of the rite
        .spell(W, 1, Magical, |s, _t, r| {
            Ok(1.5 * (rank_value(&[90.0, 120.0, 150.0, 180.0, 210.0], r)?
                + 0.6 * s.ability_power()))
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 110.0, 140.0, 170.0, 200.0], r)? + 0.45 * s.ability_power())
        })
        // Per barrage
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[190.0, 245.0, 300.0], r)? + 0.43 * s.ability_power())
        });

    table
        .champion("XinZhao")
        // Three talon strike, bonus per hit
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[15.0, 30.0, 45.0, 60.0, 75.0], r)? + 0.2 * s.bonus_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.6 * s.ability_power())
        })
        // Crescent sweep adds a share of the target's current health
        .spell(R, 0, Physical, |s, t, r| {
            Ok(rank_value(&[125.0, 225.0, 325.0], r)?
                + 1.0 * s.bonus_attack_damage()
                + 0.15 * t.health)
        });

    table
        .champion("Yasuo")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 40.0, 60.0, 80.0, 100.0], r)? + 1.0 * s.total_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 90.0, 110.0, 130.0, 150.0], r)? + 0.6 * s.ability_power())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[200.0, 300.0, 400.0], r)? + 1.5 * s.bonus_attack_damage())
        });

    table
        .champion("Yorick")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 60.0, 90.0, 120.0, 150.0], r)?
                + 1.2 * s.total_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 85.0, 115.0, 145.0, 175.0], r)?
                + 1.0 * s.bonus_attack_damage())
        });

    table
        .champion("Zac")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.5 * s.ability_power())
        })
        // Unstable matter, flat plus percent of target max health
        .spell(W, 0, Magical, |s, t, r| {
            Ok(rank_value(&[30.0, 40.0, 50.0, 60.0, 70.0], r)?
                + (rank_value(&[0.04, 0.05, 0.06, 0.07, 0.08], r)?
                    + 0.02 * (s.ability_power() / 100.0))
                    * t.max_health)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.7 * s.ability_power())
        })
        // Per bounce
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[140.0, 210.0, 280.0], r)? + 0.4 * s.ability_power())
        });

    table
        .champion("Zed")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[75.0, 115.0, 155.0, 195.0, 235.0], r)?
                + 1.0 * s.bonus_attack_damage())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[65.0, 90.0, 115.0, 140.0, 165.0], r)?
                + 0.8 * s.bonus_attack_damage())
        })
        // Death mark initial strike
        .spell(R, 0, Physical, |s, _t, _r| Ok(1.0 * s.total_attack_damage()));

    table
        .champion("Ziggs")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 120.0, 165.0, 210.0, 255.0], r)? + 0.65 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 105.0, 140.0, 175.0, 210.0], r)? + 0.35 * s.ability_power())
        })
        // Per mine
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.3 * s.ability_power())
        })
        // Epicenter of the mega inferno bomb
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 375.0, 500.0], r)? + 1.1 * s.ability_power())
        })
        // Outer blast radius
        .spell(R, 1, Magical, |s, _t, r| {
            Ok(0.8 * (rank_value(&[250.0, 375.0, 500.0], r)? + 1.1 * s.ability_power()))
        });

    table.champion("Zilean").spell(Q, 0, Magical, |s, _t, r| {
        Ok(rank_value(&[75.0, 115.0, 155.0, 195.0, 235.0], r)? + 0.9 * s.ability_power())
    });

    table
        .champion("Zyra")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 105.0, 140.0, 175.0, 210.0], r)? + 0.65 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[180.0, 265.0, 350.0], r)? + 0.7 * s.ability_power())
        });
}
