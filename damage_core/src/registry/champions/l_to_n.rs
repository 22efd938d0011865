//! Champion formulas: Leblanc through Nunu

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical, True};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Leblanc")
        // Sigil hit
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 80.0, 105.0, 130.0, 155.0], r)? + 0.4 * s.ability_power())
        })
        // Sigil detonation
        .spell(Q, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 80.0, 105.0, 130.0, 155.0], r)? + 0.4 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[85.0, 125.0, 165.0, 205.0, 245.0], r)? + 0.6 * s.ability_power())
        })
        // Chain hit
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)? + 0.5 * s.ability_power())
        })
        // Tether snap
        .spell(E, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("LeeSin")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[50.0, 80.0, 110.0, 140.0, 170.0], r)? + 0.9 * s.bonus_attack_damage())
        })
        // Second cast ramps with target missing health
        .spell(Q, 1, Physical, |s, t, r| {
            let base =
                rank_value(&[50.0, 80.0, 110.0, 140.0, 170.0], r)? + 0.9 * s.bonus_attack_damage();
            Ok(base * (1.0 + (1.0 - t.health_percent())))
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)? + 0.8 * s.bonus_attack_damage())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[150.0, 300.0, 450.0], r)? + 2.0 * s.bonus_attack_damage())
        });

    table
        .champion("Leona")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 70.0, 100.0, 130.0, 160.0], r)? + 0.3 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.4 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 100.0, 140.0, 180.0, 220.0], r)? + 0.4 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.8 * s.ability_power())
        });

    table
        .champion("Lissandra")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 100.0, 130.0, 160.0, 190.0], r)? + 0.65 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 105.0, 140.0, 175.0, 210.0], r)? + 0.6 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Lucian")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[80.0, 115.0, 150.0, 185.0, 220.0], r)?
                + rank_value(&[0.6, 0.75, 0.9, 1.05, 1.2], r)? * s.bonus_attack_damage())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[85.0, 125.0, 165.0, 205.0, 245.0], r)? + 0.9 * s.ability_power())
        })
        // Per shot
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[40.0, 50.0, 60.0], r)?
                + 0.1 * s.ability_power()
                + 0.25 * s.total_attack_damage())
        });

    table
        .champion("Lulu")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.5 * s.ability_power())
        })
        // Pix bolts from Help, Pix!
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 110.0, 140.0, 170.0, 200.0], r)? + 0.4 * s.ability_power())
        });

    table
        .champion("Lux")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.7 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.6 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[300.0, 400.0, 500.0], r)? + 0.75 * s.ability_power())
        });

    table
        .champion("Malphite")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 120.0, 170.0, 220.0, 270.0], r)? + 0.6 * s.ability_power())
        })
        // Ground slam scales with Malphite's armor
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 95.0, 130.0, 165.0, 200.0], r)?
                + 0.3 * s.armor
                + 0.2 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[200.0, 300.0, 400.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Malzahar")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.65 * s.ability_power())
        })
        // Malefic visions, full duration
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 140.0, 200.0, 260.0, 320.0], r)? + 0.8 * s.ability_power())
        })
        // Nether grasp, full channel
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 400.0, 550.0], r)? + 1.3 * s.ability_power())
        });

    table
        .champion("Maokai")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.4 * s.ability_power())
        })
        // Percent of target max health
        .spell(W, 0, Magical, |_s, t, r| {
            Ok(rank_value(&[0.09, 0.10, 0.11, 0.12, 0.13], r)? * t.max_health)
        })
        // Sapling slam
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 75.0, 110.0, 145.0, 180.0], r)? + 0.4 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 150.0, 200.0], r)? + 0.4 * s.ability_power())
        });

    table
        .champion("MasterYi")
        // Per strike
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[25.0, 60.0, 95.0, 130.0, 165.0], r)? + 1.0 * s.total_attack_damage())
        })
        // Wuju style on-hit true damage
        .spell(E, 0, True, |s, _t, r| {
            Ok(rank_value(&[10.0, 15.0, 20.0, 25.0, 30.0], r)? + 0.25 * s.bonus_attack_damage())
        });

    table
        .champion("MissFortune")
        // Per bounce target
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 35.0, 50.0, 65.0, 80.0], r)?
                + 0.35 * s.ability_power()
                + 0.85 * s.total_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[90.0, 145.0, 200.0, 255.0, 310.0], r)? + 0.8 * s.ability_power())
        })
        // Per wave
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 75.0, 100.0], r)? + 0.2 * s.ability_power())
        });

    table
        .champion("MonkeyKing")
        // Bonus on next attack
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 60.0, 90.0, 120.0, 150.0], r)? + 0.1 * s.total_attack_damage())
        })
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.8 * s.bonus_attack_damage())
        })
        // Cyclone, per second
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 110.0, 200.0], r)? + 1.1 * s.total_attack_damage())
        });

    table
        .champion("Mordekaiser")
        // Per mace hit
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 110.0, 140.0, 170.0, 200.0], r)? + 0.4 * s.ability_power())
        })
        // Creeping death, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[24.0, 38.0, 52.0, 66.0, 80.0], r)? + 0.2 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.6 * s.ability_power())
        })
        // Percent of target max health over the full duration
        .spell(R, 0, Magical, |_s, t, r| {
            Ok(rank_value(&[0.24, 0.29, 0.34], r)? * t.max_health)
        });

    table
        .champion("Morgana")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 135.0, 190.0, 245.0, 300.0], r)? + 0.9 * s.ability_power())
        })
        // Tormented soil, per tick
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[8.0, 16.0, 24.0, 32.0, 40.0], r)? + 0.11 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 225.0, 300.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Nami")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 130.0, 185.0, 240.0, 295.0], r)? + 0.65 * s.ability_power())
        })
        // Per bounce
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.5 * s.ability_power())
        })
        // Tidecaller's blessing on-hit
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[25.0, 40.0, 55.0, 70.0, 85.0], r)? + 0.2 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Nasus")
        // Siphoning strike grows with banked stacks
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 50.0, 70.0, 90.0, 110.0], r)?
                + s.buff_stacks("nasusqstacks") as f64)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 95.0, 135.0, 175.0, 215.0], r)? + 0.6 * s.ability_power())
        })
        // Fury of the sands, per second percent of target max health
        .spell(R, 0, Magical, |_s, t, r| {
            Ok(rank_value(&[0.03, 0.04, 0.05], r)? * t.max_health)
        });

    table
        .champion("Nautilus")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.75 * s.ability_power())
        })
        // Riptide shield on-hit
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[30.0, 40.0, 50.0, 60.0, 70.0], r)? + 0.4 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 100.0, 140.0, 180.0, 220.0], r)? + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[200.0, 325.0, 450.0], r)? + 0.8 * s.ability_power())
        });

    table
        .champion("Nidalee")
        // Human form spear at minimum range
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 77.5, 95.0, 112.5, 130.0], r)? + 0.4 * s.ability_power())
        })
        // Cougar takedown, ramping with target missing health (ranked by R)
        .spell(Q, 1, Magical, |s, t, r| {
            let base = rank_value(&[150.0, 225.0, 300.0], r)?
                + 0.75 * s.total_attack_damage()
                + 0.36 * s.ability_power();
            Ok(base * (1.0 + (1.0 - t.health_percent())))
        })
        // Human form trap trigger
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.2 * s.ability_power())
        })
        // Cougar swipe (ranked by R)
        .spell(E, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 130.0, 190.0], r)? + 0.45 * s.ability_power())
        });

    table
        .champion("Nocturne")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.75 * s.bonus_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 1.0 * s.ability_power())
        })
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 1.2 * s.bonus_attack_damage())
        });

    table
        .champion("Nunu")
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[85.0, 130.0, 175.0, 220.0, 265.0], r)? + 1.0 * s.ability_power())
        })
        // Absolute zero at full channel
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[625.0, 875.0, 1125.0], r)? + 2.5 * s.ability_power())
        });
}
