//! Champion formulas: Sejuani through Twitch

use super::ChampionTable;
use crate::registry::rank_value;
use crate::types::DamageType::{Magical, Physical};
use crate::types::SpellSlot::{E, Q, R, W};

pub(super) fn register(table: &mut ChampionTable) {
    table
        .champion("Sejuani")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.4 * s.ability_power())
        })
        // Flame breath aura, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[30.0, 45.0, 60.0, 75.0, 90.0], r)? + 0.3 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.8 * s.ability_power())
        });

    table
        .champion("Shaco")
        // Jack in the box strike
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[35.0, 50.0, 65.0, 80.0, 95.0], r)? + 0.2 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 90.0, 130.0, 170.0, 210.0], r)? + 1.0 * s.ability_power())
        })
        // Hallucination detonation
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[300.0, 450.0, 600.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Shen")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 100.0, 140.0, 180.0, 220.0], r)? + 0.6 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 85.0, 120.0, 155.0, 190.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("Shyvana")
        // Twin bite: both attacks as a fraction of total AD
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[0.8, 0.85, 0.9, 0.95, 1.0], r)? * s.total_attack_damage())
        })
        // Burnout, per second
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[25.0, 40.0, 55.0, 70.0, 85.0], r)? + 0.1 * s.bonus_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 100.0, 140.0, 180.0, 220.0], r)? + 0.3 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[175.0, 300.0, 425.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Singed")
        // Poison trail, per second
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[22.0, 34.0, 46.0, 58.0, 70.0], r)? + 0.3 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.75 * s.ability_power())
        });

    table
        .champion("Sion")
        // Uncharged smash
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 40.0, 60.0, 80.0, 100.0], r)? + 0.45 * s.total_attack_damage())
        })
        // Fully charged smash
        .spell(Q, 1, Physical, |s, _t, r| {
            Ok(3.0
                * (rank_value(&[20.0, 40.0, 60.0, 80.0, 100.0], r)?
                    + 0.45 * s.total_attack_damage()))
        })
        // Shield detonation includes percent of target max health
        .spell(W, 0, Magical, |s, t, r| {
            Ok(rank_value(&[40.0, 65.0, 90.0, 115.0, 140.0], r)?
                + 0.4 * s.ability_power()
                + rank_value(&[0.10, 0.11, 0.12, 0.13, 0.14], r)? * t.max_health)
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 105.0, 140.0, 175.0, 210.0], r)? + 0.4 * s.ability_power())
        })
        // Unstoppable onslaught at minimum charge
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[150.0, 300.0, 450.0], r)? + 0.4 * s.total_attack_damage())
        });

    table
        .champion("Sivir")
        // Boomerang blade, each pass
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[25.0, 45.0, 65.0, 85.0, 105.0], r)?
                + rank_value(&[0.7, 0.8, 0.9, 1.0, 1.1], r)? * s.total_attack_damage()
                + 0.5 * s.ability_power())
        })
        // Ricochet bounce
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[0.5, 0.55, 0.6, 0.65, 0.7], r)? * s.total_attack_damage())
        });

    table
        .champion("Skarner")
        // Crystal slash, per spin
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[18.0, 32.0, 46.0, 60.0, 74.0], r)? + 0.4 * s.total_attack_damage())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 75.0, 110.0, 145.0, 180.0], r)? + 0.4 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[100.0, 150.0, 200.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("Sona")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 70.0, 100.0, 130.0, 160.0], r)? + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("Soraka")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.35 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 110.0, 150.0, 190.0, 230.0], r)? + 0.4 * s.ability_power())
        });

    table
        .champion("Swain")
        // Torment tick stream, per second
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[25.0, 40.0, 55.0, 70.0, 85.0], r)? + 0.3 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.7 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[75.0, 115.0, 155.0, 195.0, 235.0], r)? + 0.8 * s.ability_power())
        })
        // Per raven
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 70.0, 90.0], r)? + 0.2 * s.ability_power())
        });

    table
        .champion("Syndra")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[50.0, 95.0, 140.0, 185.0, 230.0], r)? + 0.6 * s.ability_power())
        })
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.7 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[70.0, 115.0, 160.0, 205.0, 250.0], r)? + 0.4 * s.ability_power())
        })
        // Per sphere
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[90.0, 135.0, 180.0], r)? + 0.2 * s.ability_power())
        });

    table
        .champion("TahmKench")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 130.0, 180.0, 230.0, 280.0], r)? + 0.7 * s.ability_power())
        })
        // Devour, percent of target max health
        .spell(W, 0, Magical, |_s, t, r| {
            Ok(rank_value(&[0.20, 0.23, 0.26, 0.29, 0.32], r)? * t.max_health)
        });

    table
        .champion("Talon")
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[30.0, 60.0, 90.0, 120.0, 150.0], r)? + 1.0 * s.bonus_attack_damage())
        })
        .spell(W, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[50.0, 80.0, 110.0, 140.0, 170.0], r)? + 0.6 * s.bonus_attack_damage())
        })
        // Per blade wave
        .spell(R, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[120.0, 170.0, 220.0], r)? + 0.75 * s.bonus_attack_damage())
        });

    table
        .champion("Taric")
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 70.0, 100.0, 130.0, 160.0], r)? + 0.4 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[150.0, 250.0, 350.0], r)? + 0.7 * s.ability_power())
        });

    table
        .champion("Teemo")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 125.0, 170.0, 215.0, 260.0], r)? + 0.8 * s.ability_power())
        })
        // Toxic shot on-hit
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[10.0, 20.0, 30.0, 40.0, 50.0], r)? + 0.3 * s.ability_power())
        })
        // Toxic shot poison, per second
        .spell(E, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[6.0, 12.0, 18.0, 24.0, 30.0], r)? + 0.1 * s.ability_power())
        })
        // Noxious trap
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[200.0, 325.0, 450.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("Thresh")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[80.0, 120.0, 160.0, 200.0, 240.0], r)? + 0.5 * s.ability_power())
        })
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[65.0, 95.0, 125.0, 155.0, 185.0], r)? + 0.4 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[250.0, 400.0, 550.0], r)? + 1.0 * s.ability_power())
        });

    table
        .champion("Tristana")
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 110.0, 160.0, 210.0, 260.0], r)? + 0.8 * s.ability_power())
        })
        // Explosive charge full detonation
        .spell(E, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[70.0, 80.0, 90.0, 100.0, 110.0], r)?
                + rank_value(&[0.5, 0.65, 0.8, 0.95, 1.1], r)? * s.bonus_attack_damage()
                + 0.5 * s.ability_power())
        })
        .spell(R, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[300.0, 400.0, 500.0], r)? + 1.5 * s.ability_power())
        });

    table
        .champion("Trundle")
        // Chomp replaces the next attack
        .spell(Q, 0, Physical, |s, _t, r| {
            Ok(rank_value(&[20.0, 40.0, 60.0, 80.0, 100.0], r)? + 1.0 * s.total_attack_damage())
        })
        // Subjugate drain, percent of target max health
        .spell(R, 0, Magical, |_s, t, r| {
            Ok(rank_value(&[0.20, 0.24, 0.28], r)? * t.max_health)
        });

    table.champion("Tryndamere").spell(E, 0, Physical, |s, _t, r| {
        Ok(rank_value(&[70.0, 100.0, 130.0, 160.0, 190.0], r)?
            + 1.2 * s.bonus_attack_damage()
            + 0.8 * s.ability_power())
    });

    table
        .champion("TwistedFate")
        .spell(Q, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[60.0, 105.0, 150.0, 195.0, 240.0], r)? + 0.65 * s.ability_power())
        })
        // Blue card
        .spell(W, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[40.0, 60.0, 80.0, 100.0, 120.0], r)?
                + 1.0 * s.total_attack_damage()
                + 0.4 * s.ability_power())
        })
        // Red card
        .spell(W, 1, Magical, |s, _t, r| {
            Ok(rank_value(&[30.0, 45.0, 60.0, 75.0, 90.0], r)?
                + 1.0 * s.total_attack_damage()
                + 0.4 * s.ability_power())
        })
        // Gold card
        .spell(W, 2, Magical, |s, _t, r| {
            Ok(rank_value(&[15.0, 22.5, 30.0, 37.5, 45.0], r)?
                + 1.0 * s.total_attack_damage()
                + 0.4 * s.ability_power())
        })
        // Stacked deck fourth hit
        .spell(E, 0, Magical, |s, _t, r| {
            Ok(rank_value(&[55.0, 80.0, 105.0, 130.0, 155.0], r)? + 0.5 * s.ability_power())
        });

    table
        .champion("Twitch")
        // Expunge: per stack of deadly venom on the target
        .spell(E, 0, Physical, |s, t, r| {
            let per_stack = rank_value(&[15.0, 20.0, 25.0, 30.0, 35.0], r)?
                + 0.2 * s.bonus_attack_damage()
                + 0.2 * s.ability_power();
            Ok(per_stack * t.buff_stacks("twitchdeadlyvenom") as f64)
        });
}
