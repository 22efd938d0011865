//! Example damage report demonstrating damage_core
//!
//! This binary shows:
//! - Building the champion damage registry
//! - Constructing stat snapshots for two champions
//! - Raw and mitigated ability damage
//! - Basic attack, item, and summoner spell damage
//! - Snapshot serialization for hand-off to a game-state layer

use damage_core::prelude::*;

fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn print_damage(label: &str, amount: f64) {
    println!("  {:<42} {:>9.2}", label, amount);
}

fn main() {
    separator("DAMAGE REPORT: Ashe (level 9) vs Garen (level 9)");

    let registry = DamageRegistry::build();
    println!("  Registry holds {} champions", registry.champions().count());

    // Mid-game marksman with a few items' worth of attack damage
    let ashe = StatSnapshot::hero("Ashe")
        .with_level(9)
        .with_combat_type(CombatType::Ranged)
        .with_attack_damage(75.0, 45.0)
        .with_health(1100.0, 1400.0)
        .with_spell_level(SpellSlot::W, 4)
        .with_spell_level(SpellSlot::R, 1)
        .with_mastery(MasteryPage::Offense, 146, 1);

    let garen = StatSnapshot::hero("Garen")
        .with_level(9)
        .with_resists(80.0, 45.0)
        .with_health(1600.0, 2000.0);

    separator("ABILITY DAMAGE");

    for (label, slot, stage) in [("Volley (W)", SpellSlot::W, 0), ("Crystal Arrow (R)", SpellSlot::R, 0)] {
        match spell_damage(&registry, &ashe, &garen, slot, stage) {
            Ok(raw) => {
                print_damage(&format!("{} raw", label), raw);
                if let Ok(dealt) = mitigated_spell_damage(&registry, &ashe, &garen, slot, stage) {
                    print_damage(&format!("{} vs {:.0} armor/mr", label, garen.armor), dealt);
                }
            }
            Err(e) => println!("  {:<42} {}", label, e),
        }
    }

    // An unlearned ability is an error, not zero damage
    if let Err(e) = spell_damage(&registry, &ashe, &garen, SpellSlot::Q, 0) {
        println!("  {:<42} {}", "Frost Shot (Q)", e);
    }

    separator("ATTACKS, ITEMS, SUMMONER SPELLS");

    print_damage(
        "Basic attack",
        auto_attack_damage(&registry, &ashe, &garen, true),
    );
    print_damage(
        "Blade of the Ruined King on-hit",
        item_damage(&ashe, &garen, ItemId::BladeOfTheRuinedKing),
    );
    print_damage(
        "Bilgewater Cutlass active",
        item_damage(&ashe, &garen, ItemId::BilgewaterCutlass),
    );
    print_damage(
        "Ignite",
        summoner_spell_damage(&ashe, &garen, SummonerSpell::Ignite),
    );

    separator("SNAPSHOT HAND-OFF");

    // The snapshot is the whole boundary contract with the game-state
    // layer; show that it survives a serialization round trip.
    match serde_json::to_string_pretty(&ashe) {
        Ok(json) => {
            println!("{}", json);
            match serde_json::from_str::<StatSnapshot>(&json) {
                Ok(back) => println!("\n  Round trip ok: {} level {}", back.champion, back.level),
                Err(e) => println!("\n  Round trip failed: {}", e),
            }
        }
        Err(e) => println!("  Serialization failed: {}", e),
    }
}
