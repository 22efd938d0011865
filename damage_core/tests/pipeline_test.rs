//! Integration test: Build registry -> Evaluate formulas -> Mitigate
//!
//! This test validates the full flow from registry construction to
//! effective damage, plus whole-table sweeps over every registered
//! champion formula.

use damage_core::{
    auto_attack_damage, calculate_damage, item_damage, mitigated_spell_damage, spell_damage,
    summoner_spell_damage, DamageError, DamageRegistry, DamageType, ItemId, MasteryPage,
    SpellSlot, StatSnapshot, SummonerSpell, UnitCategory,
};
use proptest::prelude::*;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print a damage line
fn print_damage(label: &str, amount: f64) {
    println!("  {:<40} {:>10.2}", label, amount);
}

#[test]
fn test_full_registry_to_damage_flow() {
    separator("INTEGRATION TEST: Registry -> Formula -> Mitigation");

    // =========================================================================
    // STEP 1: Build the registry
    // =========================================================================
    separator("STEP 1: Building the Damage Registry");

    let registry = DamageRegistry::build();
    let champion_count = registry.champions().count();
    println!("  Registered champions: {}", champion_count);
    assert!(champion_count >= 100);

    // =========================================================================
    // STEP 2: Snapshot two mid-game champions
    // =========================================================================
    separator("STEP 2: Building Stat Snapshots");

    let ashe = StatSnapshot::hero("Ashe")
        .with_level(9)
        .with_attack_damage(75.0, 45.0)
        .with_health(1100.0, 1400.0)
        .with_spell_level(SpellSlot::W, 4)
        .with_spell_level(SpellSlot::R, 1);

    let garen = StatSnapshot::hero("Garen")
        .with_level(9)
        .with_resists(80.0, 45.0)
        .with_health(1600.0, 2000.0);

    println!("  Source: {} (total AD {:.0})", ashe.champion, ashe.total_attack_damage());
    println!("  Target: {} (armor {:.0})", garen.champion, garen.armor);

    // =========================================================================
    // STEP 3: Ability damage, raw and mitigated
    // =========================================================================
    separator("STEP 3: Ability Damage");

    let raw = spell_damage(&registry, &ashe, &garen, SpellSlot::W, 0).unwrap();
    // Rank 4: 70 base plus total AD
    assert!((raw - 190.0).abs() < 1e-9);
    print_damage("Volley raw", raw);

    let dealt = mitigated_spell_damage(&registry, &ashe, &garen, SpellSlot::W, 0).unwrap();
    // 80 armor: factor 100/180
    assert!((dealt - raw * 100.0 / 180.0).abs() < 1e-9);
    print_damage("Volley vs 80 armor", dealt);

    // =========================================================================
    // STEP 4: Basic attacks, items, summoners
    // =========================================================================
    separator("STEP 4: Attacks, Items, Summoner Spells");

    let auto = auto_attack_damage(&registry, &ashe, &garen, true);
    assert!((auto - 120.0 * 100.0 / 180.0).abs() < 1e-9);
    print_damage("Basic attack", auto);

    let botrk = item_damage(&ashe, &garen, ItemId::BladeOfTheRuinedKing);
    assert!((botrk - 0.08 * 1600.0 * 100.0 / 180.0).abs() < 1e-9);
    print_damage("Ruined King on-hit", botrk);

    let ignite = summoner_spell_damage(&ashe, &garen, SummonerSpell::Ignite);
    assert!((ignite - 230.0).abs() < 1e-9);
    print_damage("Ignite", ignite);
}

// === Whole-table sweeps ===

#[test]
fn test_no_duplicate_slot_stage_pairs() {
    let registry = DamageRegistry::build();

    for champion in registry.champions() {
        let formulas = registry.spells_for(champion).unwrap();
        for (i, a) in formulas.iter().enumerate() {
            for b in &formulas[i + 1..] {
                assert!(
                    !(a.slot == b.slot && a.stage == b.stage),
                    "{} registers {:?} stage {} twice",
                    champion,
                    a.slot,
                    a.stage
                );
            }
        }
    }
}

#[test]
fn test_every_formula_evaluates_over_its_rank_range() {
    let registry = DamageRegistry::build();

    let source = StatSnapshot::hero("")
        .with_level(12)
        .with_attack_damage(90.0, 60.0)
        .with_ability_power(150.0)
        .with_health(1500.0, 2200.0)
        .with_mana(1000.0);
    let target = StatSnapshot::hero("")
        .with_level(12)
        .with_resists(70.0, 50.0)
        .with_health(1800.0, 2400.0);

    for champion in registry.champions() {
        let mut source = source.clone();
        source.champion = champion.to_string();

        for formula in registry.spells_for(champion).unwrap() {
            // Rank 0 must exist for every registered formula
            let value = formula
                .damage(&source, &target, 0)
                .unwrap_or_else(|e| panic!("{} {:?}: {}", champion, formula.slot, e));
            assert!(
                value.is_finite() && value >= 0.0,
                "{} {:?} stage {} rank 0 produced {}",
                champion,
                formula.slot,
                formula.stage,
                value
            );

            // Higher ranks either evaluate or fail with a clean range error
            for rank in 1..5 {
                match formula.damage(&source, &target, rank) {
                    Ok(v) => assert!(v.is_finite() && v >= 0.0),
                    Err(DamageError::RankOutOfRange { .. }) => {}
                    Err(e) => panic!("{} {:?} rank {}: {}", champion, formula.slot, rank, e),
                }
            }
        }
    }
}

#[test]
fn test_pinned_champion_values() {
    let registry = DamageRegistry::build();
    let target = StatSnapshot::hero("Garen");

    // Ashe W rank 1, no bonus AD: base 40 plus base attack damage
    let ashe = StatSnapshot::hero("Ashe")
        .with_attack_damage(61.0, 0.0)
        .with_spell_level(SpellSlot::W, 1);
    let raw = spell_damage(&registry, &ashe, &target, SpellSlot::W, 0).unwrap();
    assert!((raw - 101.0).abs() < 1e-9);

    // Chogath R is flat true damage: it ignores the target entirely
    let cho = StatSnapshot::hero("Chogath").with_spell_level(SpellSlot::R, 2);
    let tanky = StatSnapshot::hero("Rammus").with_resists(300.0, 200.0);
    let raw = spell_damage(&registry, &cho, &tanky, SpellSlot::R, 0).unwrap();
    let dealt = calculate_damage(&cho, &tanky, DamageType::True, raw);
    assert!((dealt - raw).abs() < f64::EPSILON);
}

#[test]
fn test_turret_passive_order_regression() {
    let turret = StatSnapshot::unit(UnitCategory::Turret);
    let siege = StatSnapshot::unit(UnitCategory::SiegeMinion).with_resists(0.0, 0.0);
    let hero = StatSnapshot::hero("Sion").with_resists(0.0, 0.0);

    // Vs siege minions turrets deal 70% damage
    let dealt = calculate_damage(&turret, &siege, DamageType::Physical, 100.0);
    assert!((dealt - 70.0).abs() < 1e-9);

    // Vs heroes turrets deal 105% damage
    let dealt = calculate_damage(&turret, &hero, DamageType::Physical, 100.0);
    assert!((dealt - 105.0).abs() < 1e-9);
}

#[test]
fn test_executioner_threshold_through_pipeline() {
    let source = StatSnapshot::hero("Zed").with_mastery(MasteryPage::Offense, 100, 1);
    let healthy = StatSnapshot::hero("Lux").with_health(1000.0, 1000.0);
    let low = StatSnapshot::hero("Lux").with_health(150.0, 1000.0);

    let vs_healthy = calculate_damage(&source, &healthy, DamageType::Physical, 100.0);
    let vs_low = calculate_damage(&source, &low, DamageType::Physical, 100.0);

    assert!((vs_healthy - 100.0).abs() < 1e-9);
    assert!((vs_low - 105.0).abs() < 1e-9);
}

// === Algebraic properties of the mitigation pipeline ===

proptest! {
    #[test]
    fn prop_physical_damage_decreases_with_armor(
        armor_low in 0.0f64..300.0,
        extra in 1.0f64..300.0,
        raw in 1.0f64..2000.0,
    ) {
        let source = StatSnapshot::hero("Riven");
        let soft = StatSnapshot::hero("Sona").with_resists(armor_low, 0.0);
        let hard = StatSnapshot::hero("Sona").with_resists(armor_low + extra, 0.0);

        let vs_soft = calculate_damage(&source, &soft, DamageType::Physical, raw);
        let vs_hard = calculate_damage(&source, &hard, DamageType::Physical, raw);
        prop_assert!(vs_hard < vs_soft);
    }

    #[test]
    fn prop_true_damage_ignores_all_resists(
        armor in -200.0f64..500.0,
        spell_block in -200.0f64..500.0,
        raw in 0.0f64..2000.0,
    ) {
        let source = StatSnapshot::hero("Olaf");
        let target = StatSnapshot::hero("Rammus").with_resists(armor, spell_block);

        let dealt = calculate_damage(&source, &target, DamageType::True, raw);
        prop_assert!((dealt - raw).abs() < 1e-9);
    }

    #[test]
    fn prop_negative_armor_amplifies(
        armor in -300.0f64..-1.0,
        raw in 1.0f64..2000.0,
    ) {
        let source = StatSnapshot::hero("Corki");
        let target = StatSnapshot::hero("Sona").with_resists(armor, 0.0);

        let dealt = calculate_damage(&source, &target, DamageType::Physical, raw);
        prop_assert!(dealt > raw);
        // The amplification factor approaches but never reaches 2
        prop_assert!(dealt < 2.0 * raw);
    }

    #[test]
    fn prop_over_penetration_clamps_at_raw(
        armor in 0.0f64..50.0,
        flat_pen in 100.0f64..400.0,
        raw in 1.0f64..2000.0,
    ) {
        let mut source = StatSnapshot::hero("Talon");
        source.flat_armor_penetration = flat_pen;
        let target = StatSnapshot::hero("Sona").with_resists(armor, 0.0);

        let dealt = calculate_damage(&source, &target, DamageType::Physical, raw);
        prop_assert!((dealt - raw).abs() < 1e-9);
    }
}
