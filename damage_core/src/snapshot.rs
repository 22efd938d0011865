//! StatSnapshot - Combat-relevant stats for one unit at one instant
//!
//! A snapshot is a value read once per calculation call. The core never
//! mutates it and never caches it across calls; keeping it fresh is the
//! responsibility of the game-state layer that built it.

use crate::types::{CombatType, Mastery, MasteryPage, SpellSlot, Team, UnitCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Combat stats for one unit, frozen at the moment of calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSnapshot {
    /// Champion display name; empty for non-hero units
    pub champion: String,
    pub category: UnitCategory,
    pub combat_type: CombatType,
    pub team: Team,
    pub level: u32,

    // === Offense ===
    /// Attack damage before any item/buff contribution
    pub base_attack_damage: f64,
    /// Bonus attack damage from items, buffs, runes
    pub flat_physical_damage_mod: f64,
    /// Multiplicative attack damage bonus (1.0 = no bonus)
    pub percent_physical_damage_mod: f64,
    /// Ability power
    pub flat_magic_damage_mod: f64,
    /// Amplifies magic damage this unit *takes* (source quirk kept:
    /// the pipeline reads it off the target)
    pub percent_magic_damage_mod: f64,

    // === Defense ===
    pub armor: f64,
    /// Magic resist
    pub spell_block: f64,
    /// Fractional reduction applied to incoming magic damage
    pub percent_magic_reduction: f64,

    // === Penetration ===
    /// Fraction of target armor that still applies (1.0 = no pen)
    pub percent_armor_penetration: f64,
    pub flat_armor_penetration: f64,
    /// Fraction of target spell block that still applies
    pub percent_magic_penetration: f64,
    pub flat_magic_penetration: f64,

    // === Resources ===
    pub health: f64,
    pub max_health: f64,
    pub max_mana: f64,
    /// Health regenerated per second
    pub health_regen: f64,

    // === State ===
    /// Normalized buff identifier -> stack count
    pub buffs: HashMap<String, u32>,
    /// Mastery page selections
    pub masteries: Vec<Mastery>,
    /// 1-based ability level per slot (Q..R); 0 = not learned
    pub spell_levels: [u32; 4],
}

impl Default for StatSnapshot {
    fn default() -> Self {
        StatSnapshot {
            champion: String::new(),
            category: UnitCategory::Hero,
            combat_type: CombatType::Melee,
            team: Team::Order,
            level: 1,
            base_attack_damage: 0.0,
            flat_physical_damage_mod: 0.0,
            percent_physical_damage_mod: 1.0,
            flat_magic_damage_mod: 0.0,
            percent_magic_damage_mod: 0.0,
            armor: 0.0,
            spell_block: 0.0,
            percent_magic_reduction: 0.0,
            percent_armor_penetration: 1.0,
            flat_armor_penetration: 0.0,
            percent_magic_penetration: 1.0,
            flat_magic_penetration: 0.0,
            health: 0.0,
            max_health: 0.0,
            max_mana: 0.0,
            health_regen: 0.0,
            buffs: HashMap::new(),
            masteries: Vec::new(),
            spell_levels: [0; 4],
        }
    }
}

impl StatSnapshot {
    /// Create an empty hero snapshot for the given champion
    pub fn hero(champion: &str) -> Self {
        StatSnapshot {
            champion: champion.to_string(),
            ..Default::default()
        }
    }

    /// Create a snapshot for a non-hero unit
    pub fn unit(category: UnitCategory) -> Self {
        StatSnapshot {
            category,
            ..Default::default()
        }
    }

    // === Builder-style setters for construction by the game-state layer
    // and tests ===

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_attack_damage(mut self, base: f64, bonus: f64) -> Self {
        self.base_attack_damage = base;
        self.flat_physical_damage_mod = bonus;
        self
    }

    pub fn with_ability_power(mut self, ap: f64) -> Self {
        self.flat_magic_damage_mod = ap;
        self
    }

    pub fn with_resists(mut self, armor: f64, spell_block: f64) -> Self {
        self.armor = armor;
        self.spell_block = spell_block;
        self
    }

    pub fn with_health(mut self, current: f64, max: f64) -> Self {
        self.health = current;
        self.max_health = max;
        self
    }

    pub fn with_mana(mut self, max_mana: f64) -> Self {
        self.max_mana = max_mana;
        self
    }

    pub fn with_combat_type(mut self, combat_type: CombatType) -> Self {
        self.combat_type = combat_type;
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }

    pub fn with_buff(mut self, name: &str, stacks: u32) -> Self {
        self.buffs.insert(name.to_string(), stacks);
        self
    }

    pub fn with_mastery(mut self, page: MasteryPage, id: u32, points: u32) -> Self {
        self.masteries.push(Mastery::new(page, id, points));
        self
    }

    pub fn with_spell_level(mut self, slot: SpellSlot, level: u32) -> Self {
        self.spell_levels[slot.index()] = level;
        self
    }

    // === Combat accessors used by formulas and the pipeline ===

    /// Total attack damage: (base + bonus) scaled by the percent mod
    pub fn total_attack_damage(&self) -> f64 {
        (self.base_attack_damage + self.flat_physical_damage_mod)
            * self.percent_physical_damage_mod
    }

    /// Bonus attack damage only (item/buff/rune contribution)
    pub fn bonus_attack_damage(&self) -> f64 {
        self.flat_physical_damage_mod
    }

    /// Ability power
    pub fn ability_power(&self) -> f64 {
        self.flat_magic_damage_mod
    }

    /// Current health as a fraction of max (0.0 when max is unknown)
    pub fn health_percent(&self) -> f64 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            (self.health / self.max_health).clamp(0.0, 1.0)
        }
    }

    /// Health missing from max, never negative
    pub fn missing_health(&self) -> f64 {
        (self.max_health - self.health).max(0.0)
    }

    pub fn has_buff(&self, name: &str) -> bool {
        self.buffs.contains_key(name)
    }

    /// Stack count of a buff, 0 if absent
    pub fn buff_stacks(&self, name: &str) -> u32 {
        self.buffs.get(name).copied().unwrap_or(0)
    }

    /// Find a mastery selection with at least one point invested
    pub fn mastery(&self, page: MasteryPage, id: u32) -> Option<&Mastery> {
        self.masteries
            .iter()
            .find(|m| m.page == page && m.id == id && m.points > 0)
    }

    /// 1-based ability level for a slot (0 = not learned)
    pub fn spell_level(&self, slot: SpellSlot) -> u32 {
        self.spell_levels[slot.index()]
    }

    pub fn is_melee(&self) -> bool {
        self.combat_type == CombatType::Melee
    }

    pub fn is_hero(&self) -> bool {
        self.category == UnitCategory::Hero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_attack_damage() {
        let snap = StatSnapshot::hero("Ashe").with_attack_damage(60.0, 40.0);
        assert!((snap.total_attack_damage() - 100.0).abs() < f64::EPSILON);
        assert!((snap.bonus_attack_damage() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_physical_mod_scales_total() {
        let mut snap = StatSnapshot::hero("Olaf").with_attack_damage(100.0, 0.0);
        snap.percent_physical_damage_mod = 1.1;
        assert!((snap.total_attack_damage() - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_health_percent_guards_zero_max() {
        let snap = StatSnapshot::unit(UnitCategory::Minion);
        assert_eq!(snap.health_percent(), 0.0);

        let snap = snap.with_health(25.0, 100.0);
        assert!((snap.health_percent() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_buff_lookup() {
        let snap = StatSnapshot::hero("Nasus").with_buff("nasusqstacks", 120);
        assert!(snap.has_buff("nasusqstacks"));
        assert_eq!(snap.buff_stacks("nasusqstacks"), 120);
        assert_eq!(snap.buff_stacks("missing"), 0);
    }

    #[test]
    fn test_mastery_requires_points() {
        let snap = StatSnapshot::hero("Riven").with_mastery(MasteryPage::Offense, 146, 0);
        assert!(snap.mastery(MasteryPage::Offense, 146).is_none());

        let snap = snap.with_mastery(MasteryPage::Offense, 146, 1);
        assert!(snap.mastery(MasteryPage::Offense, 146).is_some());
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = StatSnapshot::hero("Ashe")
            .with_level(7)
            .with_attack_damage(61.0, 25.0)
            .with_spell_level(SpellSlot::W, 3)
            .with_buff("frost", 1);
        let json = serde_json::to_string(&snap).unwrap();
        let back: StatSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.champion, "Ashe");
        assert_eq!(back.spell_level(SpellSlot::W), 3);
        assert_eq!(back.buff_stacks("frost"), 1);
    }
}
