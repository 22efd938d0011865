//! Core types specific to the damage engine

use serde::{Deserialize, Serialize};

/// The three damage categories the mitigation pipeline dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magical,
    True,
}

/// Castable ability slot on a champion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellSlot {
    Q,
    W,
    E,
    R,
}

impl SpellSlot {
    /// Get all ability slots in cast-bar order
    pub fn all() -> &'static [SpellSlot] {
        &[SpellSlot::Q, SpellSlot::W, SpellSlot::E, SpellSlot::R]
    }

    /// Index into a per-slot array (Q=0 .. R=3)
    pub fn index(self) -> usize {
        match self {
            SpellSlot::Q => 0,
            SpellSlot::W => 1,
            SpellSlot::E => 2,
            SpellSlot::R => 3,
        }
    }
}

/// Whether a unit fights in melee range or at range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatType {
    Melee,
    Ranged,
}

/// Explicit unit classification, set at snapshot construction time by
/// the game-state collaborator. The mitigation pipeline branches on
/// this instead of inspecting live object types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Hero,
    /// Regular lane minion
    Minion,
    /// Cannon/siege lane minion (takes reduced turret damage)
    SiegeMinion,
    /// Jungle camp monster
    NeutralMinion,
    Turret,
    Other,
}

impl UnitCategory {
    /// Whether this unit is any kind of minion (lane, siege, or jungle)
    pub fn is_minion(self) -> bool {
        matches!(
            self,
            UnitCategory::Minion | UnitCategory::SiegeMinion | UnitCategory::NeutralMinion
        )
    }
}

/// Map side a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Order,
    Chaos,
    Neutral,
}

/// Mastery tree page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryPage {
    Offense,
    Defense,
    Utility,
}

/// A single mastery selection (page + id + invested points)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mastery {
    pub page: MasteryPage,
    pub id: u32,
    pub points: u32,
}

impl Mastery {
    pub fn new(page: MasteryPage, id: u32, points: u32) -> Self {
        Mastery { page, id, points }
    }
}

/// Mastery ids the passive-modifier table keys off
pub mod mastery_id {
    /// Offense: Double Edged Sword (deal more, take more)
    pub const DOUBLE_EDGED_SWORD: u32 = 65;
    /// Offense: Havoc (+3% damage)
    pub const HAVOC: u32 = 146;
    /// Offense: Executioner (bonus vs low-health champions)
    pub const EXECUTIONER: u32 = 100;
    /// Offense: Butcher (+2 to minions); shares id 65 with Double Edged
    /// Sword on the offense page in the 2015 tree revision
    pub const BUTCHER: u32 = 65;
    /// Defense: Block (-1/-2 from champion basic attacks)
    pub const BLOCK: u32 = 65;
    /// Defense: Tough Skin (reduced damage from neutral monsters)
    pub const TOUGH_SKIN: u32 = 68;
    /// Defense: Unyielding (flat reduction from champions)
    pub const UNYIELDING: u32 = 81;
}

/// Items the fixed item-damage table knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    BilgewaterCutlass,
    BladeOfTheRuinedKing,
    Tiamat,
    RavenousHydra,
    TitanicHydra,
    HextechGunblade,
    Sheen,
    TrinityForce,
    IcebornGauntlet,
    LichBane,
    LiandrysTorment,
    BlackfireTorch,
    FrostQueensClaim,
}

/// Summoner spells with a damage component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummonerSpell {
    Ignite,
    Smite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_order() {
        for (i, slot) in SpellSlot::all().iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_minion_classification() {
        assert!(UnitCategory::Minion.is_minion());
        assert!(UnitCategory::SiegeMinion.is_minion());
        assert!(UnitCategory::NeutralMinion.is_minion());
        assert!(!UnitCategory::Hero.is_minion());
        assert!(!UnitCategory::Turret.is_minion());
    }

    #[test]
    fn test_damage_type_serde() {
        let json = serde_json::to_string(&DamageType::Magical).unwrap();
        assert_eq!(json, "\"magical\"");
        let back: DamageType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DamageType::Magical);
    }
}
