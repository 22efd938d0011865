//! Tunable combat constants

use crate::mitigation::constants as defaults;
use serde::{Deserialize, Serialize};

/// Tunable constants for the mitigation pipeline
///
/// Defaults match the live-game values baked into
/// `mitigation::constants`; a TOML file can override any subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub turret: TurretConstants,
    #[serde(default)]
    pub masteries: MasteryConstants,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            turret: TurretConstants::default(),
            masteries: MasteryConstants::default(),
        }
    }
}

impl CombatConstants {
    /// Parse the embedded default `combat.toml`, falling back to the
    /// built-in values if it fails to parse
    ///
    /// The asset itself is asserted to parse cleanly by a unit test, so
    /// the fallback only matters for a corrupted build.
    pub fn embedded() -> Self {
        let toml = include_str!("../../config/combat.toml");
        super::parse_toml(toml).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretConstants {
    /// Percent armor penetration forced on turret sources
    #[serde(default = "default_turret_pen")]
    pub percent_penetration: f64,
    /// Turret damage multiplier vs siege minions
    #[serde(default = "default_turret_vs_siege")]
    pub vs_siege_minion: f64,
    /// Turret damage multiplier vs normal lane minions
    #[serde(default = "default_turret_vs_minion")]
    pub vs_minion: f64,
    /// Turret damage multiplier vs champions
    #[serde(default = "default_turret_vs_hero")]
    pub vs_hero: f64,
}

impl Default for TurretConstants {
    fn default() -> Self {
        TurretConstants {
            percent_penetration: defaults::TURRET_PERCENT_PEN,
            vs_siege_minion: defaults::TURRET_VS_SIEGE_MINION,
            vs_minion: defaults::TURRET_VS_MINION,
            vs_hero: defaults::TURRET_VS_HERO,
        }
    }
}

fn default_turret_pen() -> f64 {
    defaults::TURRET_PERCENT_PEN
}
fn default_turret_vs_siege() -> f64 {
    defaults::TURRET_VS_SIEGE_MINION
}
fn default_turret_vs_minion() -> f64 {
    defaults::TURRET_VS_MINION
}
fn default_turret_vs_hero() -> f64 {
    defaults::TURRET_VS_HERO
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryConstants {
    #[serde(default = "default_des_melee")]
    pub double_edged_sword_melee: f64,
    #[serde(default = "default_des_ranged")]
    pub double_edged_sword_ranged: f64,
    #[serde(default = "default_des_taken_melee")]
    pub double_edged_sword_taken_melee: f64,
    #[serde(default = "default_des_taken_ranged")]
    pub double_edged_sword_taken_ranged: f64,
    #[serde(default = "default_havoc")]
    pub havoc: f64,
    #[serde(default = "default_executioner")]
    pub executioner: f64,
    /// Executioner threshold percent: base + per_point * points
    #[serde(default = "default_executioner_base")]
    pub executioner_threshold_base: f64,
    #[serde(default = "default_executioner_per_point")]
    pub executioner_threshold_per_point: f64,
    #[serde(default = "default_butcher")]
    pub butcher_bonus: f64,
    #[serde(default = "default_block")]
    pub block_per_point: f64,
    #[serde(default = "default_tough_skin")]
    pub tough_skin_per_point: f64,
    #[serde(default = "default_unyielding_melee")]
    pub unyielding_melee: f64,
    #[serde(default = "default_unyielding_ranged")]
    pub unyielding_ranged: f64,
}

impl Default for MasteryConstants {
    fn default() -> Self {
        MasteryConstants {
            double_edged_sword_melee: defaults::DOUBLE_EDGED_SWORD_MELEE,
            double_edged_sword_ranged: defaults::DOUBLE_EDGED_SWORD_RANGED,
            double_edged_sword_taken_melee: defaults::DOUBLE_EDGED_SWORD_TAKEN_MELEE,
            double_edged_sword_taken_ranged: defaults::DOUBLE_EDGED_SWORD_TAKEN_RANGED,
            havoc: defaults::HAVOC,
            executioner: defaults::EXECUTIONER,
            executioner_threshold_base: defaults::EXECUTIONER_THRESHOLD_BASE,
            executioner_threshold_per_point: defaults::EXECUTIONER_THRESHOLD_PER_POINT,
            butcher_bonus: defaults::BUTCHER_BONUS,
            block_per_point: defaults::BLOCK_PER_POINT,
            tough_skin_per_point: defaults::TOUGH_SKIN_PER_POINT,
            unyielding_melee: defaults::UNYIELDING_MELEE,
            unyielding_ranged: defaults::UNYIELDING_RANGED,
        }
    }
}

fn default_des_melee() -> f64 {
    defaults::DOUBLE_EDGED_SWORD_MELEE
}
fn default_des_ranged() -> f64 {
    defaults::DOUBLE_EDGED_SWORD_RANGED
}
fn default_des_taken_melee() -> f64 {
    defaults::DOUBLE_EDGED_SWORD_TAKEN_MELEE
}
fn default_des_taken_ranged() -> f64 {
    defaults::DOUBLE_EDGED_SWORD_TAKEN_RANGED
}
fn default_havoc() -> f64 {
    defaults::HAVOC
}
fn default_executioner() -> f64 {
    defaults::EXECUTIONER
}
fn default_executioner_base() -> f64 {
    defaults::EXECUTIONER_THRESHOLD_BASE
}
fn default_executioner_per_point() -> f64 {
    defaults::EXECUTIONER_THRESHOLD_PER_POINT
}
fn default_butcher() -> f64 {
    defaults::BUTCHER_BONUS
}
fn default_block() -> f64 {
    defaults::BLOCK_PER_POINT
}
fn default_tough_skin() -> f64 {
    defaults::TOUGH_SKIN_PER_POINT
}
fn default_unyielding_melee() -> f64 {
    defaults::UNYIELDING_MELEE
}
fn default_unyielding_ranged() -> f64 {
    defaults::UNYIELDING_RANGED
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_match_live_values() {
        let constants = CombatConstants::default();
        assert!((constants.turret.percent_penetration - 0.7).abs() < f64::EPSILON);
        assert!((constants.turret.vs_siege_minion - 0.7).abs() < f64::EPSILON);
        assert!((constants.turret.vs_hero - 1.05).abs() < f64::EPSILON);
        assert!((constants.masteries.havoc - 1.03).abs() < f64::EPSILON);
        assert!((constants.masteries.butcher_bonus - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml = r#"
[turret]
vs_hero = 1.10

[masteries]
havoc = 1.05
"#;
        let constants: CombatConstants = toml::from_str(toml).unwrap();
        assert!((constants.turret.vs_hero - 1.10).abs() < f64::EPSILON);
        // Untouched fields keep their defaults
        assert!((constants.turret.percent_penetration - 0.7).abs() < f64::EPSILON);
        assert!((constants.masteries.havoc - 1.05).abs() < f64::EPSILON);
        assert!((constants.masteries.executioner - 1.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let constants: CombatConstants = toml::from_str("").unwrap();
        assert!((constants.masteries.unyielding_melee - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_embedded_config_parses() {
        let constants = CombatConstants::embedded();
        assert!((constants.turret.percent_penetration - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_embedded_asset_parses_cleanly() {
        // A malformed asset would fall back to defaults at runtime;
        // this catches it at test time instead
        let toml = include_str!("../../config/combat.toml");
        let parsed: Result<CombatConstants, _> = crate::config::parse_toml(toml);
        assert!(parsed.is_ok(), "embedded combat.toml failed to parse");
    }

    #[test]
    fn test_load_toml_reads_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/combat.toml");
        let constants: CombatConstants = crate::config::load_toml(&path).unwrap();
        assert!((constants.turret.vs_hero - 1.05).abs() < f64::EPSILON);
        assert!((constants.masteries.havoc - 1.03).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_toml_missing_file_is_io_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/no_such.toml");
        let err = crate::config::load_toml::<CombatConstants>(&path).unwrap_err();
        assert!(matches!(err, crate::config::ConfigError::IoError(_)));
    }
}
