//! Item active/proc damage table

use crate::mitigation::calculate_damage;
use crate::snapshot::StatSnapshot;
use crate::types::DamageType::{Magical, Physical};
use crate::types::ItemId;

/// Effective damage of one item active or proc
///
/// Fixed per-item formulas; every result is run through the mitigation
/// pipeline with the item's damage type. Spellblade items key off BASE
/// attack damage by design.
pub fn item_damage(source: &StatSnapshot, target: &StatSnapshot, item: ItemId) -> f64 {
    let (damage_type, raw) = match item {
        ItemId::BilgewaterCutlass => (Magical, 100.0),
        // On-hit: share of the target's current health, floored
        ItemId::BladeOfTheRuinedKing => (Physical, (0.08 * target.health).max(10.0)),
        ItemId::Tiamat | ItemId::RavenousHydra => {
            (Physical, 0.6 * source.total_attack_damage())
        }
        ItemId::TitanicHydra => (Physical, 20.0 + 0.01 * source.max_health),
        ItemId::HextechGunblade => (Magical, 150.0 + 0.4 * source.ability_power()),
        ItemId::Sheen => (Physical, source.base_attack_damage),
        ItemId::TrinityForce => (Physical, 2.0 * source.base_attack_damage),
        ItemId::IcebornGauntlet => (Physical, 1.25 * source.base_attack_damage),
        ItemId::LichBane => (Magical, source.base_attack_damage + 0.5 * source.ability_power()),
        // Burn over its full duration
        ItemId::LiandrysTorment => (Magical, 0.05 * target.health),
        ItemId::BlackfireTorch => (Magical, 0.035 * target.max_health),
        ItemId::FrostQueensClaim => (Magical, 50.0 + 5.0 * source.level as f64),
    };

    calculate_damage(source, target, damage_type, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheen_uses_base_attack_damage_only() {
        let source = StatSnapshot::hero("Ezreal").with_attack_damage(70.0, 150.0);
        let target = StatSnapshot::hero("Garen");

        // Bonus AD must not leak into the spellblade proc
        assert!((item_damage(&source, &target, ItemId::Sheen) - 70.0).abs() < 1e-9);
        assert!((item_damage(&source, &target, ItemId::TrinityForce) - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_ruined_king_scales_with_current_health() {
        let source = StatSnapshot::hero("Vayne");
        let healthy = StatSnapshot::hero("Chogath").with_health(4000.0, 4000.0);
        let wounded = StatSnapshot::hero("Chogath").with_health(50.0, 4000.0);

        let vs_healthy = item_damage(&source, &healthy, ItemId::BladeOfTheRuinedKing);
        let vs_wounded = item_damage(&source, &wounded, ItemId::BladeOfTheRuinedKing);
        assert!((vs_healthy - 320.0).abs() < 1e-9);
        // Floored at 10
        assert!((vs_wounded - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_item_damage_is_mitigated() {
        let source = StatSnapshot::hero("Katarina");
        let target = StatSnapshot::hero("Galio").with_resists(0.0, 100.0);

        // 100 magic vs 100 spell block halves
        let dealt = item_damage(&source, &target, ItemId::BilgewaterCutlass);
        assert!((dealt - 50.0).abs() < 1e-9);
    }
}
