//! Enhanced weapon factory

use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};

/// Name prefix given to enhanced weapons
pub const ENHANCED_PREFIX: &str = "Enhanced";

/// Additive bonuses granted to an enhanced weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponBonus {
    #[serde(default = "default_attack_bonus")]
    pub attack: u32,
    #[serde(default = "default_durability_bonus")]
    pub durability: u32,
}

impl Default for WeaponBonus {
    fn default() -> Self {
        WeaponBonus {
            attack: default_attack_bonus(),
            durability: default_durability_bonus(),
        }
    }
}

fn default_attack_bonus() -> u32 {
    10
}
fn default_durability_bonus() -> u32 {
    200
}

/// Build the enhanced form of `base` with the default bonus table
///
/// Ignores any configured arena constants. The roster generator applies
/// the configured table through [`enhance_weapon_with`].
pub fn enhance_weapon(base: Weapon) -> Weapon {
    enhance_weapon_with(base, &WeaponBonus::default())
}

/// Build the enhanced form of `base` with a custom bonus table
///
/// The base weapon is consumed. Enhancement does not stack: an already
/// enhanced weapon is returned unchanged.
pub fn enhance_weapon_with(base: Weapon, bonus: &WeaponBonus) -> Weapon {
    if base.enhanced {
        return base;
    }

    Weapon {
        name: format!("{} {}", ENHANCED_PREFIX, base.name),
        attack: base.attack.saturating_add(bonus.attack),
        durability: base.durability.saturating_add(bonus.durability),
        range: base.range,
        enhanced: true,
    }
}

impl Weapon {
    /// Consume this weapon and return its enhanced form
    pub fn enhanced(self) -> Weapon {
        enhance_weapon(self)
    }
}
