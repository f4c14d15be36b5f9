//! Enhanced combatant factory
//!
//! An enhanced combatant is an ordinary [`Combatant`] built from a base one
//! with a fixed bonus table. The engine never distinguishes the two.

use crate::combatant::{Combatant, Stats};
use crate::config::constants;
use serde::{Deserialize, Serialize};

/// Description prefix given to enhanced combatants
pub const ENHANCED_DESCRIPTION_PREFIX: &str = "At the peak of their strength:";

/// Additive bonuses granted to an enhanced combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantBonus {
    #[serde(default = "default_life")]
    pub life: u32,
    #[serde(default = "default_magic")]
    pub magic: u32,
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default = "default_attack")]
    pub attack: u32,
    #[serde(default = "default_agility")]
    pub agility: u32,
    #[serde(default = "default_luck")]
    pub luck: u32,
}

impl Default for CombatantBonus {
    fn default() -> Self {
        CombatantBonus {
            life: default_life(),
            magic: default_magic(),
            speed: default_speed(),
            attack: default_attack(),
            agility: default_agility(),
            luck: default_luck(),
        }
    }
}

fn default_life() -> u32 {
    30
}
fn default_magic() -> u32 {
    20
}
fn default_speed() -> u32 {
    10
}
fn default_attack() -> u32 {
    10
}
fn default_agility() -> u32 {
    5
}
fn default_luck() -> u32 {
    5
}

impl CombatantBonus {
    fn apply(&self, stats: Stats) -> Stats {
        Stats {
            life: stats.life.saturating_add(self.life),
            magic: stats.magic.saturating_add(self.magic),
            speed: stats.speed.saturating_add(self.speed),
            attack: stats.attack.saturating_add(self.attack),
            agility: stats.agility.saturating_add(self.agility),
            luck: stats.luck.saturating_add(self.luck),
        }
    }
}

/// Build the enhanced form of `base` using the configured bonus table
pub fn enhance_combatant(base: Combatant) -> Combatant {
    enhance_combatant_with(base, &constants().combatant_bonus)
}

/// Build the enhanced form of `base` with a custom bonus table
///
/// The base combatant is consumed and its weapon moves over unchanged.
/// Enhancement does not stack.
pub fn enhance_combatant_with(base: Combatant, bonus: &CombatantBonus) -> Combatant {
    if base.enhanced {
        return base;
    }

    Combatant {
        name: base.name,
        description: format!("{} {}", ENHANCED_DESCRIPTION_PREFIX, base.description),
        stats: bonus.apply(base.stats),
        weapon: base.weapon,
        position: base.position,
        enhanced: true,
    }
}

impl Combatant {
    /// Consume this combatant and return its enhanced form
    pub fn enhanced(self) -> Combatant {
        enhance_combatant(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::Weapon;

    fn base() -> Combatant {
        Combatant::new(
            "Kahara",
            "Cunning rogue",
            Stats {
                life: 100,
                magic: 30,
                speed: 20,
                attack: 25,
                agility: 10,
                luck: 15,
            },
        )
        .with_weapon(Weapon::new("Dagger", 18, 350, 1))
    }

    #[test]
    fn test_enhanced_stats() {
        let enhanced = enhance_combatant_with(base(), &CombatantBonus::default());

        assert_eq!(
            enhanced.stats,
            Stats {
                life: 130,
                magic: 50,
                speed: 30,
                attack: 35,
                agility: 15,
                luck: 20,
            }
        );
        assert_eq!(enhanced.name, "Kahara");
        assert_eq!(
            enhanced.description,
            "At the peak of their strength: Cunning rogue"
        );
        assert!(enhanced.enhanced);
    }

    #[test]
    fn test_weapon_carried_over() {
        let enhanced = base().enhanced();
        assert_eq!(enhanced.weapon, Some(Weapon::new("Dagger", 18, 350, 1)));
    }

    #[test]
    fn test_enhancement_does_not_stack() {
        let once = base().enhanced();
        let twice = once.clone().enhanced();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_bonus() {
        let bonus = CombatantBonus {
            life: 1,
            magic: 0,
            speed: 0,
            attack: 0,
            agility: 0,
            luck: 0,
        };
        let enhanced = enhance_combatant_with(base(), &bonus);
        assert_eq!(enhanced.stats.life, 101);
        assert_eq!(enhanced.stats.speed, 20);
    }

    #[test]
    fn test_huge_bonus_saturates() {
        let bonus = CombatantBonus {
            life: u32::MAX,
            luck: u32::MAX,
            ..CombatantBonus::default()
        };
        let enhanced = enhance_combatant_with(base(), &bonus);
        assert_eq!(enhanced.stats.life, u32::MAX);
        assert_eq!(enhanced.stats.luck, u32::MAX);
        assert_eq!(enhanced.stats.speed, 30);
    }
}
