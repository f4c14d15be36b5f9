//! Combatant - A stat-bearing actor holding an optional weapon

mod defense;
mod movement;

pub use movement::Direction;

use crate::config::constants;
use crate::view::CombatantView;
use armory_core::{scale, Weapon};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Numeric stats of a combatant
///
/// All stats are unsigned, so a negative stat cannot be constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Remaining life. Zero means dead
    pub life: u32,
    /// Not used by combat math
    pub magic: u32,
    /// Turn-order key, higher acts first
    pub speed: u32,
    /// Attack stat, only used at the unarmed floor
    pub attack: u32,
    /// Chance (in percent) for a defender to block this combatant
    pub agility: u32,
    /// Chance (in percent) to dodge an incoming attack
    pub luck: u32,
}

/// An autonomous fighter in the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    /// Flavor text
    pub description: String,
    pub stats: Stats,
    /// Exclusively owned weapon, if any
    pub weapon: Option<Weapon>,
    /// Position on the 1-D battle line
    pub position: i32,
    /// Whether this combatant came out of the enhancement factory
    pub enhanced: bool,
}

impl Combatant {
    /// Create an unarmed combatant at position 0
    pub fn new(name: impl Into<String>, description: impl Into<String>, stats: Stats) -> Self {
        Combatant {
            name: name.into(),
            description: description.into(),
            stats,
            weapon: None,
            position: 0,
            enhanced: false,
        }
    }

    /// Arm the combatant
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Place the combatant on the battle line
    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn life(&self) -> u32 {
        self.stats.life
    }

    /// Damage output: the weapon's effective attack, or a fraction of the
    /// attack stat when unarmed
    pub fn damage(&self) -> u32 {
        let constants = constants();
        match &self.weapon {
            Some(weapon) => weapon.damage_scaled(constants.broken_weapon_factor),
            None => scale(self.stats.attack, constants.unarmed_factor),
        }
    }

    /// Lose `amount` life, stopping at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.stats.life = self.stats.life.saturating_sub(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.stats.life == 0
    }

    /// Whether a weapon is present and not broken
    ///
    /// Unlike [`Combatant::damage`], an unarmed combatant fails this check.
    pub fn has_usable_weapon(&self) -> bool {
        self.weapon.as_ref().is_some_and(|w| !w.is_broken())
    }

    /// Pick a random living enemy from `roster`
    ///
    /// Returns the roster index of the chosen enemy, or `None` if every other
    /// combatant is dead. `self` is recognised by address, so a combatant is
    /// never chosen as its own enemy.
    pub fn choose_enemy(&self, roster: &[Combatant], rng: &mut impl Rng) -> Option<usize> {
        let enemies: Vec<usize> = roster
            .iter()
            .enumerate()
            .filter(|(_, other)| !std::ptr::eq(*other, self) && !other.is_dead())
            .map(|(i, _)| i)
            .collect();

        enemies.choose(rng).copied()
    }

    /// Observation snapshot for display layers
    pub fn view(&self) -> CombatantView {
        CombatantView::from(self)
    }
}
