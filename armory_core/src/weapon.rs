use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of base attack a broken weapon still deals
pub const BROKEN_DAMAGE_FACTOR: f64 = 0.2;

/// A held weapon whose output depends on its remaining durability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name (decorated for enhanced weapons)
    pub name: String,
    /// Base attack power
    pub attack: u32,
    /// Remaining structural integrity, never below zero
    pub durability: u32,
    /// Reach of the weapon. Part of its identity, not used by combat math
    pub range: u32,
    /// Whether this weapon came out of the enhancement factory
    #[serde(default)]
    pub enhanced: bool,
}

impl Weapon {
    /// Create a new (non-enhanced) weapon
    pub fn new(name: impl Into<String>, attack: u32, durability: u32, range: u32) -> Self {
        Weapon {
            name: name.into(),
            attack,
            durability,
            range,
            enhanced: false,
        }
    }

    /// Wear the weapon down by `amount`, stopping at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.durability = self.durability.saturating_sub(amount);
    }

    /// Effective attack with the default broken-weapon factor
    ///
    /// Combat goes through the combatant, which passes the configured
    /// factor to [`Weapon::damage_scaled`] instead.
    pub fn damage(&self) -> u32 {
        self.damage_scaled(BROKEN_DAMAGE_FACTOR)
    }

    /// Effective attack: full while durability remains, otherwise
    /// `attack * broken_factor` rounded to the nearest integer
    pub fn damage_scaled(&self, broken_factor: f64) -> u32 {
        if self.durability > 0 {
            self.attack
        } else {
            scale(self.attack, broken_factor)
        }
    }

    pub fn is_broken(&self) -> bool {
        self.durability == 0
    }
}

/// Scale a stat by a factor, rounding half away from zero
pub fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round().max(0.0) as u32
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (atk {}, dur {}", self.name, self.attack, self.durability)?;
        if self.is_broken() {
            write!(f, ", broken")?;
        }
        write!(f, ")")
    }
}
