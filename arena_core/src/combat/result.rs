//! Attack outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of an attacker-driven strike ([`Combatant::try_attack`])
///
/// [`Combatant::try_attack`]: crate::Combatant::try_attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AttackOutcome {
    /// The strike landed for `damage`
    Hit { damage: u32 },
    /// The attacker had no usable weapon and dealt nothing
    WeaponBroken,
}

impl AttackOutcome {
    /// Damage applied to the opponent
    pub fn damage(&self) -> u32 {
        match self {
            AttackOutcome::Hit { damage } => *damage,
            AttackOutcome::WeaponBroken => 0,
        }
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::Hit { damage } => write!(f, "Attack dealt {} damage", damage),
            AttackOutcome::WeaponBroken => write!(f, "Weapon is broken!"),
        }
    }
}

/// Result of a defender-driven resolution ([`Combatant::take_attack`])
///
/// [`Combatant::take_attack`]: crate::Combatant::take_attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DefenseOutcome {
    Dodged,
    Blocked,
    /// The attack connected for `damage`
    Hit { damage: u32 },
}

impl DefenseOutcome {
    pub fn damage(&self) -> u32 {
        match self {
            DefenseOutcome::Hit { damage } => *damage,
            _ => 0,
        }
    }
}

impl fmt::Display for DefenseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefenseOutcome::Dodged => write!(f, "dodged"),
            DefenseOutcome::Blocked => write!(f, "blocked"),
            DefenseOutcome::Hit { damage } => write!(f, "{}", damage),
        }
    }
}
