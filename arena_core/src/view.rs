//! Observation snapshots handed to display layers

use crate::combatant::Combatant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an observer may see of a combatant after a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub description: String,
    pub life: u32,
    pub magic: u32,
    pub agility: u32,
    pub luck: u32,
    pub attack: u32,
    /// Weapon name, `None` when unarmed
    pub weapon: Option<String>,
    /// Weapon durability, `None` when unarmed
    pub durability: Option<u32>,
    pub dead: bool,
}

impl From<&Combatant> for CombatantView {
    fn from(combatant: &Combatant) -> Self {
        CombatantView {
            name: combatant.name.clone(),
            description: combatant.description.clone(),
            life: combatant.stats.life,
            magic: combatant.stats.magic,
            agility: combatant.stats.agility,
            luck: combatant.stats.luck,
            attack: combatant.stats.attack,
            weapon: combatant.weapon.as_ref().map(|w| w.name.clone()),
            durability: combatant.weapon.as_ref().map(|w| w.durability),
            dead: combatant.is_dead(),
        }
    }
}

impl fmt::Display for CombatantView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.dead {
            write!(f, " [dead]")?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Life: {}", self.life)?;
        writeln!(f, "  Magic: {}", self.magic)?;
        writeln!(f, "  Agility: {}", self.agility)?;
        writeln!(f, "  Luck: {}", self.luck)?;
        writeln!(f, "  Attack: {}", self.attack)?;
        writeln!(f, "  Weapon: {}", self.weapon.as_deref().unwrap_or("none"))?;
        match self.durability {
            Some(durability) => write!(f, "  Durability: {}", durability),
            None => write!(f, "  Durability: none"),
        }
    }
}
