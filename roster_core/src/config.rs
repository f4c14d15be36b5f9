use crate::catalog::WeaponCatalog;
use crate::{ConfigError, RosterError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// TOML configuration for a roster file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub stats: StatRanges,
    /// Chance for each weapon, and independently each fighter, to be enhanced
    #[serde(default = "default_enhance_chance")]
    pub enhance_chance: f64,
    #[serde(default)]
    pub weapons: Vec<WeaponConfig>,
    #[serde(default)]
    pub fighters: Vec<FighterConfig>,
}

/// A weapon in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponConfig {
    pub id: String,
    pub name: String,
    pub attack: u32,
    pub durability: u32,
    #[serde(default = "default_weapon_range")]
    pub range: u32,
}

/// A fighter entry. Stats are rolled at generation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Weapon catalogue id. Omit for an unarmed fighter
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub position: i32,
}

/// Inclusive roll ranges for each stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRanges {
    #[serde(default = "default_life")]
    pub life: StatRange,
    #[serde(default = "default_magic")]
    pub magic: StatRange,
    #[serde(default = "default_speed")]
    pub speed: StatRange,
    #[serde(default = "default_attack")]
    pub attack: StatRange,
    #[serde(default = "default_agility")]
    pub agility: StatRange,
    #[serde(default = "default_luck")]
    pub luck: StatRange,
}

impl Default for StatRanges {
    fn default() -> Self {
        StatRanges {
            life: default_life(),
            magic: default_magic(),
            speed: default_speed(),
            attack: default_attack(),
            agility: default_agility(),
            luck: default_luck(),
        }
    }
}

impl StatRanges {
    fn named(&self) -> [(&'static str, StatRange); 6] {
        [
            ("life", self.life),
            ("magic", self.magic),
            ("speed", self.speed),
            ("attack", self.attack),
            ("agility", self.agility),
            ("luck", self.luck),
        ]
    }
}

/// A stat range can be a single value or an inclusive range [min, max]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatRange {
    Single(u32),
    Range([u32; 2]),
}

impl StatRange {
    pub fn min(&self) -> u32 {
        match self {
            StatRange::Single(v) => *v,
            StatRange::Range([min, _]) => *min,
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            StatRange::Single(v) => *v,
            StatRange::Range([_, max]) => *max,
        }
    }
}

fn default_life() -> StatRange {
    StatRange::Range([100, 119])
}
fn default_magic() -> StatRange {
    StatRange::Range([30, 59])
}
fn default_speed() -> StatRange {
    StatRange::Range([20, 29])
}
fn default_attack() -> StatRange {
    StatRange::Range([25, 34])
}
fn default_agility() -> StatRange {
    StatRange::Range([10, 19])
}
fn default_luck() -> StatRange {
    StatRange::Range([15, 24])
}
fn default_enhance_chance() -> f64 {
    0.2
}
fn default_weapon_range() -> u32 {
    1
}

impl RosterConfig {
    /// The built-in four-fighter roster
    pub fn reference() -> Self {
        let weapon = |id: &str, name: &str, attack, durability, range| WeaponConfig {
            id: id.to_string(),
            name: name.to_string(),
            attack,
            durability,
            range,
        };
        let fighter = |name: &str, description: &str, weapon: &str| FighterConfig {
            name: name.to_string(),
            description: description.to_string(),
            weapon: Some(weapon.to_string()),
            position: 0,
        };

        RosterConfig {
            stats: StatRanges::default(),
            enhance_chance: default_enhance_chance(),
            weapons: vec![
                weapon("sword", "Sword", 25, 500, 1),
                weapon("bow", "Bow", 15, 300, 3),
                weapon("staff", "Staff", 20, 400, 2),
                weapon("dagger", "Dagger", 18, 350, 1),
            ],
            fighters: vec![
                fighter("Le'Gard", "Mighty warrior", "sword"),
                fighter("Ragnvaldr", "Stern barbarian", "bow"),
                fighter("Enki", "Wise mage", "staff"),
                fighter("Kahara", "Cunning rogue", "dagger"),
            ],
        }
    }

    /// Load and validate a roster file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: RosterConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        config.validate().map_err(|e| ConfigError::Validation {
            message: e.to_string(),
            path: path.to_path_buf(),
        })?;

        Ok(config)
    }

    /// Parse and validate a roster from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let config: RosterConfig = toml::from_str(toml).map_err(|e| ConfigError::Parse {
            error: e,
            path: "<inline>".into(),
        })?;

        config.validate().map_err(|e| ConfigError::Validation {
            message: e.to_string(),
            path: "<inline>".into(),
        })?;

        Ok(config)
    }

    /// Check ranges, the enhance chance and weapon references
    pub fn validate(&self) -> Result<(), RosterError> {
        for (stat, range) in self.stats.named() {
            if range.min() > range.max() {
                return Err(RosterError::InvalidRange {
                    stat,
                    min: range.min(),
                    max: range.max(),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.enhance_chance) {
            return Err(RosterError::InvalidChance(self.enhance_chance));
        }

        if self.fighters.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        let catalog = WeaponCatalog::from_configs(&self.weapons)?;
        for fighter in &self.fighters {
            if let Some(id) = &fighter.weapon {
                if !catalog.contains(id) {
                    return Err(RosterError::UnknownWeapon {
                        fighter: fighter.name.clone(),
                        weapon: id.clone(),
                    });
                }
            }
        }

        for id in self.unused_weapons() {
            warn!(weapon = id, "catalogue weapon is not carried by any fighter");
        }

        Ok(())
    }

    /// Catalogue ids that no fighter carries, in file order
    pub fn unused_weapons(&self) -> Vec<&str> {
        self.weapons
            .iter()
            .map(|w| w.id.as_str())
            .filter(|id| {
                !self
                    .fighters
                    .iter()
                    .any(|f| f.weapon.as_deref() == Some(*id))
            })
            .collect()
    }
}
