//! Arena constants configuration

use crate::variant::CombatantBonus;
use armory_core::{WeaponBonus, BROKEN_DAMAGE_FACTOR};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use super::ConfigError;

/// Global arena constants instance
static ARENA_CONSTANTS: OnceLock<ArenaConstants> = OnceLock::new();

/// Initialize the global arena constants from a TOML file
///
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = ArenaConstants::load_from_path(path)?;
    install(constants)
}

/// Initialize the global arena constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    install(ArenaConstants::default())
}

fn install(constants: ArenaConstants) -> Result<(), ConfigError> {
    ARENA_CONSTANTS.set(constants).map_err(|_| {
        warn!("arena constants already in use, keeping the active values");
        ConfigError::ValidationError("ArenaConstants already initialized".to_string())
    })
}

/// Get a reference to the global arena constants
///
/// Falls back to the defaults if nothing was initialized yet.
pub fn constants() -> &'static ArenaConstants {
    ARENA_CONSTANTS.get_or_init(ArenaConstants::default)
}

/// Tunable arena constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConstants {
    /// Fraction of base attack a broken weapon still deals
    #[serde(default = "default_broken_weapon_factor")]
    pub broken_weapon_factor: f64,
    /// Fraction of the attack stat an unarmed combatant deals
    #[serde(default = "default_unarmed_factor")]
    pub unarmed_factor: f64,
    #[serde(default)]
    pub weapon_bonus: WeaponBonus,
    #[serde(default)]
    pub combatant_bonus: CombatantBonus,
}

impl Default for ArenaConstants {
    fn default() -> Self {
        ArenaConstants {
            broken_weapon_factor: default_broken_weapon_factor(),
            unarmed_factor: default_unarmed_factor(),
            weapon_bonus: WeaponBonus::default(),
            combatant_bonus: CombatantBonus::default(),
        }
    }
}

impl ArenaConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: ArenaConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: ArenaConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, factor) in [
            ("broken_weapon_factor", self.broken_weapon_factor),
            ("unarmed_factor", self.unarmed_factor),
        ] {
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, factor
                )));
            }
        }
        if self.broken_weapon_factor > 1.0 {
            warn!(
                factor = self.broken_weapon_factor,
                "broken weapons hit harder than intact ones"
            );
        }
        Ok(())
    }
}

fn default_broken_weapon_factor() -> f64 {
    BROKEN_DAMAGE_FACTOR
}
fn default_unarmed_factor() -> f64 {
    0.2
}
