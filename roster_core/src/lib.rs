//! roster_core - Building the arena roster
//!
//! A [`RosterConfig`] lists the weapon catalogue, the fighters and the
//! ranges their stats are rolled in. [`RosterGenerator`] turns it into
//! ready-to-fight [`arena_core::Combatant`]s, occasionally enhancing a
//! weapon or a fighter.

mod catalog;
mod config;
mod generator;

pub use catalog::WeaponCatalog;
pub use config::{FighterConfig, RosterConfig, StatRange, StatRanges, WeaponConfig};
pub use generator::RosterGenerator;

use std::path::PathBuf;
use thiserror::Error;

/// Error loading roster configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Invalid roster contents
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("Fighter '{fighter}' references unknown weapon '{weapon}'")]
    UnknownWeapon { fighter: String, weapon: String },
    #[error("Duplicate weapon id: {0}")]
    DuplicateWeapon(String),
    #[error("Invalid range for {stat}: {min} > {max}")]
    InvalidRange { stat: &'static str, min: u32, max: u32 },
    #[error("Enhance chance must be within [0, 1], got {0}")]
    InvalidChance(f64),
    #[error("Roster has no fighters")]
    EmptyRoster,
}
