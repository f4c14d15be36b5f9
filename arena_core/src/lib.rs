//! arena_core - Turn-based combat resolution engine
//!
//! This library provides:
//! - Combatant: Stats, an optional weapon, a position and defense checks
//! - Combat resolution: Defender-driven (`take_attack`) and attacker-driven
//!   (`try_attack`) protocols
//! - Variants: Factory for enhanced combatants
//! - Round engine: One turn across all living combatants
//! - Arena: Match controller with win detection and an append-only log
//!
//! # Quick Start
//!
//! ```rust
//! use arena_core::prelude::*;
//!
//! let roster = vec![
//!     Combatant::new("Le'Gard", "Mighty warrior", Stats { life: 110, speed: 25, ..Stats::default() })
//!         .with_weapon(Weapon::new("Sword", 25, 500, 1)),
//!     Combatant::new("Kahara", "Cunning rogue", Stats { life: 105, speed: 28, ..Stats::default() })
//!         .with_weapon(Weapon::new("Dagger", 18, 350, 1).enhanced()),
//! ];
//!
//! let mut arena = Arena::new(roster);
//! while let PlayOutcome::Round(report) = arena.play() {
//!     for line in report.log_lines() {
//!         println!("{}", line);
//!     }
//! }
//! println!("{}", arena.status());
//! ```

pub mod arena;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod prelude;
pub mod variant;
pub mod view;

// Core API - what most users need
pub use arena::{Arena, MatchStatus, PlayOutcome};
pub use combat::{AttackOutcome, DefenseOutcome};
pub use combatant::{Combatant, Direction, Stats};
pub use engine::{turn, turn_with_rng, RoundAction, RoundReport};
pub use variant::{enhance_combatant, enhance_combatant_with, CombatantBonus};
pub use view::CombatantView;

// Configuration
pub use config::{constants, init_constants, init_constants_default, ArenaConstants, ConfigError};

// Re-export commonly needed armory_core types
pub use armory_core::{enhance_weapon, Weapon, WeaponBonus};
