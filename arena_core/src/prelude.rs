//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Combatant, Direction, Stats};
pub use crate::view::CombatantView;

// Combat
pub use crate::combat::{AttackOutcome, DefenseOutcome};

// Rounds and matches
pub use crate::arena::{Arena, MatchStatus, PlayOutcome};
pub use crate::engine::{RoundAction, RoundReport};

// Variants
pub use crate::variant::{enhance_combatant, CombatantBonus};

// Config
pub use crate::config::{constants, init_constants, init_constants_default, ArenaConstants};

// Re-exports from armory_core
pub use armory_core::{enhance_weapon, Weapon, WeaponBonus};
