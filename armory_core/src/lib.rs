//! armory_core - Weapons for the arena combat simulator
//!
//! A [`Weapon`] loses durability as it is used. While any durability is
//! left it deals its full attack; once broken it only deals a fraction of
//! it. [`enhance_weapon`] builds the stronger variant of a weapon at roster
//! construction time.

pub mod enhance;
pub mod weapon;

pub use enhance::{enhance_weapon, enhance_weapon_with, WeaponBonus, ENHANCED_PREFIX};
pub use weapon::{scale, Weapon, BROKEN_DAMAGE_FACTOR};
