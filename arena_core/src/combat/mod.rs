//! Combat system - Resolving attacks between combatants

mod resolution;
mod result;

pub use result::{AttackOutcome, DefenseOutcome};
