//! Probabilistic defense checks

use super::Combatant;
use rand::Rng;

/// Roll a chance expressed in percent. Values of 100 or more always succeed.
fn roll_percent(percent: u32, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < f64::from(percent) / 100.0
}

impl Combatant {
    /// Whether this combatant blocks an attack from `opponent`
    ///
    /// The chance is the opponent's agility in percent, not clamped.
    pub fn is_attack_blocked(&self, opponent: &Combatant, rng: &mut impl Rng) -> bool {
        roll_percent(opponent.stats.agility, rng)
    }

    /// Whether this combatant dodges an attack from `opponent`
    ///
    /// Only this combatant's own luck is rolled; the opponent is not read.
    pub fn dodged(&self, _opponent: &Combatant, rng: &mut impl Rng) -> bool {
        roll_percent(self.stats.luck, rng)
    }
}
