//! Round engine - One discrete turn across all living combatants

use crate::combat::AttackOutcome;
use crate::combatant::Combatant;
use crate::view::CombatantView;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// One combatant's action during a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAction {
    pub attacker: String,
    pub target: String,
    pub outcome: AttackOutcome,
    /// Steps walked to reach the target
    pub steps: u32,
    /// Whether this action killed the target
    pub killed: bool,
}

impl fmt::Display for RoundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} attacks {}: {}", self.attacker, self.target, self.outcome)
    }
}

/// Everything that happened in one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number
    pub round: u32,
    /// Actions in the order they were taken
    pub actions: Vec<RoundAction>,
    /// State of every combatant after the round, in acting order
    pub snapshot: Vec<CombatantView>,
}

impl RoundReport {
    /// Human-readable log lines, one per action
    pub fn log_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.actions.iter().map(ToString::to_string)
    }

    /// Names of combatants killed this round
    pub fn casualties(&self) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .filter(|a| a.killed)
            .map(|a| a.target.as_str())
    }
}

/// Play one round (random source: thread RNG)
pub fn turn(roster: &mut [Combatant], round: u32) -> RoundReport {
    let mut rng = rand::thread_rng();
    turn_with_rng(roster, round, &mut rng)
}

/// Play one round with a provided RNG (for deterministic testing)
///
/// 1. Sorts the roster in place by speed, fastest first. The sort is stable,
///    so ties keep their current roster order.
/// 2. Each living combatant picks a random living enemy, walks up to it and
///    strikes it with [`Combatant::try_attack`]. A combatant with no enemy
///    left skips its action.
pub fn turn_with_rng(roster: &mut [Combatant], round: u32, rng: &mut impl Rng) -> RoundReport {
    roster.sort_by(|a, b| b.stats.speed.cmp(&a.stats.speed));

    let mut actions = Vec::new();

    for i in 0..roster.len() {
        if roster[i].is_dead() {
            continue;
        }

        let Some(j) = roster[i].choose_enemy(roster, rng) else {
            debug!(combatant = %roster[i].name, "no enemy left, skipping");
            continue;
        };

        let (attacker, target) = pair_mut(roster, i, j);
        let steps = attacker.move_to_enemy(target);
        let outcome = attacker.try_attack(target);
        let killed = outcome.damage() > 0 && target.is_dead();

        debug!(
            round,
            attacker = %attacker.name,
            target = %target.name,
            steps,
            damage = outcome.damage(),
            "attack resolved"
        );
        if killed {
            info!(round, attacker = %attacker.name, target = %target.name, "combatant killed");
        }

        actions.push(RoundAction {
            attacker: attacker.name.clone(),
            target: target.name.clone(),
            outcome,
            steps,
            killed,
        });
    }

    RoundReport {
        round,
        actions,
        snapshot: roster.iter().map(Combatant::view).collect(),
    }
}

/// Borrow two distinct roster entries mutably
fn pair_mut(roster: &mut [Combatant], a: usize, b: usize) -> (&mut Combatant, &mut Combatant) {
    debug_assert_ne!(a, b, "a combatant cannot target itself");
    if a < b {
        let (left, right) = roster.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
