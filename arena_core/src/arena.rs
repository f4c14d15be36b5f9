//! Match controller - Decides whether the match is over or plays another round

use crate::combatant::Combatant;
use crate::engine::{turn_with_rng, RoundReport};
use crate::view::CombatantView;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Where the match stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MatchStatus {
    InProgress,
    /// Exactly one combatant is left standing
    Won { winner: String },
    /// Nobody is left standing
    Draw,
}

impl MatchStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::InProgress => write!(f, "In progress"),
            MatchStatus::Won { winner } => write!(f, "Winner: {}", winner),
            MatchStatus::Draw => write!(f, "Draw: no combatants left standing"),
        }
    }
}

/// What a call to [`Arena::play`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A round was played
    Round(RoundReport),
    /// The match is over; nothing was mutated
    Finished(MatchStatus),
}

/// A match in progress: the roster, its log and its status
#[derive(Debug, Clone)]
pub struct Arena {
    roster: Vec<Combatant>,
    log: Vec<String>,
    round: u32,
    status: MatchStatus,
}

impl Arena {
    pub fn new(roster: Vec<Combatant>) -> Self {
        Arena {
            roster,
            log: Vec::new(),
            round: 0,
            status: MatchStatus::InProgress,
        }
    }

    /// Advance the match by one round (random source: thread RNG)
    pub fn play(&mut self) -> PlayOutcome {
        let mut rng = rand::thread_rng();
        self.play_with_rng(&mut rng)
    }

    /// Advance the match by one round with a provided RNG
    ///
    /// - Already finished: no-op.
    /// - One combatant alive: declares the winner.
    /// - Nobody alive: declares a draw.
    /// - Otherwise: plays one round and appends its log lines.
    pub fn play_with_rng(&mut self, rng: &mut impl Rng) -> PlayOutcome {
        if self.status.is_finished() {
            return PlayOutcome::Finished(self.status.clone());
        }

        let mut living = self.roster.iter().filter(|c| !c.is_dead());
        let first = living.next().map(|c| c.name.clone());
        let more = living.next().is_some();

        match (first, more) {
            (Some(winner), false) => {
                info!(winner = %winner, rounds = self.round, "match won");
                self.finish(MatchStatus::Won { winner })
            }
            (None, _) => {
                info!(rounds = self.round, "match drawn");
                self.finish(MatchStatus::Draw)
            }
            (Some(_), true) => {
                self.round += 1;
                let report = turn_with_rng(&mut self.roster, self.round, rng);
                self.log.extend(report.log_lines());
                PlayOutcome::Round(report)
            }
        }
    }

    fn finish(&mut self, status: MatchStatus) -> PlayOutcome {
        self.log.push(status.to_string());
        self.status = status.clone();
        PlayOutcome::Finished(status)
    }

    /// Play rounds until the match is decided or `max_rounds` rounds were played
    pub fn run_with_rng(&mut self, max_rounds: u32, rng: &mut impl Rng) -> &MatchStatus {
        while self.round < max_rounds {
            if let PlayOutcome::Finished(_) = self.play_with_rng(rng) {
                break;
            }
        }
        &self.status
    }

    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    /// Append-only, human-readable match log
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn status(&self) -> &MatchStatus {
        &self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The winning combatant, once declared
    pub fn winner(&self) -> Option<&Combatant> {
        match self.status {
            MatchStatus::Won { .. } => self.roster.iter().find(|c| !c.is_dead()),
            _ => None,
        }
    }

    pub fn living_count(&self) -> usize {
        self.roster.iter().filter(|c| !c.is_dead()).count()
    }

    pub fn snapshot(&self) -> Vec<CombatantView> {
        self.roster.iter().map(Combatant::view).collect()
    }
}
