//! Teams and matchups
//!
//! Plain records for what a bracket page lists per slot: seed, name, points
//! scored and the win flag. Identity follows `(seed, name)`, so two records
//! for the same entrant compare equal even when only one of them carries a
//! score yet.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tournament entrant as it appears in a bracket slot.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    /// Seed within the region, when the listing shows one.
    pub seed: Option<u16>,
    /// School or club name as listed.
    pub name: String,
    /// Points scored in this slot's game, once played.
    pub points: Option<u16>,
    /// Whether this slot won its game.
    pub winner: bool,
}

impl Team {
    /// Entrant with a known seed and no recorded result.
    pub fn new(seed: u16, name: impl Into<String>) -> Self {
        Self {
            seed: Some(seed),
            name: name.into(),
            points: None,
            winner: false,
        }
    }

    /// Entrant listed without a seed.
    pub fn unseeded(name: impl Into<String>) -> Self {
        Self {
            seed: None,
            name: name.into(),
            points: None,
            winner: false,
        }
    }

    /// Attach a game result to the slot.
    pub fn with_result(mut self, points: u16, winner: bool) -> Self {
        self.points = Some(points);
        self.winner = winner;
        self
    }

    fn identity(&self) -> (Option<u16>, &str) {
        (self.seed, self.name.as_str())
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Team {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Team {
    /// Seed first, then name; unseeded entrants sort before seeded ones.
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(seed) = self.seed {
            write!(f, "({seed}) ")?;
        }
        f.write_str(&self.name)?;
        if let Some(points) = self.points {
            write!(f, " [{points}]")?;
        }
        Ok(())
    }
}

/// A single matchup: the two slots joined by one bracket line.
///
/// Play-in positions can leave a slot empty until the qualifier is known.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    /// Upper slot on the bracket line.
    pub top: Option<Team>,
    /// Lower slot on the bracket line.
    pub bottom: Option<Team>,
}

impl Game {
    /// Matchup from two optional slots.
    pub fn new(top: Option<Team>, bottom: Option<Team>) -> Self {
        Self { top, bottom }
    }

    /// Matchup between two known teams.
    pub fn between(top: Team, bottom: Team) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    /// Both slots in bracket order, top first.
    pub fn slots(&self) -> [Option<&Team>; 2] {
        [self.top.as_ref(), self.bottom.as_ref()]
    }

    /// The slot that won this matchup.
    ///
    /// Requires both teams present and exactly one win flag set; anything
    /// else means the game has no recorded winner yet.
    pub fn winner(&self) -> Option<&Team> {
        match (&self.top, &self.bottom) {
            (Some(top), Some(bottom)) if top.winner && !bottom.winner => Some(top),
            (Some(top), Some(bottom)) if !top.winner && bottom.winner => Some(bottom),
            _ => None,
        }
    }

    /// Whether a winner has been recorded.
    pub fn is_decided(&self) -> bool {
        self.winner().is_some()
    }
}
