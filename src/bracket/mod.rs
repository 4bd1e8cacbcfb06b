//! Bracket domain model
//!
//! The shape a scraped tournament arrives in: rounds of games, each game two
//! slots. A [`Bracket`] checks that its rounds narrow properly and pours the
//! slots into a [`BinaryTree`], leaves first, champion at the root.

mod team;

pub use team::{Game, Team};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tree::BinaryTree;
use crate::BracketError;

/// One elimination round: its games listed from the top of the draw down.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Round {
    games: Vec<Game>,
}

impl Round {
    /// Round from games in bracket order.
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Games in bracket order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Number of games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Every slot of the round, two per game, top before bottom.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Team>> {
        self.games.iter().flat_map(Game::slots)
    }

    /// Teams actually present in the round's slots.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.slots().flatten()
    }
}

/// A region's draw: rounds ordered from the first round to the final.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bracket {
    region: String,
    rounds: Vec<Round>,
}

impl Bracket {
    /// Bracket for a named region.
    ///
    /// Rounds are taken as scraped; the shape check happens when a tree is
    /// assembled with [`Bracket::tree`].
    pub fn new(region: impl Into<String>, rounds: Vec<Round>) -> Self {
        Self {
            region: region.into(),
            rounds,
        }
    }

    /// Region name.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Rounds, first round first.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// First-round teams in slot order: the field as the page seeds it.
    pub fn entrants(&self) -> Vec<&Team> {
        self.rounds
            .first()
            .map(|round| round.teams().collect())
            .unwrap_or_default()
    }

    /// The championship game, when any rounds exist.
    pub fn final_game(&self) -> Option<&Game> {
        self.rounds.last().and_then(|round| round.games().first())
    }

    /// Winner of the final, once decided.
    pub fn champion(&self) -> Option<&Team> {
        self.final_game().and_then(Game::winner)
    }

    /// Pour the bracket into a perfect binary tree.
    ///
    /// With `n` rounds the tree has height `n`: level `k > 0` receives the
    /// slots of round `n - k + 1` in order, so the leaves hold the first
    /// round and level 1 the final. The root receives the champion once the
    /// final is decided; an empty slot leaves its node vacant.
    ///
    /// Round `r` must hold exactly `2^(n-r)` games.
    ///
    /// # Errors
    ///
    /// [`BracketError::EmptyBracket`] without rounds,
    /// [`BracketError::RoundSizeMismatch`] when a round does not narrow to
    /// half the games of the one before it, and
    /// [`BracketError::HeightTooLarge`] for an absurd round count.
    pub fn tree(&self) -> Result<BinaryTree<Team>, BracketError> {
        if self.rounds.is_empty() {
            return Err(BracketError::EmptyBracket);
        }
        let height = u32::try_from(self.rounds.len()).unwrap_or(u32::MAX);

        let mut tree = BinaryTree::new(height)?;

        for (index, round) in self.rounds.iter().enumerate() {
            let expected = 1usize << (height as usize - 1 - index);
            if round.game_count() != expected {
                return Err(BracketError::RoundSizeMismatch {
                    round: index + 1,
                    expected,
                    found: round.game_count(),
                });
            }
        }

        for (depth, ids) in tree.levels(tree.root()) {
            if depth == 0 {
                if let Some(champion) = self.champion() {
                    let root = tree.root();
                    tree[root].set_data(champion.clone());
                }
                continue;
            }

            let round = &self.rounds[self.rounds.len() - depth as usize];
            for (id, slot) in ids.into_iter().zip(round.slots()) {
                if let Some(team) = slot {
                    tree[id].set_data(team.clone());
                }
            }
        }

        debug!(
            region = %self.region,
            rounds = self.rounds.len(),
            "assembled bracket tree"
        );
        Ok(tree)
    }
}

/// A tournament edition: its regional brackets in page order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tournament {
    year: u16,
    brackets: Vec<Bracket>,
}

impl Tournament {
    /// Tournament for a year with its regional brackets.
    pub fn new(year: u16, brackets: Vec<Bracket>) -> Self {
        Self { year, brackets }
    }

    /// Edition year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Regional brackets in page order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Region names in page order.
    pub fn regions(&self) -> Vec<&str> {
        self.brackets.iter().map(Bracket::region).collect()
    }

    /// Look a region's bracket up by name.
    pub fn bracket(&self, region: &str) -> Option<&Bracket> {
        self.brackets
            .iter()
            .find(|bracket| bracket.region() == region)
    }
}
