//! Roster data model and mutation rules

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many zero-filled rounds a fresh roster starts with.
pub const DEFAULT_ROUNDS: usize = 3;

/// Raised when a score cell receives text that does not parse as an integer.
///
/// The write is rejected and the prior value kept, so totals stay
/// well-defined no matter what lands in the input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid score: {input:?}")]
pub struct ScoreInputError {
    pub input: String,
}

/// One competitor row: a display name and one score per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub scores: Vec<i64>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, rounds: usize) -> Self {
        Self {
            name: name.into(),
            scores: vec![0; rounds],
        }
    }

    /// Running total across all rounds, summed left to right.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.scores.iter().sum()
    }
}

/// Ordered collection of players with per-round scores.
///
/// Players and rounds are append-only; positional index is the only player
/// identity. Every mutation keeps the score rows equal-length, and the
/// derived views stay sound even if a foreign snapshot breaks that.
///
/// Serializes transparently as a JSON array of `{name, scores}` objects,
/// which is also the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            players: vec![
                Player::new("Player 1", DEFAULT_ROUNDS),
                Player::new("Player 2", DEFAULT_ROUNDS),
            ],
        }
    }
}

impl Roster {
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of round columns to render.
    ///
    /// Widened to the longest score row rather than read off player 0, so a
    /// ragged or empty roster can never break header derivation.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.scores.len())
            .max()
            .unwrap_or(0)
    }

    /// Per-player totals in roster order.
    #[must_use]
    pub fn totals(&self) -> Vec<i64> {
        self.players.iter().map(Player::total).collect()
    }

    /// Appends a zero-filled player named after its position.
    ///
    /// No upper bound and no uniqueness check on names; the generated name
    /// can collide with a renamed row and that is fine.
    pub fn add_player(&mut self) {
        let name = format!("Player {}", self.players.len() + 1);
        let rounds = self.round_count();
        self.players.push(Player::new(name, rounds));
    }

    /// Starts a new round by appending a zero score to every player.
    pub fn add_round(&mut self) {
        for player in &mut self.players {
            player.scores.push(0);
        }
    }

    /// Replaces the name at `player`. No trimming, no emptiness check.
    /// Out-of-range indices are ignored.
    pub fn set_name(&mut self, player: usize, name: impl Into<String>) {
        if let Some(p) = self.players.get_mut(player) {
            p.name = name.into();
        }
    }

    /// Parses `raw` as an integer and writes it at `(player, round)`.
    ///
    /// Out-of-range coordinates are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreInputError`] when `raw` is not an integer; the prior
    /// score is left untouched.
    pub fn set_score(&mut self, player: usize, round: usize, raw: &str) -> Result<(), ScoreInputError> {
        let value: i64 = raw.parse().map_err(|_| ScoreInputError {
            input: raw.to_string(),
        })?;
        if let Some(score) = self
            .players
            .get_mut(player)
            .and_then(|p| p.scores.get_mut(round))
        {
            *score = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_is_two_players_three_zero_rounds() {
        let roster = Roster::default();

        assert_eq!(roster.player_count(), 2);
        assert_eq!(roster.round_count(), 3);
        assert_eq!(roster.players()[0].name, "Player 1");
        assert_eq!(roster.players()[1].name, "Player 2");
        assert_eq!(roster.totals(), vec![0, 0]);
    }

    #[test]
    fn add_player_matches_current_round_count() {
        let mut roster = Roster::default();
        roster.add_round();

        roster.add_player();

        assert_eq!(roster.player_count(), 3);
        let added = &roster.players()[2];
        assert_eq!(added.name, "Player 3");
        assert_eq!(added.scores, vec![0, 0, 0, 0]);
        assert_eq!(added.total(), 0);
    }

    #[test]
    fn add_round_grows_every_row_by_one() {
        let mut roster = Roster::default();
        roster.set_score(0, 1, "5").unwrap();
        let before = roster.totals();

        roster.add_round();

        assert!(roster.players().iter().all(|p| p.scores.len() == 4));
        assert_eq!(roster.round_count(), 4);
        // A fresh zero round never moves a total.
        assert_eq!(roster.totals(), before);
    }

    #[test]
    fn totals_sum_each_row() {
        let mut roster = Roster::default();
        roster.set_score(0, 0, "3").unwrap();
        roster.set_score(0, 2, "-1").unwrap();
        roster.set_score(1, 1, "7").unwrap();

        assert_eq!(roster.totals(), vec![2, 7]);
    }

    #[test]
    fn set_score_rejects_non_numeric_and_keeps_prior_value() {
        let mut roster = Roster::default();
        roster.set_score(0, 0, "9").unwrap();

        let err = roster.set_score(0, 0, "abc").unwrap_err();

        assert_eq!(err.input, "abc");
        assert_eq!(roster.players()[0].scores[0], 9);
        assert_eq!(roster.totals()[0], 9);
    }

    #[test]
    fn set_score_ignores_out_of_range_coordinates() {
        let mut roster = Roster::default();

        roster.set_score(9, 0, "5").unwrap();
        roster.set_score(0, 9, "5").unwrap();

        assert_eq!(roster.totals(), vec![0, 0]);
    }

    #[test]
    fn set_name_replaces_only_the_target_row() {
        let mut roster = Roster::default();

        roster.set_name(1, "Dana");
        roster.set_name(5, "nobody");

        assert_eq!(roster.players()[0].name, "Player 1");
        assert_eq!(roster.players()[1].name, "Dana");
    }

    #[test]
    fn derived_views_survive_empty_and_ragged_rosters() {
        let empty = Roster::new(vec![]);
        assert_eq!(empty.round_count(), 0);
        assert_eq!(empty.totals(), Vec::<i64>::new());

        let mut ragged = Roster::new(vec![Player::new("A", 1), Player::new("B", 4)]);
        assert_eq!(ragged.round_count(), 4);

        // add_player keys off the widened count, not row 0
        ragged.add_player();
        assert_eq!(ragged.players()[2].scores.len(), 4);
    }
}
