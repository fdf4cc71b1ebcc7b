//! The three choices and the dominance rule.
//!
//! `Choice` is a closed enumeration, so an invalid choice is unrepresentable
//! in the typed API. Open string input (a CLI, a wire boundary) goes through
//! `FromStr`, which surfaces `GameError::InvalidChoice`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// A player's choice for a round.
///
/// Dominance is cyclic: rock beats scissors, scissors beats paper, paper
/// beats rock. Identical choices tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All three choices.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Check whether this choice beats `other`.
    ///
    /// Equal choices satisfy neither direction: a tie contributes zero to
    /// both players' scores.
    ///
    /// ```
    /// use roshambo::Choice;
    ///
    /// assert!(Choice::Rock.beats(Choice::Scissors));
    /// assert!(!Choice::Scissors.beats(Choice::Rock));
    /// assert!(!Choice::Rock.beats(Choice::Rock));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// The canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            other => Err(GameError::InvalidChoice(other.to_string())),
        }
    }
}
