//! Error taxonomy for the engine's mutating operations.

use thiserror::Error;

use crate::player::PlayerId;

/// A rejected operation.
///
/// These are contract violations rather than expected runtime conditions:
/// they fail immediately and leave the engine's state untouched. The query
/// operations (`winners`, `losers`) never fail.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// `pick` was called with an id this game never issued.
    #[error("{0} is not registered in this game")]
    UnknownPlayer(PlayerId),

    /// `pick` was called twice for the same player in one round.
    #[error("{0} already picked this round")]
    DuplicatePick(PlayerId),

    /// A string matched none of rock, paper, scissors.
    #[error("unknown choice {0:?}")]
    InvalidChoice(String),
}
