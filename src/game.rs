//! The API boundary: player registry plus the current round.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::GameError;
use crate::player::PlayerId;
use crate::round::Round;

/// An N-player rock/paper/scissors game.
///
/// A collaborator registers players, submits one pick per player for the
/// active round, then queries `winners`/`losers`. Identifiers stay unique
/// for the lifetime of the instance; `next_round` clears the picks but
/// never the registry.
///
/// Single-threaded by design. A concurrent caller wraps the whole `Game`
/// in one lock; there is no internal locking to compose with.
///
/// ```
/// use roshambo::{Choice, Game};
///
/// let mut game = Game::new();
/// let one = game.register_player();
/// let two = game.register_player();
///
/// game.pick(one, Choice::Rock)?;
/// game.pick(two, Choice::Scissors)?;
///
/// assert_eq!(game.winners(), vec![one]);
/// assert_eq!(game.losers(), vec![two]);
/// # Ok::<(), roshambo::GameError>(())
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Game {
    /// Ids `0..next_player` have been issued.
    next_player: u32,
    round: Round,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player and return its identifier.
    ///
    /// Registration is unbounded, never fails, and never reuses an
    /// identifier within one instance.
    pub fn register_player(&mut self) -> PlayerId {
        let player = PlayerId::new(self.next_player);
        self.next_player += 1;
        debug!("registered {player}");
        player
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.next_player as usize
    }

    /// Record `player`'s choice for the current round.
    ///
    /// Rejects ids this game never issued (`UnknownPlayer`) and second
    /// picks in the same round (`DuplicatePick`). A rejected pick leaves
    /// the round untouched.
    pub fn pick(&mut self, player: PlayerId, choice: Choice) -> Result<(), GameError> {
        if !self.is_registered(player) {
            return Err(GameError::UnknownPlayer(player));
        }
        self.round.record(player, choice)?;
        debug!("{player} picked {choice}");
        Ok(())
    }

    /// Participants whose score equals the round's maximum, sorted by id.
    ///
    /// Non-empty whenever at least one player has picked. On an empty
    /// round, returns empty rather than erroring.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        self.round.winners()
    }

    /// Participants with score strictly below the maximum, sorted by id.
    ///
    /// Together with `winners()` this partitions the participants exactly.
    #[must_use]
    pub fn losers(&self) -> Vec<PlayerId> {
        self.round.losers()
    }

    /// Clear the current round's picks and start a fresh one.
    ///
    /// The registry survives: existing ids stay valid and new ids remain
    /// distinct from ids issued in earlier rounds.
    pub fn next_round(&mut self) {
        debug!("round cleared ({} picks)", self.round.participant_count());
        self.round.clear();
    }

    /// The current round, for read-only inspection.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Players with a pick this round, sorted by id.
    #[must_use]
    pub fn participants(&self) -> Vec<PlayerId> {
        self.round.participants()
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.round.participant_count()
    }

    /// The recorded choice for `player`, if any.
    #[must_use]
    pub fn choice(&self, player: PlayerId) -> Option<Choice> {
        self.round.choice(player)
    }

    /// `player`'s score this round, `None` if it has not picked.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<u32> {
        self.round.score(player)
    }

    fn is_registered(&self, player: PlayerId) -> bool {
        player.raw() < self.next_player
    }
}
