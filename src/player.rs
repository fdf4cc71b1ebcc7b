//! Player identification.
//!
//! `PlayerId` is opaque: only `Game::register_player` mints new ids, and an
//! id is unique for the lifetime of the issuing game. Ids are never reused.

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered player.
///
/// The derived ordering carries no game meaning; it only gives query
/// results a stable order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    pub(crate) const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
