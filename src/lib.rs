//! # roshambo
//!
//! An N-player rock/paper/scissors round-resolution engine.
//!
//! A collaborator registers players, submits one pick per player for the
//! active round, then queries winners and losers. The engine is pure
//! in-memory state; every operation is synchronous.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: two-player RPS generalizes by round-robin point
//!    accumulation. Each participant scores one point per other participant
//!    it beats; winners are the participants at the maximum score.
//!
//! 2. **Closed Choices**: `Choice` is an enum of exactly three variants.
//!    Invalid choices only exist at the string boundary (`FromStr`), never
//!    inside the engine.
//!
//! 3. **Derived Outcomes**: winners/losers are pure functions of the
//!    current picks, recomputed per call. No cached results to invalidate.
//!
//! ## Modules
//!
//! - `choice`: the three choices and the dominance rule
//! - `player`: opaque player identifiers
//! - `round`: pick storage, scoring, winner/loser partition
//! - `game`: the API boundary (player registry + current round)
//! - `error`: the `GameError` taxonomy

pub mod choice;
pub mod error;
pub mod game;
pub mod player;
pub mod round;

// Re-export commonly used types
pub use crate::choice::Choice;
pub use crate::error::GameError;
pub use crate::game::Game;
pub use crate::player::PlayerId;
pub use crate::round::Round;
