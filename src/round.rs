//! A round: the pick collection and the outcome-resolution algorithm.
//!
//! Scoring is pure round-robin: each participant scores one point per other
//! participant whose choice it beats, O(N²) in participants. Winners are the
//! participants at the maximum score, losers everyone else; when every score
//! is zero (all identical picks, or a full cycle) everyone wins and nobody
//! loses. That falls out of the rule, not out of a special case.
//!
//! Outcomes are recomputed on every call rather than cached. Rounds are
//! small, and derived state invites invalidation bugs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use crate::choice::Choice;
use crate::error::GameError;
use crate::player::PlayerId;

/// One round's picks.
///
/// Owned by `Game`, which enforces that recorded ids were actually
/// registered. Query results are sorted by id for deterministic output.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Round {
    picks: FxHashMap<PlayerId, Choice>,
}

impl Round {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pick.
    ///
    /// A player picks at most once per round; a second pick is rejected
    /// with `DuplicatePick` and the first pick stands.
    pub fn record(&mut self, player: PlayerId, choice: Choice) -> Result<(), GameError> {
        match self.picks.entry(player) {
            Entry::Occupied(_) => Err(GameError::DuplicatePick(player)),
            Entry::Vacant(slot) => {
                slot.insert(choice);
                Ok(())
            }
        }
    }

    /// The recorded choice for `player`, if it has picked this round.
    #[must_use]
    pub fn choice(&self, player: PlayerId) -> Option<Choice> {
        self.picks.get(&player).copied()
    }

    /// Players with a pick this round, sorted by id.
    #[must_use]
    pub fn participants(&self) -> Vec<PlayerId> {
        let mut participants: Vec<PlayerId> = self.picks.keys().copied().collect();
        participants.sort_unstable();
        participants
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// A participant's score: the count of other participants it beats.
    ///
    /// `None` if `player` has no pick this round.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Option<u32> {
        let choice = self.choice(player)?;
        Some(self.score_of(player, choice))
    }

    /// Every participant's score, sorted by id.
    #[must_use]
    pub fn scores(&self) -> Vec<(PlayerId, u32)> {
        let mut scores: Vec<(PlayerId, u32)> = self
            .picks
            .iter()
            .map(|(&player, &choice)| (player, self.score_of(player, choice)))
            .collect();
        scores.sort_unstable_by_key(|&(player, _)| player);
        scores
    }

    /// Participants whose score equals the round's maximum score.
    ///
    /// Non-empty whenever the round has a participant; empty for an empty
    /// round.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        self.partition(|score, max| score == max)
    }

    /// Participants with score strictly below the maximum.
    ///
    /// The complement of `winners()` within the participant set.
    #[must_use]
    pub fn losers(&self) -> Vec<PlayerId> {
        self.partition(|score, max| score < max)
    }

    /// Drop all picks.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    fn score_of(&self, player: PlayerId, choice: Choice) -> u32 {
        self.picks
            .iter()
            .filter(|&(&other, _)| other != player)
            .filter(|&(_, &theirs)| choice.beats(theirs))
            .count() as u32
    }

    fn partition(&self, keep: impl Fn(u32, u32) -> bool) -> Vec<PlayerId> {
        let scores = self.scores();
        let Some(max) = scores.iter().map(|&(_, score)| score).max() else {
            return Vec::new();
        };
        scores
            .into_iter()
            .filter(|&(_, score)| keep(score, max))
            .map(|(player, _)| player)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players<const N: usize>() -> [PlayerId; N] {
        std::array::from_fn(|i| PlayerId::new(i as u32))
    }

    #[test]
    fn test_empty_round_has_no_outcome() {
        let round = Round::new();
        assert!(round.is_empty());
        assert!(round.winners().is_empty());
        assert!(round.losers().is_empty());
        assert!(round.scores().is_empty());
    }

    #[test]
    fn test_record_and_read_back() {
        let [p0] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Paper).unwrap();

        assert_eq!(round.choice(p0), Some(Choice::Paper));
        assert_eq!(round.participants(), vec![p0]);
        assert_eq!(round.participant_count(), 1);
    }

    #[test]
    fn test_duplicate_pick_rejected_first_stands() {
        let [p0] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();

        let err = round.record(p0, Choice::Paper).unwrap_err();
        assert_eq!(err, GameError::DuplicatePick(p0));
        assert_eq!(round.choice(p0), Some(Choice::Rock));
    }

    #[test]
    fn test_pairwise_scoring() {
        let [p0, p1, p2, p3] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();
        round.record(p1, Choice::Paper).unwrap();
        round.record(p2, Choice::Scissors).unwrap();
        round.record(p3, Choice::Rock).unwrap();

        assert_eq!(round.scores(), vec![(p0, 1), (p1, 2), (p2, 1), (p3, 1)]);
        assert_eq!(round.score(p1), Some(2));
    }

    #[test]
    fn test_score_of_non_participant_is_none() {
        let [p0, p1] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();

        assert_eq!(round.score(p1), None);
    }

    #[test]
    fn test_single_participant_wins_with_zero_score() {
        let [p0] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Scissors).unwrap();

        assert_eq!(round.score(p0), Some(0));
        assert_eq!(round.winners(), vec![p0]);
        assert!(round.losers().is_empty());
    }

    #[test]
    fn test_full_cycle_everyone_wins() {
        let [p0, p1, p2] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();
        round.record(p1, Choice::Paper).unwrap();
        round.record(p2, Choice::Scissors).unwrap();

        assert_eq!(round.winners(), vec![p0, p1, p2]);
        assert!(round.losers().is_empty());
    }

    #[test]
    fn test_partition_is_exact() {
        let [p0, p1, p2, p3, p4] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();
        round.record(p1, Choice::Paper).unwrap();
        round.record(p2, Choice::Scissors).unwrap();
        round.record(p3, Choice::Rock).unwrap();
        round.record(p4, Choice::Paper).unwrap();

        let winners = round.winners();
        let losers = round.losers();
        assert_eq!(winners, vec![p1, p2, p4]);
        assert_eq!(losers, vec![p0, p3]);
        assert_eq!(winners.len() + losers.len(), round.participant_count());
    }

    #[test]
    fn test_clear_resets_picks() {
        let [p0, p1] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();
        round.record(p1, Choice::Scissors).unwrap();

        round.clear();
        assert!(round.is_empty());
        assert!(round.winners().is_empty());
        round.record(p0, Choice::Paper).unwrap();
        assert_eq!(round.choice(p0), Some(Choice::Paper));
    }

    #[test]
    fn test_serialization_round_trip() {
        let [p0, p1] = players();
        let mut round = Round::new();
        round.record(p0, Choice::Rock).unwrap();
        round.record(p1, Choice::Paper).unwrap();

        let json = serde_json::to_string(&round).unwrap();
        let restored: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.winners(), round.winners());
        assert_eq!(restored.scores(), round.scores());
    }
}
