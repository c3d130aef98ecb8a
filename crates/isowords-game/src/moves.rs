//! Moves and move logs.
//!
//! A game is recorded as an ordered, append-only [`Moves`] log. The log is
//! the only thing a client submits: the server rebuilds the puzzle state by
//! replaying it with [`verify`](crate::verify).

use std::collections::BTreeMap;

use isowords_core::{IndexedCubeFace, LatticePoint};
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
///
/// The engine never interprets timestamps; they are carried for display and
/// ordering only.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

/// Seat of a player in a turn-based match, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerIndex(pub u8);

/// An emoji reaction a player can attach to another player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Reaction {
    Angel,
    Anger,
    Confused,
    Cry,
    Froze,
    Heart,
    Lol,
    Sob,
    Wink,
}

/// What a move does to the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveType {
    /// Spells a word along a path of faces.
    PlayedWord(Vec<IndexedCubeFace>),
    /// Takes a cube out of the puzzle for the rest of the game.
    RemovedCube(LatticePoint),
}

/// One entry of a move log.
///
/// `score` is the score the client claims for the move. Replay recomputes it;
/// [`verify_submission`](crate::verify_submission) rejects logs whose claims
/// disagree.
///
/// # Examples
///
/// ```
/// use isowords_core::LatticePoint;
/// use isowords_game::{Move, MoveType, PlayerIndex, Timestamp};
///
/// let mv = Move::removed_cube(LatticePoint::new(1, 1, 1)?)
///     .with_played_at(Timestamp(1_700_000_000_000))
///     .with_player_index(PlayerIndex(1));
/// assert!(matches!(mv.kind, MoveType::RemovedCube(_)));
/// assert_eq!(mv.score, 0);
/// # Ok::<(), isowords_core::LatticeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// When the move was played.
    pub played_at: Timestamp,
    /// The player who made the move, in turn-based matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_index: Option<PlayerIndex>,
    /// Reactions other players attached to the move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<BTreeMap<PlayerIndex, Reaction>>,
    /// The claimed score of the move.
    pub score: u32,
    /// What the move does.
    #[serde(rename = "type")]
    pub kind: MoveType,
}

impl Move {
    /// Creates a move of the given kind with a zero timestamp and no player.
    #[must_use]
    pub fn new(kind: MoveType, score: u32) -> Self {
        Self {
            played_at: Timestamp::default(),
            player_index: None,
            reactions: None,
            score,
            kind,
        }
    }

    /// Creates a move that plays the word spelled by `path`.
    #[must_use]
    pub fn played_word(path: impl Into<Vec<IndexedCubeFace>>, score: u32) -> Self {
        Self::new(MoveType::PlayedWord(path.into()), score)
    }

    /// Creates a move that removes the cube at `index`.
    #[must_use]
    pub fn removed_cube(index: LatticePoint) -> Self {
        Self::new(MoveType::RemovedCube(index), 0)
    }

    /// Sets the timestamp of the move.
    #[must_use]
    pub fn with_played_at(mut self, played_at: Timestamp) -> Self {
        self.played_at = played_at;
        self
    }

    /// Sets the player who made the move.
    #[must_use]
    pub fn with_player_index(mut self, player_index: PlayerIndex) -> Self {
        self.player_index = Some(player_index);
        self
    }

    /// Records `reaction` from `player` on this move, replacing any earlier one.
    pub fn react(&mut self, player: PlayerIndex, reaction: Reaction) {
        self.reactions
            .get_or_insert_with(BTreeMap::new)
            .insert(player, reaction);
    }
}

/// An ordered, append-only log of moves.
///
/// Moves can be pushed but never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moves(Vec<Move>);

impl Moves {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a move.
    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no moves have been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the move at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.0.get(index)
    }

    /// Returns the most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.0.last()
    }

    /// Returns an iterator over the moves in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// Returns the moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }
}

impl From<Vec<Move>> for Moves {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for Moves {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Move> for Moves {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use isowords_core::Side;

    use super::*;

    fn point(x: u8, y: u8, z: u8) -> LatticePoint {
        LatticePoint::new(x, y, z).unwrap()
    }

    #[test]
    fn test_moves_are_appended_in_order() {
        let mut moves = Moves::new();
        assert!(moves.is_empty());
        moves.push(Move::removed_cube(point(0, 0, 0)));
        moves.push(Move::removed_cube(point(1, 0, 0)));
        assert_eq!(moves.len(), 2);
        assert_eq!(
            moves.last().map(|mv| &mv.kind),
            Some(&MoveType::RemovedCube(point(1, 0, 0)))
        );
        let kinds: Vec<_> = moves.iter().map(|mv| mv.kind.clone()).collect();
        assert_eq!(kinds[0], MoveType::RemovedCube(point(0, 0, 0)));
    }

    #[test]
    fn test_reactions() {
        let mut mv = Move::removed_cube(point(2, 2, 2));
        assert_eq!(mv.reactions, None);
        mv.react(PlayerIndex(1), Reaction::Lol);
        mv.react(PlayerIndex(1), Reaction::Heart);
        let reactions = mv.reactions.unwrap();
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[&PlayerIndex(1)], Reaction::Heart);
    }

    #[test]
    fn test_json_shape() {
        let path = vec![
            IndexedCubeFace::new(point(0, 0, 0), Side::Left),
            IndexedCubeFace::new(point(0, 0, 0), Side::Top),
        ];
        let mv = Move::played_word(path, 12).with_played_at(Timestamp(42));
        let json = serde_json::to_value(&mv).unwrap();
        assert_eq!(json["playedAt"], 42);
        assert_eq!(json["score"], 12);
        assert!(json.get("playerIndex").is_none());
        assert_eq!(json["type"]["playedWord"][1]["side"], "top");

        let back: Move = serde_json::from_value(json).unwrap();
        assert_eq!(back, mv);
    }

    #[test]
    fn test_json_with_reactions() {
        let mut mv = Move::removed_cube(point(1, 2, 0)).with_player_index(PlayerIndex(0));
        mv.react(PlayerIndex(1), Reaction::Sob);
        let json = serde_json::to_string(&mv).unwrap();
        assert!(json.contains(r#""reactions":{"1":"sob"}"#), "{json}");
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
