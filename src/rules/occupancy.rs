//! The occupancy classifier: the shared predicate layer every per-piece rule
//! is built on.
//!
//! These are pure functions over the snapshot and never fail. They do not
//! bounds-check: an off-grid square is simply occupied by nothing. Generators
//! are required to check [`Bounds::contains`](crate::core::bounds::Bounds)
//! for each candidate square before classifying it.

use crate::board::piece::Team;
use crate::board::Board;
use crate::core::coord::Coord;

/// True iff some piece stands on `square`.
#[inline]
pub fn occupied(square: Coord, board: &Board) -> bool {
    board.piece_at(square).is_some()
}

/// True iff `square` holds a piece belonging to a team other than `team`.
#[inline]
pub fn occupied_by_opponent(square: Coord, board: &Board, team: Team) -> bool {
    matches!(board.piece_at(square), Some(p) if p.team != team)
}

/// True iff `square` is a legal destination absent further constraints:
/// empty, or held by an opponent (a capture).
#[inline]
pub fn empty_or_occupied_by_opponent(square: Coord, board: &Board, team: Team) -> bool {
    match board.piece_at(square) {
        None => true,
        Some(p) => p.team != team,
    }
}
