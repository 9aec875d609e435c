//! King movement: one step in any of the 8 compass directions.

use crate::board::piece::{Piece, Team};
use crate::board::Board;
use crate::core::coord::{Coord, KING_STEPS};

use super::movegen::{rider_moves, MoveList};
use super::occupancy::empty_or_occupied_by_opponent;

/// Tests one specific destination without enumerating.
///
/// The unit step towards `to` is taken; the move is legal iff that single
/// step lands exactly on `to` and `to` is on the grid and empty or held by an
/// opponent. Destinations further than one step away (and the degenerate
/// `to == from`) are not king moves. Agrees with [`king_moves`] for every
/// square.
pub fn king_move(from: Coord, to: Coord, team: Team, board: &Board) -> bool {
    let step = (to - from).signum();
    if step == Coord::ORIGIN {
        return false;
    }
    from + step == to
        && board.bounds().contains(to)
        && empty_or_occupied_by_opponent(to, board, team)
}

/// All legal king destinations, in the fixed [`KING_STEPS`] order.
///
/// Each direction is evaluated independently: empty squares are included,
/// an opponent square is included as a capture, an own-team square and the
/// board edge are excluded. A cornered king yields an empty list.
pub fn king_moves(king: &Piece, board: &Board) -> MoveList {
    rider_moves(king, board, &KING_STEPS, 1)
}
