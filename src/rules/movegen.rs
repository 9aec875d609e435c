//! Per-piece move generators.
//!
//! Every rider (king included, with range 1) is the same walk: step along a
//! unit direction, include empty squares, include an opponent square and stop,
//! stop short of an own-team square or the board edge. Knights use fixed
//! offsets instead of rays; pawns get their own routine because pushes and
//! captures follow different occupancy rules.

use smallvec::SmallVec;

use crate::board::piece::{Piece, PieceKind, KNIGHT_DELTAS};
use crate::board::Board;
use crate::core::coord::Coord;

use super::king::king_moves;
use super::occupancy::{empty_or_occupied_by_opponent, occupied, occupied_by_opponent};

/// Legal destinations for one piece. Inline capacity covers typical counts;
/// long queen rays spill to the heap.
pub type MoveList = SmallVec<[Coord; 16]>;

/// Plain legal destinations for `piece` on this snapshot, in a deterministic
/// order. Castling is not included; it is resolved separately, after every
/// piece's plain moves are known.
pub fn possible_moves(piece: &Piece, board: &Board) -> MoveList {
    use PieceKind::*;
    match piece.kind {
        King => king_moves(piece, board),
        Queen | Rook | Bishop => rider_moves(piece, board, piece.kind.slide_dirs(), i32::MAX),
        Knight => offset_moves(piece, board, &KNIGHT_DELTAS),
        Pawn => pawn_moves(piece, board),
    }
}

/// Walk each direction in `dirs` from the piece's square, up to `range`
/// steps per direction. Directions are independent of each other.
pub(super) fn rider_moves(
    piece: &Piece,
    board: &Board,
    dirs: &[Coord],
    range: i32,
) -> MoveList {
    let bounds = board.bounds();
    let mut out = MoveList::new();

    for &dir in dirs {
        let mut cur = piece.pos + dir;
        let mut steps = 0;
        while steps < range && bounds.contains(cur) {
            if !occupied(cur, board) {
                out.push(cur);
            } else if occupied_by_opponent(cur, board, piece.team) {
                out.push(cur);
                break;
            } else {
                break;
            }
            steps += 1;
            cur = cur + dir;
        }
    }

    out
}

/// Jump moves: each delta is a destination iff it is on the grid and empty or
/// an opponent.
fn offset_moves(piece: &Piece, board: &Board, deltas: &[Coord]) -> MoveList {
    let bounds = board.bounds();
    let mut out = MoveList::new();

    for &delta in deltas {
        let dst = piece.pos + delta;
        if bounds.contains(dst) && empty_or_occupied_by_opponent(dst, board, piece.team) {
            out.push(dst);
        }
    }

    out
}

/// Pawn pushes and captures. The advance direction is a per-team constant;
/// the double push additionally requires an unmoved pawn and both transit
/// squares clear. Captures are the two forward diagonals, opponents only.
fn pawn_moves(pawn: &Piece, board: &Board) -> MoveList {
    let bounds = board.bounds();
    let fwd = pawn.team.pawn_advance();
    // Unit vector orthogonal to the advance direction.
    let side = Coord::new(fwd.y, fwd.x);
    let mut out = MoveList::new();

    let one = pawn.pos + fwd;
    if bounds.contains(one) && !occupied(one, board) {
        out.push(one);

        let two = one + fwd;
        if !pawn.has_moved && bounds.contains(two) && !occupied(two, board) {
            out.push(two);
        }
    }

    for capture in [one + side, one - side] {
        if bounds.contains(capture) && occupied_by_opponent(capture, board, pawn.team) {
            out.push(capture);
        }
    }

    out
}
