//! Castling legality.
//!
//! Castling is resolved after the move pass: safety is defined in terms of
//! the precomputed move sets of the king's own rooks and of every enemy
//! piece, never re-derived from the snapshot here.

use thiserror::Error;

use crate::board::piece::{Piece, PieceId};
use crate::board::Board;
use crate::core::coord::Coord;

use super::movegen::MoveList;
use super::pass::MovePass;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastlingError {
    /// The pass has no entry for a piece whose moves castling safety depends
    /// on. The caller must compute the full pass before resolving castling.
    #[error("moves for piece {0:?} were not computed in this pass")]
    MovesNotComputed(PieceId),
}

/// Castling options for `king`, given the full move pass for this turn.
///
/// Each returned entry is the **current square of the castling partner
/// rook**, not a king destination; callers translate an entry into the actual
/// king/rook displacement when executing the move.
///
/// A rook qualifies when king and rook are both unmoved, the rook can reach
/// the square directly beside the king on the castling side (blocking between
/// the two is enforced through the rook's own move set), and no enemy move
/// reaches any of the rook's destinations on the king's row. An empty result
/// means no castling is currently available; it is never an error.
///
/// Errors only when a required pass entry is missing — for a candidate rook
/// or for any enemy piece. Enemy threats are never silently skipped.
pub fn castling_moves(
    king: &Piece,
    board: &Board,
    pass: &MovePass,
) -> Result<MoveList, CastlingError> {
    let mut out = MoveList::new();

    // Once the king has moved, castling is gone for good.
    if king.has_moved {
        return Ok(out);
    }

    let rooks = board
        .pieces()
        .iter()
        .filter(|p| p.is_rook() && p.team == king.team && !p.has_moved);

    for rook in rooks {
        let direction = if rook.pos.x - king.pos.x > 0 { 1 } else { -1 };
        let adjacent = king.pos + Coord::new(direction, 0);

        let rook_moves = pass
            .moves_of(rook.id)
            .ok_or(CastlingError::MovesNotComputed(rook.id))?;

        // The rook must be able to come to rest directly beside the king.
        if !rook_moves.contains(&adjacent) {
            tracing::trace!(rook = rook.id.0, "castling rejected: rook cannot reach king");
            continue;
        }

        // Squares the king would traverse or land on: the rook's reachable
        // squares along the king's row.
        let concerning: MoveList = rook_moves
            .iter()
            .copied()
            .filter(|m| m.y == king.pos.y)
            .collect();

        let mut safe = true;
        for enemy in board.enemies_of(king.team) {
            let enemy_moves = pass
                .moves_of(enemy.id)
                .ok_or(CastlingError::MovesNotComputed(enemy.id))?;
            if enemy_moves.iter().any(|m| concerning.contains(m)) {
                tracing::trace!(
                    rook = rook.id.0,
                    enemy = enemy.id.0,
                    "castling rejected: transit square threatened"
                );
                safe = false;
                break;
            }
        }

        if safe {
            out.push(rook.pos);
        }
    }

    Ok(out)
}
