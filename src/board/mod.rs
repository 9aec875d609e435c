//! The board snapshot: bounds plus the set of live pieces.

pub mod piece;

use thiserror::Error;

use crate::core::bounds::Bounds;
use crate::core::coord::Coord;

use self::piece::{Piece, PieceId, Team};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("two pieces share square {0:?}")]
    DoubleOccupancy(Coord),
    #[error("piece {0:?} is outside the board bounds")]
    OutOfBounds(PieceId),
    #[error("duplicate piece id {0:?}")]
    DuplicateId(PieceId),
}

/// An immutable snapshot of piece positions.
///
/// Captured pieces are simply absent. Construction enforces the occupancy
/// invariants every rule query relies on: no two pieces share a square, all
/// pieces are in bounds, ids are unique.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: Bounds,
    pieces: Vec<Piece>,
}

impl Board {
    pub fn new(bounds: Bounds, pieces: Vec<Piece>) -> Result<Self, BoardError> {
        for (i, p) in pieces.iter().enumerate() {
            if !bounds.contains(p.pos) {
                return Err(BoardError::OutOfBounds(p.id));
            }
            for other in &pieces[..i] {
                if other.pos == p.pos {
                    return Err(BoardError::DoubleOccupancy(p.pos));
                }
                if other.id == p.id {
                    return Err(BoardError::DuplicateId(p.id));
                }
            }
        }
        Ok(Self { bounds, pieces })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece occupying `square`, if any. At most one can, by the
    /// construction invariant.
    pub fn piece_at(&self, square: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == square)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// All pieces belonging to a team other than `team`.
    pub fn enemies_of(&self, team: Team) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.team != team)
    }
}
