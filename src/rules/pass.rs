//! A move pass: every piece's plain move set for one turn, keyed by piece
//! identity.
//!
//! Derived state is recomputed whole each time the snapshot changes; nothing
//! here is updated piecemeal. An absent entry means the piece was not
//! evaluated in this pass, which the castling resolver treats as a contract
//! failure rather than silently skipping the piece.

use std::collections::HashMap;

use tracing::debug;

use crate::board::piece::PieceId;
use crate::board::Board;

use super::movegen::{possible_moves, MoveList};

#[derive(Debug, Clone, Default)]
pub struct MovePass {
    moves: HashMap<PieceId, MoveList>,
}

impl MovePass {
    /// A pass with no entries. Useful to callers that populate selectively;
    /// castling resolution against an under-populated pass fails explicitly.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compute every piece's plain move set in one phase. After this, every
    /// piece on `board` has an entry.
    pub fn compute(board: &Board) -> Self {
        let mut moves = HashMap::with_capacity(board.pieces().len());
        for piece in board.pieces() {
            moves.insert(piece.id, possible_moves(piece, board));
        }
        let total: usize = moves.values().map(|m| m.len()).sum();
        debug!(pieces = moves.len(), moves = total, "move pass computed");
        Self { moves }
    }

    pub fn insert(&mut self, id: PieceId, moves: MoveList) {
        self.moves.insert(id, moves);
    }

    /// The move set computed for `id`, or `None` if the piece was not
    /// evaluated in this pass.
    pub fn moves_of(&self, id: PieceId) -> Option<&MoveList> {
        self.moves.get(&id)
    }
}
