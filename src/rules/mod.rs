//! Move legality rules.
//!
//! Evaluation order matters: [`pass::MovePass::compute`] first derives every
//! piece's plain move set from the snapshot, and only then may
//! [`castling::castling_moves`] be asked about a king. Castling safety is
//! defined in terms of the already-computed move sets of the king's own rooks
//! and of every enemy piece.

pub mod castling;
pub mod king;
pub mod movegen;
pub mod occupancy;
pub mod pass;

pub use castling::{castling_moves, CastlingError};
pub use king::{king_move, king_moves};
pub use movegen::{possible_moves, MoveList};
pub use pass::MovePass;
