//! Move-legality engine for a four-team chess variant on a bounded grid.
//!
//! The crate is a pure query layer over an immutable board snapshot: it never
//! mutates pieces, never tracks whose turn it is, and never detects check or
//! checkmate. Consumers compute a [`rules::pass::MovePass`] over the whole
//! board each turn, then resolve castling against it.

pub mod board;
pub mod core;
pub mod rules;
