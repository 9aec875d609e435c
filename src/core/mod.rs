//! Low-level grid primitives.
//!
//! - [`coord`]: integer coordinates, component arithmetic and the king step set.
//! - [`bounds`]: explicit grid dimensions; every generator bounds-checks
//!   candidate squares against these before classifying them.

pub mod bounds;
pub mod coord;
