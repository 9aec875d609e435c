use crate::core::coord::Coord;

/// Grid dimensions. Squares are `(0, 0)` inclusive to
/// `(width - 1, height - 1)` inclusive.
///
/// The board edge is an explicit property of the snapshot, not something
/// inferred from where the pieces happen to stop: generators must check
/// [`Bounds::contains`] for every candidate square before classifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Classical two-player grid.
    pub const CLASSIC: Bounds = Bounds {
        width: 8,
        height: 8,
    };

    /// Four-team grid: one team advancing from each edge.
    pub const FOUR_TEAM: Bounds = Bounds {
        width: 14,
        height: 14,
    };

    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 1 && height >= 1);
        Self { width, height }
    }

    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }
}
