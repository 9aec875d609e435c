use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sign: the unit step that points from the origin
    /// towards `self` along each axis.
    #[inline]
    pub fn signum(self) -> Coord {
        Coord::new(self.x.signum(), self.y.signum())
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

/// The 8 king steps in the enumeration order used by every king-move query:
/// N, S, W, E, NE, SE, SW, NW. The order is not meaningful, but it is fixed
/// so enumeration output is reproducible.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 0 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: -1 },
    Coord { x: -1, y: 1 },
];
