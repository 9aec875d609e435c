use crate::core::coord::Coord;

/// Ownership group a piece belongs to. Four teams may coexist; rule logic
/// treats every team other than a piece's own as an opponent and never
/// assumes there are exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Team {
    pub const ALL: [Team; 4] = [Team::Red, Team::Blue, Team::Yellow, Team::Green];

    /// Unit direction a pawn of this team advances in. Each team plays from
    /// its own board edge towards the opposite one.
    #[inline]
    pub fn pawn_advance(self) -> Coord {
        match self {
            Team::Red => Coord::new(0, 1),
            Team::Yellow => Coord::new(0, -1),
            Team::Blue => Coord::new(1, 0),
            Team::Green => Coord::new(-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    #[inline]
    pub fn is_king(self) -> bool {
        self == PieceKind::King
    }

    #[inline]
    pub fn is_rook(self) -> bool {
        self == PieceKind::Rook
    }

    #[inline]
    pub fn is_pawn(self) -> bool {
        self == PieceKind::Pawn
    }

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];

/// Stable identity of a piece for the lifetime of a game. Move sets computed
/// for a turn are keyed by this, not stored on the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

/// One piece on the board.
///
/// `has_moved` is monotonic: the (external) move-execution component sets it
/// when the piece first moves and nothing ever clears it. It gates castling
/// and the pawn double push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub team: Team,
    pub pos: Coord,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, team: Team, pos: Coord) -> Self {
        Self {
            id,
            kind,
            team,
            pos,
            has_moved: false,
        }
    }

    pub fn with_has_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind.is_king()
    }

    #[inline]
    pub fn is_rook(&self) -> bool {
        self.kind.is_rook()
    }
}
