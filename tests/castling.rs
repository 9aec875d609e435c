use quadchess::board::piece::{Piece, PieceId, PieceKind, Team};
use quadchess::board::Board;
use quadchess::core::bounds::Bounds;
use quadchess::core::coord::Coord;
use quadchess::rules::{castling_moves, possible_moves, CastlingError, MovePass};

fn piece(id: u32, kind: PieceKind, team: Team, x: i32, y: i32) -> Piece {
    Piece::new(PieceId(id), kind, team, Coord::new(x, y))
}

fn resolve(board: &Board, king: &Piece) -> Vec<Coord> {
    let pass = MovePass::compute(board);
    castling_moves(king, board, &pass).unwrap().to_vec()
}

#[test]
fn clear_corridor_yields_the_rook_square() {
    // King (4,0), rook (7,0), (5,0) and (6,0) empty, no threats.
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![king.clone(), piece(1, PieceKind::Rook, Team::Red, 7, 0)],
    )
    .unwrap();

    assert_eq!(resolve(&board, &king), vec![Coord::new(7, 0)]);
}

#[test]
fn both_rooks_can_qualify_at_once() {
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![
            king.clone(),
            piece(1, PieceKind::Rook, Team::Red, 0, 0),
            piece(2, PieceKind::Rook, Team::Red, 7, 0),
        ],
    )
    .unwrap();

    let moves = resolve(&board, &king);
    assert!(moves.contains(&Coord::new(0, 0)));
    assert!(moves.contains(&Coord::new(7, 0)));
    assert_eq!(moves.len(), 2);
}

#[test]
fn moved_king_never_castles() {
    let king = piece(0, PieceKind::King, Team::Red, 4, 0).with_has_moved(true);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![king.clone(), piece(1, PieceKind::Rook, Team::Red, 0, 0)],
    )
    .unwrap();

    assert!(resolve(&board, &king).is_empty());
}

#[test]
fn moved_rook_is_not_a_candidate() {
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![
            king.clone(),
            piece(1, PieceKind::Rook, Team::Red, 7, 0).with_has_moved(true),
        ],
    )
    .unwrap();

    assert!(resolve(&board, &king).is_empty());
}

#[test]
fn blocked_corridor_disqualifies_the_rook() {
    // Own knight on (5,0): the rook cannot reach the square beside the king.
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![
            king.clone(),
            piece(1, PieceKind::Rook, Team::Red, 7, 0),
            piece(2, PieceKind::Knight, Team::Red, 5, 0),
        ],
    )
    .unwrap();

    assert!(resolve(&board, &king).is_empty());
}

#[test]
fn threatened_transit_square_disqualifies_the_rook() {
    // Yellow rook on the open e-file reaches (5,0), a square the king
    // would transit.
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![
            king.clone(),
            piece(1, PieceKind::Rook, Team::Red, 7, 0),
            piece(2, PieceKind::Rook, Team::Yellow, 5, 7),
        ],
    )
    .unwrap();

    assert!(resolve(&board, &king).is_empty());
}

#[test]
fn threats_from_a_third_team_count_too() {
    // Same corridor, threatened by Blue rather than Yellow: any team other
    // than the king's is an enemy.
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![
            king.clone(),
            piece(1, PieceKind::Rook, Team::Red, 7, 0),
            piece(2, PieceKind::Rook, Team::Blue, 6, 5),
        ],
    )
    .unwrap();

    assert!(resolve(&board, &king).is_empty());
}

#[test]
fn unrelated_enemy_moves_do_not_interfere() {
    // A yellow knight far away whose moves never touch the king's row.
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![
            king.clone(),
            piece(1, PieceKind::Rook, Team::Red, 7, 0),
            piece(2, PieceKind::Knight, Team::Yellow, 0, 7),
        ],
    )
    .unwrap();

    assert_eq!(resolve(&board, &king), vec![Coord::new(7, 0)]);
}

#[test]
fn incomplete_pass_is_an_explicit_error() {
    let king = piece(0, PieceKind::King, Team::Red, 4, 0);
    let rook = piece(1, PieceKind::Rook, Team::Red, 7, 0);
    let enemy = piece(2, PieceKind::Knight, Team::Yellow, 0, 7);
    let board = Board::new(
        Bounds::CLASSIC,
        vec![king.clone(), rook.clone(), enemy.clone()],
    )
    .unwrap();

    // Nothing computed: the candidate rook's entry is missing.
    let empty = MovePass::empty();
    assert_eq!(
        castling_moves(&king, &board, &empty),
        Err(CastlingError::MovesNotComputed(rook.id))
    );

    // Rook computed but the enemy skipped: safety cannot be under-checked.
    let mut partial = MovePass::empty();
    partial.insert(rook.id, possible_moves(&rook, &board));
    assert_eq!(
        castling_moves(&king, &board, &partial),
        Err(CastlingError::MovesNotComputed(enemy.id))
    );
}
